use crate::error::Result;
use crate::model::Question;
use crate::pagination::paginate;
use crate::store::TriviaStore;

/// One page of the full listing (ordered by id) plus the total question count.
pub fn page_of_questions<S: TriviaStore>(store: &S, page: i64) -> Result<(Vec<Question>, usize)> {
    let total = store.count_questions()?;
    Ok((paginate(store.list_questions()?, page), total))
}

pub fn category_labels<S: TriviaStore>(store: &S) -> Result<Vec<String>> {
    Ok(store
        .list_categories()?
        .into_iter()
        .map(|c| c.kind)
        .collect())
}
