use triviaapp::api::TriviaApi;
use triviaapp::commands::QuestionInput;
use triviaapp::error::TriviaError;
use triviaapp::model::CategoryId;
use triviaapp::store::sqlite::SqliteStore;
use triviaapp::store::{seed_default_categories, TriviaStore};

fn input(category: i64) -> QuestionInput {
    QuestionInput {
        question: Some("What is the heaviest organ?".to_string()),
        answer: Some("The liver".to_string()),
        category: Some(category),
        difficulty: Some(4),
    }
}

fn seeded_api(dir: &tempfile::TempDir) -> TriviaApi<SqliteStore> {
    let mut store = SqliteStore::open(dir.path().join("trivia.db")).unwrap();
    seed_default_categories(&mut store).unwrap();
    TriviaApi::new(store)
}

#[test]
fn test_full_flow_against_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = seeded_api(&dir);

    assert_eq!(api.categories().unwrap().total_categories, 6);
    assert!(api.questions(1).unwrap_err().is_not_found());

    let created = api.create_question(input(0), 1).unwrap();
    assert_eq!(created.total_questions, 1);

    let page = api.questions(1).unwrap();
    assert_eq!(page.questions[0].category, CategoryId(1));
    assert_eq!(page.categories[0], "Science");

    let deleted = api.delete_question(created.created, 1).unwrap();
    assert_eq!(deleted.total_questions, 0);
    assert!(deleted.questions.is_empty());
}

#[test]
fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let created = {
        let mut api = seeded_api(&dir);
        api.create_question(input(3), 1).unwrap().created
    };

    let api = seeded_api(&dir);
    let stored = api.store().get_question(created).unwrap().unwrap();
    assert_eq!(stored.category, CategoryId(4));
    assert_eq!(api.categories().unwrap().total_categories, 6);
}

#[test]
fn test_unknown_category_is_rejected_by_foreign_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = seeded_api(&dir);
    let err = api.create_question(input(6), 1).unwrap_err();
    assert!(matches!(err, TriviaError::Constraint(_)), "got {:?}", err);
    assert_eq!(api.store().count_questions().unwrap(), 0);
}

#[test]
fn test_empty_database_has_no_categories() {
    let dir = tempfile::tempdir().unwrap();
    let api = TriviaApi::new(SqliteStore::open(dir.path().join("empty.db")).unwrap());
    assert!(api.categories().unwrap_err().is_not_found());
}
