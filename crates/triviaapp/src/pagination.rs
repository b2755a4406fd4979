//! # Pagination
//!
//! Listings are cut into fixed pages of [`QUESTIONS_PER_PAGE`] items. Pages are
//! one-based: page `p` starts at offset `(p - 1) * QUESTIONS_PER_PAGE`.
//!
//! This layer never rejects a page. Anything past the end, and any page below 1,
//! is simply empty. Whether an empty page is an error is the caller's decision:
//! listing all questions treats it as not found, while create and delete return
//! whatever the page holds.

pub const QUESTIONS_PER_PAGE: usize = 10;

pub const DEFAULT_PAGE: i64 = 1;

/// Parses the raw `page` query parameter. Missing or non-numeric values fall
/// back to the first page.
pub fn page_from_param(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_PAGE)
}

pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    let Some(offset) = page_offset(page) else {
        return Vec::new();
    };
    items
        .into_iter()
        .skip(offset)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

fn page_offset(page: i64) -> Option<usize> {
    if page < 1 {
        return None;
    }
    usize::try_from(page - 1)
        .ok()?
        .checked_mul(QUESTIONS_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_len(total: usize, page: i64) -> usize {
        let start = (page as usize - 1) * QUESTIONS_PER_PAGE;
        total.saturating_sub(start).min(QUESTIONS_PER_PAGE)
    }

    #[test]
    fn page_sizes_follow_total() {
        for total in [0, 1, 9, 10, 11, 19, 20, 25] {
            for page in 1..=4 {
                let items: Vec<usize> = (0..total).collect();
                assert_eq!(
                    paginate(items, page).len(),
                    expected_len(total, page),
                    "total={} page={}",
                    total,
                    page
                );
            }
        }
    }

    #[test]
    fn second_page_starts_at_eleventh_item() {
        let items: Vec<usize> = (1..=25).collect();
        assert_eq!(paginate(items.clone(), 2), (11..=20).collect::<Vec<_>>());
        assert_eq!(paginate(items, 3), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<usize> = (0..15).collect();
        assert!(paginate(items.clone(), 3).is_empty());
        assert!(paginate(items, 1000).is_empty());
    }

    #[test]
    fn pages_below_one_are_empty() {
        let items: Vec<usize> = (0..15).collect();
        assert!(paginate(items.clone(), 0).is_empty());
        assert!(paginate(items, -2).is_empty());
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let items: Vec<usize> = (0..15).collect();
        assert!(paginate(items, i64::MAX).is_empty());
    }

    #[test]
    fn page_param_defaults_to_first() {
        assert_eq!(page_from_param(None), 1);
        assert_eq!(page_from_param(Some("")), 1);
        assert_eq!(page_from_param(Some("abc")), 1);
        assert_eq!(page_from_param(Some("3")), 3);
        assert_eq!(page_from_param(Some("-1")), -1);
    }
}
