//! Title Filtering
//!
//! Case-insensitive substring search over the fetched todo list.

use crate::models::TodoItem;

/// Items whose title contains `query`, ignoring case, in list order
pub fn filter_by_title(items: &[TodoItem], query: &str) -> Vec<TodoItem> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Filtered view for the current query. `None` means the user never searched.
pub fn active_filter(items: &[TodoItem], query: Option<&str>) -> Vec<TodoItem> {
    match query {
        Some(query) => filter_by_title(items, query),
        None => Vec::new(),
    }
}

/// Rows to render: the filtered view when it has anything, otherwise everything
pub fn visible<'a>(all: &'a [TodoItem], filtered: &'a [TodoItem]) -> &'a [TodoItem] {
    if filtered.is_empty() { all } else { filtered }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, title: &str, done: bool) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            content: String::new(),
            done,
            created_at: None,
            updated_at: None,
        }
    }

    fn sample() -> Vec<TodoItem> {
        vec![
            make_item(1, "Buy milk", false),
            make_item(2, "Walk dog", true),
            make_item(3, "Walk to the MILK bar", false),
        ]
    }

    fn ids(items: &[TodoItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = sample();
        assert_eq!(ids(&filter_by_title(&items, "walk")), vec![2, 3]);
        assert_eq!(ids(&filter_by_title(&items, "MiLk")), vec![1, 3]);
    }

    #[test]
    fn test_filter_keeps_order_and_exact_set() {
        let items = sample();
        for query in ["", "a", "dog", "zzz", " ", "WALK D"] {
            let expected: Vec<u32> = items
                .iter()
                .filter(|item| item.title.to_lowercase().contains(&query.to_lowercase()))
                .map(|item| item.id)
                .collect();
            assert_eq!(ids(&filter_by_title(&items, query)), expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let items = sample();
        assert_eq!(filter_by_title(&items, ""), items);
    }

    #[test]
    fn test_no_query_means_no_filter() {
        assert!(active_filter(&sample(), None).is_empty());
        assert_eq!(ids(&active_filter(&sample(), Some("dog"))), vec![2]);
    }

    #[test]
    fn test_visible_falls_back_to_all() {
        let items = sample();
        let filtered = filter_by_title(&items, "dog");
        assert_eq!(ids(visible(&items, &filtered)), vec![2]);
        assert_eq!(ids(visible(&items, &[])), vec![1, 2, 3]);
    }
}
