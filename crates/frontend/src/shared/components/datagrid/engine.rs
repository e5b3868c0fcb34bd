//! Pure search/sort/paginate pipeline and the grid's view state.
//!
//! Every stage is recomputed in full from its inputs on each state change;
//! nothing here touches the DOM, so the whole pipeline is unit tested.

use super::column::{compare_cells, CellValue, GridRecord};
use std::ops::Range;

/// Mutable view state of one mounted grid.
///
/// Owned exclusively by the displaying component and driven by user
/// interaction only; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    pub search_term: String,
    pub sort_field: Option<&'static str>,
    pub sort_ascending: bool,
    /// 1-based. Values beyond the last page yield an empty slice.
    pub page: usize,
}

impl Default for GridState {
    fn default() -> Self {
        GridState {
            search_term: String::new(),
            sort_field: None,
            sort_ascending: true,
            page: 1,
        }
    }
}

impl GridState {
    /// Updates the search term. Any term change snaps back to page 1 so the
    /// filtered result is visible from its beginning.
    pub fn set_search(&mut self, term: String) {
        self.search_term = term;
        self.page = 1;
    }

    /// Clicking the active column flips direction; clicking a new column
    /// sorts it ascending. The current page is deliberately left alone.
    pub fn toggle_sort(&mut self, field: &'static str) {
        if self.sort_field == Some(field) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = Some(field);
            self.sort_ascending = true;
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Filter + sort under the current state. Pagination is applied
    /// separately so callers can derive totals from the full result.
    pub fn apply<T: GridRecord>(&self, items: &[T]) -> Vec<T> {
        let mut rows = filter_records(items, &self.search_term);
        if let Some(field) = self.sort_field {
            sort_records(&mut rows, field, self.sort_ascending);
        }
        rows
    }
}

/// Retains records where at least one text field contains `term`,
/// case-insensitively. The empty term keeps everything; non-text fields
/// never match. Relative order is preserved.
pub fn filter_records<T: GridRecord>(items: &[T], term: &str) -> Vec<T> {
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            T::field_names().iter().any(|name| match item.field(name) {
                CellValue::Text(text) => text.to_lowercase().contains(&needle),
                _ => false,
            })
        })
        .cloned()
        .collect()
}

/// Stable sort by one field. Descending reverses the comparison, which
/// still leaves equal elements in their input order.
pub fn sort_records<T: GridRecord>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let ordering = compare_cells(&a.field(field), &b.field(field));
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

/// Number of pages needed for `count` items; 0 for an empty collection.
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    count.div_ceil(items_per_page)
}

/// Index range of the 1-based `page`. Clamped to `count`, so a page past
/// the end is an empty range rather than an error.
pub fn page_bounds(count: usize, page: usize, items_per_page: usize) -> Range<usize> {
    let start = (page.max(1) - 1).saturating_mul(items_per_page).min(count);
    let end = start.saturating_add(items_per_page).min(count);
    start..end
}

/// Up to 5 contiguous page numbers around `current` for the navigation
/// controls, clamped to the ends of the page range.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total <= 5 {
        (1..=total).collect()
    } else if current <= 3 {
        (1..=5).collect()
    } else if current >= total - 2 {
        (total - 4..=total).collect()
    } else {
        (current - 2..=current + 2).collect()
    }
}

/// Header arrow for the active sort column, empty otherwise.
pub fn sort_indicator(
    current: Option<&'static str>,
    field: &'static str,
    ascending: bool,
) -> &'static str {
    if current == Some(field) {
        if ascending {
            " \u{25b2}"
        } else {
            " \u{25bc}"
        }
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::datagrid::column::Column;
    use chrono::NaiveDate;
    use leptos::prelude::*;

    /// Minimal record exercising every cell type, including an optional
    /// text field whose absence produces mixed-type comparisons.
    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        qty: i64,
        shipped: Option<NaiveDate>,
        note: Option<String>,
    }

    impl GridRecord for Row {
        fn field_names() -> &'static [&'static str] {
            &["id", "name", "qty", "shipped", "note"]
        }

        fn row_key(&self) -> String {
            self.id.clone()
        }

        fn field(&self, name: &str) -> CellValue {
            match name {
                "id" => CellValue::Text(self.id.clone()),
                "name" => CellValue::Text(self.name.clone()),
                "qty" => CellValue::Number(self.qty as f64),
                "shipped" => self
                    .shipped
                    .map(CellValue::Date)
                    .unwrap_or(CellValue::Missing),
                "note" => self
                    .note
                    .clone()
                    .map(CellValue::Text)
                    .unwrap_or(CellValue::Missing),
                _ => CellValue::Missing,
            }
        }
    }

    fn row(id: &str, name: &str, qty: i64) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
            qty,
            shipped: None,
            note: None,
        }
    }

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    fn sample() -> Vec<Row> {
        vec![
            row("1", "Smartphone XYZ", 25),
            row("2", "Laptop ABC", 15),
            row("3", "Wireless Headphones", 50),
            row("4", "Smart Watch", 30),
            row("5", "Tablet Pro", 12),
        ]
    }

    #[test]
    fn empty_term_keeps_every_record() {
        let data = sample();
        assert_eq!(filter_records(&data, ""), data);
    }

    #[test]
    fn filter_never_grows_the_collection() {
        let data = sample();
        for term in ["smart", "xyz", "zzz", "a", " "] {
            assert!(filter_records(&data, term).len() <= data.len());
        }
    }

    #[test]
    fn filter_is_case_insensitive() {
        let data = sample();
        let lower = filter_records(&data, "smart");
        let upper = filter_records(&data, "SMART");
        assert_eq!(lower, upper);
        assert_eq!(names(&lower), vec!["Smartphone XYZ", "Smart Watch"]);
    }

    #[test]
    fn numeric_fields_never_match() {
        let data = sample();
        // qty 25 exists, but "25" only matches text fields (none contain it).
        assert!(filter_records(&data, "25").is_empty());
    }

    #[test]
    fn filter_preserves_input_order() {
        let data = sample();
        let hit = filter_records(&data, "t");
        assert_eq!(
            names(&hit),
            vec!["Smartphone XYZ", "Laptop ABC", "Smart Watch", "Tablet Pro"]
        );
    }

    #[test]
    fn sort_orders_text_ascending_and_descending() {
        let mut data = sample();
        sort_records(&mut data, "name", true);
        assert_eq!(
            names(&data),
            vec![
                "Laptop ABC",
                "Smart Watch",
                "Smartphone XYZ",
                "Tablet Pro",
                "Wireless Headphones"
            ]
        );
        sort_records(&mut data, "name", false);
        assert_eq!(
            names(&data),
            vec![
                "Wireless Headphones",
                "Tablet Pro",
                "Smartphone XYZ",
                "Smart Watch",
                "Laptop ABC"
            ]
        );
    }

    #[test]
    fn sort_orders_numbers_numerically() {
        let mut data = sample();
        sort_records(&mut data, "qty", true);
        let quantities: Vec<i64> = data.iter().map(|r| r.qty).collect();
        assert_eq!(quantities, vec![12, 15, 25, 30, 50]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys_in_both_directions() {
        let mut data = vec![
            row("1", "Widget", 10),
            row("2", "Widget", 20),
            row("3", "Gadget", 30),
            row("4", "Widget", 40),
        ];
        sort_records(&mut data, "name", true);
        assert_eq!(ids(&data), vec!["3", "1", "2", "4"]);
        // Equal keys keep input order under descending too.
        let mut data = vec![
            row("1", "Widget", 10),
            row("2", "Widget", 20),
            row("3", "Gadget", 30),
            row("4", "Widget", 40),
        ];
        sort_records(&mut data, "name", false);
        assert_eq!(ids(&data), vec!["1", "2", "4", "3"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut once = sample();
        sort_records(&mut once, "name", true);
        let mut twice = once.clone();
        sort_records(&mut twice, "name", true);
        assert_eq!(once, twice);
    }

    #[test]
    fn mixed_type_field_is_a_stable_no_op() {
        // Every pairing on "note" is Text/Missing or Missing/Missing, so all
        // comparisons degrade to Equal and the stable sort changes nothing,
        // in either direction.
        let mut data = vec![
            Row {
                note: Some("rush".to_string()),
                ..row("1", "A", 1)
            },
            Row {
                note: None,
                ..row("2", "B", 2)
            },
            Row {
                note: Some("rush".to_string()),
                ..row("3", "C", 3)
            },
            Row {
                note: None,
                ..row("4", "D", 4)
            },
        ];
        let before: Vec<String> = data.iter().map(|r| r.id.clone()).collect();
        sort_records(&mut data, "note", true);
        assert_eq!(ids(&data), before);
        sort_records(&mut data, "note", false);
        assert_eq!(ids(&data), before);
    }

    #[test]
    fn dates_sort_chronologically_with_missing_left_in_place() {
        let d = |m: u32, day: u32| NaiveDate::from_ymd_opt(2023, m, day).expect("valid date");
        let mut data = vec![
            Row {
                shipped: Some(d(3, 1)),
                ..row("1", "A", 1)
            },
            Row {
                shipped: Some(d(1, 15)),
                ..row("2", "B", 2)
            },
            Row {
                shipped: Some(d(2, 5)),
                ..row("3", "C", 3)
            },
        ];
        sort_records(&mut data, "shipped", true);
        assert_eq!(ids(&data), vec!["2", "3", "1"]);
    }

    #[test]
    fn total_pages_rounds_up_and_is_zero_when_empty() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(23, 10), 3);
    }

    #[test]
    fn pages_reconstruct_the_full_collection() {
        let data: Vec<Row> = (0..23).map(|i| row(&i.to_string(), "Item", i)).collect();
        let pages = total_pages(data.len(), 10);
        assert_eq!(pages, 3);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            rebuilt.extend_from_slice(&data[page_bounds(data.len(), page, 10)]);
        }
        assert_eq!(rebuilt, data);
    }

    #[test]
    fn boundary_page_sizes() {
        // 23 records, 10 per page: page 3 holds the trailing 3.
        assert_eq!(page_bounds(23, 3, 10), 20..23);
        assert_eq!(page_bounds(23, 3, 10).len(), 3);
        // A forced page past the end is empty, not a panic.
        assert_eq!(page_bounds(23, 4, 10).len(), 0);
        assert_eq!(page_bounds(0, 1, 10).len(), 0);
    }

    #[test]
    fn page_window_matches_the_navigation_rules() {
        assert_eq!(page_window(1, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 12), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 12), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(12, 12), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 0), Vec::<usize>::new());
    }

    #[test]
    fn search_change_resets_to_page_one() {
        let data: Vec<Row> = (0..25)
            .map(|i| {
                let name = if i < 2 { "Smart Watch" } else { "Item" };
                row(&i.to_string(), name, i)
            })
            .collect();
        let mut state = GridState::default();
        state.go_to_page(3);
        assert_eq!(state.page, 3);

        state.set_search("smart".to_string());
        assert_eq!(state.page, 1);
        let visible = state.apply(&data);
        assert_eq!(visible.len(), 2);
        // Both matches fit on page 1.
        assert_eq!(page_bounds(visible.len(), state.page, 10), 0..2);
    }

    #[test]
    fn toggle_sort_flips_direction_without_touching_the_page() {
        let mut state = GridState::default();
        state.go_to_page(2);

        state.toggle_sort("name");
        assert_eq!(state.sort_field, Some("name"));
        assert!(state.sort_ascending);
        assert_eq!(state.page, 2);

        state.toggle_sort("name");
        assert!(!state.sort_ascending);

        // Switching columns re-arms ascending.
        state.toggle_sort("qty");
        assert_eq!(state.sort_field, Some("qty"));
        assert!(state.sort_ascending);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn derived_columns_expose_no_sort_key() {
        let actions: Column<Row> =
            Column::derived("Actions", |_row| view! { <span>"Edit"</span> }.into_any());
        assert_eq!(actions.sort_key(), None);
        let name: Column<Row> = Column::field("Name", "name");
        assert_eq!(name.sort_key(), Some("name"));
    }

    #[test]
    fn no_sort_field_keeps_filtered_order() {
        let data = sample();
        let state = GridState::default();
        assert_eq!(state.apply(&data), data);
    }

    #[test]
    fn sort_indicator_only_marks_the_active_column() {
        assert_eq!(sort_indicator(Some("name"), "name", true), " \u{25b2}");
        assert_eq!(sort_indicator(Some("name"), "name", false), " \u{25bc}");
        assert_eq!(sort_indicator(Some("name"), "qty", true), "");
        assert_eq!(sort_indicator(None, "qty", true), "");
    }
}
