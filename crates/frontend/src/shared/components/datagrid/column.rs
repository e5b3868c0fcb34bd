//! Cell values, the tagged comparator, column descriptors and the record
//! trait the data grid is generic over.

use chrono::NaiveDate;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// One field value as seen by the grid.
///
/// Search and sort dispatch on this tag rather than on the concrete record
/// type, so the grid itself stays generic.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    /// Absent optional field. Never matches a search and compares equal to
    /// everything.
    Missing,
}

impl CellValue {
    /// Default textual rendering when a column supplies no `render`.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Date(d) => d.format("%-m/%-d/%Y").to_string(),
            CellValue::Missing => "-".to_string(),
        }
    }
}

/// Ordering strategy for a pair of cell values.
///
/// Text pairs compare case-insensitively with the raw string as a
/// deterministic tiebreak. Mismatched or unordered pairs compare equal, so
/// a stable sort leaves them in their prior relative order.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Text(a), CellValue::Text(b)) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
        (CellValue::Number(a), CellValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// A record type the grid can search, sort and render.
pub trait GridRecord: Clone + PartialEq + Send + Sync + 'static {
    /// Every scalar field of the record, searched regardless of which
    /// columns are displayed.
    fn field_names() -> &'static [&'static str];

    /// Stable unique key for row identity.
    fn row_key(&self) -> String;

    /// Value of the named field; `CellValue::Missing` for unset optionals
    /// and unknown names.
    fn field(&self, name: &str) -> CellValue;
}

pub type CellRender<T> = Arc<dyn Fn(&CellValue, &T) -> AnyView + Send + Sync>;
pub type DerivedRender<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// How a column obtains its cell content.
///
/// Only `Field` columns participate in sorting; `Derived` columns render
/// arbitrary views and their headers are not clickable.
pub enum Accessor<T> {
    Field(&'static str),
    Derived(DerivedRender<T>),
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Field(name) => Accessor::Field(name),
            Accessor::Derived(f) => Accessor::Derived(Arc::clone(f)),
        }
    }
}

/// Describes how to extract and render one column of the grid.
pub struct Column<T> {
    pub header: &'static str,
    pub accessor: Accessor<T>,
    pub render: Option<CellRender<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Column {
            header: self.header,
            accessor: self.accessor.clone(),
            render: self.render.as_ref().map(Arc::clone),
        }
    }
}

impl<T: GridRecord> Column<T> {
    /// Sortable column showing the field's default rendering.
    pub fn field(header: &'static str, name: &'static str) -> Self {
        Column {
            header,
            accessor: Accessor::Field(name),
            render: None,
        }
    }

    /// Sortable column with a custom cell renderer.
    pub fn field_with(
        header: &'static str,
        name: &'static str,
        render: impl Fn(&CellValue, &T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Column {
            header,
            accessor: Accessor::Field(name),
            render: Some(Arc::new(render)),
        }
    }

    /// Non-sortable column rendered from the whole record.
    pub fn derived(
        header: &'static str,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Column {
            header,
            accessor: Accessor::Derived(Arc::new(render)),
            render: None,
        }
    }

    /// The sort key this column contributes, if any.
    pub fn sort_key(&self) -> Option<&'static str> {
        match self.accessor {
            Accessor::Field(name) => Some(name),
            Accessor::Derived(_) => None,
        }
    }

    /// Cell content for one record.
    pub fn cell(&self, record: &T) -> AnyView {
        match &self.accessor {
            Accessor::Field(name) => {
                let value = record.field(name);
                match &self.render {
                    Some(render) => render(&value, record),
                    None => value.display().into_any(),
                }
            }
            Accessor::Derived(render) => render(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn text_pairs_compare_case_insensitively() {
        let a = CellValue::Text("apple".to_string());
        let b = CellValue::Text("Banana".to_string());
        assert_eq!(compare_cells(&a, &b), Ordering::Less);
        assert_eq!(compare_cells(&b, &a), Ordering::Greater);
    }

    #[test]
    fn number_pairs_compare_numerically() {
        let a = CellValue::Number(2.0);
        let b = CellValue::Number(10.0);
        assert_eq!(compare_cells(&a, &b), Ordering::Less);
        // NaN is unordered and degrades to equal.
        let nan = CellValue::Number(f64::NAN);
        assert_eq!(compare_cells(&nan, &b), Ordering::Equal);
    }

    #[test]
    fn date_pairs_compare_chronologically() {
        let a = CellValue::Date(date(2023, 1, 15));
        let b = CellValue::Date(date(2023, 2, 5));
        assert_eq!(compare_cells(&a, &b), Ordering::Less);
    }

    #[test]
    fn mismatched_pairs_compare_equal() {
        let text = CellValue::Text("42".to_string());
        let number = CellValue::Number(42.0);
        assert_eq!(compare_cells(&text, &number), Ordering::Equal);
        assert_eq!(compare_cells(&CellValue::Missing, &number), Ordering::Equal);
        assert_eq!(compare_cells(&CellValue::Missing, &CellValue::Missing), Ordering::Equal);
    }

    #[test]
    fn display_formats_whole_numbers_without_fraction() {
        assert_eq!(CellValue::Number(25.0).display(), "25");
        assert_eq!(CellValue::Number(599.99).display(), "599.99");
    }

    #[test]
    fn display_formats_dates_like_en_us_locale() {
        assert_eq!(CellValue::Date(date(2023, 1, 15)).display(), "1/15/2023");
        assert_eq!(CellValue::Date(date(2023, 12, 5)).display(), "12/5/2023");
    }
}
