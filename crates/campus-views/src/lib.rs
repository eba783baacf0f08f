//! # campus-views
//!
//! The derivation layer between fetched collections and rendered lists.
//!
//! Pure functions over three inputs — source collection, query string,
//! sort key — producing one output: the ordered, filtered list a view
//! renders. Aggregates (per-student and per-module score averages) are
//! built in one O(n) scan over the grade list and answered in O(1)
//! afterwards, with a version-keyed cache so unrelated re-renders never
//! rescan.
//!
//! Nothing here fails: missing fields degrade to empty strings or zero
//! for comparison purposes, and an id with no scored grades reports
//! "no data" rather than zero. Errors belong to the transport layer.

pub mod averages;
pub mod detail;
pub mod filter;
pub mod sort;

pub use averages::{AverageCache, GradeAverages, format_average};
pub use filter::{Searchable, filter_by_query};
pub use sort::{SortFields, SortKey, sorted_by};

/// Derive the list a view renders: filter by `query`, then sort.
///
/// Operates on a copy; the source slice is never mutated, and every call
/// with the same inputs produces the same output.
#[must_use]
pub fn derive_view<T>(items: &[T], query: &str, sort: Option<SortKey>) -> Vec<T>
where
    T: Searchable + SortFields + Clone,
{
    let filtered = filter_by_query(items, query);
    match sort {
        Some(key) => sorted_by(&filtered, key),
        None => filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::entities::Student;

    fn student(id: i64, first: &str, user: &str) -> Student {
        Student {
            id: Some(id),
            first_name: first.into(),
            user_name: user.into(),
            ..Student::default()
        }
    }

    #[test]
    fn derive_view_filters_then_sorts() {
        let source = vec![
            student(3, "Carol", "carol"),
            student(1, "Anna", "anna"),
            student(2, "Annika", "anni"),
        ];
        let view = derive_view(&source, "ann", Some(SortKey::NameAsc));
        let names: Vec<&str> = view.iter().map(|s| s.first_name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Annika"]);
        // Source untouched
        assert_eq!(source[0].first_name, "Carol");
    }

    #[test]
    fn derive_view_without_sort_preserves_order() {
        let source = vec![student(2, "Bea", "bea"), student(1, "Abe", "abe")];
        let view = derive_view(&source, "", None);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].first_name, "Bea");
    }
}
