//! Listing of backlog items
//!
//! A thin display pipeline: apply an optional filter, then an optional
//! stable sort, and hand the sequence back. Rendering is the command
//! layer's concern.

use std::cmp::Ordering;

use clap::ValueEnum;

use crate::filters::Filter;

/// Sort direction for the show commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

/// Produce the display sequence for `items`
///
/// Without a filter every item is kept; without a sorter the input order is
/// preserved. The sort is stable, so items with equal keys keep their
/// relative order in either direction.
#[must_use]
pub fn list_items<T: Clone>(
    items: &[T],
    filter: Option<&dyn Filter<T>>,
    sorter: Option<fn(&T, &T) -> Ordering>,
    direction: Direction,
) -> Vec<T> {
    let mut listed: Vec<T> = match filter {
        Some(filter) => items.iter().filter(|item| filter.matches(item)).cloned().collect(),
        None => items.to_vec(),
    };
    if let Some(compare) = sorter {
        listed.sort_by(|one, two| match direction {
            Direction::Asc => compare(one, two),
            Direction::Desc => compare(two, one),
        });
    }
    listed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        v: u32,
        label: &'static str,
    }

    const fn row(v: u32, label: &'static str) -> Row {
        Row { v, label }
    }

    fn by_v(one: &Row, two: &Row) -> Ordering {
        one.v.cmp(&two.v)
    }

    #[derive(Debug)]
    struct SmallOnly;

    impl Filter<Row> for SmallOnly {
        fn matches(&self, item: &Row) -> bool {
            item.v < 3
        }
    }

    #[test]
    fn test_no_filter_no_sorter_preserves_input() {
        let items = [row(3, "a"), row(1, "b"), row(2, "c")];
        assert_eq!(list_items(&items, None, None, Direction::Asc), items);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let items = [row(3, "a"), row(1, "b"), row(2, "c")];

        let ascending = list_items(&items, None, Some(by_v), Direction::Asc);
        assert_eq!(ascending.iter().map(|r| r.v).collect::<Vec<_>>(), [1, 2, 3]);

        let descending = list_items(&items, None, Some(by_v), Direction::Desc);
        assert_eq!(descending.iter().map(|r| r.v).collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let items = [row(2, "first"), row(1, "x"), row(2, "second")];

        let ascending = list_items(&items, None, Some(by_v), Direction::Asc);
        assert_eq!(
            ascending.iter().map(|r| r.label).collect::<Vec<_>>(),
            ["x", "first", "second"]
        );

        let descending = list_items(&items, None, Some(by_v), Direction::Desc);
        assert_eq!(
            descending.iter().map(|r| r.label).collect::<Vec<_>>(),
            ["first", "second", "x"]
        );
    }

    #[test]
    fn test_filter_is_applied_before_sort() {
        let items = [row(3, "a"), row(1, "b"), row(2, "c")];
        let filter = SmallOnly;
        let listed = list_items(&items, Some(&filter), Some(by_v), Direction::Asc);
        assert_eq!(listed.iter().map(|r| r.v).collect::<Vec<_>>(), [1, 2]);
    }
}
