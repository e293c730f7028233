//! Integration tests for pagination range building
//!
//! Tests are organized by feature area and cover:
//! - Empty output when everything fits on one page
//! - Window and edge rules (first, last, current always present)
//! - Exact ellipsis boundaries on both sides
//! - Monotonicity and idempotence
//! - Precondition violations

use pretty_assertions::assert_eq;
use rstest::rstest;
use wegwijzer::{build_range, PageEntry, PaginationError};

use PageEntry::{Ellipsis, Page};

fn page_numbers(entries: &[PageEntry]) -> Vec<u64> {
    entries
        .iter()
        .filter_map(|e| match e {
            Page(n) => Some(*n),
            Ellipsis => None,
        })
        .collect()
}

#[test]
fn test_single_page_is_empty() {
    assert_eq!(build_range(1, 10, 10).unwrap(), vec![]);
    assert_eq!(build_range(1, 25, 7).unwrap(), vec![]);
    assert_eq!(build_range(1, 10, 0).unwrap(), vec![]);
}

#[test]
fn test_window_touches_page_one() {
    // current = 5 of 20: the window starts at page 2, directly after page
    // 1, so there is no leading ellipsis; the trailing gap collapses
    let entries = build_range(5, 1, 20).unwrap();
    assert_eq!(
        entries,
        vec![
            Page(1),
            Page(2),
            Page(3),
            Page(4),
            Page(5),
            Page(6),
            Page(7),
            Page(8),
            Ellipsis,
            Page(20),
        ]
    );
}

#[test]
fn test_window_in_the_middle() {
    // current = 10 of 20: both sides collapse to an ellipsis
    let entries = build_range(10, 1, 20).unwrap();
    assert_eq!(
        entries,
        vec![
            Page(1),
            Ellipsis,
            Page(7),
            Page(8),
            Page(9),
            Page(10),
            Page(11),
            Page(12),
            Page(13),
            Ellipsis,
            Page(20),
        ]
    );
}

#[test]
fn test_window_touches_last_page() {
    // current = 16 of 20: the window ends at page 19, directly before the
    // last page, so there is no trailing ellipsis
    let entries = build_range(16, 1, 20).unwrap();
    assert_eq!(
        entries,
        vec![
            Page(1),
            Ellipsis,
            Page(13),
            Page(14),
            Page(15),
            Page(16),
            Page(17),
            Page(18),
            Page(19),
            Page(20),
        ]
    );
}

#[rstest]
#[case(1, false, true)]
#[case(4, false, true)]
#[case(5, false, true)]
#[case(6, true, true)]
#[case(10, true, true)]
#[case(15, true, true)]
#[case(16, true, false)]
#[case(17, true, false)]
#[case(20, true, false)]
fn test_ellipsis_boundaries(
    #[case] current: u64,
    #[case] leading: bool,
    #[case] trailing: bool,
) {
    let entries = build_range(current, 1, 20).unwrap();

    let has_leading = entries.get(1) == Some(&Ellipsis);
    let has_trailing = entries.len() >= 2 && entries[entries.len() - 2] == Ellipsis;

    assert_eq!(has_leading, leading, "leading ellipsis, current={current}");
    assert_eq!(
        has_trailing, trailing,
        "trailing ellipsis, current={current}"
    );

    let ellipses = entries.iter().filter(|e| **e == Ellipsis).count();
    assert_eq!(ellipses, usize::from(leading) + usize::from(trailing));
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(13)]
#[case(20)]
fn test_edges_and_current_always_present(#[case] current: u64) {
    let nums = page_numbers(&build_range(current, 1, 20).unwrap());

    assert_eq!(nums.iter().filter(|n| **n == 1).count(), 1);
    assert_eq!(nums.iter().filter(|n| **n == 20).count(), 1);
    assert!(nums.contains(&current));
}

#[test]
fn test_pages_strictly_increasing() {
    for current in 1..=50 {
        let nums = page_numbers(&build_range(current, 1, 50).unwrap());
        assert!(
            nums.windows(2).all(|w| w[0] < w[1]),
            "current={current}: {nums:?}"
        );
    }
}

#[test]
fn test_idempotent() {
    let first = build_range(8, 10, 500).unwrap();
    let second = build_range(8, 10, 500).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_partial_last_page_counts() {
    // 95 items at 10 per page: 10 pages, last one partial
    let nums = page_numbers(&build_range(10, 10, 95).unwrap());
    assert_eq!(nums.last(), Some(&10));
}

#[test]
fn test_zero_items_per_page_rejected() {
    assert_eq!(build_range(1, 0, 100), Err(PaginationError::ZeroPageSize));
}

#[test]
fn test_current_page_out_of_range_rejected() {
    assert_eq!(
        build_range(0, 1, 20),
        Err(PaginationError::PageOutOfRange {
            current_page: 0,
            page_count: 20,
        })
    );
    assert_eq!(
        build_range(21, 1, 20),
        Err(PaginationError::PageOutOfRange {
            current_page: 21,
            page_count: 20,
        })
    );
}
