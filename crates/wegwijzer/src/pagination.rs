//! Pagination range building
//!
//! Computes which page-number buttons and ellipsis markers to display for
//! a paged list, keeping the control compact regardless of total page
//! count. Pure function: no state, no I/O, bounded by the page count.

use crate::error::PaginationError;

/// One entry in a pagination control
///
/// `Page` entries are clickable page numbers; `Ellipsis` marks a run of
/// omitted pages and is not interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// A page number in `1..=page_count`
    Page(u64),
    /// Marker for omitted page numbers
    Ellipsis,
}

/// Pages within this distance of the current page are always shown
/// (a window of seven pages centered on current).
const WINDOW: u64 = 3;

/// Builds the ordered sequence of pagination entries
///
/// Returns an empty sequence when everything fits on one page
/// (`total_items <= items_per_page`): no control is rendered at all.
/// Otherwise every page in the window around `current_page` appears, plus
/// page `1` and the last page, with at most one ellipsis on each side.
///
/// The ellipsis boundaries are deliberate: the leading ellipsis is
/// inserted unless the window starts at page 2 (directly after page 1),
/// and the trailing one unless the window ends directly before the last
/// page. A one-page gap still collapses to an ellipsis.
///
/// # Errors
///
/// - [`PaginationError::ZeroPageSize`] when `items_per_page` is zero.
/// - [`PaginationError::PageOutOfRange`] when `current_page` is not in
///   `1..=page_count`. Both are programmer errors on the caller's side;
///   no partial output is produced.
///
/// # Examples
///
/// ```
/// use wegwijzer::{build_range, PageEntry};
///
/// // Everything fits on one page: nothing to render
/// assert!(build_range(1, 10, 10)?.is_empty());
///
/// // Current page in the middle: both ellipses present
/// let entries = build_range(10, 1, 20)?;
/// assert_eq!(entries[0], PageEntry::Page(1));
/// assert_eq!(entries[1], PageEntry::Ellipsis);
/// assert_eq!(entries.last(), Some(&PageEntry::Page(20)));
/// # Ok::<(), wegwijzer::PaginationError>(())
/// ```
pub fn build_range(
    current_page: u64,
    items_per_page: u64,
    total_items: u64,
) -> Result<Vec<PageEntry>, PaginationError> {
    if items_per_page == 0 {
        return Err(PaginationError::ZeroPageSize);
    }
    if total_items <= items_per_page {
        return Ok(Vec::new());
    }

    let page_count = total_items.div_ceil(items_per_page);
    if current_page < 1 || current_page > page_count {
        return Err(PaginationError::PageOutOfRange {
            current_page,
            page_count,
        });
    }

    let mut entries = Vec::new();
    for n in 1..=page_count {
        if n.abs_diff(current_page) <= WINDOW {
            entries.push(PageEntry::Page(n));
        } else if n == 1 {
            // Page 1 lies outside the window here, so current_page >= 5
            // and the subtraction cannot underflow. No ellipsis when the
            // window starts at page 2, directly after page 1.
            entries.push(PageEntry::Page(1));
            if current_page - 3 != 2 {
                entries.push(PageEntry::Ellipsis);
            }
        } else if n == page_count {
            // No ellipsis when the window ends directly before the last page.
            if current_page + 4 != page_count {
                entries.push(PageEntry::Ellipsis);
            }
            entries.push(PageEntry::Page(page_count));
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(entries: &[PageEntry]) -> Vec<u64> {
        entries
            .iter()
            .filter_map(|e| match e {
                PageEntry::Page(n) => Some(*n),
                PageEntry::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_single_page_renders_nothing() {
        assert!(build_range(1, 10, 10).unwrap().is_empty());
        assert!(build_range(1, 10, 3).unwrap().is_empty());
        assert!(build_range(1, 10, 0).unwrap().is_empty());
    }

    #[test]
    fn test_zero_page_size() {
        assert_eq!(build_range(1, 0, 10), Err(PaginationError::ZeroPageSize));
    }

    #[test]
    fn test_out_of_range_page() {
        assert_eq!(
            build_range(3, 10, 20),
            Err(PaginationError::PageOutOfRange {
                current_page: 3,
                page_count: 2,
            })
        );
        assert_eq!(
            build_range(0, 10, 20),
            Err(PaginationError::PageOutOfRange {
                current_page: 0,
                page_count: 2,
            })
        );
    }

    #[test]
    fn test_first_and_last_always_present() {
        for current in 1..=20 {
            let entries = build_range(current, 1, 20).unwrap();
            let nums = pages(&entries);
            assert_eq!(nums.first(), Some(&1), "current={current}");
            assert_eq!(nums.last(), Some(&20), "current={current}");
            assert!(nums.contains(&current), "current={current}");
        }
    }

    #[test]
    fn test_pages_strictly_increasing() {
        for current in 1..=20 {
            let nums = pages(&build_range(current, 1, 20).unwrap());
            assert!(
                nums.windows(2).all(|w| w[0] < w[1]),
                "current={current}: {nums:?}"
            );
        }
    }

    #[test]
    fn test_page_count_rounds_up() {
        // 21 items at 10 per page: 3 pages
        let entries = build_range(1, 10, 21).unwrap();
        assert_eq!(
            entries,
            vec![PageEntry::Page(1), PageEntry::Page(2), PageEntry::Page(3)]
        );
    }
}
