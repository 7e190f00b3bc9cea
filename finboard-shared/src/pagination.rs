/// Pagination helpers for listing endpoints
///
/// Listing pages are 1-indexed and fixed at [`ITEMS_PER_PAGE`] rows. The
/// offset math and the page-count ceiling live here so that the listing
/// query and the page-count query can never drift apart. A page number
/// of 0 or below is a caller contract violation; the HTTP layer rejects
/// it before any offset is computed.

/// Fixed page size for invoice and customer listings
pub const ITEMS_PER_PAGE: i64 = 6;

/// Computes the row offset for a 1-indexed page number
///
/// Callers must guarantee `page >= 1`. The arithmetic saturates so an
/// absurdly large page number yields a huge offset (an empty page)
/// instead of overflowing.
pub fn page_offset(page: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(ITEMS_PER_PAGE)
}

/// Computes the total page count for a matching row count
///
/// An empty result set yields 0 pages; the presentation layer treats
/// 0 pages as "show page 1 empty", not as an error.
pub fn total_pages(row_count: i64) -> i64 {
    (row_count + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(2), 6);
        assert_eq!(page_offset(10), 54);
    }

    #[test]
    fn test_page_offset_saturates_on_huge_pages() {
        // Query-string page numbers are attacker-controlled; the offset
        // must never overflow, only saturate past any real row.
        assert_eq!(page_offset(i64::MAX), i64::MAX);
        assert!(page_offset(i64::MAX / ITEMS_PER_PAGE) > 0);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(12), 2);
        assert_eq!(total_pages(13), 3);
    }
}
