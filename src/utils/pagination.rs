//! Pagination query normalization

use crate::constants::MAX_PAGE_SIZE;

/// Normalize page/per_page query values.
///
/// Pages are 1-based; a `page=0` query would otherwise underflow the offset
/// arithmetic in the repositories. Page sizes are clamped to
/// [`MAX_PAGE_SIZE`].
pub fn page_params(page: Option<u32>, per_page: Option<u32>, default_per_page: u32) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let per_page = per_page.unwrap_or(default_per_page).clamp(1, MAX_PAGE_SIZE);
    (page, per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        assert_eq!(page_params(None, None, 20), (1, 20));
        assert_eq!(page_params(Some(3), Some(10), 20), (3, 10));
    }

    #[test]
    fn test_page_zero_clamps_to_one() {
        assert_eq!(page_params(Some(0), None, 20), (1, 20));
    }

    #[test]
    fn test_per_page_clamped_to_bounds() {
        assert_eq!(page_params(None, Some(0), 20), (1, 1));
        assert_eq!(page_params(None, Some(10_000), 20), (1, MAX_PAGE_SIZE));
    }
}
