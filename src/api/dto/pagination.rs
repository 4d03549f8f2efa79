//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and converts to database offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 25
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 10 and 100
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for SQL queries.
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(25);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(10..=100).contains(&page_size) {
            return Err("Page size must be between 10 and 100".to_string());
        }

        let offset = (page as i64 - 1) * page_size as i64;
        let limit = page_size as i64;

        Ok((offset, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, page_size: Option<u32>) -> PaginationParams {
        PaginationParams { page, page_size }
    }

    #[test]
    fn test_defaults() {
        let (offset, limit) = params(None, None).validate_and_get_offset_limit().unwrap();
        assert_eq!(offset, 0);
        assert_eq!(limit, 25);
    }

    #[test]
    fn test_page_2_with_default_size() {
        let (offset, limit) = params(Some(2), None).validate_and_get_offset_limit().unwrap();
        assert_eq!(offset, 25);
        assert_eq!(limit, 25);
    }

    #[test]
    fn test_custom_page_and_size() {
        let (offset, limit) = params(Some(3), Some(50))
            .validate_and_get_offset_limit()
            .unwrap();
        assert_eq!(offset, 100);
        assert_eq!(limit, 50);
    }

    #[test]
    fn test_max_page_does_not_overflow() {
        let (offset, limit) = params(Some(u32::MAX), Some(100))
            .validate_and_get_offset_limit()
            .unwrap();
        assert_eq!(offset, (u32::MAX as i64 - 1) * 100);
        assert_eq!(limit, 100);
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(params(Some(0), None).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(params(None, Some(9)).validate_and_get_offset_limit().is_err());
        assert!(params(None, Some(10)).validate_and_get_offset_limit().is_ok());
        assert!(params(None, Some(100)).validate_and_get_offset_limit().is_ok());
        assert!(params(None, Some(101)).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_string_page_numbers_parse() {
        let p: PaginationParams =
            serde_json::from_str(r#"{"page": "2", "page_size": "30"}"#).unwrap();
        assert_eq!(p.page, Some(2));
        assert_eq!(p.page_size, Some(30));
    }
}
