//! # Pagination
//!
//! Query parsing and window math for the list endpoint.
//!
//! A page `p` of size `q` needs at least `(p-1)*q + 1` stored records to be
//! non-empty. The handler fetches a window of the first `q*p` records and
//! slices off the first `(p-1)*q`.

use std::collections::HashMap;

use crate::config::Config;

use super::errors::{ApiError, ApiResult};

/// Parsed pagination parameters, both guaranteed positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub quantity: i64,
    pub page: i64,
}

impl PageParams {
    /// Parse `quantity` and `page` from the query string
    ///
    /// Missing or non-positive values fall back to the configured defaults;
    /// present-but-unparseable values are a client error.
    pub fn parse(query: &HashMap<String, String>, config: &Config) -> ApiResult<Self> {
        let quantity = parse_param(query, "quantity", config.default_quantity)?;
        let page = parse_param(query, "page", config.default_page)?;

        Ok(Self { quantity, page })
    }

    /// 1-based index of the first record on the requested page
    ///
    /// `None` when the arithmetic overflows, a threshold no real store can
    /// satisfy.
    pub fn first_record(&self) -> Option<i64> {
        (self.page - 1).checked_mul(self.quantity)?.checked_add(1)
    }

    /// Window length covering every page up to the requested one
    ///
    /// Saturates on overflow; fetching everything is equivalent once the
    /// window exceeds any possible collection.
    pub fn window_len(&self) -> usize {
        self.quantity
            .checked_mul(self.page)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX)
    }

    /// Page number following this one, if the store holds enough records
    /// for it to be non-empty
    pub fn next_page(&self, count: i64) -> Option<i64> {
        let threshold = self.first_record()?.checked_add(self.quantity)?;
        if count >= threshold {
            Some(self.page + 1)
        } else {
            None
        }
    }
}

/// Parse one optional positive parameter
fn parse_param(query: &HashMap<String, String>, name: &str, default: i64) -> ApiResult<i64> {
    match query.get(name) {
        None => Ok(default),
        Some(raw) => {
            let value: i64 = raw
                .trim()
                .parse()
                .map_err(|_| ApiError::InvalidParameters)?;
            if value <= 0 {
                Ok(default)
            } else {
                Ok(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            secret: "hunter2".to_string(),
            default_quantity: 10,
            default_page: 1,
            data_path: None,
            bind_addr: "0.0.0.0".to_string(),
            port: 5000,
            cors_origins: Vec::new(),
        }
    }

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_params_use_defaults() {
        let params = PageParams::parse(&query(&[]), &test_config()).unwrap();
        assert_eq!(params, PageParams { quantity: 10, page: 1 });
    }

    #[test]
    fn test_explicit_params() {
        let params =
            PageParams::parse(&query(&[("quantity", "2"), ("page", "3")]), &test_config()).unwrap();
        assert_eq!(params, PageParams { quantity: 2, page: 3 });
    }

    #[test]
    fn test_non_positive_params_fall_back() {
        let params =
            PageParams::parse(&query(&[("quantity", "0"), ("page", "-4")]), &test_config()).unwrap();
        assert_eq!(params, PageParams { quantity: 10, page: 1 });
    }

    #[test]
    fn test_garbage_params_are_rejected() {
        let result = PageParams::parse(&query(&[("quantity", "dos")]), &test_config());
        assert_eq!(result, Err(ApiError::InvalidParameters));

        let result = PageParams::parse(&query(&[("page", "2.5")]), &test_config());
        assert_eq!(result, Err(ApiError::InvalidParameters));

        let result = PageParams::parse(&query(&[("page", "")]), &test_config());
        assert_eq!(result, Err(ApiError::InvalidParameters));
    }

    #[test]
    fn test_window_math() {
        let params = PageParams { quantity: 2, page: 1 };
        assert_eq!(params.first_record(), Some(1));
        assert_eq!(params.window_len(), 2);

        let params = PageParams { quantity: 2, page: 3 };
        assert_eq!(params.first_record(), Some(5));
        assert_eq!(params.window_len(), 6);
    }

    #[test]
    fn test_next_page_threshold() {
        // Five records, two per page: page 1 and 2 have successors, page 3
        // is the last
        let params = PageParams { quantity: 2, page: 1 };
        assert_eq!(params.next_page(5), Some(2));

        let params = PageParams { quantity: 2, page: 2 };
        assert_eq!(params.next_page(5), Some(3));

        let params = PageParams { quantity: 2, page: 3 };
        assert_eq!(params.next_page(5), None);
    }

    #[test]
    fn test_exact_fit_has_no_next_page() {
        // Four records, two per page: page 2 ends exactly at the last record
        let params = PageParams { quantity: 2, page: 2 };
        assert_eq!(params.next_page(4), None);
    }

    #[test]
    fn test_overflowing_page_is_unreachable() {
        let params = PageParams {
            quantity: i64::MAX,
            page: i64::MAX,
        };
        assert_eq!(params.first_record(), None);
        assert_eq!(params.window_len(), usize::MAX);
        assert_eq!(params.next_page(i64::MAX), None);
    }
}
