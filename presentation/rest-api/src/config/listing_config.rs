use std::env;

const DEFAULT_MOST_USED_LIMIT: usize = 3;

/// Defaults applied to catalog listings.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    pub most_used_default_limit: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            most_used_default_limit: DEFAULT_MOST_USED_LIMIT,
        }
    }
}

impl ListingConfig {
    /// Environment variables:
    /// - MOST_USED_DEFAULT_LIMIT: items returned by /products/most-used when
    ///   no valid `limit` is given (default: 3)
    pub fn from_env() -> Self {
        Self::from_raw(env::var("MOST_USED_DEFAULT_LIMIT").ok().as_deref())
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let most_used_default_limit = raw
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_MOST_USED_LIMIT);

        Self {
            most_used_default_limit,
        }
    }
}
