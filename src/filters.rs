// src/filters.rs
use serde::Deserialize;

const DEFAULT_PAGE: i64 = 1;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub page: Option<i64>,
}

impl ListingParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(ListingParams::default().page(), 1);
    }

    #[test]
    fn page_is_passed_through_unvalidated() {
        assert_eq!(ListingParams { page: Some(7) }.page(), 7);
        assert_eq!(ListingParams { page: Some(0) }.page(), 0);
    }
}
