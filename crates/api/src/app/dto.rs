use serde::{Deserialize, Serialize};

// -------------------------
// Response bodies
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkBody<'a> {
    pub ok: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

pub const PRODUCT_ADDED: &str = "product added";
pub const PRODUCT_UPDATED: &str = "product updated";
pub const PRODUCT_DELETED: &str = "product deleted";

// -------------------------
// Query helpers
// -------------------------

/// First `category` value in the query string, as given (possibly empty).
///
/// Repeated keys are tolerated; later occurrences are ignored.
pub fn category_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(k, _)| k == "category")
        .map(|(_, v)| v.as_str())
}
