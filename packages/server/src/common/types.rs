// Common types used across multiple domains and layers

use serde::Serialize;

/// Result of a name search: total match count plus the matching rows, in
/// storage order.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<T> {
    pub count: usize,
    pub results: Vec<T>,
}
