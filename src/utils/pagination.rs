use serde::Deserialize;

/// Page window for list queries, lifted straight from a query string by the
/// web layer. Missing values default to offset 0, limit 10 at query time.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}
