use serde::Deserialize;

/// Page links embedded in every list payload. The server sends `null` for
/// pages that do not exist.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Paging {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

/// Generic list envelope: a `data` array beside the pagination block. All
/// pagination fields are optional on the wire.
#[derive(Deserialize, Debug, Clone)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub paging: Paging,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page: 0,
            paging: Paging::default(),
        }
    }
}
