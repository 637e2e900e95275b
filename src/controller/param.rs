use serde::Deserialize;

/// Default row count for list endpoints.
pub const DEFAULT_LIMIT: u64 = 50;
/// Hard cap on requested rows.
pub const MAX_LIMIT: u64 = 200;

/// Query parameter limiting list endpoint results.
#[derive(Deserialize)]
pub struct LimitParam {
    pub limit: Option<u64>,
}

impl LimitParam {
    /// The effective limit, defaulted and clamped to the cap.
    pub fn effective(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT)
    }
}
