//! Query parameters for dashboard endpoints.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

/// `?as_of=YYYY-MM-DD`, defaulting to today (UTC).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AsOfParams {
    pub as_of: Option<NaiveDate>,
}

impl AsOfParams {
    pub fn date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Utc::now().date_naive())
    }
}
