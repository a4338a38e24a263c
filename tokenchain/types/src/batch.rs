use serde::{Deserialize, Serialize};

/// A denom and the activity score that weighs its share of the day's
/// Bucket C pool.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivityScore {
    pub denom: String,
    pub activity_score: i64,
}

/// Body forwarded to `POST /v1/admin/loyalty/daily-allocation/run`.
///
/// Upstream owns the split of `total_bucket_c_amount` across `items`; this
/// type only carries the request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DailyAllocationBatch {
    pub date: String,
    pub total_bucket_c_amount: i64,
    pub allow_overwrite: bool,
    pub dry_run: bool,
    pub items: Vec<ActivityScore>,
}
