use serde::{Deserialize, Serialize};

/// One Bucket C allocation written for a `(date, denom)` pair, as reported by
/// `/v1/loyalty/merchant-allocations`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AllocationRecord {
    /// Composite `date + denom` key assigned upstream.
    #[serde(deserialize_with = "crate::null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub denom: String,
    #[serde(deserialize_with = "crate::int_or_string")]
    pub activity_score: u64,
    #[serde(deserialize_with = "crate::string_or_number")]
    pub bucket_c_amount: String,
    #[serde(deserialize_with = "crate::string_or_number")]
    pub stakers_amount: String,
    #[serde(deserialize_with = "crate::string_or_number")]
    pub treasury_amount: String,
    #[serde(deserialize_with = "crate::int_or_string")]
    pub merchant_incentive_stakers_bps: i64,
    #[serde(deserialize_with = "crate::int_or_string")]
    pub merchant_incentive_treasury_bps: i64,
}

/// Optional filters for the allocation ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationFilter {
    pub date: Option<String>,
    pub denom: Option<String>,
}

impl AllocationFilter {
    pub fn with_date<T>(mut self, date: T) -> Self
    where
        T: Into<String>,
    {
        self.date = Some(date.into());
        self
    }

    pub fn with_denom<T>(mut self, denom: T) -> Self
    where
        T: Into<String>,
    {
        self.denom = Some(denom.into());
        self
    }
}

/// Body forwarded to `POST /v1/admin/loyalty/merchant-allocation`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SingleAllocation {
    pub date: String,
    pub denom: String,
    pub activity_score: i64,
    pub bucket_c_amount: i64,
}
