use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, IntoStaticStr},
};

/// Stable short codes reported in the `error` field of a failed admin
/// request. Callers match on these strings, so they must never change.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCode {
    /// The request body isn't parseable JSON.
    InvalidJson,
    TokenRequired,
    DateRequired,
    DenomRequired,
    /// A routing bps value isn't a finite number.
    InvalidBps,
    /// The routing split doesn't add up to 10000 bps. Only reported when
    /// strict routing checks are enabled.
    InvalidBpsSum,
    InvalidActivityScore,
    InvalidBucketCAmount,
    InvalidTotalBucketCAmount,
    /// The batch carried no items at all.
    ItemsRequired,
    /// The batch carried items, but none of them was usable.
    InvalidItems,
    /// Upstream answered with a body that isn't JSON.
    InvalidUpstreamJson,
    /// Upstream couldn't be reached.
    UpstreamUnreachable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
