use {
    crate::{ErrorCode, LiveStatus, RelayerStatus},
    serde::{Deserialize, Serialize},
};

/// The `{ok, count, items}` envelope every upstream list endpoint returns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub count: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// An upstream response carrying a declared success flag.
pub trait Envelope {
    fn is_ok(&self) -> bool;
}

impl<T> Envelope for ListResponse<T> {
    fn is_ok(&self) -> bool {
        self.ok
    }
}

// Status bodies only fail on an explicit `ok: false`.

impl Envelope for LiveStatus {
    fn is_ok(&self) -> bool {
        self.ok != Some(false)
    }
}

impl Envelope for RelayerStatus {
    fn is_ok(&self) -> bool {
        self.ok != Some(false)
    }
}

/// The `{ok: false, error, raw?}` body returned for locally detected errors
/// and for upstream bodies that aren't valid JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ErrorBody {
    pub fn new(error: ErrorCode) -> Self {
        Self {
            ok: false,
            error,
            raw: None,
        }
    }

    pub fn invalid_upstream_json<T>(raw: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            ok: false,
            error: ErrorCode::InvalidUpstreamJson,
            raw: Some(raw.into()),
        }
    }
}
