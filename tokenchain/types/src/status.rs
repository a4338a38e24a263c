use {
    crate::Json,
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Response of `/v1/status`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LiveStatus {
    pub ok: Option<bool>,
    #[serde(deserialize_with = "crate::string_or_number")]
    pub latest_block_height: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub catching_up: bool,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub rpc_network: String,
}

/// Response of `/v1/ibc/relayer-status`.
///
/// Only the fields the dashboards read are typed; everything else upstream
/// reports is kept in `extra`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RelayerStatus {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default, deserialize_with = "crate::opt_string_or_scalar")]
    pub service_active: Option<String>,
    #[serde(default)]
    pub hermes_health_ok: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Json>,
}
