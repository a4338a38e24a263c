use serde::{Deserialize, Serialize};

pub const TRANSFER_PORT: &str = "transfer";

pub const STATE_OPEN: &str = "STATE_OPEN";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IbcChannel {
    #[serde(deserialize_with = "crate::null_as_default")]
    pub channel_id: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub port_id: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub counterparty_channel_id: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub counterparty_port_id: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub connection_hops: Vec<String>,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub ordering: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub version: String,
}
