use {
    serde::{Deserialize, Serialize},
    strum_macros::Display,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WalletProvider {
    Keplr,
    Demo,
}

/// The connected account, as persisted under [`crate::STORAGE_KEY`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WalletIdentity {
    pub address: String,
    pub provider: WalletProvider,
}

impl WalletIdentity {
    pub fn new<T>(address: T, provider: WalletProvider) -> Self
    where
        T: Into<String>,
    {
        Self {
            address: address.into(),
            provider,
        }
    }

    /// Parse a stored identity. Anything malformed, including an empty
    /// address, yields `None`.
    pub fn from_stored(raw: &str) -> Option<Self> {
        serde_json::from_str::<Self>(raw)
            .ok()
            .filter(|identity| !identity.address.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_shape() {
        let identity = WalletIdentity::new("tokenchain1abc", WalletProvider::Keplr);
        assert_eq!(
            serde_json::to_string(&identity).unwrap(),
            r#"{"address":"tokenchain1abc","provider":"keplr"}"#
        );
        assert_eq!(identity.provider.to_string(), "keplr");
    }

    #[test]
    fn from_stored_rejects_garbage() {
        assert_eq!(WalletIdentity::from_stored("{"), None);
        assert_eq!(
            WalletIdentity::from_stored(r#"{"address":"","provider":"demo"}"#),
            None
        );
        assert_eq!(
            WalletIdentity::from_stored(r#"{"address":"tokenchain1abc","provider":"metamask"}"#),
            None
        );
        assert_eq!(
            WalletIdentity::from_stored(r#"{"address":"tokenchain1abc","provider":"demo"}"#),
            Some(WalletIdentity::new("tokenchain1abc", WalletProvider::Demo))
        );
    }
}
