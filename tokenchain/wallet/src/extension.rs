use {crate::ExtensionError, async_trait::async_trait};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub address: String,
}

/// A browser wallet extension exposing a chain's accounts.
#[async_trait]
pub trait WalletExtension {
    /// Ask the user to grant access to `chain_id`.
    async fn enable(&self, chain_id: &str) -> Result<(), ExtensionError>;

    /// The accounts the extension holds for `chain_id`.
    async fn accounts(&self, chain_id: &str) -> Result<Vec<Account>, ExtensionError>;
}
