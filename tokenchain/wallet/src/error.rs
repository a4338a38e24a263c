use thiserror::Error;

/// Why a connection attempt failed. The messages are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Keplr not detected. Use Demo Wallet or install Keplr.")]
    ExtensionMissing,

    #[error("No accounts found in Keplr for this chain.")]
    NoAccounts,

    #[error("Keplr connection failed. Confirm chain + wallet permissions.")]
    ConnectionFailed,
}

/// A failure reported by the wallet extension itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    #[error("request rejected by user")]
    Rejected,

    #[error("chain not supported: {chain_id}")]
    UnknownChain { chain_id: String },

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}
