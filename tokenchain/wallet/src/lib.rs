mod connector;
mod error;
mod extension;
mod identity;
mod store;

pub use {connector::*, error::*, extension::*, identity::*, store::*};

/// Chain the wallet extension is asked to enable.
pub const CHAIN_ID: &str = "tokenchain-testnet-1";

/// Storage key holding the persisted identity.
pub const STORAGE_KEY: &str = "tokenchain_web_wallet";

/// Address adopted by [`WalletConnector::use_demo_identity`].
pub const DEMO_ADDRESS: &str = "tokenchain1demo4t4s8dzc0r5v4m8pe0j4l74tc0s2demo";
