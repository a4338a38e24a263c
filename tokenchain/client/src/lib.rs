mod client;
mod error;
mod reply;
mod traits;

pub use {client::*, error::*, reply::*, traits::*};

/// The public TokenChain testnet API.
pub const DEFAULT_ENDPOINT: &str = "https://api.testnet.tokenchain.tokentap.ca";
