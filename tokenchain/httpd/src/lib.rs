pub mod config;
pub mod context;
pub mod error;
#[cfg(feature = "metrics")]
pub mod middlewares;
pub mod relay;
pub mod request;
pub mod routes;
pub mod server;
