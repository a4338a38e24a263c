use {crate::config::AdminConfig, std::sync::Arc, tokenchain_client::Upstream};

#[derive(Clone)]
pub struct Context {
    /// The indexer and admin API every request is relayed to.
    pub upstream: Arc<dyn Upstream + Send + Sync>,
    pub admin: AdminConfig,
}

impl Context {
    pub fn new(upstream: Arc<dyn Upstream + Send + Sync>, admin: AdminConfig) -> Self {
        Self { upstream, admin }
    }
}
