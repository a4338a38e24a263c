use {
    crate::{Error, UpstreamReply},
    async_trait::async_trait,
    tokenchain_types::{
        AllocationFilter, AllocationRecord, DailyAllocationBatch, IbcChannel, LiveStatus,
        RelayerStatus, RoutingRecord, RoutingUpdate, SingleAllocation,
    },
};

/// Read access to the indexer.
///
/// Reads never fail: a transport error, a non-2xx status, a malformed body or
/// a body that declares `ok: false` all yield `None` or an empty list, so
/// that a dashboard can render every section it did get.
#[async_trait]
pub trait IndexerClient {
    async fn live_status(&self) -> Option<LiveStatus>;

    async fn relayer_status(&self) -> Option<RelayerStatus>;

    async fn merchant_routing(&self, limit: u32) -> Vec<RoutingRecord>;

    async fn merchant_allocations(
        &self,
        limit: u32,
        filter: &AllocationFilter,
    ) -> Vec<AllocationRecord>;

    async fn ibc_channels(&self, limit: u32, port_id: Option<&str>) -> Vec<IbcChannel>;
}

/// Write access to the admin API, authenticated with a bearer token the
/// caller supplies.
///
/// Any answer upstream gives, successful or not, is an `Ok` reply; `Err`
/// means upstream couldn't be reached or the body couldn't be read.
#[async_trait]
pub trait AdminClient {
    async fn update_routing(
        &self,
        token: &str,
        update: &RoutingUpdate,
    ) -> Result<UpstreamReply, Error>;

    async fn record_allocation(
        &self,
        token: &str,
        allocation: &SingleAllocation,
    ) -> Result<UpstreamReply, Error>;

    async fn run_daily_allocation(
        &self,
        token: &str,
        batch: &DailyAllocationBatch,
    ) -> Result<UpstreamReply, Error>;
}

pub trait Upstream: IndexerClient + AdminClient {}

impl<T> Upstream for T where T: IndexerClient + AdminClient {}
