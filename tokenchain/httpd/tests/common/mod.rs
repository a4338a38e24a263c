#![allow(dead_code)]

use {
    async_trait::async_trait,
    std::sync::{Arc, Mutex},
    tokenchain_client::{AdminClient, Error, IndexerClient, UpstreamReply},
    tokenchain_httpd::{config::AdminConfig, context::Context},
    tokenchain_types::{
        AllocationFilter, AllocationRecord, DailyAllocationBatch, IbcChannel, LiveStatus,
        RelayerStatus, RoutingRecord, RoutingUpdate, SingleAllocation,
    },
};

/// An admin write as it reached upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Forwarded {
    Routing {
        token: String,
        update: RoutingUpdate,
    },
    Allocation {
        token: String,
        allocation: SingleAllocation,
    },
    DailyRun {
        token: String,
        batch: DailyAllocationBatch,
    },
}

/// Upstream stand-in. Answers every write with `reply` and every read with
/// the canned data below, and remembers what was forwarded.
pub struct MockUpstream {
    reply: UpstreamReply,
    forwarded: Mutex<Vec<Forwarded>>,
    pub status: Option<LiveStatus>,
    pub routing: Vec<RoutingRecord>,
    pub channels: Vec<IbcChannel>,
    /// Limits and port filters the reads were called with.
    pub reads: Mutex<Vec<(u32, Option<String>)>>,
}

impl MockUpstream {
    pub fn new(reply: UpstreamReply) -> Self {
        Self {
            reply,
            forwarded: Mutex::new(Vec::new()),
            status: None,
            routing: Vec::new(),
            channels: Vec::new(),
            reads: Mutex::new(Vec::new()),
        }
    }

    pub fn ok() -> Self {
        Self::new(UpstreamReply::new(200, r#"{"ok":true}"#))
    }

    pub fn forwarded(&self) -> Vec<Forwarded> {
        self.forwarded.lock().unwrap().clone()
    }

    fn record(&self, call: Forwarded) -> Result<UpstreamReply, Error> {
        self.forwarded.lock().unwrap().push(call);
        Ok(self.reply.clone())
    }
}

#[async_trait]
impl IndexerClient for MockUpstream {
    async fn live_status(&self) -> Option<LiveStatus> {
        self.status.clone()
    }

    async fn relayer_status(&self) -> Option<RelayerStatus> {
        None
    }

    async fn merchant_routing(&self, limit: u32) -> Vec<RoutingRecord> {
        self.reads.lock().unwrap().push((limit, None));
        self.routing.clone()
    }

    async fn merchant_allocations(
        &self,
        _limit: u32,
        _filter: &AllocationFilter,
    ) -> Vec<AllocationRecord> {
        Vec::new()
    }

    async fn ibc_channels(&self, limit: u32, port_id: Option<&str>) -> Vec<IbcChannel> {
        self.reads
            .lock()
            .unwrap()
            .push((limit, port_id.map(ToString::to_string)));
        self.channels.clone()
    }
}

#[async_trait]
impl AdminClient for MockUpstream {
    async fn update_routing(
        &self,
        token: &str,
        update: &RoutingUpdate,
    ) -> Result<UpstreamReply, Error> {
        self.record(Forwarded::Routing {
            token: token.to_string(),
            update: update.clone(),
        })
    }

    async fn record_allocation(
        &self,
        token: &str,
        allocation: &SingleAllocation,
    ) -> Result<UpstreamReply, Error> {
        self.record(Forwarded::Allocation {
            token: token.to_string(),
            allocation: allocation.clone(),
        })
    }

    async fn run_daily_allocation(
        &self,
        token: &str,
        batch: &DailyAllocationBatch,
    ) -> Result<UpstreamReply, Error> {
        self.record(Forwarded::DailyRun {
            token: token.to_string(),
            batch: batch.clone(),
        })
    }
}

pub fn context(upstream: Arc<MockUpstream>) -> Context {
    Context::new(upstream, AdminConfig::default())
}

pub fn strict_context(upstream: Arc<MockUpstream>) -> Context {
    Context::new(upstream, AdminConfig {
        enforce_bps_sum: true,
    })
}
