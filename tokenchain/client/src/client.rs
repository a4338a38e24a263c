use {
    crate::{AdminClient, Error, IndexerClient, UpstreamReply},
    async_trait::async_trait,
    reqwest::{IntoUrl, header::CACHE_CONTROL},
    serde::{Serialize, de::DeserializeOwned},
    std::time::Duration,
    tokenchain_types::{
        AllocationFilter, AllocationRecord, DailyAllocationBatch, Envelope, IbcChannel, Json,
        ListResponse, LiveStatus, RelayerStatus, RoutingRecord, RoutingUpdate, SingleAllocation,
    },
};

pub const STATUS_PATH: &str = "/v1/status";
pub const RELAYER_STATUS_PATH: &str = "/v1/ibc/relayer-status";
pub const MERCHANT_ROUTING_PATH: &str = "/v1/loyalty/merchant-routing";
pub const MERCHANT_ALLOCATIONS_PATH: &str = "/v1/loyalty/merchant-allocations";
pub const IBC_CHANNELS_PATH: &str = "/v1/ibc/channels";
pub const ADMIN_ROUTING_PATH: &str = "/v1/admin/loyalty/merchant-routing";
pub const ADMIN_ALLOCATION_PATH: &str = "/v1/admin/loyalty/merchant-allocation";
pub const ADMIN_DAILY_RUN_PATH: &str = "/v1/admin/loyalty/daily-allocation/run";

/// Every read must reflect the live chain, never a cached copy.
const NO_STORE: &str = "no-store";

#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    endpoint: String,
}

impl HttpClient {
    pub fn new<U>(endpoint: U) -> Result<Self, Error>
    where
        U: IntoUrl,
    {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Like [`HttpClient::new`], but every request gives up after `timeout`.
    pub fn with_timeout<U>(endpoint: U, timeout: Duration) -> Result<Self, Error>
    where
        U: IntoUrl,
    {
        Self::with_client(endpoint, reqwest::Client::builder().timeout(timeout).build()?)
    }

    fn with_client<U>(endpoint: U, inner: reqwest::Client) -> Result<Self, Error>
    where
        U: IntoUrl,
    {
        let endpoint = endpoint.into_url()?;

        Ok(Self {
            inner,
            endpoint: endpoint.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    async fn get<T>(&self, path: &'static str, query: &[(&str, String)]) -> Result<T, Error>
    where
        T: DeserializeOwned + Envelope,
    {
        let response = self
            .inner
            .get(self.url(path))
            .query(query)
            .header(CACHE_CONTROL, NO_STORE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                path,
                status: status.as_u16(),
            });
        }

        let body: T = response.json().await?;
        if !body.is_ok() {
            return Err(Error::NotOk { path });
        }

        Ok(body)
    }

    async fn get_or_none<T>(&self, path: &'static str) -> Option<T>
    where
        T: DeserializeOwned + Envelope,
    {
        self.get(path, &[])
            .await
            .inspect_err(|err| tracing::warn!(path, %err, "Upstream read failed"))
            .ok()
    }

    async fn get_items<T>(&self, path: &'static str, query: &[(&str, String)]) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        let items = match self.get::<ListResponse<Json>>(path, query).await {
            Ok(list) => list.items,
            Err(err) => {
                tracing::warn!(path, %err, "Upstream read failed");
                return Vec::new();
            },
        };

        // Rows are decoded one by one so a bad row only drops itself.
        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                serde_json::from_value(item)
                    .inspect_err(|err| tracing::warn!(path, index, %err, "Skipping upstream row"))
                    .ok()
            })
            .collect()
    }

    async fn post<B>(
        &self,
        path: &'static str,
        token: &str,
        body: &B,
    ) -> Result<UpstreamReply, Error>
    where
        B: Serialize + Sync,
    {
        tracing::debug!(path, "Forwarding admin request");

        let response = self
            .inner
            .post(self.url(path))
            .bearer_auth(token)
            .header(CACHE_CONTROL, NO_STORE)
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(path, status, "Upstream answered admin request");

        Ok(UpstreamReply { status, body })
    }
}

#[async_trait]
impl IndexerClient for HttpClient {
    async fn live_status(&self) -> Option<LiveStatus> {
        self.get_or_none(STATUS_PATH).await
    }

    async fn relayer_status(&self) -> Option<RelayerStatus> {
        self.get_or_none(RELAYER_STATUS_PATH).await
    }

    async fn merchant_routing(&self, limit: u32) -> Vec<RoutingRecord> {
        self.get_items(MERCHANT_ROUTING_PATH, &[("limit", limit.to_string())])
            .await
    }

    async fn merchant_allocations(
        &self,
        limit: u32,
        filter: &AllocationFilter,
    ) -> Vec<AllocationRecord> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(date) = &filter.date {
            query.push(("date", date.clone()));
        }
        if let Some(denom) = &filter.denom {
            query.push(("denom", denom.clone()));
        }

        self.get_items(MERCHANT_ALLOCATIONS_PATH, &query).await
    }

    async fn ibc_channels(&self, limit: u32, port_id: Option<&str>) -> Vec<IbcChannel> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(port_id) = port_id {
            query.push(("port_id", port_id.to_string()));
        }

        self.get_items(IBC_CHANNELS_PATH, &query).await
    }
}

#[async_trait]
impl AdminClient for HttpClient {
    async fn update_routing(
        &self,
        token: &str,
        update: &RoutingUpdate,
    ) -> Result<UpstreamReply, Error> {
        self.post(ADMIN_ROUTING_PATH, token, update).await
    }

    async fn record_allocation(
        &self,
        token: &str,
        allocation: &SingleAllocation,
    ) -> Result<UpstreamReply, Error> {
        self.post(ADMIN_ALLOCATION_PATH, token, allocation).await
    }

    async fn run_daily_allocation(
        &self,
        token: &str,
        batch: &DailyAllocationBatch,
    ) -> Result<UpstreamReply, Error> {
        self.post(ADMIN_DAILY_RUN_PATH, token, batch).await
    }
}
