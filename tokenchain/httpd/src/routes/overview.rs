use {
    crate::context::Context,
    actix_web::{
        HttpResponse, get,
        http::header::{CacheControl, CacheDirective},
        web,
    },
    serde::{Deserialize, Serialize},
    tokenchain_types::{
        AllocationFilter, AllocationRecord, IbcChannel, LiveStatus, RelayerStatus, RoutingRecord,
        TRANSFER_PORT,
    },
};

pub const DEFAULT_LIMIT: u32 = 8;

#[derive(Deserialize, Debug, Default)]
pub struct OverviewQuery {
    pub limit: Option<u32>,
}

/// Everything the operator dashboard shows at a glance. Each section is
/// read independently; one failing read leaves the others intact.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Overview {
    pub status: Option<LiveStatus>,
    pub relayer: Option<RelayerStatus>,
    pub routing: Vec<RoutingRecord>,
    pub allocations: Vec<AllocationRecord>,
    pub transfer_channels: Vec<IbcChannel>,
}

#[get("/overview")]
pub async fn overview(
    query: web::Query<OverviewQuery>,
    app_ctx: web::Data<Context>,
) -> HttpResponse {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let filter = AllocationFilter::default();
    let upstream = &app_ctx.upstream;

    let (status, relayer, routing, allocations, transfer_channels) = futures::join!(
        upstream.live_status(),
        upstream.relayer_status(),
        upstream.merchant_routing(limit),
        upstream.merchant_allocations(limit, &filter),
        upstream.ibc_channels(limit, Some(TRANSFER_PORT)),
    );

    HttpResponse::Ok()
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .json(Overview {
            status,
            relayer,
            routing,
            allocations,
            transfer_channels,
        })
}
