use {
    crate::{
        context::Context,
        relay::{reject, relay},
        request::{self, parse_body},
    },
    actix_web::{HttpResponse, Scope, post, web},
};

pub const MERCHANT_ROUTING: &str = "merchant-routing";
pub const MERCHANT_ALLOCATION: &str = "merchant-allocation";
pub const DAILY_ALLOCATION_RUN: &str = "daily-allocation-run";

pub fn services() -> Scope {
    web::scope("/admin")
        .service(merchant_routing)
        .service(merchant_allocation)
        .service(daily_allocation_run)
}

/// Set the stakers/treasury split of a token's Bucket C incentive.
#[post("/merchant-routing")]
pub async fn merchant_routing(body: web::Bytes, app_ctx: web::Data<Context>) -> HttpResponse {
    let request = match parse_body(&body)
        .and_then(|body| request::routing_update(&body, app_ctx.admin.enforce_bps_sum))
    {
        Ok(request) => request,
        Err(code) => return reject(MERCHANT_ROUTING, code),
    };

    let reply = app_ctx
        .upstream
        .update_routing(&request.token, &request.payload)
        .await;

    relay(MERCHANT_ROUTING, reply)
}

/// Write one allocation record for a date and denom.
#[post("/merchant-allocation")]
pub async fn merchant_allocation(body: web::Bytes, app_ctx: web::Data<Context>) -> HttpResponse {
    let request = match parse_body(&body).and_then(|body| request::single_allocation(&body)) {
        Ok(request) => request,
        Err(code) => return reject(MERCHANT_ALLOCATION, code),
    };

    let reply = app_ctx
        .upstream
        .record_allocation(&request.token, &request.payload)
        .await;

    relay(MERCHANT_ALLOCATION, reply)
}

/// Run a day's allocation batch. Upstream splits the total across the items.
#[post("/daily-allocation-run")]
pub async fn daily_allocation_run(body: web::Bytes, app_ctx: web::Data<Context>) -> HttpResponse {
    let request = match parse_body(&body).and_then(|body| request::daily_allocation_batch(&body)) {
        Ok(request) => request,
        Err(code) => return reject(DAILY_ALLOCATION_RUN, code),
    };

    tracing::debug!(
        date = %request.payload.date,
        items = request.payload.items.len(),
        dry_run = request.payload.dry_run,
        "Forwarding daily allocation run"
    );

    let reply = app_ctx
        .upstream
        .run_daily_allocation(&request.token, &request.payload)
        .await;

    relay(DAILY_ALLOCATION_RUN, reply)
}
