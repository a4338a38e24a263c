use {
    crate::context::Context,
    actix_web::{HttpResponse, Responder, get, web},
};

#[get("/")]
pub async fn index() -> impl Responder {
    "OK"
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("TokenChain gateway is healthy")
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default)]
pub struct UpResponse {
    /// `None` when upstream couldn't report its status.
    pub block_height: Option<String>,
    pub version: String,
}

#[get("/up")]
pub async fn up(app_ctx: web::Data<Context>) -> impl Responder {
    let block_height = app_ctx
        .upstream
        .live_status()
        .await
        .map(|status| status.latest_block_height);

    HttpResponse::Ok().json(UpResponse {
        block_height,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
