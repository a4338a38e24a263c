use {
    crate::{config::Config, context::Context, error::Error, routes},
    actix_cors::Cors,
    actix_web::{
        App, HttpServer, http,
        middleware::{Compress, Logger},
        web::{self, ServiceConfig},
    },
    sentry_actix::Sentry,
    std::{fmt::Display, sync::Arc, time::Duration},
    tokenchain_client::HttpClient,
};
#[cfg(feature = "metrics")]
use {
    actix_web::HttpResponse,
    actix_web_metrics::ActixWebMetricsBuilder,
    metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle},
};

/// Routes and shared state of the gateway, minus the middleware stack.
pub fn config_app(app_ctx: Context) -> Box<dyn Fn(&mut ServiceConfig)> {
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(app_ctx.clone()))
            .service(routes::index::index)
            .service(routes::index::health)
            .service(routes::index::up)
            .service(routes::api_services());
    })
}

/// Run the gateway HTTP server.
pub async fn run_server<I>(
    ip: I,
    port: u16,
    cors_allowed_origin: Option<String>,
    context: Context,
) -> Result<(), Error>
where
    I: ToString + Display,
{
    tracing::info!(%ip, port, "Starting TokenChain gateway");

    #[cfg(feature = "metrics")]
    let metrics = ActixWebMetricsBuilder::new().build();

    #[cfg(feature = "metrics")]
    crate::middlewares::metrics::init_httpd_metrics();

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["POST", "GET", "OPTIONS"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
                http::header::HeaderName::from_static("sentry-trace"),
                http::header::HeaderName::from_static("baggage"),
            ])
            .max_age(3600);

        if let Some(origin) = cors_allowed_origin.as_deref() {
            for origin in origin.split(',') {
                cors = cors.allowed_origin(origin.trim());
            }
        } else {
            cors = cors.allow_any_origin();
        }

        let app = App::new()
            .wrap(Sentry::new())
            .wrap(Logger::default())
            .wrap(Compress::default())
            .wrap(cors);

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics.clone());

        app.configure(config_app(context.clone()))
    })
    .keep_alive(http::KeepAlive::Os)
    .bind((ip.to_string(), port))?
    .run()
    .await?;

    Ok(())
}

/// Run the Prometheus scrape endpoint.
#[cfg(feature = "metrics")]
pub async fn run_metrics_server<I>(
    ip: I,
    port: u16,
    metrics_handler: PrometheusHandle,
) -> Result<(), Error>
where
    I: ToString + Display,
{
    tracing::info!(%ip, port, "Starting metrics httpd server");

    HttpServer::new(move || {
        let metrics_handler = metrics_handler.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(Compress::default())
            .route(
                "/health",
                web::get().to(|| async { HttpResponse::Ok().body("Metrics server is healthy") }),
            )
            .route(
                "/",
                web::get().to(|| async { HttpResponse::Ok().body("Metrics server is running") }),
            )
            .route(
                "/metrics",
                web::get().to(move || {
                    let metrics_handler = metrics_handler.clone();
                    metrics_handler.run_upkeep();
                    async move {
                        HttpResponse::Ok()
                            .content_type("text/plain; version=0.0.4")
                            .body(metrics_handler.render())
                    }
                }),
            )
    })
    .bind((ip.to_string(), port))?
    .run()
    .await?;

    Ok(())
}

/// Connect to upstream and build the shared request context.
pub fn build_context(cfg: &Config) -> Result<Context, Error> {
    let client = match cfg.upstream.timeout_secs {
        Some(secs) => {
            HttpClient::with_timeout(cfg.upstream.endpoint.as_str(), Duration::from_secs(secs))?
        },
        None => HttpClient::new(cfg.upstream.endpoint.as_str())?,
    };

    tracing::info!(endpoint = client.endpoint(), "Relaying to upstream");

    Ok(Context::new(Arc::new(client), cfg.admin.clone()))
}

/// Run the gateway, and the metrics server alongside it when enabled.
pub async fn run_servers(cfg: Config) -> Result<(), Error> {
    let context = build_context(&cfg)?;

    #[cfg(feature = "metrics")]
    if cfg.metrics.enabled {
        // Install before serving so no request goes unrecorded.
        let metrics_handler = PrometheusBuilder::new().install_recorder()?;

        let server = run_server(
            &cfg.httpd.ip,
            cfg.httpd.port,
            cfg.httpd.cors_allowed_origin.clone(),
            context,
        );
        let metrics = run_metrics_server(&cfg.metrics.ip, cfg.metrics.port, metrics_handler);

        tokio::try_join!(server, metrics)?;

        return Ok(());
    }

    #[cfg(not(feature = "metrics"))]
    if cfg.metrics.enabled {
        tracing::warn!("Metrics are enabled in the config, but the `metrics` feature is off");
    }

    run_server(
        &cfg.httpd.ip,
        cfg.httpd.port,
        cfg.httpd.cors_allowed_origin,
        context,
    )
    .await
}
