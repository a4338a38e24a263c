use {
    clap::Parser,
    config_parser::parse_config,
    sentry::integrations::tracing::layer as sentry_layer,
    std::path::PathBuf,
    tokenchain_httpd::{config::Config, server::run_servers},
    tracing::metadata::LevelFilter,
    tracing_subscriber::{fmt, prelude::*, registry},
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Path to the config file. Defaults apply when it doesn't exist.
    #[arg(long, default_value = "tokenchain.toml")]
    config: PathBuf,

    /// Override `httpd.ip`
    #[arg(long)]
    ip: Option<String>,

    /// Override `httpd.port`
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Parse the config file.
    let mut cfg: Config = parse_config(&cli.config)?;

    if let Some(ip) = cli.ip {
        cfg.httpd.ip = ip;
    }

    if let Some(port) = cli.port {
        cfg.httpd.port = port;
    }

    let max_level = cfg.log_level.parse::<LevelFilter>()?;

    // Held until main returns, so pending events are flushed on shutdown.
    let _sentry_guard = if cfg.sentry.enabled {
        let guard = sentry::init((cfg.sentry.dsn.clone(), sentry::ClientOptions {
            environment: Some(cfg.sentry.environment.clone().into()),
            release: sentry::release_name!(),
            sample_rate: cfg.sentry.sample_rate,
            traces_sample_rate: cfg.sentry.traces_sample_rate,
            ..Default::default()
        }));

        registry()
            .with(fmt::layer().with_filter(max_level))
            .with(sentry_layer())
            .init();

        tracing::info!("Sentry initialized");

        Some(guard)
    } else {
        // Set up tracing.
        tracing_subscriber::fmt().with_max_level(max_level).init();

        None
    };

    run_servers(cfg).await?;

    Ok(())
}
