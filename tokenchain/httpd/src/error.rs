use {std::io, thiserror::Error};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Client(#[from] tokenchain_client::Error),

    #[cfg(feature = "metrics")]
    #[error(transparent)]
    PrometheusBuilder(#[from] metrics_exporter_prometheus::BuildError),
}
