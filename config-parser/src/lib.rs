use {
    config::{Config, Environment, File, FileFormat},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Prefix of environment overrides, e.g. `TOKENCHAIN__HTTPD__PORT=9000`.
pub const ENV_PREFIX: &str = "TOKENCHAIN";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

/// Load a TOML config file, then apply environment overrides on top.
///
/// A missing file is not an error: every field the target type defaults
/// stays at its default.
pub fn parse_config<P, D>(path: P) -> Result<D, Error>
where
    P: AsRef<Path>,
    D: DeserializeOwned,
{
    parse_config_with_prefix(path, ENV_PREFIX)
}

/// Like [`parse_config`], with a custom environment prefix.
pub fn parse_config_with_prefix<P, D>(path: P, prefix: &str) -> Result<D, Error>
where
    P: AsRef<Path>,
    D: DeserializeOwned,
{
    let env_override = Environment::with_prefix(prefix)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true);

    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(false))
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}
