use {
    serde::{Deserialize, Serialize},
    tokenchain_client::DEFAULT_ENDPOINT,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub httpd: HttpdConfig,
    pub upstream: UpstreamConfig,
    pub admin: AdminConfig,
    pub metrics: MetricsConfig,
    pub sentry: SentryConfig,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            httpd: HttpdConfig::default(),
            upstream: UpstreamConfig::default(),
            admin: AdminConfig::default(),
            metrics: MetricsConfig::default(),
            sentry: SentryConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HttpdConfig {
    pub ip: String,
    pub port: u16,
    /// Comma-separated list of allowed origins. Any origin when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Default for HttpdConfig {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".to_string(),
            port: 8080,
            cors_allowed_origin: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UpstreamConfig {
    pub endpoint: String,
    /// Per-request timeout. Requests wait as long as the connection allows
    /// when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AdminConfig {
    /// Reject routing updates whose stakers and treasury bps don't add up to
    /// 10000, instead of leaving that check to upstream.
    pub enforce_bps_sum: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub ip: String,
    pub port: u16,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ip: "127.0.0.1".to_string(),
            port: 8081,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SentryConfig {
    pub enabled: bool,
    pub dsn: String,
    pub environment: String,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
}
