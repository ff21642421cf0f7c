use std::env;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Anything other than `pretty` falls back to JSON.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("pretty") {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        }
    }
}

/// Start-up settings, read once from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub addr: String,
    pub log_format: LogFormat,
    /// Run under the Lambda runtime instead of a local listener.
    pub lambda: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let addr = lookup("MINDBALANCE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let log_format = lookup("MINDBALANCE_LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();
        let lambda = lookup("AWS_LAMBDA_RUNTIME_API").is_some();

        Self {
            addr,
            log_format,
            lambda,
        }
    }
}
