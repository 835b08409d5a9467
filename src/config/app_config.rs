use std::{path::PathBuf, time::Duration};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub audit_streaming_enabled: bool,
    pub audit_streaming_licensed: bool,
    pub silent_mode_enabled: bool,
    pub audit_streaming_http_timeout: Duration,
    pub audit_streaming_workers: usize,
    pub audit_streaming_queue_capacity: usize,
    pub audit_streaming_max_attempts: u32,
    pub audit_streaming_retry_base: Duration,
    pub compliance_controls_manifest: Option<PathBuf>,
    pub gitlab_com_subscriptions: bool,
    pub seat_assignment_lock_timeout: Duration,
    pub log_json: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", 8081),
            postgres_host: env_string("POSTGRES_HOST", "127.0.0.1"),
            postgres_port: env_parse("POSTGRES_PORT", 5432),
            postgres_user: env_string("POSTGRES_USER", "postgres"),
            postgres_password: env_string("POSTGRES_PASSWORD", "admin"),
            postgres_database: env_string("POSTGRES_DATABASE", "audit_stream_service"),
            audit_streaming_enabled: env_bool("AUDIT_STREAMING_ENABLED", true),
            audit_streaming_licensed: env_bool("AUDIT_STREAMING_LICENSED", true),
            silent_mode_enabled: env_bool("SILENT_MODE_ENABLED", false),
            audit_streaming_http_timeout: Duration::from_millis(env_parse(
                "AUDIT_STREAMING_HTTP_TIMEOUT_MS",
                5_000,
            )),
            audit_streaming_workers: env_parse("AUDIT_STREAMING_WORKERS", 4usize).max(1),
            audit_streaming_queue_capacity: env_parse("AUDIT_STREAMING_QUEUE_CAPACITY", 1_024usize)
                .max(1),
            audit_streaming_max_attempts: env_parse("AUDIT_STREAMING_MAX_ATTEMPTS", 3u32).max(1),
            audit_streaming_retry_base: Duration::from_millis(env_parse(
                "AUDIT_STREAMING_RETRY_BASE_MS",
                500,
            )),
            compliance_controls_manifest: std::env::var("COMPLIANCE_CONTROLS_MANIFEST")
                .ok()
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
                .map(PathBuf::from),
            gitlab_com_subscriptions: env_bool("GITLAB_COM_SUBSCRIPTIONS", false),
            seat_assignment_lock_timeout: Duration::from_millis(env_parse(
                "SEAT_ASSIGNMENT_LOCK_TIMEOUT_MS",
                10_000,
            )),
            log_json: env_bool("LOG_JSON", false),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }
}

fn env_string(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|raw| match raw.trim() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}
