use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub mail: MailConfig,
    pub recipients: RecipientConfig,
    pub uploads: UploadConfig,
    pub content: ContentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            mail: MailConfig::from_env()?,
            recipients: RecipientConfig::from_env(),
            uploads: UploadConfig::from_env()?,
            content: ContentConfig::from_env(),
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Outbound SMTP transport settings.
///
/// Defaults match the demo deployment (implicit TLS on port 465); every
/// field must be overridden for production use.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub tls: TlsMode,
    pub timeout_secs: u64,
}

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// Implicit TLS from the first byte (SMTPS).
    Tls,
    /// Plaintext connection upgraded via STARTTLS.
    StartTls,
    /// No transport security. Local relays only.
    None,
}

impl TlsMode {
    fn from_str(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tls" => Ok(Self::Tls),
            "starttls" => Ok(Self::StartTls),
            "none" => Ok(Self::None),
            other => Err(ConfigError::InvalidTlsMode {
                value: other.to_string(),
            }),
        }
    }
}

impl MailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
        let port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "465".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidSmtpPort)?;
        let username = env::var("SMTP_USER").ok().filter(|v| !v.is_empty());
        let password = env::var("SMTP_PASS").ok().filter(|v| !v.is_empty());
        let from =
            env::var("SMTP_FROM").unwrap_or_else(|_| "noreply@meridian-infra.nl".to_string());
        let tls = TlsMode::from_str(&env::var("SMTP_TLS").unwrap_or_else(|_| "tls".to_string()))?;
        let timeout_secs = env::var("SMTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        Ok(Self {
            host,
            port,
            username,
            password,
            from,
            tls,
            timeout_secs,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Fixed business addresses that receive submission notifications.
#[derive(Debug, Clone)]
pub struct RecipientConfig {
    pub contact_inbox: String,
    pub applications_inbox: String,
}

impl RecipientConfig {
    fn from_env() -> Self {
        let contact_inbox =
            env::var("CONTACT_EMAIL").unwrap_or_else(|_| "info@meridian-infra.nl".to_string());
        let applications_inbox = env::var("JOB_APPLICATION_EMAIL")
            .unwrap_or_else(|_| "careers@meridian-infra.nl".to_string());

        Self {
            contact_inbox,
            applications_inbox,
        }
    }
}

/// Bounds on uploaded resume files.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_resume_size_mb: u64,
}

impl UploadConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let max_resume_size_mb = env::var("MAX_RESUME_SIZE_MB")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidResumeLimit)?;

        if max_resume_size_mb == 0 {
            return Err(ConfigError::InvalidResumeLimit);
        }

        Ok(Self { max_resume_size_mb })
    }

    pub fn max_resume_bytes(&self) -> usize {
        (self.max_resume_size_mb as usize) * 1024 * 1024
    }
}

/// Headless content store settings. `base_url` unset means the built-in
/// fallback documents are the only content source.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub base_url: Option<String>,
}

impl ContentConfig {
    fn from_env() -> Self {
        let base_url = env::var("CONTENT_API_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Self { base_url }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSmtpPort,
    InvalidTlsMode { value: String },
    InvalidTimeout,
    InvalidResumeLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSmtpPort => write!(f, "SMTP_PORT must be a valid u16"),
            ConfigError::InvalidTlsMode { value } => {
                write!(f, "SMTP_TLS must be 'tls', 'starttls', or 'none', got '{value}'")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "SMTP_TIMEOUT_SECS must be a whole number of seconds")
            }
            ConfigError::InvalidResumeLimit => {
                write!(f, "MAX_RESUME_SIZE_MB must be a positive whole number")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "SMTP_HOST",
            "SMTP_PORT",
            "SMTP_USER",
            "SMTP_PASS",
            "SMTP_FROM",
            "SMTP_TLS",
            "SMTP_TIMEOUT_SECS",
            "CONTACT_EMAIL",
            "JOB_APPLICATION_EMAIL",
            "MAX_RESUME_SIZE_MB",
            "CONTENT_API_URL",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.mail.host, "smtp.gmail.com");
        assert_eq!(config.mail.port, 465);
        assert_eq!(config.mail.tls, TlsMode::Tls);
        assert_eq!(config.recipients.contact_inbox, "info@meridian-infra.nl");
        assert_eq!(
            config.recipients.applications_inbox,
            "careers@meridian-infra.nl"
        );
        assert_eq!(config.uploads.max_resume_bytes(), 5 * 1024 * 1024);
        assert!(config.content.base_url.is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn overrides_mail_and_recipients() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SMTP_HOST", "mail.example.org");
        env::set_var("SMTP_PORT", "587");
        env::set_var("SMTP_TLS", "starttls");
        env::set_var("CONTACT_EMAIL", "front-desk@example.org");
        env::set_var("MAX_RESUME_SIZE_MB", "2");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.mail.host, "mail.example.org");
        assert_eq!(config.mail.port, 587);
        assert_eq!(config.mail.tls, TlsMode::StartTls);
        assert_eq!(config.recipients.contact_inbox, "front-desk@example.org");
        assert_eq!(config.uploads.max_resume_bytes(), 2 * 1024 * 1024);
        reset_env();
    }

    #[test]
    fn rejects_unknown_tls_mode() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SMTP_TLS", "opportunistic");
        let err = AppConfig::load().expect_err("tls mode rejected");
        assert!(err.to_string().contains("SMTP_TLS"));
        reset_env();
    }

    #[test]
    fn rejects_zero_resume_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MAX_RESUME_SIZE_MB", "0");
        assert!(AppConfig::load().is_err());
        reset_env();
    }

    #[test]
    fn content_url_is_normalized() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CONTENT_API_URL", "https://cms.example.org/v1/");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.content.base_url.as_deref(),
            Some("https://cms.example.org/v1")
        );
        reset_env();
    }
}
