use anyhow::Context;
use config::Environment;
use relay_models::email_address::EmailAddress;
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_SMTP_HOST: &str = "mail.proton.me";
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Load the process configuration from environment variables.
pub fn load() -> anyhow::Result<Config> {
    from_source(Environment::default())
}

fn from_source(source: Environment) -> anyhow::Result<Config> {
    let env: Env = config::Config::builder()
        .add_source(source)
        .build()?
        .try_deserialize()
        .context("Failed to read environment")?;
    Config::from_env(env)
}

#[derive(Debug)]
pub struct Config {
    pub http: HttpConfig,
    pub mode: Mode,
    pub smtp: SmtpConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub port: u16,
    /// The only origin granted CORS access.
    pub client_origin: String,
}

/// Runtime environment. Error responses only carry failure details in
/// `Development`; anything else gets the generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub fn is_development(self) -> bool {
        self == Mode::Development
    }
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: SmtpServer,
    /// Authenticated account; also the envelope sender address.
    pub user: EmailAddress,
    pub pass: String,
}

/// Provider selection, resolved from `SMTP_SERVICE` with explicit
/// host/port/TLS overrides as the generic fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpServer {
    Gmail,
    Proton,
    Generic { host: String, port: u16, secure: bool },
}

impl SmtpServer {
    /// Collapse the provider shortcut into one transport setting, keeping
    /// the mail dispatcher provider-agnostic.
    pub fn resolve(&self) -> SmtpTransportSettings {
        match self {
            SmtpServer::Gmail => SmtpTransportSettings {
                host: "smtp.gmail.com".into(),
                port: 465,
                tls: TlsMode::Wrapper,
            },
            SmtpServer::Proton => SmtpTransportSettings {
                host: DEFAULT_SMTP_HOST.into(),
                port: DEFAULT_SMTP_PORT,
                tls: TlsMode::StartTls,
            },
            SmtpServer::Generic { host, port, secure } => SmtpTransportSettings {
                host: host.clone(),
                port: *port,
                tls: if *secure {
                    TlsMode::Wrapper
                } else {
                    TlsMode::StartTls
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpTransportSettings {
    pub host: String,
    pub port: u16,
    pub tls: TlsMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// Implicit TLS from the first byte (smtps).
    Wrapper,
    /// Plain connection upgraded via STARTTLS.
    StartTls,
}

#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Where relayed submissions are delivered.
    pub recipient: EmailAddress,
}

/// Raw environment view. Everything is optional text here; typing and
/// defaulting happen in [`Config::from_env`] so each variable gets a
/// readable error.
#[derive(Debug, Default, Deserialize)]
struct Env {
    port: Option<String>,
    node_env: Option<String>,
    client_origin: Option<String>,
    smtp_service: Option<String>,
    smtp_host: Option<String>,
    smtp_port: Option<String>,
    smtp_secure: Option<String>,
    smtp_user: Option<String>,
    smtp_pass: Option<String>,
    smtp_to: Option<String>,
}

impl Config {
    fn from_env(env: Env) -> anyhow::Result<Self> {
        let port = env
            .port
            .map(|port| port.parse().context("Invalid PORT"))
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        let mode = match env.node_env.as_deref() {
            Some("development") => Mode::Development,
            _ => Mode::Production,
        };

        let server = match env.smtp_service.as_deref() {
            Some("gmail") => SmtpServer::Gmail,
            Some("proton") => SmtpServer::Proton,
            Some(other) => anyhow::bail!("Unknown SMTP_SERVICE {other:?}"),
            None => SmtpServer::Generic {
                host: env.smtp_host.unwrap_or_else(|| DEFAULT_SMTP_HOST.into()),
                port: env
                    .smtp_port
                    .map(|port| port.parse().context("Invalid SMTP_PORT"))
                    .transpose()?
                    .unwrap_or(DEFAULT_SMTP_PORT),
                secure: env.smtp_secure.as_deref() == Some("true"),
            },
        };

        let user = env
            .smtp_user
            .context("SMTP_USER is not set")?
            .parse()
            .context("Invalid SMTP_USER")?;
        let pass = env.smtp_pass.context("SMTP_PASS is not set")?;
        let recipient = env
            .smtp_to
            .context("SMTP_TO is not set")?
            .parse()
            .context("Invalid SMTP_TO")?;

        Ok(Config {
            http: HttpConfig {
                port,
                client_origin: env
                    .client_origin
                    .unwrap_or_else(|| DEFAULT_CLIENT_ORIGIN.into()),
            },
            mode,
            smtp: SmtpConfig { server, user, pass },
            contact: ContactConfig { recipient },
        })
    }
}
