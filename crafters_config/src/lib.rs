use std::{collections::HashMap, net::IpAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use crafters_models::{email_address::EmailAddressWithName, Sensitive};
pub use duration::Duration;
use serde::Deserialize;
use url::Url;

mod duration;

pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files.
pub const CONFIG_PATHS_ENV: &str = "CRAFTERS_CONFIG";

/// Variables like `CRAFTERS__EMAIL__RESEND_API_KEY` override `email.resend_api_key`.
const ENV_PREFIX: &str = "CRAFTERS";
const ENV_SEPARATOR: &str = "__";

/// Variable names used by earlier deployments. These take precedence over
/// everything else.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("RESEND_API_KEY", "email.resend_api_key"),
    ("CONTACT_FORM_FROM", "email.from"),
    ("CONTACT_FORM_RECIPIENT", "contact.recipients"),
    ("CAREERS_EMAIL_RECIPIENT", "careers.recipients"),
    ("RECAPTCHA_SECRET_KEY", "recaptcha.secret"),
];

pub fn load() -> anyhow::Result<Config> {
    let env = std::env::vars().collect::<HashMap<_, _>>();
    let paths = env
        .get(CONFIG_PATHS_ENV)
        .map(|paths| std::env::split_paths(paths).collect::<Vec<_>>())
        .unwrap_or_default();
    load_from(&paths, env)
}

pub fn load_from(
    paths: &[impl AsRef<Path>],
    env: HashMap<String, String>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("http.cors_allowed_origins")
            .source(Some(env.clone())),
    );

    let builder = LEGACY_ENV
        .iter()
        .try_fold(builder, |builder, &(var, key)| {
            builder.set_override_option(key, env.get(var).cloned())
        })?;

    builder
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub careers: CareersConfig,
    pub recaptcha: RecaptchaConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub from: EmailAddressWithName,
    pub timeout: Duration,
    pub smtp_url: Option<Sensitive<String>>,
    pub resend_api_key: Option<Sensitive<String>>,
    pub resend_endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Comma separated list of addresses
    pub recipients: String,
}

#[derive(Debug, Deserialize)]
pub struct CareersConfig {
    /// Comma separated list of addresses
    pub recipients: String,
}

#[derive(Debug, Deserialize)]
pub struct RecaptchaConfig {
    pub enable: bool,
    pub secret: Option<Sensitive<String>>,
    pub siteverify_endpoint_override: Option<Url>,
    pub timeout: Duration,
}

impl RecaptchaConfig {
    /// The secret, if verification should actually run.
    pub fn effective_secret(&self) -> Option<&str> {
        self.enable
            .then_some(self.secret.as_deref())
            .flatten()
            .map(String::as_str)
            .filter(|secret| !secret.trim().is_empty())
    }
}
