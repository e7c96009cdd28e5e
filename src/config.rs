//! Runtime configuration for the report generator and the HTTP server.
//!
//! Output and asset paths are fixed relative paths. Only the company identity
//! printed on the documents, the theme and the bind address can be overridden
//! from the environment.

use std::env;
use std::path::PathBuf;

use crate::report::theme::Theme;

pub const DEFAULT_REPORTS_DIR: &str = "reports";
pub const DEFAULT_PUBLIC_PREFIX: &str = "/reports";
pub const DEFAULT_LOGO_PATH: &str = "assets/logo.png";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Company identity shown in the header fallback and in the footer.
#[derive(Debug, Clone)]
pub struct CompanyInfo {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub tax_id: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Polar Air HVAC Services".to_string(),
            tagline: "Heating, Ventilation & Air Conditioning".to_string(),
            address: "Rua das Palmeiras, 120 - Sao Paulo/SP".to_string(),
            phone: "(11) 4002-8922".to_string(),
            email: "contact@polarair.example".to_string(),
            tax_id: "12.345.678/0001-90".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub company: CompanyInfo,
    pub theme: Theme,
    /// Directory the generated files are written to.
    pub output_dir: PathBuf,
    /// URL prefix under which `output_dir` is served.
    pub public_prefix: String,
    /// Optional logo. A missing or unreadable file falls back to text.
    pub logo_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            company: CompanyInfo::default(),
            theme: Theme::default(),
            output_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_string(),
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
        }
    }
}

impl ReportConfig {
    /// Builds the configuration from the environment (and `.env`), keeping
    /// the defaults for anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let mut config = Self::default();

        let company = &mut config.company;
        override_from_env("COMPANY_NAME", &mut company.name);
        override_from_env("COMPANY_TAGLINE", &mut company.tagline);
        override_from_env("COMPANY_ADDRESS", &mut company.address);
        override_from_env("COMPANY_PHONE", &mut company.phone);
        override_from_env("COMPANY_EMAIL", &mut company.email);
        override_from_env("COMPANY_TAX_ID", &mut company.tax_id);

        if let Ok(value) = env::var("REPORT_THEME") {
            match value.parse::<Theme>() {
                Ok(theme) => config.theme = theme,
                Err(e) => log::warn!("Ignoring REPORT_THEME: {}", e),
            }
        }

        config
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                log::warn!("PORT '{}' is not a valid port, using {}", value, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        Self { host, port }
    }
}

fn override_from_env(key: &str, target: &mut String) {
    if let Ok(value) = env::var(key) {
        let value = value.trim();
        if !value.is_empty() {
            *target = value.to_string();
        }
    }
}
