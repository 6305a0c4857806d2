//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtSettings,
    /// Analytics rates and demo-mode switch.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// JWT settings for validating tokens issued by the auth provider.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Shared secret used to verify HS256 signatures.
    pub secret: String,
    /// Lifetime of tokens minted by this service (tests, seeding).
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry_secs: u64,
}

fn default_access_token_expiry() -> u64 {
    900 // 15 minutes
}

/// Per-scope rates used by the analytics summarizer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScopeRates {
    /// Program cost per member per month.
    pub monthly_cost_per_employee: Decimal,
    /// Estimated productivity gain per member per year.
    pub annual_gain_per_employee: Decimal,
    /// Estimated learning hours per member per month.
    pub monthly_learning_hours_per_employee: Decimal,
}

/// Demo-mode jitter settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DemoModeConfig {
    /// Adds bounded random jitter to time-usage and ROI figures.
    #[serde(default)]
    pub enabled: bool,
    /// Fixed seed; when unset the generator is seeded from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Analytics configuration.
///
/// The productivity-gain figures are product estimates, not audited numbers.
/// Two sets were in circulation (600/850 and 2400/3240 per member); the
/// defaults carry the annualised pair until product settles it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Rates for company-scoped admins.
    pub company: ScopeRates,
    /// Rates for mosque-scoped admins.
    pub mosque: ScopeRates,
    /// Rates for platform-wide admins.
    pub global: ScopeRates,
    /// Average learning session length in minutes.
    pub session_minutes_baseline: Decimal,
    /// Demo-mode jitter.
    pub demo_mode: DemoModeConfig,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            company: ScopeRates {
                monthly_cost_per_employee: Decimal::from(120),
                annual_gain_per_employee: Decimal::from(3240),
                monthly_learning_hours_per_employee: Decimal::from(6),
            },
            mosque: ScopeRates {
                monthly_cost_per_employee: Decimal::from(80),
                annual_gain_per_employee: Decimal::from(2400),
                monthly_learning_hours_per_employee: Decimal::from(4),
            },
            global: ScopeRates {
                monthly_cost_per_employee: Decimal::from(100),
                annual_gain_per_employee: Decimal::from(2800),
                monthly_learning_hours_per_employee: Decimal::from(5),
            },
            session_minutes_baseline: Decimal::from(25),
            demo_mode: DemoModeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LISAN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
