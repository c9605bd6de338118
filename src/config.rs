// src/config.rs

use crate::domain::MealPriceTable;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "hotel-site.toml";
pub const CONFIG_PATH_ENV: &str = "HOTEL_SITE_CONFIG";
pub const ENV_PREFIX: &str = "HOTEL_SITE_";

#[derive(Debug, Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(#[from] Box<figment::Error>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
    pub max_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            max_workers: 8,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// JSON file of sparse label overrides, keyed by language code.
    pub overrides_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// TTF/OTF used to paint the confirmation instead of the bundled
    /// DejaVu Sans. It needs Arabic glyphs for Arabic confirmations.
    pub font_path: Option<PathBuf>,
    pub jpeg_quality: u8,
    /// When set, every downloaded confirmation is also saved here.
    pub archive_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            jpeg_quality: 92,
            archive_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub meal_prices: MealPriceTable,
    pub labels: LabelsConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    /// Defaults, then the TOML file (if present), then `HOTEL_SITE_*` env vars.
    /// Nested keys use `__`, e.g. `HOTEL_SITE_SERVER__ADDR`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        tracing::info!(path = %path, "loading configuration");

        Self::from_figment(
            Figment::from(Serialized::defaults(AppConfig::default()))
                .merge(Toml::file(path))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(|e| ConfigError(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute_quote, MealSelection, Money, RoomSelection};

    #[test]
    fn defaults_match_the_reference_meal_prices() {
        let cfg = AppConfig::from_figment(Figment::from(Serialized::defaults(AppConfig::default())))
            .unwrap();
        assert_eq!(cfg.meal_prices.breakfast, Money::from_units(120));
        assert_eq!(cfg.meal_prices.lunch, Money::from_units(150));
        assert_eq!(cfg.meal_prices.dinner, Money::from_units(100));
        assert_eq!(cfg.server.addr, "127.0.0.1:3000");
        assert!(cfg.labels.overrides_path.is_none());
    }

    #[test]
    fn toml_overrides_individual_fields() {
        let toml = r#"
            [server]
            max_workers = 2

            [meal_prices]
            lunch = 175.5

            [export]
            jpeg_quality = 70
        "#;
        let cfg = AppConfig::from_figment(
            Figment::from(Serialized::defaults(AppConfig::default())).merge(Toml::string(toml)),
        )
        .unwrap();

        assert_eq!(cfg.server.max_workers, 2);
        assert_eq!(cfg.server.addr, "127.0.0.1:3000");
        assert_eq!(cfg.meal_prices.lunch, Money::from_minor(17_550));
        assert_eq!(cfg.meal_prices.breakfast, Money::from_units(120));
        assert_eq!(cfg.export.jpeg_quality, 70);
    }

    #[test]
    fn meal_prices_are_rounded_to_minor_units() {
        let toml = r#"
            [meal_prices]
            lunch = "10.005"
            dinner = "12.346"
        "#;
        let cfg = AppConfig::from_figment(
            Figment::from(Serialized::defaults(AppConfig::default())).merge(Toml::string(toml)),
        )
        .unwrap();
        let prices = cfg.meal_prices;

        assert_eq!(prices.lunch, Money::from_units(10));
        assert_eq!(prices.dinner, Money::from_minor(1_235));
        assert!(prices.lunch.amount().scale() <= 2);
        assert!(prices.dinner.amount().scale() <= 2);

        // The printed rows add up to the printed subtotal.
        let room = RoomSelection::new("r", "Room", Money::from_units(100), 1).unwrap();
        let all = MealSelection {
            breakfast: true,
            lunch: true,
            dinner: true,
        };
        let quote = compute_quote(&room, &all, &prices).unwrap();
        let printed: Money = [prices.breakfast, prices.lunch, prices.dinner]
            .iter()
            .map(|p| p.to_string().parse::<Money>().unwrap())
            .sum();
        assert_eq!(quote.meal_subtotal, printed);
        assert_eq!(quote.meal_subtotal.to_string(), "142.35");
    }

    #[test]
    fn bad_types_are_reported() {
        let cfg = AppConfig::from_figment(
            Figment::from(Serialized::defaults(AppConfig::default()))
                .merge(Toml::string("[server]\nmax_workers = \"many\"")),
        );
        assert!(cfg.is_err());
    }
}
