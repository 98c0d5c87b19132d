//! Runtime Configuration
//!
//! Timings, order constants and the generative AI endpoint. Every field has a
//! default; a host page may override any subset by defining
//! `window.__MARKETPLACE_CONFIG__` before the bundle loads.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::pricing::{Money, OrderTerms};

/// Global the host page may set
pub const CONFIG_GLOBAL: &str = "__MARKETPLACE_CONFIG__";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid __MARKETPLACE_CONFIG__: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timing: TimingConfig,
    pub order: OrderConfig,
    pub genai: GenAiConfig,
    /// `log` level name: error, warn, info, debug, trace
    pub log_level: String,
    /// Lines kept for the diagnostics panel
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            order: OrderConfig::default(),
            genai: GenAiConfig::default(),
            log_level: "info".to_string(),
            log_capacity: console_logger::DEFAULT_CAPACITY,
        }
    }
}

/// Simulated latencies, milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub navigation_ms: u32,
    pub parse_ms: u32,
    pub commitment_ms: u32,
    pub toast_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            navigation_ms: 800,
            parse_ms: 2500,
            commitment_ms: 2000,
            toast_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    pub quantity_sq_ft: u32,
    /// Dollars
    pub logistics_fee: f64,
    /// 50 = 0.5%
    pub escrow_fee_bps: u32,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            quantity_sq_ft: 120,
            logistics_fee: 2450.0,
            escrow_fee_bps: 50,
        }
    }
}

impl OrderConfig {
    pub fn terms(&self) -> OrderTerms {
        OrderTerms {
            quantity_sq_ft: self.quantity_sq_ft,
            logistics_fee: Money::from_major(self.logistics_fee),
            escrow_fee_bps: self.escrow_fee_bps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenAiConfig {
    pub base_url: String,
    pub image_model: String,
    pub text_model: String,
    /// Falls back to the key baked in at build time
    pub api_key: Option<String>,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            text_model: "gemini-2.5-flash".to_string(),
            api_key: build_time_api_key(),
        }
    }
}

/// `GEMINI_API_KEY`, then `API_KEY`, from the build environment
fn build_time_api_key() -> Option<String> {
    option_env!("GEMINI_API_KEY")
        .or(option_env!("API_KEY"))
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read overrides from the host page. A missing global yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let value = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "timing": { "navigation_ms": 0 }, "log_level": "debug" }"#).unwrap();
        assert_eq!(config.timing.navigation_ms, 0);
        assert_eq!(config.timing.parse_ms, 2500);
        assert_eq!(config.order, OrderConfig::default());
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_bad_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_order_terms_from_config() {
        let terms = OrderConfig::default().terms();
        assert_eq!(terms.quantity_sq_ft, 120);
        assert_eq!(terms.logistics_fee, Money::from_cents(245_000));
        assert_eq!(terms.escrow_fee_bps, 50);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(AppConfig::from_json(r#"{ "order": { "quantity_sq_ft": "lots" } }"#).is_err());
    }
}
