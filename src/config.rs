//! Runtime configuration.
//!
//! The host page may embed a JSON object in a script element with
//! id="app-config":
//!
//! ```html
//! <script type="application/json" id="app-config">
//!   { "api_base_url": "https://courses.example.org/api", "theme": "dark" }
//! </script>
//! ```
//!
//! Missing keys fall back to [`AppConfig::default`], whose API address comes from
//! the `COURSE_ATLAS_API_URL` environment variable at build time.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Canvas theme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
	/// Light canvas, matching the catalog pages.
	#[default]
	Light,
	/// Dark canvas.
	Dark,
}

impl ThemeName {
	/// Lowercase name, as in the config JSON.
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeName::Light => "light",
			ThemeName::Dark => "dark",
		}
	}
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Base address of the course API, without trailing slash.
	pub api_base_url: String,
	/// Canvas theme for the course map.
	pub theme: ThemeName,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			api_base_url: option_env!("COURSE_ATLAS_API_URL")
				.unwrap_or(DEFAULT_API_URL)
				.to_string(),
			theme: ThemeName::default(),
		}
	}
}

impl AppConfig {
	/// Parse a JSON config object, normalising the base URL.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		let mut config: Self = serde_json::from_str(json)?;
		config.api_base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
		if config.api_base_url.is_empty() {
			config.api_base_url = Self::default().api_base_url;
		}
		Ok(config)
	}

	/// Load from the page's `app-config` element, or defaults when absent or invalid.
	pub fn load() -> Self {
		let Some(json_text) = read_config_element() else {
			return Self::default();
		};

		match Self::from_json(&json_text) {
			Ok(config) => {
				info!("course-atlas: using API at {}", config.api_base_url);
				config
			}
			Err(e) => {
				warn!("course-atlas: failed to parse app config: {}", e);
				Self::default()
			}
		}
	}
}

fn read_config_element() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("app-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_json_trims_trailing_slash() {
		let config =
			AppConfig::from_json(r#"{ "api_base_url": "https://api.example.org/v1/", "theme": "dark" }"#)
				.expect("valid config");
		assert_eq!(config.api_base_url, "https://api.example.org/v1");
		assert_eq!(config.theme, ThemeName::Dark);
	}

	#[test]
	fn test_missing_keys_use_defaults() {
		let config = AppConfig::from_json("{}").expect("empty object");
		assert_eq!(config, AppConfig::default());
		assert_eq!(config.theme, ThemeName::Light);
	}

	#[test]
	fn test_blank_url_falls_back() {
		let config = AppConfig::from_json(r#"{ "api_base_url": "  " }"#).expect("valid config");
		assert_eq!(config.api_base_url, AppConfig::default().api_base_url);
	}

	#[test]
	fn test_unknown_theme_is_rejected() {
		assert!(AppConfig::from_json(r#"{ "theme": "neon" }"#).is_err());
	}
}
