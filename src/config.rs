//! Site configuration.
//!
//! Handles loading and validating `builder.toml`, which sits next to the
//! document file and carries everything that belongs to the site rather
//! than to any one component: the site name (used for the exported page
//! title and as the default deploy project name) and the theme colors
//! injected into the exported stylesheet as CSS custom properties.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! name = "My Website"       # Site name → <title> and deploy project name
//!
//! [theme]
//! background = "#111827"    # Page background
//! surface = "#1f2937"       # Card/container surfaces
//! text = "#e5e7eb"          # Body text
//! muted = "#9ca3af"         # Secondary text (footer links, copyright)
//! accent = "#6366f1"        # Buttons, link hover
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the accent color
//! [theme]
//! accent = "#f59e0b"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `builder.toml`.
///
/// All fields have defaults. User config files need only specify the
/// values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site name: exported page title and default deploy project name.
    pub name: String,
    /// Theme colors emitted as CSS custom properties.
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "My Website".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// A default config with a specific site name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation("name must not be empty".into()));
        }
        for (key, value) in [
            ("theme.background", &self.theme.background),
            ("theme.surface", &self.theme.surface),
            ("theme.text", &self.theme.text),
            ("theme.muted", &self.theme.muted),
            ("theme.accent", &self.theme.accent),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Theme colors for the exported stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub background: String,
    pub surface: String,
    pub text: String,
    pub muted: String,
    pub accent: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#111827".to_string(),
            surface: "#1f2937".to_string(),
            text: "#e5e7eb".to_string(),
            muted: "#9ca3af".to_string(),
            accent: "#6366f1".to_string(),
        }
    }
}

/// Load `builder.toml` from `path`, falling back to defaults when absent.
pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// CSS custom-properties block generated from the theme.
///
/// Prepended to the static stylesheet so exported class rules can refer to
/// `var(--color-*)` without the stylesheet itself being per-document.
pub fn theme_css(theme: &ThemeConfig) -> String {
    format!(
        ":root {{\n  \
           --color-background: {};\n  \
           --color-surface: {};\n  \
           --color-text: {};\n  \
           --color-muted: {};\n  \
           --color-accent: {};\n\
         }}",
        theme.background, theme.surface, theme.text, theme.muted, theme.accent
    )
}

/// A stock `builder.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r##"# Blocksmith site configuration.
# All options are optional - the values below are the defaults.

# Site name: used for the exported <title> and as the default
# project name when publishing.
name = "{name}"

# Theme colors, emitted into styles.css as CSS custom properties.
[theme]
background = "{background}"  # Page background
surface = "{surface}"     # Card/container surfaces
text = "{text}"        # Body text
muted = "{muted}"       # Secondary text (footer links, copyright)
accent = "{accent}"      # Buttons, link hover
"##,
        name = defaults.name,
        background = defaults.theme.background,
        surface = defaults.theme.surface,
        text = defaults.theme.text,
        muted = defaults.theme.muted,
        accent = defaults.theme.accent,
    )
}
