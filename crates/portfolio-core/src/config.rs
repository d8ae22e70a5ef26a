//! Site configuration (`site.toml`)
//!
//! The file is embedded into the bundle at compile time; every field has a
//! default so a partial (or empty) file is valid. Callers fall back to
//! [`SiteConfig::default()`] when parsing fails.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::theme::ThemeMode;
use crate::tracker::DEFAULT_HEADER_OFFSET;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSettings,

    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub theme: ThemeSettings,

    #[serde(default)]
    pub resume: ResumeSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Branding shown in the header and footer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteSettings {
    #[serde(default = "default_brand")]
    pub brand: String,

    #[serde(default = "default_copyright_year")]
    pub copyright_year: u16,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            copyright_year: default_copyright_year(),
        }
    }
}

fn default_brand() -> String {
    "Nafla.dev".to_string()
}

fn default_copyright_year() -> u16 {
    2024
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Lookahead added to the scroll position before matching sections,
    /// roughly the sticky header height
    #[serde(default = "default_header_offset")]
    pub header_offset: f64,

    /// Animate navigation scrolls
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            header_offset: default_header_offset(),
            smooth_scroll: true,
        }
    }
}

fn default_header_offset() -> f64 {
    DEFAULT_HEADER_OFFSET
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeSettings {
    /// Theme applied when the page mounts
    #[serde(default)]
    pub initial: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResumeSettings {
    /// Path of the static resume asset
    #[serde(default = "default_resume_href")]
    pub href: String,

    /// Suggested file name for the download
    #[serde(default = "default_resume_file_name")]
    pub file_name: String,
}

impl Default for ResumeSettings {
    fn default() -> Self {
        Self {
            href: default_resume_href(),
            file_name: default_resume_file_name(),
        }
    }
}

fn default_resume_href() -> String {
    "/resume.pdf".to_string()
}

fn default_resume_file_name() -> String {
    "Fathima_Nafla_Resume.pdf".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// Browser console level: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "debug".to_string()
}

/// Parse and validate a configuration document
pub fn parse_config(content: &str) -> Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(content)?;
    validate(&config)?;
    debug!("Loaded site configuration");
    Ok(config)
}

fn validate(config: &SiteConfig) -> Result<()> {
    let offset = config.navigation.header_offset;
    if !offset.is_finite() || offset < 0.0 {
        return Err(Error::config_invalid(format!(
            "navigation.header_offset must be a non-negative number, got {offset}"
        )));
    }

    if config.resume.href.trim().is_empty() {
        return Err(Error::config_invalid("resume.href must not be empty"));
    }

    if config.resume.file_name.trim().is_empty() {
        return Err(Error::config_invalid("resume.file_name must not be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.navigation.header_offset, 100.0);
        assert!(config.navigation.smooth_scroll);
        assert_eq!(config.theme.initial, ThemeMode::Light);
        assert_eq!(config.resume.href, "/resume.pdf");
        assert_eq!(config.resume.file_name, "Fathima_Nafla_Resume.pdf");
    }

    #[test]
    fn test_partial_document() {
        let config = parse_config(
            r#"
[theme]
initial = "dark"

[navigation]
header_offset = 64.0
"#,
        )
        .unwrap();
        assert_eq!(config.theme.initial, ThemeMode::Dark);
        assert_eq!(config.navigation.header_offset, 64.0);
        assert!(config.navigation.smooth_scroll);
        assert_eq!(config.site.brand, "Nafla.dev");
    }

    #[test]
    fn test_negative_offset_rejected() {
        let err = parse_config("[navigation]\nheader_offset = -1.0\n").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.to_string().contains("header_offset"));
    }

    #[test]
    fn test_empty_resume_href_rejected() {
        let err = parse_config("[resume]\nhref = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("resume.href"));
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let err = parse_config("[theme]\ninitial = \"sepia\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let err = parse_config("this is = = not toml").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_bundled_site_toml_is_valid() {
        let config = parse_config(include_str!("../../../site.toml")).unwrap();
        assert_eq!(config.resume.href, "/resume.pdf");
    }
}
