use serde::Deserialize;
use sqltmpl::{BuildConfig, QuoteStyle};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "sqltmpl.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub build: BuildSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    pub quote_style: Option<String>,
    pub max_log_length: Option<usize>,
}

impl ConfigFile {
    /// Load the config file.
    ///
    /// With `explicit == None` the default path is tried and a missing file
    /// yields the defaults; an explicit path must exist.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;
        Self::parse(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {e}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Some(style) = &self.build.quote_style {
            parse_quote_style(style)?;
        }
        Ok(())
    }

    /// Merge into a [`BuildConfig`]; `quote_style_override` comes from the command line.
    pub fn build_config(&self, quote_style_override: Option<&str>) -> anyhow::Result<BuildConfig> {
        let mut config = BuildConfig::new();
        if let Some(style) = quote_style_override.or(self.build.quote_style.as_deref()) {
            config = config.with_quote_style(parse_quote_style(style)?);
        }
        if let Some(len) = self.build.max_log_length {
            config = config.with_max_log_length(len);
        }
        Ok(config)
    }
}

fn parse_quote_style(s: &str) -> anyhow::Result<QuoteStyle> {
    QuoteStyle::parse(s).ok_or_else(|| {
        anyhow::anyhow!("invalid quote_style {s:?} (expected \"verbatim\" or \"double_quotes\")")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        let file = ConfigFile::parse("").unwrap();
        let config = file.build_config(None).unwrap();
        assert_eq!(config.quote_style, QuoteStyle::Verbatim);
        assert_eq!(config.max_log_length, Some(200));
    }

    #[test]
    fn build_section_is_applied() {
        let file = ConfigFile::parse(
            r#"
[build]
quote_style = "double_quotes"
max_log_length = 80
"#,
        )
        .unwrap();
        let config = file.build_config(None).unwrap();
        assert_eq!(config.quote_style, QuoteStyle::DoubleQuotes);
        assert_eq!(config.max_log_length, Some(80));
    }

    #[test]
    fn command_line_overrides_file() {
        let file = ConfigFile::parse("[build]\nquote_style = \"double_quotes\"\n").unwrap();
        let config = file.build_config(Some("verbatim")).unwrap();
        assert_eq!(config.quote_style, QuoteStyle::Verbatim);
    }

    #[test]
    fn invalid_quote_style_is_rejected() {
        assert!(ConfigFile::parse("[build]\nquote_style = \"fancy\"\n").is_err());
        let file = ConfigFile::default();
        assert!(file.build_config(Some("fancy")).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigFile::parse("[build]\nescape = true\n").is_err());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let err = ConfigFile::load(Some(Path::new("/nonexistent/sqltmpl.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
