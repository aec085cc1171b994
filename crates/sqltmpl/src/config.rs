#[cfg(feature = "tracing")]
use tracing::Level;

/// How text values are quoted by the value formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Wrap in single quotes and leave embedded `'` untouched.
    ///
    /// A text value containing `'` produces broken (or injectable) SQL in this
    /// mode. It is the default so existing templates render byte-for-byte as
    /// before; switch to [`QuoteStyle::DoubleQuotes`] for untrusted text.
    #[default]
    Verbatim,
    /// Wrap in single quotes and double every embedded `'`.
    DoubleQuotes,
}

impl QuoteStyle {
    /// Parse the config-file spelling (`verbatim`, `double_quotes`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "verbatim" => Some(Self::Verbatim),
            "double_quotes" => Some(Self::DoubleQuotes),
            _ => None,
        }
    }
}

/// Configuration for [`QueryBuilder`](crate::QueryBuilder).
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Quoting applied to text literals.
    pub quote_style: QuoteStyle,
    /// Tracing level for the "statement built" event.
    #[cfg(feature = "tracing")]
    pub log_level: Level,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_log_length: Option<usize>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::Verbatim,
            #[cfg(feature = "tracing")]
            log_level: Level::DEBUG,
            max_log_length: Some(200),
        }
    }
}

impl BuildConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text quoting style.
    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    /// Override the tracing event level.
    #[cfg(feature = "tracing")]
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Set maximum SQL length to log.
    pub fn with_max_log_length(mut self, len: usize) -> Self {
        self.max_log_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_log_length = None;
        self
    }
}
