//! Top-level template build.

use crate::config::BuildConfig;
use crate::dispatch::substitute;
use crate::error::{BuildError, BuildResult, TemplateError, TemplateResult};
use crate::resolve::resolve;
use crate::value::{Skip, Value, skip};
#[cfg(feature = "tracing")]
use tracing::Level;

/// Build a SQL statement from `template` and positional `args`, with the default [`BuildConfig`].
///
/// With no arguments the template is returned unchanged and is not scanned.
///
/// # Example
/// ```
/// use sqltmpl::{args, build, skip};
///
/// let sql = build(
///     "SELECT ?# FROM users WHERE id = ?d{ AND deleted = ?d}",
///     args![vec!["name", "email"], 7, skip()],
/// )?;
/// assert_eq!(sql, "SELECT `name`, `email` FROM users WHERE id = 7");
/// # Ok::<(), sqltmpl::BuildError>(())
/// ```
pub fn build(template: &str, args: Vec<Value>) -> BuildResult<String> {
    QueryBuilder::new().build_query(template, args)
}

/// Something that turns a template and arguments into a finished statement.
///
/// Data-access layers take this as the query-construction seam, so a configured
/// [`QueryBuilder`] (or a test double) can be passed around.
pub trait BuildQuery {
    /// Build the final SQL statement.
    fn build_query(&self, template: &str, args: Vec<Value>) -> BuildResult<String>;

    /// The marker that drops a conditional block.
    fn skip(&self) -> Skip {
        skip()
    }
}

/// A template builder with its own [`BuildConfig`].
///
/// Holds no per-call state; one instance can be shared across threads.
///
/// ```
/// use sqltmpl::{args, QueryBuilder, BuildConfig, QuoteStyle, BuildQuery};
///
/// let qb = QueryBuilder::with_config(
///     BuildConfig::new().with_quote_style(QuoteStyle::DoubleQuotes),
/// );
/// let sql = qb.build_query("SELECT * FROM t WHERE name = ?", args!["O'Brien"]).unwrap();
/// assert_eq!(sql, "SELECT * FROM t WHERE name = 'O''Brien'");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    config: BuildConfig,
}

/// Output of a successful render, with counters for the build event.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
struct Rendered {
    sql: String,
    placeholders: usize,
    blocks_dropped: usize,
}

impl QueryBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with an explicit configuration.
    pub fn with_config(config: BuildConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    fn render(&self, template: &str, args: Vec<Value>) -> TemplateResult<Rendered> {
        let resolved = resolve(template, args)?;
        if resolved.tokens.is_empty() {
            return Ok(Rendered {
                sql: resolved.query,
                placeholders: 0,
                blocks_dropped: resolved.blocks_dropped,
            });
        }

        let sql = substitute(
            &resolved.query,
            &resolved.tokens,
            &resolved.args,
            self.config.quote_style,
        )?;
        Ok(Rendered {
            sql,
            placeholders: resolved.tokens.len(),
            blocks_dropped: resolved.blocks_dropped,
        })
    }

    #[cfg(feature = "tracing")]
    fn truncate<'a>(&self, sql: &'a str) -> std::borrow::Cow<'a, str> {
        match self.config.max_log_length {
            Some(max) if sql.len() > max => {
                format!("{}...", truncate_sql_bytes(sql, max)).into()
            }
            _ => sql.into(),
        }
    }

    #[cfg(feature = "tracing")]
    fn emit(&self, arg_count: usize, rendered: &Rendered) {
        // Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = self.truncate(&rendered.sql);
        emit_at_level!(
            self.config.log_level,
            target: "sqltmpl.build",
            arg_count,
            placeholder_count = rendered.placeholders,
            blocks_dropped = rendered.blocks_dropped,
            sql = %sql,
            "statement built"
        );
    }

    #[cfg(feature = "tracing")]
    fn emit_failure(&self, arg_count: usize, template: &str, err: &TemplateError) {
        tracing::warn!(
            target: "sqltmpl.build",
            arg_count,
            template = %self.truncate(template),
            error = %err,
            "statement build failed"
        );
    }

    #[cfg(not(feature = "tracing"))]
    fn emit(&self, _arg_count: usize, _rendered: &Rendered) {}

    #[cfg(not(feature = "tracing"))]
    fn emit_failure(&self, _arg_count: usize, _template: &str, _err: &TemplateError) {}
}

impl BuildQuery for QueryBuilder {
    fn build_query(&self, template: &str, args: Vec<Value>) -> BuildResult<String> {
        let arg_count = args.len();
        if arg_count == 0 {
            let rendered = Rendered {
                sql: template.to_string(),
                placeholders: 0,
                blocks_dropped: 0,
            };
            self.emit(0, &rendered);
            return Ok(rendered.sql);
        }

        match self.render(template, args) {
            Ok(rendered) => {
                self.emit(arg_count, &rendered);
                Ok(rendered.sql)
            }
            Err(err) => {
                self.emit_failure(arg_count, template, &err);
                Err(BuildError::from(err))
            }
        }
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
