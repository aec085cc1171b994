//! # sqltmpl
//!
//! A SQL statement template engine: a template with typed placeholders and
//! optional conditional blocks, plus positional arguments, becomes a finished
//! SQL string ready to hand to a database driver.
//!
//! ## Placeholders
//!
//! | Token | Argument | Output |
//! |---|---|---|
//! | `?`  | any scalar | `5`, `2.5`, `'text'`, `NULL`, `1`/`0` for bools |
//! | `?#` | identifier or list | `` `name` `` / `` `name`, `age` `` |
//! | `?d` | integer or null | `5` / `NULL` |
//! | `?f` | float or null | `2.5` / `NULL` |
//! | `?a` | array | `1, 2` / `` `name` = 'a', `age` = 5 `` |
//!
//! A generic `?` must stand alone between whitespace, braces, or the string edges.
//!
//! ## Conditional blocks
//!
//! `{...}` takes one argument slot. Passing [`skip()`] there removes the whole
//! block; anything else keeps the block's text (without braces) and that
//! argument then binds to the block's own placeholder. Blocks do not nest: the
//! first `}` closes the block.
//!
//! ```
//! use sqltmpl::{args, build, skip};
//!
//! let template = "SELECT ?# FROM t WHERE id = ?d{ AND del = ?d}";
//!
//! let sql = build(template, args![vec!["name", "age"], 1, skip()])?;
//! assert_eq!(sql, "SELECT `name`, `age` FROM t WHERE id = 1");
//!
//! let sql = build(template, args![vec!["name", "age"], 1, 0])?;
//! assert_eq!(sql, "SELECT `name`, `age` FROM t WHERE id = 1 AND del = 0");
//! # Ok::<(), sqltmpl::BuildError>(())
//! ```
//!
//! ## Text quoting
//!
//! By default text is wrapped in single quotes without escaping embedded quotes.
//! Use [`QuoteStyle::DoubleQuotes`] through a [`QueryBuilder`] for untrusted text.

mod build;
mod config;
mod dispatch;
pub mod error;
pub mod format;
pub mod resolve;
pub mod scan;
pub mod value;

#[cfg(feature = "json")]
mod json;

pub mod prelude;

pub use build::{BuildQuery, QueryBuilder, build};
pub use config::{BuildConfig, QuoteStyle};
pub use error::{BuildError, BuildResult, TemplateError, TemplateResult};
pub use format::format_value;
pub use resolve::{Resolved, resolve};
pub use scan::{PlaceholderKind, Token, TokenKind, scan_placeholders, scan_with_blocks};
pub use value::{Entry, Skip, Value, skip};
