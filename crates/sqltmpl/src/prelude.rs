//! Convenient imports for typical `sqltmpl` usage.
//!
//! ```
//! use sqltmpl::prelude::*;
//!
//! let sql = build("SELECT * FROM t WHERE id = ?d", args![5]).unwrap();
//! assert_eq!(sql, "SELECT * FROM t WHERE id = 5");
//! ```

pub use crate::args;
pub use crate::{
    BuildConfig, BuildError, BuildQuery, BuildResult, Entry, QueryBuilder, QuoteStyle, Skip,
    Value, build, skip,
};
