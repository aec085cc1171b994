//! Conditional block resolution.
//!
//! Every token found by [`scan_with_blocks`] (placeholder or block) takes the
//! next argument slot. A block whose slot holds the skip marker is removed
//! together with that argument; any other block loses only its braces and its
//! argument stays in the list, where the block's own placeholders bind to it
//! again positionally.
//!
//! The placeholders of the edited template are collected in the same pass, so
//! each `?` is classified once against the original text.

use crate::error::{TemplateError, TemplateResult};
use crate::scan::{Token, scan_placeholders, scan_with_blocks};
use crate::value::Value;

/// A template with its conditional blocks resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// The edited template.
    pub query: String,
    /// Placeholder tokens of the edited template, with spans in `query`.
    pub tokens: Vec<Token>,
    /// Dense argument list for the edited template.
    pub args: Vec<Value>,
    /// Number of blocks removed by the skip marker.
    pub blocks_dropped: usize,
}

/// Resolve the `{...}` blocks of `query` against `args`.
///
/// ```
/// use sqltmpl::{args, resolve, skip};
///
/// let r = resolve("id = ?d{ AND del = ?d}", args![1, skip()]).unwrap();
/// assert_eq!(r.query, "id = ?d");
/// assert_eq!(r.args.len(), 1);
///
/// let r = resolve("id = ?d{ AND del = ?d}", args![1, 0]).unwrap();
/// assert_eq!(r.query, "id = ?d AND del = ?d");
/// assert_eq!(r.tokens.len(), 2);
/// assert_eq!(r.args.len(), 2);
/// ```
pub fn resolve(query: &str, args: Vec<Value>) -> TemplateResult<Resolved> {
    if !query.as_bytes().contains(&b'{') {
        return Ok(Resolved {
            query: query.to_string(),
            tokens: scan_placeholders(query),
            args,
            blocks_dropped: 0,
        });
    }

    let scanned = scan_with_blocks(query);
    let mut out = String::with_capacity(query.len());
    let mut tokens = Vec::with_capacity(scanned.len());
    let mut keep = vec![true; args.len()];
    let mut last = 0;
    let mut blocks_dropped = 0;

    for (slot, token) in scanned.iter().enumerate() {
        out.push_str(&query[last..token.start]);
        last = token.end;

        if !token.is_block() {
            tokens.push(token.relocated(out.len()));
            out.push_str(token.text(query));
            continue;
        }

        let Some(arg) = args.get(slot) else {
            return Err(TemplateError::malformed(format!(
                "conditional block at byte {} needs argument #{} but only {} given",
                token.start,
                slot + 1,
                args.len()
            )));
        };
        if arg.is_skip() {
            keep[slot] = false;
            blocks_dropped += 1;
            continue;
        }

        let inner = &query[token.start + 1..token.end - 1];
        let base = out.len();
        tokens.extend(
            scan_placeholders(inner)
                .into_iter()
                .map(|t| t.relocated(base + t.start)),
        );
        out.push_str(inner);
    }
    out.push_str(&query[last..]);

    let args = args
        .into_iter()
        .zip(keep)
        .filter_map(|(arg, keep)| keep.then_some(arg))
        .collect();

    Ok(Resolved {
        query: out,
        tokens,
        args,
        blocks_dropped,
    })
}
