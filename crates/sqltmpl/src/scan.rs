//! Placeholder scanner.
//!
//! A single left-to-right pass over the template bytes producing `(kind, span)`
//! tokens. All markers are ASCII, so every span boundary is a char boundary.
//!
//! Token shapes:
//! - `?#`, `?d`, `?f`, `?a`: typed placeholders, matched wherever they occur
//! - `?`: generic placeholder, only when both neighbours are whitespace, a
//!   brace, or a string edge; any other `?` is literal text
//! - `{...}`: conditional block, from `{` to the next `}` (no nesting);
//!   only recognized by [`scan_with_blocks`]. An unclosed `{` is literal text.

/// Kind of a typed placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// `?`: any scalar, via the value formatter.
    Generic,
    /// `?#`: identifier or identifier list.
    Identifier,
    /// `?d`: integer or NULL.
    Integer,
    /// `?f`: float or NULL.
    Float,
    /// `?a`: array of plain and/or keyed entries.
    Array,
}

impl PlaceholderKind {
    /// Classify exact token text.
    pub fn from_token(text: &str) -> Option<Self> {
        match text {
            "?" => Some(Self::Generic),
            "?#" => Some(Self::Identifier),
            "?d" => Some(Self::Integer),
            "?f" => Some(Self::Float),
            "?a" => Some(Self::Array),
            _ => None,
        }
    }

    /// The token text for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "?",
            Self::Identifier => "?#",
            Self::Integer => "?d",
            Self::Float => "?f",
            Self::Array => "?a",
        }
    }

    fn from_suffix(b: u8) -> Option<Self> {
        match b {
            b'#' => Some(Self::Identifier),
            b'd' => Some(Self::Integer),
            b'f' => Some(Self::Float),
            b'a' => Some(Self::Array),
            _ => None,
        }
    }
}

/// Token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of the five typed placeholders.
    Placeholder(PlaceholderKind),
    /// `{...}` conditional block, braces included in the span.
    Block,
}

/// A scanned token: its class and byte span in the scanned string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// The token text within `src` (the string it was scanned from).
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.start..self.end]
    }

    /// Whether this is a `{...}` conditional block.
    pub fn is_block(&self) -> bool {
        matches!(self.kind, TokenKind::Block)
    }

    /// The same token moved to begin at `start`.
    pub(crate) fn relocated(self, start: usize) -> Token {
        Token {
            start,
            end: start + (self.end - self.start),
            ..self
        }
    }
}

/// Scan for typed placeholders only.
///
/// ```
/// use sqltmpl::scan::{scan_placeholders, PlaceholderKind, TokenKind};
///
/// let tokens = scan_placeholders("SELECT ?# FROM t WHERE id = ?d");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Placeholder(PlaceholderKind::Identifier));
/// assert_eq!(tokens[1].start, 28);
/// ```
pub fn scan_placeholders(src: &str) -> Vec<Token> {
    scan(src, false)
}

/// Scan for typed placeholders and conditional blocks, in appearance order.
///
/// Placeholders inside a block are part of the block token and are not
/// reported separately.
pub fn scan_with_blocks(src: &str) -> Vec<Token> {
    scan(src, true)
}

fn scan(src: &str, blocks: bool) -> Vec<Token> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'?' => {
                if let Some(kind) = bytes.get(i + 1).copied().and_then(PlaceholderKind::from_suffix) {
                    tokens.push(Token {
                        kind: TokenKind::Placeholder(kind),
                        start: i,
                        end: i + 2,
                    });
                    i += 2;
                    continue;
                }
                if is_standalone(bytes, i) {
                    tokens.push(Token {
                        kind: TokenKind::Placeholder(PlaceholderKind::Generic),
                        start: i,
                        end: i + 1,
                    });
                }
                i += 1;
            }
            b'{' if blocks => match bytes[i + 1..].iter().position(|&b| b == b'}') {
                Some(offset) => {
                    let end = i + 1 + offset + 1;
                    tokens.push(Token {
                        kind: TokenKind::Block,
                        start: i,
                        end,
                    });
                    i = end;
                }
                None => i += 1,
            },
            _ => i += 1,
        }
    }

    tokens
}

/// A `?` at `i` bounded by ASCII whitespace, a brace, or the string edges.
///
/// Braces are boundaries: a `?` next to a block's brace classifies the same as
/// it does against the edge of that block's inner text.
fn is_standalone(bytes: &[u8], i: usize) -> bool {
    let boundary = |b: &u8| b.is_ascii_whitespace() || matches!(b, b'{' | b'}');
    let before = i == 0 || boundary(&bytes[i - 1]);
    let after = bytes.get(i + 1).is_none_or(boundary);
    before && after
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn p(kind: PlaceholderKind) -> TokenKind {
        TokenKind::Placeholder(kind)
    }

    #[test]
    fn finds_all_typed_kinds_in_order() {
        let src = "SELECT ?# FROM t WHERE a = ? AND b = ?d AND c = ?f AND d IN (?a)";
        let tokens = scan_placeholders(src);
        assert_eq!(
            kinds(&tokens),
            vec![
                p(PlaceholderKind::Identifier),
                p(PlaceholderKind::Generic),
                p(PlaceholderKind::Integer),
                p(PlaceholderKind::Float),
                p(PlaceholderKind::Array),
            ]
        );
        for t in &tokens {
            assert!(t.text(src).starts_with('?'));
        }
    }

    #[test]
    fn repeated_tokens_get_distinct_positions() {
        let src = "a = ?d AND b = ?d";
        let tokens = scan_placeholders(src);
        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].start, tokens[0].end), (4, 6));
        assert_eq!((tokens[1].start, tokens[1].end), (15, 17));
    }

    #[test]
    fn generic_requires_whitespace_or_edges() {
        assert_eq!(scan_placeholders("?").len(), 1);
        assert_eq!(scan_placeholders("x = ?").len(), 1);
        assert_eq!(scan_placeholders("? = x").len(), 1);
        assert_eq!(scan_placeholders("x =\t?\n").len(), 1);
        assert!(scan_placeholders("x = (?)").is_empty());
        assert!(scan_placeholders("'what?'").is_empty());
        assert!(scan_placeholders("x=?").is_empty());
    }

    #[test]
    fn braces_bound_a_generic_placeholder() {
        let src = "a = ?{ AND b = ?}";
        let tokens = scan_with_blocks(src);
        assert_eq!(kinds(&tokens), vec![p(PlaceholderKind::Generic), TokenKind::Block]);
        assert_eq!(tokens[0].start, 4);

        let src = "{ AND b = ?d}? = c";
        let tokens = scan_with_blocks(src);
        assert_eq!(kinds(&tokens), vec![TokenKind::Block, p(PlaceholderKind::Generic)]);
        assert_eq!(tokens[1].text(src), "?");

        assert_eq!(scan_placeholders("x = {?}").len(), 1);
        assert!(scan_placeholders("x = {?)").is_empty());
    }

    #[test]
    fn typed_suffix_wins_over_generic() {
        let tokens = scan_placeholders("??d");
        assert_eq!(kinds(&tokens), vec![p(PlaceholderKind::Integer)]);
        assert_eq!(tokens[0].start, 1);
    }

    #[test]
    fn placeholder_scan_ignores_braces() {
        let tokens = scan_placeholders("a = ?d{ AND b = ?d}");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn block_is_one_token_and_hides_inner_placeholders() {
        let src = "SELECT ?# FROM t WHERE id = ?d{ AND del = ?d}";
        let tokens = scan_with_blocks(src);
        assert_eq!(
            kinds(&tokens),
            vec![
                p(PlaceholderKind::Identifier),
                p(PlaceholderKind::Integer),
                TokenKind::Block
            ]
        );
        assert_eq!(tokens[2].text(src), "{ AND del = ?d}");
    }

    #[test]
    fn first_closing_brace_ends_block() {
        let src = "x{a{b}c}y";
        let tokens = scan_with_blocks(src);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text(src), "{a{b}");
    }

    #[test]
    fn unclosed_brace_is_literal() {
        let tokens = scan_with_blocks("a = ?d { b = ?d");
        assert_eq!(
            kinds(&tokens),
            vec![p(PlaceholderKind::Integer), p(PlaceholderKind::Integer)]
        );
    }

    #[test]
    fn stray_closing_brace_is_literal() {
        let src = "a = ?d } b{ c = ?d}";
        let tokens = scan_with_blocks(src);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text(src), "?d");
        assert_eq!(tokens[1].text(src), "{ c = ?d}");
    }

    #[test]
    fn non_ascii_text_is_skipped_safely() {
        let src = "SELECT 'é?' , ? FROM ünïcode{ ?d }";
        let tokens = scan_with_blocks(src);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text(src), "?");
        assert_eq!(tokens[1].text(src), "{ ?d }");
    }

    #[test]
    fn kind_round_trips_through_token_text() {
        for kind in [
            PlaceholderKind::Generic,
            PlaceholderKind::Identifier,
            PlaceholderKind::Integer,
            PlaceholderKind::Float,
            PlaceholderKind::Array,
        ] {
            assert_eq!(PlaceholderKind::from_token(kind.as_str()), Some(kind));
        }
        assert_eq!(PlaceholderKind::from_token("??d"), None);
    }
}
