//! Query parser.
//!
//! Splits a query string into a nested AND/NOT/OR tree. The grammar is
//! applied by repeated splitting over three operator tiers rather than
//! by tokenization:
//!
//! ```text
//! query   → and
//! and     → segment (" AND " segment)*
//! segment → "NOT " and | or
//! or      → leaf (" OR " leaf)*
//! leaf    → FIELD("TEXT") | SRCID(DIGITS)
//! ```
//!
//! Parenthesis handling is deliberately shallow: a single enclosing
//! layer is stripped from a segment when it both starts with `(` and
//! ends with `)`, with no balance checking. Leaf matching is anchored
//! at the start of a segment and ignores trailing text.
//!
//! By default parsing is lenient: segments that match nothing are
//! dropped and the remaining clauses still form a tree. Strict mode
//! surfaces those segments as [`ParseError`]s instead.

use crate::{
    ast::{Field, QueryNode},
    error::ParseError,
};

/// Controls how segments that match no clause pattern are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Drop unmatched segments and keep the rest of the tree.
    #[default]
    Lenient,

    /// Report the first unmatched segment as an error.
    Strict,
}

/// Split-based parser over the three operator tiers.
struct Parser {
    /// How unmatched segments are handled.
    mode: ParseMode,
}

impl Parser {
    /// Parses an AND tier: splits the segment on ` AND ` and parses
    /// each part as either a NOT segment or an OR tier.
    ///
    /// Always returns an `And`, even when every part was dropped.
    fn parse_and(&self, segment: &str) -> Result<QueryNode, ParseError> {
        let segment = strip_group(segment);

        let mut clauses = Vec::new();
        for part in segment.split(" AND ") {
            let part = part.trim();
            let stripped = strip_group(part);
            if let Some(body) = stripped.strip_prefix("NOT ") {
                clauses.push(QueryNode::Not(Box::new(self.parse_and(body)?)));
            } else if let Some(clause) = self.parse_or(part)? {
                clauses.push(clause);
            }
        }

        Ok(QueryNode::And(clauses))
    }

    /// Parses an OR tier: splits the segment on ` OR ` and matches
    /// each part as a leaf clause.
    ///
    /// Returns `None` when no part matched, the bare leaf for a single
    /// match, and an `Or` group for two or more.
    fn parse_or(&self, segment: &str) -> Result<Option<QueryNode>, ParseError> {
        let segment = strip_group(segment);

        let mut leaves = Vec::new();
        for part in segment.split(" OR ") {
            let part = part.trim();
            if let Some(leaf) = match_field_clause(part).or_else(|| match_source_id(part)) {
                leaves.push(leaf);
            } else if self.mode == ParseMode::Strict {
                return Err(ParseError::UnmatchedSegment {
                    segment: part.to_string(),
                });
            }
        }

        if leaves.len() > 1 {
            Ok(Some(QueryNode::Or(leaves)))
        } else {
            Ok(leaves.pop())
        }
    }
}

/// Collapses every whitespace run (spaces, tabs, newlines) to a single
/// space and trims the ends.
fn normalize(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips one enclosing layer of parentheses when the trimmed segment
/// both starts with `(` and ends with `)`.
///
/// There is no balance checking: `(TITLE("a")` keeps its parenthesis
/// because it does not end with `)`, while a segment such as
/// `(TITLE("a") AND (TITLE("b"))` would lose its first and last
/// characters regardless of how the interior nests.
fn strip_group(segment: &str) -> &str {
    let segment = segment.trim();
    match segment
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => inner.trim(),
        None => segment,
    }
}

/// Matches a field clause `FIELD("TEXT")` at the start of the segment.
///
/// Fields are tried longest token first so `TITLE` cannot shadow
/// `TITLE-ABS` or `TITLE-ABS-KEY`. TEXT is one or more non-quote
/// characters. Trailing text after the closing `")` is ignored.
fn match_field_clause(segment: &str) -> Option<QueryNode> {
    for field in Field::ALL {
        let Some(rest) = segment.strip_prefix(field.as_str()) else {
            continue;
        };
        let Some(rest) = rest.strip_prefix("(\"") else {
            continue;
        };
        let Some(end) = rest.find('"') else {
            continue;
        };
        if end == 0 || !rest[end + 1..].starts_with(')') {
            continue;
        }
        return Some(QueryNode::Field {
            field,
            value: rest[..end].to_string(),
        });
    }
    None
}

/// Matches a source-id clause `SRCID(DIGITS)` at the start of the
/// segment. DIGITS is one or more decimal digits; trailing text after
/// the closing `)` is ignored.
fn match_source_id(segment: &str) -> Option<QueryNode> {
    let rest = segment.strip_prefix("SRCID(")?;
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 || !rest[end..].starts_with(')') {
        return None;
    }
    Some(QueryNode::SourceId(rest[..end].to_string()))
}

/// Parses a query string leniently, dropping unmatched segments.
///
/// Equivalent to [`parse_with_mode`] with [`ParseMode::Lenient`],
/// which never returns an error; the `Result` is kept so callers
/// handle both modes uniformly.
pub fn parse(query: &str) -> Result<QueryNode, ParseError> {
    parse_with_mode(query, ParseMode::Lenient)
}

/// Parses a query string into its parse tree.
///
/// The root is always [`QueryNode::And`]. In lenient mode an empty or
/// fully-unmatched query yields an empty AND group; in strict mode the
/// first unmatched segment (or an empty query) is an error.
pub fn parse_with_mode(query: &str, mode: ParseMode) -> Result<QueryNode, ParseError> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return match mode {
            ParseMode::Lenient => Ok(QueryNode::And(Vec::new())),
            ParseMode::Strict => Err(ParseError::EmptyQuery),
        };
    }

    Parser { mode }.parse_and(&normalized)
}
