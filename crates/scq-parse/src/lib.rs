//! Parsing for Scopus-style bibliographic boolean queries.
//!
//! Queries combine field clauses and source-id clauses with boolean
//! operators:
//!
//! - **Field clauses**: `TITLE("wetland")`, `TITLE-ABS("...")`,
//!   `TITLE-ABS-KEY("...")`, `AUTHKEY("...")`
//! - **Source ids**: `SRCID(21100855841)`
//! - **Operators**: `AND`, `OR`, and the unary prefix `NOT`
//! - **Grouping**: one layer of parentheses around a segment
//!
//! Parsing produces a [`QueryNode`] tree whose root is always an AND
//! group, and which serializes to a stable JSON shape via serde.
//!
//! # Example
//!
//! ```
//! use scq_parse::{QueryNode, parse};
//!
//! let tree = parse(r#"TITLE("wetland") AND SRCID(12345)"#).unwrap();
//! assert!(matches!(tree, QueryNode::And(ref clauses) if clauses.len() == 2));
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod parser;

pub use ast::{Field, QueryNode};
pub use error::ParseError;
pub use parser::{ParseMode, parse, parse_with_mode};
