//! Query parse tree.
//!
//! Represents parsed queries as an immutable tree of typed nodes,
//! built bottom-up by the parser and serialized to JSON for downstream
//! consumers.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A searchable field in a field clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `TITLE(...)` — document title.
    Title,

    /// `TITLE-ABS(...)` — title and abstract.
    TitleAbs,

    /// `TITLE-ABS-KEY(...)` — title, abstract, and keywords.
    TitleAbsKey,

    /// `AUTHKEY(...)` — author keywords.
    Authkey,
}

impl Field {
    /// Every field, longest token first. Prefix matching must try
    /// `TITLE-ABS-KEY` before `TITLE-ABS` before `TITLE`.
    pub const ALL: [Self; 4] = [Self::TitleAbsKey, Self::TitleAbs, Self::Title, Self::Authkey];

    /// The field token as it appears in query text and in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::TitleAbs => "TITLE-ABS",
            Self::TitleAbsKey => "TITLE-ABS-KEY",
            Self::Authkey => "AUTHKEY",
        }
    }
}

/// A node in the query parse tree.
///
/// The root of a parse is always `And`, and the body of every `Not` is
/// also an `And`: AND separates top-level segments, NOT prefixes a
/// segment, OR joins leaf clauses within a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// Conjunction of clauses, in query order. May be empty when every
    /// segment was dropped.
    And(Vec<Self>),

    /// Disjunction of leaf clauses, in query order. Only produced for
    /// two or more leaves; a lone leaf stays unwrapped.
    Or(Vec<Self>),

    /// Negation of a segment. The body is always an `And`.
    Not(Box<Self>),

    /// A field clause such as `TITLE("wetland")`, with the quotes
    /// stripped from the value.
    Field {
        /// The field being searched.
        field: Field,
        /// The quoted search text.
        value: String,
    },

    /// A source identifier clause such as `SRCID(21100855841)`. The
    /// digits are kept as a string.
    SourceId(String),
}

/// Serializes to the JSON shape consumed downstream: group nodes are
/// single-key objects (`AND`, `OR`, `NOT` mapping to their children),
/// field clauses are `{"field": ..., "value": ...}`, and source ids
/// are `{"SRCID": ...}`. No other keys appear.
impl Serialize for QueryNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::And(clauses) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("AND", clauses)?;
                map.end()
            }
            Self::Or(leaves) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("OR", leaves)?;
                map.end()
            }
            Self::Not(body) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("NOT", body)?;
                map.end()
            }
            Self::Field { field, value } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("field", field.as_str())?;
                map.serialize_entry("value", value)?;
                map.end()
            }
            Self::SourceId(id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("SRCID", id)?;
                map.end()
            }
        }
    }
}
