//! Recursive projection of a generic parsed-config tree into
//! field-addressable records.
//!
//! Only configuration goes through this transform. API payloads stay plain
//! `serde_json::Value` maps, accessed by key at display time; config is
//! schema-like and benefits from named-field access.

use std::collections::BTreeMap;

/// A leaf value, carried through the transform unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Datetime(String),
}

/// A node of the transformed tree: mappings become records, arrays become
/// sequences, everything else stays a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Record(BTreeMap<String, Node>),
    Sequence(Vec<Node>),
    Scalar(Scalar),
}

impl Node {
    /// Field access on a record. `None` for non-records and absent fields.
    pub fn get(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Record(fields) => fields.get(name),
            _ => None,
        }
    }

    /// The string value of a scalar node, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The elements of a sequence node, if it is one.
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

/// Recursively convert a parsed TOML tree into a [`Node`].
///
/// Total over {table, array, scalar}: tables become records with one field
/// per key, arrays become sequences with element order preserved, scalars
/// keep their value and type. Pure; terminates on any acyclic input (and
/// parsed config trees are always acyclic).
pub fn transform(value: toml::Value) -> Node {
    match value {
        toml::Value::Table(table) => {
            let fields = table
                .into_iter()
                .map(|(key, val)| (key, transform(val)))
                .collect();
            Node::Record(fields)
        }
        toml::Value::Array(items) => {
            Node::Sequence(items.into_iter().map(transform).collect())
        }
        toml::Value::String(s) => Node::Scalar(Scalar::String(s)),
        toml::Value::Integer(i) => Node::Scalar(Scalar::Integer(i)),
        toml::Value::Float(f) => Node::Scalar(Scalar::Float(f)),
        toml::Value::Boolean(b) => Node::Scalar(Scalar::Boolean(b)),
        toml::Value::Datetime(dt) => Node::Scalar(Scalar::Datetime(dt.to_string())),
    }
}
