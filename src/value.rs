//! Extracted style value tree and the JSON input boundary.
//!
//! The extraction pipeline hands this crate plain data: null, booleans,
//! numbers, strings, ordered sequences and string-keyed mappings. Everything
//! entering the crate is converted once, at this boundary, into the
//! [`StyleValue`] discriminated union; downstream code matches on tags
//! instead of re-probing shapes.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::ast::Expr;
use crate::error::EncodeError;

/// Insertion-ordered string-keyed mapping of style values.
pub type StyleMap = IndexMap<String, StyleValue>;

/// One node of the extracted style value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Absent sentinel, distinct from [`StyleValue::Null`]. Mapping entries
    /// holding this value are elided from encoded object literals; a bare
    /// `Undefined` encodes to an explicit undefined literal.
    Undefined,
    /// `null`
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(f64),
    /// String scalar.
    String(String),
    /// Order-preserving sequence.
    Array(Vec<StyleValue>),
    /// String-keyed mapping, insertion-ordered.
    Object(StyleMap),
    /// An already-built expression node (produced by the value rewriter).
    /// The encoder passes these through unchanged.
    Expr(Expr),
    /// A value kind with no literal representation, e.g. a function
    /// reference the extraction pipeline failed to strip. Carries a short
    /// kind name for the error message; encoding it is fatal.
    Opaque(&'static str),
}

impl StyleValue {
    /// Convert JSON to a style value.
    ///
    /// Total over JSON: null, booleans, numbers, strings, arrays and
    /// objects all have a direct counterpart. `Undefined`, `Expr` and
    /// `Opaque` never arise from JSON; they are constructed in-process.
    pub fn from_json(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(*b),
            // arbitrary_precision is not enabled, so as_f64 cannot fail
            JsonValue::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Self::String(s.clone()),
            JsonValue::Array(arr) => Self::Array(arr.iter().map(Self::from_json).collect()),
            JsonValue::Object(obj) => Self::Object(
                obj.iter()
                    .map(|(k, v)| (k.clone(), Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Short kind name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Expr(_) => "expression",
            Self::Opaque(kind) => kind,
        }
    }

    /// True for the absent sentinel.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl From<JsonValue> for StyleValue {
    fn from(json: JsonValue) -> Self {
        Self::from_json(&json)
    }
}

/// The five category mappings produced by the extraction pipeline.
///
/// Each category is a string-keyed mapping of [`StyleValue`] trees. The
/// pipeline guarantees well-formed plain data; this crate consumes the
/// record as-is and never mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedValues {
    /// Per-class style declarations.
    pub styles: StyleMap,
    /// At-rule conditions keyed by class.
    pub at_rules: StyleMap,
    /// Interaction mask bits keyed by class.
    pub masks: StyleMap,
    /// Subscription topics keyed by class.
    pub topics: StyleMap,
    /// Styles applied to child elements, keyed by parent class.
    pub child_classes: StyleMap,
}

impl ExtractedValues {
    /// Read an extracted-values record from JSON.
    ///
    /// Expects an object with optional `styles`, `atRules`, `masks`,
    /// `topics` and `childClasses` fields; missing fields default to empty
    /// mappings. Anything other than an object at the top level is a
    /// boundary error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let values = ExtractedValues::from_json(&serde_json::json!({
    ///     "styles": { "btn": { "color": "red" } },
    ///     "atRules": {},
    /// }))?;
    /// ```
    pub fn from_json(json: &JsonValue) -> Result<Self, EncodeError> {
        let obj = json
            .as_object()
            .ok_or(EncodeError::NotObject(json_type_name(json)))?;

        Ok(Self {
            styles: category(obj.get("styles")),
            at_rules: category(obj.get("atRules")),
            masks: category(obj.get("masks")),
            topics: category(obj.get("topics")),
            child_classes: category(obj.get("childClasses")),
        })
    }
}

/// Read one category field as a mapping; missing or non-object is empty.
fn category(field: Option<&JsonValue>) -> StyleMap {
    match field.and_then(JsonValue::as_object) {
        Some(obj) => obj
            .iter()
            .map(|(k, v)| (k.clone(), StyleValue::from_json(v)))
            .collect(),
        None => StyleMap::new(),
    }
}

fn json_type_name(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
