//! Style value → expression literal encoding.
//!
//! Recursively walks a [`StyleValue`] tree and produces the equivalent
//! literal expression: mappings become object literals, sequences become
//! array literals, scalars become literal nodes. Values that are already
//! expression nodes (produced by the rewriter) pass through unchanged, so
//! encoding is idempotent over its own output.

use crate::ast::{Expr, Property};
use crate::error::EncodeError;
use crate::value::{StyleMap, StyleValue};

/// Encode a style value as an expression literal.
///
/// Pure and total over the data model, with one structural failure: a value
/// kind that has no literal representation aborts the whole call. There is
/// no per-leaf degradation here: a partial literal cannot be safely
/// embedded in generated code.
pub fn encode(value: &StyleValue) -> Result<Expr, EncodeError> {
    match value {
        StyleValue::Expr(expr) => Ok(expr.clone()),
        StyleValue::Null => Ok(Expr::Null),
        StyleValue::Bool(b) => Ok(Expr::Bool(*b)),
        StyleValue::Number(n) => Ok(Expr::Number(*n)),
        StyleValue::String(s) => Ok(Expr::String(s.clone())),
        StyleValue::Undefined => Ok(Expr::Undefined),
        StyleValue::Array(items) => {
            let elements: Result<Vec<Expr>, EncodeError> = items.iter().map(encode).collect();
            Ok(Expr::Array(elements?))
        }
        StyleValue::Object(map) => encode_map(map),
        StyleValue::Opaque(kind) => Err(EncodeError::Unserializable(kind)),
    }
}

/// Encode a mapping as an object literal.
///
/// Entries holding the absent sentinel are elided entirely; the property
/// does not appear in the literal. Note the asymmetry with a bare
/// [`StyleValue::Undefined`], which [`encode`] keeps as an explicit
/// undefined literal. Key text and insertion order are preserved.
pub fn encode_map(map: &StyleMap) -> Result<Expr, EncodeError> {
    let props: Result<Vec<Property>, EncodeError> = map
        .iter()
        .filter(|(_, value)| !value.is_undefined())
        .map(|(key, value)| {
            Ok(Property {
                key: key.clone(),
                value: encode(value)?,
            })
        })
        .collect();
    Ok(Expr::Object(props?))
}
