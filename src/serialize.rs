//! Extracted values → serialized output record.
//!
//! Top-level assembly: the raw styles mapping goes through the external
//! normalization helper (which flattens key ordering and computes
//! pass-through metadata) with the pseudo-call rewriter as its leaf
//! callback, then each category mapping is encoded into one expression
//! tree. Empty optional categories are dropped from the output entirely.

use crate::ast::Expr;
use crate::encode::encode_map;
use crate::error::EncodeError;
use crate::rewrite::rewrite;
use crate::value::{ExtractedValues, StyleMap, StyleValue};

/// Leaf-rewrite callback handed to the normalization helper.
pub type LeafRewrite = dyn Fn(&str, StyleValue) -> (String, StyleValue);

/// Output of the external normalization helper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedStyles {
    /// Normalized styles mapping, leaves already rewritten.
    pub styles: StyleMap,
    /// Additional pass-through fields computed by the helper. Opaque to
    /// this crate; carried verbatim into the output record.
    pub rest: StyleMap,
}

/// The serialized output record, one expression tree per category.
#[derive(Debug, Clone, PartialEq)]
pub struct SerializedStyles {
    /// Encoded styles. Always present, even when empty.
    pub styles: Expr,
    /// Encoded at-rules, absent when the mapping was empty.
    pub at_rules: Option<Expr>,
    /// Encoded masks, absent when the mapping was empty.
    pub masks: Option<Expr>,
    /// Encoded topics, absent when the mapping was empty.
    pub topics: Option<Expr>,
    /// Encoded child classes, absent when the mapping was empty.
    pub child_classes: Option<Expr>,
    /// Whether the normalized styles mapping had any entries. Computed from
    /// the mapping before encoding, not from the expression tree.
    pub has_styles: bool,
    /// Pass-through fields from the normalization helper, verbatim.
    pub rest: StyleMap,
}

/// Serialize an extracted-values record into expression trees.
///
/// The helper is the external normalization collaborator: it receives the
/// raw styles mapping and the pseudo-call rewriter as a leaf callback, and
/// returns the normalized mapping plus any pass-through fields. This crate
/// treats it as a black box.
///
/// # Example
///
/// ```ignore
/// let output = serialize_styles(&values, |styles, rewrite| NormalizedStyles {
///     styles: styles
///         .iter()
///         .map(|(k, v)| rewrite(k, v.clone()))
///         .collect(),
///     rest: StyleMap::new(),
/// })?;
/// ```
pub fn serialize_styles<H>(
    values: &ExtractedValues,
    helper: H,
) -> Result<SerializedStyles, EncodeError>
where
    H: FnOnce(&StyleMap, &LeafRewrite) -> NormalizedStyles,
{
    let NormalizedStyles { styles, rest } = helper(&values.styles, &rewrite);
    let has_styles = !styles.is_empty();

    Ok(SerializedStyles {
        styles: encode_map(&styles)?,
        at_rules: encode_nonempty(&values.at_rules)?,
        masks: encode_nonempty(&values.masks)?,
        topics: encode_nonempty(&values.topics)?,
        child_classes: encode_nonempty(&values.child_classes)?,
        has_styles,
        rest,
    })
}

/// Encode a category mapping, or drop it entirely when empty.
fn encode_nonempty(map: &StyleMap) -> Result<Option<Expr>, EncodeError> {
    if map.is_empty() {
        Ok(None)
    } else {
        encode_map(map).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Minimal stand-in for the external helper: applies the leaf callback
    /// to each top-level property value and adds no pass-through fields.
    fn plain_helper(styles: &StyleMap, leaf: &LeafRewrite) -> NormalizedStyles {
        NormalizedStyles {
            styles: styles
                .iter()
                .map(|(key, value)| {
                    let StyleValue::Object(props) = value else {
                        return (key.clone(), value.clone());
                    };
                    let rewritten = props
                        .iter()
                        .map(|(k, v)| leaf(k, v.clone()))
                        .collect();
                    (key.clone(), StyleValue::Object(rewritten))
                })
                .collect(),
            rest: StyleMap::new(),
        }
    }

    fn extracted(json: serde_json::Value) -> ExtractedValues {
        ExtractedValues::from_json(&json).unwrap()
    }

    #[test]
    fn test_styles_always_present() {
        let output = serialize_styles(&extracted(json!({})), plain_helper).unwrap();
        assert_eq!(output.styles, Expr::Object(vec![]));
        assert!(!output.has_styles);
    }

    #[test]
    fn test_empty_categories_are_absent() {
        let output = serialize_styles(
            &extracted(json!({
                "styles": { "btn": { "color": "red" } },
                "atRules": {},
                "topics": { "btn": ["color-scheme"] },
            })),
            plain_helper,
        )
        .unwrap();

        assert!(output.has_styles);
        assert!(output.at_rules.is_none());
        assert!(output.masks.is_none());
        assert!(output.child_classes.is_none());
        assert!(output.topics.is_some());
    }

    #[test]
    fn test_rewriter_is_applied_through_helper() {
        let output = serialize_styles(
            &extracted(json!({
                "styles": {
                    "divider": {
                        "height": "styleSheet(hairlineWidth)",
                        "color": "red",
                    }
                }
            })),
            plain_helper,
        )
        .unwrap();

        let Expr::Object(classes) = &output.styles else {
            panic!("Expected Object");
        };
        let Expr::Object(props) = &classes[0].value else {
            panic!("Expected nested Object");
        };
        assert_eq!(props[0].key, "height");
        assert_eq!(props[0].value, Expr::member("RNStyleSheet", "hairlineWidth"));
        assert_eq!(props[1].value, Expr::String("red".into()));
    }

    #[test]
    fn test_malformed_leaf_does_not_abort_siblings() {
        let output = serialize_styles(
            &extracted(json!({
                "styles": {
                    "broken": {
                        "width": "roundToNearestPixel",
                        "height": 10,
                    }
                }
            })),
            plain_helper,
        )
        .unwrap();

        let Expr::Object(classes) = &output.styles else {
            panic!("Expected Object");
        };
        let Expr::Object(props) = &classes[0].value else {
            panic!("Expected nested Object");
        };
        assert_eq!(props[0].value, Expr::ident("undefined"));
        assert_eq!(props[1].value, Expr::Number(10.0));
    }

    #[test]
    fn test_rest_fields_carried_verbatim() {
        let values = extracted(json!({ "styles": { "btn": {} } }));
        let output = serialize_styles(&values, |styles, _leaf| NormalizedStyles {
            styles: styles.clone(),
            rest: [(
                "defaultVariables".to_string(),
                StyleValue::from_json(&json!({ "--spacing": 4 })),
            )]
            .into_iter()
            .collect(),
        })
        .unwrap();

        assert_eq!(output.rest.len(), 1);
        assert!(output.rest.contains_key("defaultVariables"));
    }

    #[test]
    fn test_has_styles_reflects_normalized_mapping() {
        // The helper may drop every style; the flag follows its output.
        let values = extracted(json!({ "styles": { "btn": { "color": "red" } } }));
        let output = serialize_styles(&values, |_styles, _leaf| NormalizedStyles::default());
        assert!(!output.unwrap().has_styles);
    }

    #[test]
    fn test_opaque_value_fails_whole_record() {
        let mut values = extracted(json!({}));
        values
            .at_rules
            .insert("btn".to_string(), StyleValue::Opaque("function"));

        let err = serialize_styles(&values, plain_helper).unwrap_err();
        assert!(matches!(err, EncodeError::Unserializable("function")));
    }
}
