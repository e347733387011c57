//! JavaScript expression nodes and construction helpers.
//!
//! These nodes are structural only: this crate builds them, a downstream
//! code generator renders them to source text. Escaping, formatting and
//! emission order are the renderer's concern.

/// One property of an object-literal expression.
///
/// The key is always emitted as a string-literal key, preserved verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property key, verbatim.
    pub key: String,
    /// Property value expression.
    pub value: Expr,
}

/// A JavaScript expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Numeric literal. Exact value preserved, including negative and
    /// floating-point.
    Number(f64),
    /// String literal, raw text (no escaping decisions made here).
    String(String),
    /// `undefined`, distinct from [`Expr::Null`].
    Undefined,
    /// Bare identifier reference, e.g. `RNPlatformColor`.
    Ident(String),
    /// Array literal, elements in order.
    Array(Vec<Expr>),
    /// Object literal, properties in insertion order.
    Object(Vec<Property>),
    /// Call expression: `callee(args...)`.
    Call {
        /// Callee reference (identifier or member access).
        callee: Box<Expr>,
        /// Ordered argument list.
        args: Vec<Expr>,
    },
    /// Member access: `object.property`.
    Member {
        /// Object reference.
        object: Box<Expr>,
        /// Property name.
        property: String,
    },
}

impl Expr {
    /// Identifier reference.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// String literal.
    pub fn string(text: impl Into<String>) -> Self {
        Self::String(text.into())
    }

    /// Numeric literal.
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Member access on an identifier: `object.property`.
    pub fn member(object: impl Into<String>, property: impl Into<String>) -> Self {
        Self::Member {
            object: Box::new(Self::Ident(object.into())),
            property: property.into(),
        }
    }

    /// Call expression.
    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            args,
        }
    }

    /// Object literal from (key, value) entries.
    pub fn object<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Expr)>,
        K: Into<String>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| Property {
                    key: key.into(),
                    value,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_helper() {
        let expr = Expr::member("RNStyleSheet", "hairlineWidth");
        let Expr::Member { object, property } = expr else {
            panic!("Expected Member");
        };
        assert_eq!(*object, Expr::Ident("RNStyleSheet".into()));
        assert_eq!(property, "hairlineWidth");
    }

    #[test]
    fn test_call_helper() {
        let expr = Expr::call(Expr::ident("RNPlatformColor"), vec![Expr::string("red")]);
        let Expr::Call { callee, args } = expr else {
            panic!("Expected Call");
        };
        assert_eq!(*callee, Expr::Ident("RNPlatformColor".into()));
        assert_eq!(args, vec![Expr::String("red".into())]);
    }

    #[test]
    fn test_object_preserves_entry_order() {
        let expr = Expr::object([("b", Expr::number(1.0)), ("a", Expr::number(2.0))]);
        let Expr::Object(props) = expr else {
            panic!("Expected Object");
        };
        assert_eq!(props[0].key, "b");
        assert_eq!(props[1].key, "a");
    }
}
