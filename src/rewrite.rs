//! Pseudo-call rewriting for extracted style strings.
//!
//! The extraction pipeline flattens some runtime constructs into plain
//! strings, losing their structure:
//!
//! - `styleSheet(hairlineWidth)` stands for `RNStyleSheet.hairlineWidth`
//! - `roundToNearestPixel(2.5)` stands for a `RNPixelRatio` call
//! - `platformColor(red)` stands for a `RNPlatformColor` call
//! - `platform(ios:16 default:14)` stands for a `RNPlatform.select` call
//!
//! This module recovers the structure: an ordered list of recognizers turns
//! a string into a tagged [`PseudoCall`] token, and a separate builder per
//! grammar turns the token into an expression node. Strings matching no
//! grammar pass through untouched.

use crate::ast::Expr;
use crate::value::StyleValue;

/// Outcome of rewriting one string value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rewritten<'a> {
    /// The string matched a pseudo-call grammar and became an expression.
    Expr(Expr),
    /// No grammar matched; keep the original text.
    Verbatim(&'a str),
}

/// A recognized pseudo-call, carrying its captured argument text.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PseudoCall<'a> {
    /// Exact `styleSheet(hairlineWidth)` literal.
    HairlineWidth,
    /// `roundToNearestPixel(...)` with numeric arguments.
    RoundToNearestPixel(&'a str),
    /// `platformColor(...)` with string arguments.
    PlatformColor(&'a str),
    /// `platform(...)` selection dialect.
    PlatformSelect(&'a str),
    /// A grammar prefix matched but the argument capture failed. The leaf
    /// degrades to an `undefined` placeholder; sibling leaves are unaffected.
    Malformed,
}

/// Result of probing one grammar prefix against a string.
enum Probe<'a> {
    /// The prefix does not match at all.
    Miss,
    /// Well-formed call; captured inner argument text.
    Args(&'a str),
    /// Prefix matched but no `(...)` capture (unclosed or empty).
    Malformed,
}

const HAIRLINE_WIDTH: &str = "styleSheet(hairlineWidth)";

/// Leaf-rewrite callback for the normalization helper.
///
/// Applied to every (key, value) pair of the styles mapping. String values
/// are decoded via [`rewrite_str`]; everything else passes through
/// unchanged. The key is never altered.
pub fn rewrite(key: &str, value: StyleValue) -> (String, StyleValue) {
    let value = match value {
        StyleValue::String(text) => {
            if let Rewritten::Expr(expr) = rewrite_str(&text) {
                StyleValue::Expr(expr)
            } else {
                StyleValue::String(text)
            }
        }
        other => other,
    };
    (key.to_string(), value)
}

/// Rewrite one string value.
///
/// Grammars are checked in order, first match wins, case-sensitive. A
/// recognized-but-malformed pseudo-call yields an `undefined` identifier
/// placeholder rather than an error: one bad style value must not abort
/// generation of its siblings.
pub fn rewrite_str(text: &str) -> Rewritten<'_> {
    match recognize(text) {
        Some(PseudoCall::HairlineWidth) => {
            Rewritten::Expr(Expr::member("RNStyleSheet", "hairlineWidth"))
        }
        Some(PseudoCall::RoundToNearestPixel(inner)) => {
            Rewritten::Expr(round_to_nearest_pixel(inner))
        }
        Some(PseudoCall::PlatformColor(inner)) => Rewritten::Expr(platform_color(inner)),
        Some(PseudoCall::PlatformSelect(inner)) => Rewritten::Expr(platform_select(inner)),
        Some(PseudoCall::Malformed) => Rewritten::Expr(undefined_placeholder()),
        None => Rewritten::Verbatim(text),
    }
}

/// Recognize a pseudo-call string as a tagged token.
///
/// `platformColor` must be probed before `platform`, which is a prefix of it.
fn recognize(text: &str) -> Option<PseudoCall<'_>> {
    if text == HAIRLINE_WIDTH {
        return Some(PseudoCall::HairlineWidth);
    }

    match probe(text, "roundToNearestPixel") {
        Probe::Args(inner) => return Some(PseudoCall::RoundToNearestPixel(inner)),
        Probe::Malformed => return Some(PseudoCall::Malformed),
        Probe::Miss => {}
    }

    match probe(text, "platformColor") {
        Probe::Args(inner) => return Some(PseudoCall::PlatformColor(inner)),
        Probe::Malformed => return Some(PseudoCall::Malformed),
        Probe::Miss => {}
    }

    match probe(text, "platform") {
        Probe::Args(inner) => Some(PseudoCall::PlatformSelect(inner)),
        Probe::Malformed => Some(PseudoCall::Malformed),
        Probe::Miss => None,
    }
}

/// Probe one grammar: `name(inner)` with non-empty inner.
///
/// The bare name with no parentheses counts as recognized-but-malformed;
/// any other text (including `name` followed by something other than `(`)
/// is a miss.
fn probe<'a>(text: &'a str, name: &str) -> Probe<'a> {
    if text == name {
        return Probe::Malformed;
    }

    let Some(rest) = text.strip_prefix(name).and_then(|r| r.strip_prefix('(')) else {
        return Probe::Miss;
    };

    match rest.strip_suffix(')') {
        Some(inner) if !inner.is_empty() => Probe::Args(inner),
        _ => Probe::Malformed,
    }
}

fn undefined_placeholder() -> Expr {
    Expr::ident("undefined")
}

/// Split a call argument list on runs of spaces and commas.
fn split_args(inner: &str) -> impl Iterator<Item = &str> {
    inner.split([' ', ',']).filter(|token| !token.is_empty())
}

/// Build `RNPixelRatio.roundToNearestPixel(...)` with numeric arguments.
///
/// A token that is not a number means the whole leaf is malformed and
/// degrades to the `undefined` placeholder.
fn round_to_nearest_pixel(inner: &str) -> Expr {
    let mut args = Vec::new();
    for token in split_args(inner) {
        match token.parse::<f64>() {
            Ok(n) => args.push(Expr::number(n)),
            Err(_) => return undefined_placeholder(),
        }
    }
    Expr::call(Expr::member("RNPixelRatio", "roundToNearestPixel"), args)
}

/// Build `RNPlatformColor(...)` with string arguments, text untouched.
fn platform_color(inner: &str) -> Expr {
    let args = split_args(inner).map(Expr::string).collect();
    Expr::call(Expr::ident("RNPlatformColor"), args)
}

/// Build `RNPlatform.select({ ... })` from the platform dialect.
///
/// Tokens are whitespace-separated `platform:value` pairs. Only the first
/// colon separates; the value keeps any further colons verbatim, because
/// nested arguments can embed them:
///
/// ```text
/// platform(android:platformColor(@android:color/holo_blue_bright))
/// ```
///
/// A token with no colon is all value, keyed `default`. Each value is
/// recursively rewritten, so nested pseudo-calls become expressions;
/// unmatched text becomes a string literal.
fn platform_select(inner: &str) -> Expr {
    let props = inner.trim().split_whitespace().map(|token| {
        let (platform, rest) = match token.split_once(':') {
            Some(split) => split,
            None => ("default", token),
        };

        let value = match rewrite_str(rest) {
            Rewritten::Expr(expr) => expr,
            Rewritten::Verbatim(text) => Expr::string(text),
        };

        (platform, value)
    });

    Expr::call(
        Expr::member("RNPlatform", "select"),
        vec![Expr::object(props.collect::<Vec<_>>())],
    )
}
