//! # style-codegen
//!
//! Serialize extracted style values into JavaScript AST literal expressions.
//!
//! This crate is the back half of a build-time style-extraction pipeline:
//! a CSS-like parser runs ahead of time and yields typed mappings of plain
//! data (styles, at-rules, masks, topics, child classes). This crate turns
//! those mappings into expression trees a downstream code generator can
//! emit as source text:
//!
//! - **Value rewriter**: string values carrying pseudo-call syntax
//!   (`styleSheet(hairlineWidth)`, `roundToNearestPixel(...)`,
//!   `platformColor(...)`, `platform(...)`) are re-parsed into nested
//!   call/member/object expressions.
//! - **Literal encoder**: plain data recursively becomes the equivalent
//!   literal expression — mappings to object literals, sequences to array
//!   literals, scalars to literal nodes.
//!
//! Everything here is a pure, synchronous transform: no shared state, no
//! I/O, no rendering. Parsing stylesheets, deciding style relevance and
//! emitting source text all belong to external collaborators.
//!
//! ## Quick Start
//!
//! ```ignore
//! use style_codegen::{serialize_styles, ExtractedValues, NormalizedStyles, StyleMap};
//!
//! let values = ExtractedValues::from_json(&extraction_output)?;
//!
//! let record = serialize_styles(&values, |styles, rewrite| NormalizedStyles {
//!     styles: styles.iter().map(|(k, v)| rewrite(k, v.clone())).collect(),
//!     rest: StyleMap::new(),
//! })?;
//!
//! // record.styles / record.at_rules / ... are expression trees ready for
//! // the code generator; record.has_styles gates the emitted import.
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ast;
mod encode;
mod error;
mod rewrite;
mod serialize;
mod value;

// =============================================================================
// Data model
// =============================================================================

pub use value::{ExtractedValues, StyleMap, StyleValue};

// =============================================================================
// Expression nodes
// =============================================================================

pub use ast::{Expr, Property};

// =============================================================================
// Transforms
// =============================================================================

// Value rewriting (pseudo-call strings → expressions)
pub use rewrite::{Rewritten, rewrite, rewrite_str};

// Literal encoding (style values → expressions)
pub use encode::{encode, encode_map};

// Top-level assembly
pub use serialize::{LeafRewrite, NormalizedStyles, SerializedStyles, serialize_styles};

// =============================================================================
// Errors
// =============================================================================

pub use error::EncodeError;
