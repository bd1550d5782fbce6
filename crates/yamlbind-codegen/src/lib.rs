//! yamlbind code generator.
//!
//! This crate provides the generation pipeline for annotated C++ headers:
//! - `lexer` / `parser` - the host-language frontend, producing the
//!   declaration model from `yamlbind-core`
//! - `index` - document-order index of every declared record/enum
//! - `walk` - marked-declaration discovery, dedup, and emission driving
//! - `classify` - serializable-member extraction
//! - `resolve` - canonical type-name construction
//! - `emit` / `sink` - conversion-routine text generation
//! - `diagnostics` - spanned error rendering

pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod index;
pub mod lexer;
pub mod parser;
pub mod resolve;
pub mod sink;
pub mod walk;

#[cfg(test)]
mod classify_tests;
#[cfg(test)]
mod emit_tests;
#[cfg(test)]
mod resolve_tests;

pub use config::GenConfig;
pub use parser::{ParseError, parse};
pub use walk::{MARKER, discover, marker_matches};

/// Errors that abort generation for one unit.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// A declaration reached emission without any attached attribute. The
    /// discovery predicate guarantees a marker, so this is an integration
    /// bug, not bad user input.
    #[error("declaration `{name}` reached emission without a marker attribute")]
    MissingMarker { name: String },
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, GenError>;

/// Parse one unit and generate its conversion header.
pub fn generate(source: &str, config: &GenConfig) -> Result<String> {
    let unit = parser::parse(source)?;
    walk::Generator::run(&unit, config)
}
