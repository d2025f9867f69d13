//! # wwise-ids-gen
//!
//! Regeneration tool for the Wwise ID bindings. It reads the authoring
//! tool's `Wwise_IDs.h` export and regenerates the `ids.rs` module of the
//! `wwise-ids` crate, or re-emits the header itself for fidelity checks.
//!
//! The pipeline is parse → IR → validate → codegen:
//!
//! - [`parse`] reads the header's namespace tree into [`ir::SoundBankIds`]
//! - [`validate`] rejects duplicate and conflicting identifiers
//! - [`codegen`] renders the Rust module and the canonical header text
//!
//! Re-emitting an unmodified export reproduces it byte for byte, which is
//! the tool's core fidelity guarantee: regeneration from an unchanged
//! authoring project never touches the checked-in bindings.

pub mod codegen;
pub mod error;
pub mod ir;
pub mod parse;
pub mod validate;

pub use codegen::{emit_header, emit_rust};
pub use error::{GenError, ParseError, ValidateError};
pub use ir::{GroupDef, IdDef, SoundBankIds};
pub use parse::parse_header;
pub use validate::validate;

/// Parse and validate a header in one step.
pub fn load(src: &str) -> Result<SoundBankIds, GenError> {
    let ids = parse_header(src)?;
    validate(&ids)?;
    Ok(ids)
}
