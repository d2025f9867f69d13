//! # wwise-ids-utils
//!
//! Hash utilities shared by the `wwise-ids` bindings crate and the
//! `wwise-ids-gen` regeneration tool.
//!
//! The only content is the FNV-1 32-bit hash in the exact variant the Wwise
//! sound engine uses to derive `AkUniqueID` values from authoring names
//! (`AK::SoundEngine::GetIDFromString`). It lives in its own crate so that
//! both the bindings and the generator can hash names without depending on
//! each other.

pub mod hash;

pub use hash::{fnv1_32, fnv1_32_bytes};
