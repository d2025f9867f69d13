//! # wwise-ids
//!
//! Rust bindings for the identifiers exported by the game's Wwise authoring
//! project. The authoring tool assigns every named object (events, states,
//! switches, game parameters, banks, busses, devices) a stable 32-bit ID;
//! this crate carries those IDs as constants plus a small runtime registry
//! for name-based lookup.
//!
//! The ID table is data, not behavior: it is regenerated wholesale by
//! `wwise-ids-gen` whenever the soundbanks are rebuilt, and consumed by game
//! code as opaque handles passed to the sound engine.
//!
//! ## Addressing by constant
//!
//! ```
//! use wwise_ids::ids;
//!
//! // What game code hands to the engine's PostEvent.
//! let event = ids::events::PLAY_AMBIENT;
//! assert_eq!(event, 1562304622);
//! ```
//!
//! ## Addressing by name
//!
//! ```
//! use wwise_ids::{registry, Category};
//!
//! let id = registry::resolve(Category::Switch, "Metal").unwrap();
//! assert_eq!(id, wwise_ids::ids::switches::groundmaterial::switch::METAL);
//! ```

pub mod error;
pub mod ids;
pub mod registry;
pub mod types;

pub use error::{IdError, IdResult};
pub use types::{AkUniqueID, Category, IdEntry, AK_INVALID_UNIQUE_ID};

/// Derive the runtime ID for an arbitrary name, exactly as the engine's
/// `GetIDFromString` does.
///
/// For names present in the authoring project this returns the same value as
/// the generated constant; it also covers names that are not part of the
/// export (dynamic content).
///
/// ```
/// use wwise_ids::{id_from_string, ids};
///
/// assert_eq!(id_from_string("Play_Engine"), ids::events::PLAY_ENGINE);
/// ```
pub const fn id_from_string(name: &str) -> AkUniqueID {
    wwise_ids_utils::fnv1_32(name)
}
