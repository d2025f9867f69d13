//! Runtime registry over the generated ID table.
//!
//! The constants in [`crate::ids`] are what game code links against; this
//! module carries the same table as data, so names can be resolved at
//! runtime the way the Unity-side scripts address the engine
//! (`SetSwitch("GroundMaterial", "Metal", ...)` and friends work by name,
//! not by constant).
//!
//! Entries store the *authoring* name in project casing. For most objects
//! that is the constant identifier up to case; the two factory busses keep
//! their spaces (`"Master Audio Bus"`), which is why the table, and not the
//! sanitized identifier, is the source of truth for hashing.

use wwise_ids_utils::fnv1_32;

use crate::error::{IdError, IdResult};
use crate::ids;
use crate::types::{AkUniqueID, Category, IdEntry};

/// Every named identifier in the authoring export, in header order.
///
/// State and switch values appear once per owning group; shared value names
/// (`None`, `Run`, `Walk`) repeat with identical IDs because the hash only
/// sees the value name.
pub const ENTRIES: &[IdEntry] = &[
    // Events
    IdEntry::new(Category::Event, "Footstep", ids::events::FOOTSTEP),
    IdEntry::new(Category::Event, "Play_Ambient", ids::events::PLAY_AMBIENT),
    IdEntry::new(Category::Event, "Play_Engine", ids::events::PLAY_ENGINE),
    IdEntry::new(Category::Event, "Play_TimeTravel", ids::events::PLAY_TIMETRAVEL),
    // States
    IdEntry::new(Category::StateGroup, "Music_State", ids::states::music_state::GROUP),
    IdEntry::in_group(
        Category::State,
        "L1",
        ids::states::music_state::state::L1,
        ids::states::music_state::GROUP,
    ),
    IdEntry::in_group(
        Category::State,
        "None",
        ids::states::music_state::state::NONE,
        ids::states::music_state::GROUP,
    ),
    IdEntry::in_group(
        Category::State,
        "Origen",
        ids::states::music_state::state::ORIGEN,
        ids::states::music_state::GROUP,
    ),
    IdEntry::new(Category::StateGroup, "PlayerState", ids::states::playerstate::GROUP),
    IdEntry::in_group(
        Category::State,
        "None",
        ids::states::playerstate::state::NONE,
        ids::states::playerstate::GROUP,
    ),
    IdEntry::in_group(
        Category::State,
        "Run",
        ids::states::playerstate::state::RUN,
        ids::states::playerstate::GROUP,
    ),
    IdEntry::in_group(
        Category::State,
        "Walk",
        ids::states::playerstate::state::WALK,
        ids::states::playerstate::GROUP,
    ),
    IdEntry::new(Category::StateGroup, "Room", ids::states::room::GROUP),
    IdEntry::in_group(
        Category::State,
        "Corridor",
        ids::states::room::state::CORRIDOR,
        ids::states::room::GROUP,
    ),
    IdEntry::in_group(
        Category::State,
        "None",
        ids::states::room::state::NONE,
        ids::states::room::GROUP,
    ),
    IdEntry::in_group(
        Category::State,
        "WaitRoom",
        ids::states::room::state::WAITROOM,
        ids::states::room::GROUP,
    ),
    // Switches
    IdEntry::new(Category::SwitchGroup, "GroundMaterial", ids::switches::groundmaterial::GROUP),
    IdEntry::in_group(
        Category::Switch,
        "Metal",
        ids::switches::groundmaterial::switch::METAL,
        ids::switches::groundmaterial::GROUP,
    ),
    IdEntry::in_group(
        Category::Switch,
        "NoneMaterial",
        ids::switches::groundmaterial::switch::NONEMATERIAL,
        ids::switches::groundmaterial::GROUP,
    ),
    IdEntry::in_group(
        Category::Switch,
        "Stairs",
        ids::switches::groundmaterial::switch::STAIRS,
        ids::switches::groundmaterial::GROUP,
    ),
    IdEntry::new(Category::SwitchGroup, "PlayerSpeed", ids::switches::playerspeed::GROUP),
    IdEntry::in_group(
        Category::Switch,
        "Run",
        ids::switches::playerspeed::switch::RUN,
        ids::switches::playerspeed::GROUP,
    ),
    IdEntry::in_group(
        Category::Switch,
        "Walk",
        ids::switches::playerspeed::switch::WALK,
        ids::switches::playerspeed::GROUP,
    ),
    // Game parameters
    IdEntry::new(Category::GameParameter, "EngineIntencity", ids::game_parameters::ENGINEINTENCITY),
    IdEntry::new(Category::GameParameter, "FanDistance", ids::game_parameters::FANDISTANCE),
    IdEntry::new(Category::GameParameter, "Playback_Rate", ids::game_parameters::PLAYBACK_RATE),
    IdEntry::new(Category::GameParameter, "RPM", ids::game_parameters::RPM),
    IdEntry::new(Category::GameParameter, "RTPC_PlayerSpeed", ids::game_parameters::RTPC_PLAYERSPEED),
    IdEntry::new(Category::GameParameter, "SS_Air_fear", ids::game_parameters::SS_AIR_FEAR),
    IdEntry::new(Category::GameParameter, "SS_Air_freefall", ids::game_parameters::SS_AIR_FREEFALL),
    IdEntry::new(Category::GameParameter, "SS_Air_fury", ids::game_parameters::SS_AIR_FURY),
    IdEntry::new(Category::GameParameter, "SS_Air_month", ids::game_parameters::SS_AIR_MONTH),
    IdEntry::new(Category::GameParameter, "SS_Air_presence", ids::game_parameters::SS_AIR_PRESENCE),
    IdEntry::new(Category::GameParameter, "SS_Air_RPM", ids::game_parameters::SS_AIR_RPM),
    IdEntry::new(Category::GameParameter, "SS_Air_size", ids::game_parameters::SS_AIR_SIZE),
    IdEntry::new(Category::GameParameter, "SS_Air_storm", ids::game_parameters::SS_AIR_STORM),
    IdEntry::new(Category::GameParameter, "SS_Air_timeofday", ids::game_parameters::SS_AIR_TIMEOFDAY),
    IdEntry::new(Category::GameParameter, "SS_Air_turbulence", ids::game_parameters::SS_AIR_TURBULENCE),
    // Banks
    IdEntry::new(Category::Bank, "Init", ids::banks::INIT),
    IdEntry::new(Category::Bank, "Main", ids::banks::MAIN),
    IdEntry::new(Category::Bank, "Main_SoundBank", ids::banks::MAIN_SOUNDBANK),
    // Busses
    IdEntry::new(Category::Bus, "CorridorEffect", ids::busses::CORRIDOREFFECT),
    IdEntry::new(Category::Bus, "Master Audio Bus", ids::busses::MASTER_AUDIO_BUS),
    IdEntry::new(Category::Bus, "Motion Factory Bus", ids::busses::MOTION_FACTORY_BUS),
    // Auxiliary busses
    IdEntry::new(Category::AuxBus, "Reverb", ids::aux_busses::REVERB),
    // Audio devices
    IdEntry::new(Category::AudioDevice, "Default_Motion_Device", ids::audio_devices::DEFAULT_MOTION_DEVICE),
    IdEntry::new(Category::AudioDevice, "No_Output", ids::audio_devices::NO_OUTPUT),
    IdEntry::new(Category::AudioDevice, "System", ids::audio_devices::SYSTEM),
];

/// Iterate over the entries of one category, in header order.
pub fn entries_in(category: Category) -> impl Iterator<Item = &'static IdEntry> {
    ENTRIES.iter().filter(move |e| e.category == category)
}

/// Find an entry by category and name (case-insensitive).
pub fn find(category: Category, name: &str) -> Option<&'static IdEntry> {
    entries_in(category).find(|e| e.matches_name(name))
}

/// Resolve a name to its runtime ID within a category.
///
/// Logs a warning on failure; unknown names usually mean the table is stale
/// relative to the authoring project.
pub fn resolve(category: Category, name: &str) -> IdResult<AkUniqueID> {
    match find(category, name) {
        Some(entry) => Ok(entry.id),
        None => {
            log::warn!("no {} named {:?} in the generated table", category, name);
            Err(IdError::UnknownName {
                category,
                name: name.to_owned(),
            })
        }
    }
}

/// Reverse lookup: the authoring name behind an ID, within a category.
pub fn name_of(category: Category, id: AkUniqueID) -> IdResult<&'static str> {
    entries_in(category)
        .find(|e| e.id == id)
        .map(|e| e.name)
        .ok_or(IdError::UnknownId { category, id })
}

/// Iterate over the values of a state or switch group.
pub fn values_of(group: AkUniqueID) -> impl Iterator<Item = &'static IdEntry> {
    ENTRIES.iter().filter(move |e| e.group == Some(group))
}

/// Verify transcription fidelity of the whole table.
///
/// Checks that every entry's value is the hash of its name, and that no
/// name appears anywhere with two different values. Either failure means
/// the table was mis-transcribed or the generator misbehaved; neither can
/// result from a correct regeneration.
pub fn verify() -> IdResult<()> {
    for entry in ENTRIES {
        let expected = fnv1_32(entry.name);
        if expected != entry.id {
            return Err(IdError::HashMismatch {
                name: entry.name,
                expected,
                actual: entry.id,
            });
        }
    }

    // Hashing is a pure function of the lowercased name, so a second
    // occurrence of a name must carry the same value.
    for (i, entry) in ENTRIES.iter().enumerate() {
        for earlier in &ENTRIES[..i] {
            if earlier.matches_name(entry.name) && earlier.id != entry.id {
                return Err(IdError::ConflictingValue {
                    name: entry.name,
                    first: earlier.id,
                    second: entry.id,
                });
            }
        }
    }

    Ok(())
}
