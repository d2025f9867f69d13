//! Common types for the ID table.

/// Runtime identifier of a named Wwise object.
///
/// This is the Rust spelling of the SDK's `AkUniqueID`: an opaque 32-bit
/// token derived from the authoring name. Only equality is meaningful;
/// the numeric value carries no ordering or arithmetic semantics.
pub type AkUniqueID = u32;

/// Reserved "no ID" value (`AK_INVALID_UNIQUE_ID` in the SDK).
pub const AK_INVALID_UNIQUE_ID: AkUniqueID = 0;

/// The namespace a named identifier belongs to.
///
/// Mirrors the sections of the generated header. State and switch *values*
/// are separate categories from their groups because the engine addresses
/// them through different API calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Named trigger that starts/stops a sound action.
    Event,
    /// Named enumeration of mutually exclusive global states.
    StateGroup,
    /// A value inside a state group.
    State,
    /// Named enumeration of mutually exclusive per-object switches.
    SwitchGroup,
    /// A value inside a switch group.
    Switch,
    /// Continuous runtime value fed into the engine (RTPC).
    GameParameter,
    /// Packaged collection of audio assets, loadable as a unit.
    Bank,
    /// Signal-routing node in the mixing graph.
    Bus,
    /// Auxiliary send target in the mixing graph.
    AuxBus,
    /// Output endpoint (sink) the engine can render to.
    AudioDevice,
}

impl Category {
    /// All categories, in the order the generated header lists them.
    pub const ALL: [Category; 10] = [
        Category::Event,
        Category::StateGroup,
        Category::State,
        Category::SwitchGroup,
        Category::Switch,
        Category::GameParameter,
        Category::Bank,
        Category::Bus,
        Category::AuxBus,
        Category::AudioDevice,
    ];

    /// Human-readable label, as used in log messages.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Event => "event",
            Category::StateGroup => "state group",
            Category::State => "state",
            Category::SwitchGroup => "switch group",
            Category::Switch => "switch",
            Category::GameParameter => "game parameter",
            Category::Bank => "bank",
            Category::Bus => "bus",
            Category::AuxBus => "auxiliary bus",
            Category::AudioDevice => "audio device",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the generated ID table.
///
/// `name` is the authoring name as typed in the Wwise project (e.g.
/// `"Master Audio Bus"`); the ID is the FNV-1 hash of its lowercased form.
/// The constant identifier in the generated code is derived from the name,
/// see [`IdEntry::const_ident`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdEntry {
    /// Namespace this entry belongs to.
    pub category: Category,
    /// Authoring name, in project casing.
    pub name: &'static str,
    /// Runtime identifier.
    pub id: AkUniqueID,
    /// Owning group ID for state and switch values, `None` otherwise.
    pub group: Option<AkUniqueID>,
}

impl IdEntry {
    /// Create an ungrouped entry.
    pub const fn new(category: Category, name: &'static str, id: AkUniqueID) -> Self {
        Self { category, name, id, group: None }
    }

    /// Create a state or switch value owned by `group`.
    pub const fn in_group(
        category: Category,
        name: &'static str,
        id: AkUniqueID,
        group: AkUniqueID,
    ) -> Self {
        Self { category, name, id, group: Some(group) }
    }

    /// The identifier the authoring tool emits for this name: uppercased,
    /// with every non-alphanumeric character replaced by `_`.
    ///
    /// `"Master Audio Bus"` becomes `MASTER_AUDIO_BUS`.
    pub fn const_ident(&self) -> String {
        self.name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Case-insensitive name match, the way `GetIDFromString` treats names.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_ident_sanitizes() {
        let entry = IdEntry::new(Category::Bus, "Master Audio Bus", 3803692087);
        assert_eq!(entry.const_ident(), "MASTER_AUDIO_BUS");
    }

    #[test]
    fn test_const_ident_plain_name() {
        let entry = IdEntry::new(Category::Event, "Play_Ambient", 1562304622);
        assert_eq!(entry.const_ident(), "PLAY_AMBIENT");
    }

    #[test]
    fn test_matches_name_ignores_case() {
        let entry = IdEntry::new(Category::Event, "Footstep", 1866025847);
        assert!(entry.matches_name("FOOTSTEP"));
        assert!(entry.matches_name("footstep"));
        assert!(!entry.matches_name("footsteps"));
    }
}
