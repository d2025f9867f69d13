//! Intermediate representation of a parsed ID header.
//!
//! This captures the namespace tree of a generated `Wwise_IDs.h` after
//! parsing and before validation and code generation.

/// A single `static const AkUniqueID NAME = <value>U;` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdDef {
    /// The sanitized identifier as written in the header (e.g. `PLAY_AMBIENT`).
    pub ident: String,
    /// The 32-bit ID value.
    pub value: u32,
    /// Source line, for error reporting.
    pub line: usize,
}

/// A state or switch group: its own ID plus the IDs of its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDef {
    /// Group namespace identifier (e.g. `MUSIC_STATE`).
    pub ident: String,
    /// The group's own ID (the `GROUP` constant).
    pub value: u32,
    /// Source line of the group namespace.
    pub line: usize,
    /// The group's values, from the nested `STATE`/`SWITCH` namespace.
    pub values: Vec<IdDef>,
}

/// All identifiers exported by one authoring project, per category.
///
/// Categories keep header order; an absent category is an empty list and is
/// omitted on re-emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundBankIds {
    pub events: Vec<IdDef>,
    pub state_groups: Vec<GroupDef>,
    pub switch_groups: Vec<GroupDef>,
    pub game_parameters: Vec<IdDef>,
    pub banks: Vec<IdDef>,
    pub busses: Vec<IdDef>,
    pub aux_busses: Vec<IdDef>,
    pub audio_devices: Vec<IdDef>,
}

impl SoundBankIds {
    /// Total number of ID definitions, groups included.
    pub fn def_count(&self) -> usize {
        let grouped: usize = self
            .state_groups
            .iter()
            .chain(&self.switch_groups)
            .map(|g| 1 + g.values.len())
            .sum();
        grouped
            + self.events.len()
            + self.game_parameters.len()
            + self.banks.len()
            + self.busses.len()
            + self.aux_busses.len()
            + self.audio_devices.len()
    }

    /// Iterate over every (identifier, value) pair in the table.
    pub fn all_defs(&self) -> impl Iterator<Item = (&str, u32)> {
        let flat = self
            .events
            .iter()
            .chain(&self.game_parameters)
            .chain(&self.banks)
            .chain(&self.busses)
            .chain(&self.aux_busses)
            .chain(&self.audio_devices)
            .map(|d| (d.ident.as_str(), d.value));
        let grouped = self
            .state_groups
            .iter()
            .chain(&self.switch_groups)
            .flat_map(|g| {
                std::iter::once((g.ident.as_str(), g.value))
                    .chain(g.values.iter().map(|d| (d.ident.as_str(), d.value)))
            });
        flat.chain(grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(ident: &str, value: u32) -> IdDef {
        IdDef { ident: ident.into(), value, line: 1 }
    }

    #[test]
    fn test_def_count_includes_groups() {
        let ids = SoundBankIds {
            events: vec![def("A", 1), def("B", 2)],
            state_groups: vec![GroupDef {
                ident: "G".into(),
                value: 3,
                line: 1,
                values: vec![def("X", 4), def("Y", 5)],
            }],
            ..Default::default()
        };
        assert_eq!(ids.def_count(), 5);
        assert_eq!(ids.all_defs().count(), 5);
    }
}
