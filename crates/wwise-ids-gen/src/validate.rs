//! Semantic validation of a parsed ID table.
//!
//! A generated header from a healthy authoring project always passes; every
//! failure here means the export was corrupted or written by something other
//! than the authoring tool.

use std::collections::HashMap;

use wwise_ids_utils::fnv1_32;

use crate::error::ValidateError;
use crate::ir::{IdDef, SoundBankIds};

/// Validate the IR.
///
/// Errors on duplicate identifiers within a namespace and on any identifier
/// carrying two different values anywhere in the table. Identifiers whose
/// value is not the hash of the identifier itself are only logged: the header
/// stores sanitized identifiers, and a name like `Master Audio Bus` hashes
/// differently from its identifier `MASTER_AUDIO_BUS`.
pub fn validate(ids: &SoundBankIds) -> Result<(), ValidateError> {
    for (namespace, defs) in namespaces(ids) {
        check_unique_idents(&namespace, &defs)?;
    }
    check_no_conflicting_values(ids)?;
    audit_hashes(ids);
    Ok(())
}

/// Flatten the IR into (namespace path, definitions) pairs.
fn namespaces(ids: &SoundBankIds) -> Vec<(String, Vec<&IdDef>)> {
    let mut result: Vec<(String, Vec<&IdDef>)> = vec![
        ("EVENTS".to_owned(), ids.events.iter().collect()),
        ("GAME_PARAMETERS".to_owned(), ids.game_parameters.iter().collect()),
        ("BANKS".to_owned(), ids.banks.iter().collect()),
        ("BUSSES".to_owned(), ids.busses.iter().collect()),
        ("AUX_BUSSES".to_owned(), ids.aux_busses.iter().collect()),
        ("AUDIO_DEVICES".to_owned(), ids.audio_devices.iter().collect()),
    ];

    for (section, value_ns, groups) in [
        ("STATES", "STATE", &ids.state_groups),
        ("SWITCHES", "SWITCH", &ids.switch_groups),
    ] {
        for group in groups {
            result.push((
                format!("{}::{}::{}", section, group.ident, value_ns),
                group.values.iter().collect(),
            ));
        }
    }
    result
}

/// Check that no identifier repeats within one namespace.
fn check_unique_idents(namespace: &str, defs: &[&IdDef]) -> Result<(), ValidateError> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for def in defs {
        if let Some(&first) = seen.get(def.ident.as_str()) {
            return Err(ValidateError::DuplicateIdent {
                namespace: namespace.to_owned(),
                ident: def.ident.clone(),
                first,
                second: def.line,
            });
        }
        seen.insert(&def.ident, def.line);
    }
    Ok(())
}

/// Check that an identifier never appears with two different values.
///
/// Repeats with the *same* value are normal: state and switch groups share
/// value names (`NONE`, `RUN`), and the hash only sees the name.
fn check_no_conflicting_values(ids: &SoundBankIds) -> Result<(), ValidateError> {
    let mut seen: HashMap<String, u32> = HashMap::new();
    for (ident, value) in ids.all_defs() {
        let key = ident.to_ascii_lowercase();
        if let Some(&first) = seen.get(&key) {
            if first != value {
                return Err(ValidateError::ConflictingValue {
                    ident: ident.to_owned(),
                    first,
                    second: value,
                });
            }
        } else {
            seen.insert(key, value);
        }
    }
    Ok(())
}

/// Warn about identifiers that do not hash to their value.
///
/// Advisory only: the authoring name may contain characters the identifier
/// sanitized away, so a mismatch is not necessarily an error at this layer.
fn audit_hashes(ids: &SoundBankIds) {
    for (ident, value) in ids.all_defs() {
        let hashed = fnv1_32(ident);
        if hashed != value {
            log::warn!(
                "{} has value {} but hashes to {}; authoring name likely contains sanitized characters",
                ident,
                value,
                hashed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::GroupDef;

    fn def(ident: &str, value: u32, line: usize) -> IdDef {
        IdDef { ident: ident.into(), value, line }
    }

    #[test]
    fn test_empty_table_is_valid() {
        assert_eq!(validate(&SoundBankIds::default()), Ok(()));
    }

    #[test]
    fn test_duplicate_ident_in_namespace() {
        let ids = SoundBankIds {
            banks: vec![def("INIT", 1, 10), def("INIT", 1, 11)],
            ..Default::default()
        };
        assert_eq!(
            validate(&ids),
            Err(ValidateError::DuplicateIdent {
                namespace: "BANKS".to_owned(),
                ident: "INIT".to_owned(),
                first: 10,
                second: 11,
            })
        );
    }

    #[test]
    fn test_conflicting_value_across_namespaces() {
        let ids = SoundBankIds {
            events: vec![def("RUN", 712161704, 3)],
            banks: vec![def("RUN", 5, 9)],
            ..Default::default()
        };
        assert_eq!(
            validate(&ids),
            Err(ValidateError::ConflictingValue {
                ident: "RUN".to_owned(),
                first: 712161704,
                second: 5,
            })
        );
    }

    #[test]
    fn test_repeated_name_with_same_value_is_fine() {
        let group = |ident: &str, value| GroupDef {
            ident: ident.into(),
            value,
            line: 1,
            values: vec![def("NONE", 748895195, 2)],
        };
        let ids = SoundBankIds {
            state_groups: vec![group("ROOM", 2077253480), group("PLAYERSTATE", 3285234865)],
            ..Default::default()
        };
        assert_eq!(validate(&ids), Ok(()));
    }

    #[test]
    fn test_group_idents_participate_in_conflict_check() {
        // A group name reused elsewhere with a different value is an export
        // error like any other conflicting name.
        let ids = SoundBankIds {
            switch_groups: vec![GroupDef {
                ident: "PLAYERSPEED".into(),
                value: 1493153371,
                line: 1,
                values: vec![],
            }],
            banks: vec![def("PLAYERSPEED", 7, 20)],
            ..Default::default()
        };
        assert_eq!(
            validate(&ids),
            Err(ValidateError::ConflictingValue {
                ident: "PLAYERSPEED".to_owned(),
                first: 7,
                second: 1493153371,
            })
        );
    }
}
