//! Parser for generated `Wwise_IDs.h` headers.
//!
//! The header is a rigid, machine-written format: a `namespace AK` tree with
//! one namespace per category and `static const AkUniqueID NAME = <value>U;`
//! definitions. Parsing is line-oriented in two phases: the namespace tree is
//! read as-is, then lowered into the category-shaped [`SoundBankIds`] IR.

use crate::error::ParseError;
use crate::ir::{GroupDef, IdDef, SoundBankIds};

/// A namespace block as written in the header, before lowering.
struct Namespace {
    name: String,
    line: usize,
    children: Vec<Namespace>,
    defs: Vec<IdDef>,
}

/// Parse the full text of a generated header.
pub fn parse_header(src: &str) -> Result<SoundBankIds, ParseError> {
    let root = parse_namespaces(src)?;
    lower(root)
}

fn parse_namespaces(src: &str) -> Result<Namespace, ParseError> {
    let mut stack: Vec<Namespace> = Vec::new();
    let mut pending: Option<(String, usize)> = None;
    let mut root: Option<Namespace> = None;

    for (idx, raw) in src.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();

        // A `namespace X` line must be followed by its opening brace.
        if let Some((name, ns_line)) = pending.take() {
            if text == "{" {
                stack.push(Namespace {
                    name,
                    line: ns_line,
                    children: Vec::new(),
                    defs: Vec::new(),
                });
                continue;
            }
            return Err(ParseError::ExpectedBrace { name, line });
        }

        if text.is_empty()
            || text.starts_with("//")
            || text.starts_with("#ifndef")
            || text.starts_with("#define")
            || text.starts_with("#endif")
            || text.starts_with("#include")
        {
            continue;
        }

        if let Some(name) = text.strip_prefix("namespace ") {
            let name = name.trim();
            if !is_ident(name) {
                return Err(ParseError::UnrecognizedLine {
                    line,
                    text: text.to_owned(),
                });
            }
            pending = Some((name.to_owned(), line));
        } else if text.starts_with('}') {
            let ns = stack.pop().ok_or(ParseError::UnmatchedBrace { line })?;
            match stack.last_mut() {
                Some(parent) => parent.children.push(ns),
                None => {
                    if root.is_some() {
                        return Err(ParseError::MissingRoot);
                    }
                    root = Some(ns);
                }
            }
        } else if text.starts_with("static const AkUniqueID ") {
            let def = parse_def(text, line)?;
            stack
                .last_mut()
                .ok_or(ParseError::DefOutsideNamespace { line })?
                .defs
                .push(def);
        } else {
            return Err(ParseError::UnrecognizedLine {
                line,
                text: text.to_owned(),
            });
        }
    }

    if pending.is_some() || !stack.is_empty() {
        return Err(ParseError::UnterminatedNamespace);
    }
    root.ok_or(ParseError::MissingRoot)
}

fn parse_def(text: &str, line: usize) -> Result<IdDef, ParseError> {
    let unrecognized = || ParseError::UnrecognizedLine {
        line,
        text: text.to_owned(),
    };
    // Caller checked the prefix.
    let rest = text
        .strip_prefix("static const AkUniqueID ")
        .ok_or_else(unrecognized)?;
    let (ident, value_text) = rest.split_once(" = ").ok_or_else(unrecognized)?;
    if !is_ident(ident) {
        return Err(unrecognized());
    }
    let value = value_text
        .strip_suffix("U;")
        .and_then(|v| v.parse::<u32>().ok())
        .ok_or_else(|| ParseError::InvalidValue {
            line,
            text: text.to_owned(),
        })?;
    Ok(IdDef {
        ident: ident.to_owned(),
        value,
        line,
    })
}

fn is_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Map the raw namespace tree onto the category IR.
fn lower(root: Namespace) -> Result<SoundBankIds, ParseError> {
    if root.name != "AK" {
        return Err(ParseError::UnexpectedNamespace {
            name: root.name,
            line: root.line,
        });
    }
    if let Some(def) = root.defs.first() {
        return Err(ParseError::DefOutsideNamespace { line: def.line });
    }

    let mut ids = SoundBankIds::default();
    for section in root.children {
        match section.name.as_str() {
            "EVENTS" => ids.events = leaf_defs(section)?,
            "STATES" => ids.state_groups = group_defs(section, "STATE")?,
            "SWITCHES" => ids.switch_groups = group_defs(section, "SWITCH")?,
            "GAME_PARAMETERS" => ids.game_parameters = leaf_defs(section)?,
            "BANKS" => ids.banks = leaf_defs(section)?,
            "BUSSES" => ids.busses = leaf_defs(section)?,
            "AUX_BUSSES" => ids.aux_busses = leaf_defs(section)?,
            "AUDIO_DEVICES" => ids.audio_devices = leaf_defs(section)?,
            _ => {
                return Err(ParseError::UnexpectedNamespace {
                    name: section.name,
                    line: section.line,
                })
            }
        }
    }
    Ok(ids)
}

/// A category namespace holding only definitions.
fn leaf_defs(ns: Namespace) -> Result<Vec<IdDef>, ParseError> {
    if let Some(child) = ns.children.into_iter().next() {
        return Err(ParseError::UnexpectedNamespace {
            name: child.name,
            line: child.line,
        });
    }
    Ok(ns.defs)
}

/// STATES/SWITCHES: one namespace per group, each with a GROUP constant and
/// a nested STATE/SWITCH namespace of values.
fn group_defs(ns: Namespace, value_ns: &str) -> Result<Vec<GroupDef>, ParseError> {
    if let Some(def) = ns.defs.first() {
        return Err(ParseError::DefOutsideNamespace { line: def.line });
    }

    let mut groups = Vec::with_capacity(ns.children.len());
    for group in ns.children {
        let mut group_id = None;
        for def in &group.defs {
            if def.ident == "GROUP" {
                group_id = Some(def.value);
            } else {
                return Err(ParseError::UnrecognizedLine {
                    line: def.line,
                    text: def.ident.clone(),
                });
            }
        }
        let value = group_id.ok_or_else(|| ParseError::MissingGroupId {
            name: group.name.clone(),
            line: group.line,
        })?;

        let mut values = Vec::new();
        for child in group.children {
            if child.name != value_ns {
                return Err(ParseError::UnexpectedNamespace {
                    name: child.name,
                    line: child.line,
                });
            }
            values = leaf_defs(child)?;
        }

        groups.push(GroupDef {
            ident: group.name,
            value,
            line: group.line,
            values,
        });
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\
namespace AK
{
    namespace EVENTS
    {
        static const AkUniqueID FOOTSTEP = 1866025847U;
    } // namespace EVENTS

    namespace STATES
    {
        namespace ROOM
        {
            static const AkUniqueID GROUP = 2077253480U;

            namespace STATE
            {
                static const AkUniqueID NONE = 748895195U;
            } // namespace STATE
        } // namespace ROOM

    } // namespace STATES

}// namespace AK
";

    #[test]
    fn test_parse_minimal_header() {
        let ids = parse_header(MINIMAL).unwrap();
        assert_eq!(ids.events.len(), 1);
        assert_eq!(ids.events[0].ident, "FOOTSTEP");
        assert_eq!(ids.events[0].value, 1866025847);
        assert_eq!(ids.state_groups.len(), 1);
        assert_eq!(ids.state_groups[0].ident, "ROOM");
        assert_eq!(ids.state_groups[0].value, 2077253480);
        assert_eq!(ids.state_groups[0].values[0].ident, "NONE");
    }

    #[test]
    fn test_preamble_lines_are_skipped() {
        let src = format!(
            "// Audiokinetic Wwise generated include file. Do not edit.\n\
             #ifndef __WWISE_IDS_H__\n\
             #define __WWISE_IDS_H__\n\
             #include <AK/SoundEngine/Common/AkTypes.h>\n\
             {MINIMAL}\
             #endif // __WWISE_IDS_H__\n"
        );
        assert!(parse_header(&src).is_ok());
    }

    #[test]
    fn test_missing_brace_after_namespace() {
        let src = "namespace AK\nnamespace EVENTS\n";
        assert_eq!(
            parse_header(src),
            Err(ParseError::ExpectedBrace {
                name: "AK".to_owned(),
                line: 2
            })
        );
    }

    #[test]
    fn test_invalid_value() {
        let src = "\
namespace AK
{
    namespace EVENTS
    {
        static const AkUniqueID FOOTSTEP = 0xBADU;
    }
}
";
        assert!(matches!(
            parse_header(src),
            Err(ParseError::InvalidValue { line: 5, .. })
        ));
    }

    #[test]
    fn test_value_overflowing_u32() {
        let src = "\
namespace AK
{
    namespace BANKS
    {
        static const AkUniqueID INIT = 4294967296U;
    }
}
";
        assert!(matches!(
            parse_header(src),
            Err(ParseError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_def_outside_namespace() {
        let src = "static const AkUniqueID FOOTSTEP = 1U;\n";
        assert_eq!(
            parse_header(src),
            Err(ParseError::DefOutsideNamespace { line: 1 })
        );
    }

    #[test]
    fn test_unknown_category_namespace() {
        let src = "\
namespace AK
{
    namespace TRIGGERS
    {
        static const AkUniqueID X = 1U;
    }
}
";
        assert!(matches!(
            parse_header(src),
            Err(ParseError::UnexpectedNamespace { ref name, .. }) if name == "TRIGGERS"
        ));
    }

    #[test]
    fn test_group_without_group_constant() {
        let src = "\
namespace AK
{
    namespace STATES
    {
        namespace ROOM
        {
            namespace STATE
            {
                static const AkUniqueID NONE = 748895195U;
            }
        }
    }
}
";
        assert!(matches!(
            parse_header(src),
            Err(ParseError::MissingGroupId { ref name, .. }) if name == "ROOM"
        ));
    }

    #[test]
    fn test_unterminated_input() {
        let src = "namespace AK\n{\n";
        assert_eq!(parse_header(src), Err(ParseError::UnterminatedNamespace));
    }

    #[test]
    fn test_empty_input_has_no_root() {
        assert_eq!(parse_header(""), Err(ParseError::MissingRoot));
    }
}
