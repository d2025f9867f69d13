//! Text emission for the two generated artifacts.
//!
//! [`emit_header`] renders the canonical `Wwise_IDs.h` form; parsing an
//! unmodified export and re-emitting it reproduces the input byte for byte.
//! [`emit_rust`] renders the `ids.rs` module of the `wwise-ids` crate.
//! Both emitters are deterministic functions of the IR, which is what makes
//! regeneration from an unchanged authoring project stable.

use std::fmt::Write;

use crate::ir::{GroupDef, IdDef, SoundBankIds};

const BANNER: &str = "/////////////////////////////////////////////////////////////////////////////////////////////////////";

/// Render the IR in the authoring tool's header format.
pub fn emit_header(ids: &SoundBankIds) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push_str("\n//\n// Audiokinetic Wwise generated include file. Do not edit.\n//\n");
    out.push_str(BANNER);
    out.push_str("\n\n#ifndef __WWISE_IDS_H__\n#define __WWISE_IDS_H__\n\n");
    out.push_str("#include <AK/SoundEngine/Common/AkTypes.h>\n\n");
    out.push_str("namespace AK\n{\n");

    header_flat_section(&mut out, "EVENTS", &ids.events);
    header_grouped_section(&mut out, "STATES", "STATE", &ids.state_groups);
    header_grouped_section(&mut out, "SWITCHES", "SWITCH", &ids.switch_groups);
    header_flat_section(&mut out, "GAME_PARAMETERS", &ids.game_parameters);
    header_flat_section(&mut out, "BANKS", &ids.banks);
    header_flat_section(&mut out, "BUSSES", &ids.busses);
    header_flat_section(&mut out, "AUX_BUSSES", &ids.aux_busses);
    header_flat_section(&mut out, "AUDIO_DEVICES", &ids.audio_devices);

    out.push_str("}// namespace AK\n\n#endif // __WWISE_IDS_H__\n");
    out
}

fn header_def(out: &mut String, indent: &str, def: &IdDef) {
    let _ = writeln!(
        out,
        "{}static const AkUniqueID {} = {}U;",
        indent, def.ident, def.value
    );
}

fn header_flat_section(out: &mut String, name: &str, defs: &[IdDef]) {
    if defs.is_empty() {
        return;
    }
    let _ = writeln!(out, "    namespace {}\n    {{", name);
    for def in defs {
        header_def(out, "        ", def);
    }
    let _ = writeln!(out, "    }} // namespace {}\n", name);
}

fn header_grouped_section(out: &mut String, name: &str, value_ns: &str, groups: &[GroupDef]) {
    if groups.is_empty() {
        return;
    }
    let _ = writeln!(out, "    namespace {}\n    {{", name);
    for group in groups {
        let _ = writeln!(out, "        namespace {}\n        {{", group.ident);
        let _ = writeln!(
            out,
            "            static const AkUniqueID GROUP = {}U;",
            group.value
        );
        if !group.values.is_empty() {
            let _ = writeln!(out, "\n            namespace {}\n            {{", value_ns);
            for def in &group.values {
                header_def(out, "                ", def);
            }
            let _ = writeln!(out, "            }} // namespace {}", value_ns);
        }
        let _ = writeln!(out, "        }} // namespace {}\n", group.ident);
    }
    let _ = writeln!(out, "    }} // namespace {}\n", name);
}

/// Render the IR as the `ids.rs` module of the bindings crate.
pub fn emit_rust(ids: &SoundBankIds) -> String {
    let mut out = String::from(
        "// Generated by wwise-ids-gen from the Wwise authoring export. Do not edit.\n\n\
         //! Identifiers exported by the Wwise authoring project.\n\
         //!\n\
         //! Values are FNV-1 hashes of the lowercased authoring names, transcribed\n\
         //! verbatim from `Wwise_IDs.h`.\n",
    );

    let mut sections: Vec<String> = Vec::new();
    if !ids.events.is_empty() {
        sections.push(rust_flat_module("events", &ids.events));
    }
    if !ids.state_groups.is_empty() {
        sections.push(rust_grouped_module("states", "state", &ids.state_groups));
    }
    if !ids.switch_groups.is_empty() {
        sections.push(rust_grouped_module("switches", "switch", &ids.switch_groups));
    }
    if !ids.game_parameters.is_empty() {
        sections.push(rust_flat_module("game_parameters", &ids.game_parameters));
    }
    if !ids.banks.is_empty() {
        sections.push(rust_flat_module("banks", &ids.banks));
    }
    if !ids.busses.is_empty() {
        sections.push(rust_flat_module("busses", &ids.busses));
    }
    if !ids.aux_busses.is_empty() {
        sections.push(rust_flat_module("aux_busses", &ids.aux_busses));
    }
    if !ids.audio_devices.is_empty() {
        sections.push(rust_flat_module("audio_devices", &ids.audio_devices));
    }

    for section in sections {
        out.push('\n');
        out.push_str(&section);
    }
    out
}

fn rust_flat_module(name: &str, defs: &[IdDef]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "pub mod {} {{", name);
    out.push_str("    use crate::types::AkUniqueID;\n\n");
    for def in defs {
        let _ = writeln!(out, "    pub const {}: AkUniqueID = {};", def.ident, def.value);
    }
    out.push_str("}\n");
    out
}

fn rust_grouped_module(name: &str, value_mod: &str, groups: &[GroupDef]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "pub mod {} {{", name);
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "    pub mod {} {{", group.ident.to_lowercase());
        out.push_str("        use crate::types::AkUniqueID;\n\n");
        let _ = writeln!(out, "        pub const GROUP: AkUniqueID = {};", group.value);
        if !group.values.is_empty() {
            let _ = writeln!(out, "\n        pub mod {} {{", value_mod);
            out.push_str("            use crate::types::AkUniqueID;\n\n");
            for def in &group.values {
                let _ = writeln!(
                    out,
                    "            pub const {}: AkUniqueID = {};",
                    def.ident, def.value
                );
            }
            out.push_str("        }\n");
        }
        out.push_str("    }\n");
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_header;

    fn def(ident: &str, value: u32) -> IdDef {
        IdDef { ident: ident.into(), value, line: 0 }
    }

    #[test]
    fn test_emit_header_round_trips() {
        let ids = SoundBankIds {
            banks: vec![def("INIT", 1355168291), def("MAIN", 3161908922)],
            state_groups: vec![GroupDef {
                ident: "ROOM".into(),
                value: 2077253480,
                line: 0,
                values: vec![def("NONE", 748895195)],
            }],
            ..Default::default()
        };
        let text = emit_header(&ids);
        let reparsed = parse_header(&text).expect("emitted header must parse");
        assert_eq!(emit_header(&reparsed), text);
    }

    #[test]
    fn test_emit_header_skips_empty_sections() {
        let ids = SoundBankIds {
            banks: vec![def("INIT", 1355168291)],
            ..Default::default()
        };
        let text = emit_header(&ids);
        assert!(text.contains("namespace BANKS"));
        assert!(!text.contains("namespace EVENTS"));
        assert!(!text.contains("namespace STATES"));
    }

    #[test]
    fn test_emit_rust_flat_module() {
        let ids = SoundBankIds {
            events: vec![def("FOOTSTEP", 1866025847)],
            ..Default::default()
        };
        let text = emit_rust(&ids);
        assert!(text.contains("pub mod events {"));
        assert!(text.contains("    pub const FOOTSTEP: AkUniqueID = 1866025847;\n"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_emit_rust_lowercases_group_modules() {
        let ids = SoundBankIds {
            switch_groups: vec![GroupDef {
                ident: "GROUNDMATERIAL".into(),
                value: 3072116243,
                line: 0,
                values: vec![def("METAL", 2473969246)],
            }],
            ..Default::default()
        };
        let text = emit_rust(&ids);
        assert!(text.contains("    pub mod groundmaterial {"));
        assert!(text.contains("        pub const GROUP: AkUniqueID = 3072116243;"));
        assert!(text.contains("        pub mod switch {"));
        assert!(text.contains("            pub const METAL: AkUniqueID = 2473969246;"));
    }
}
