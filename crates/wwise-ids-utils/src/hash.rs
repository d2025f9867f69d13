//! The Wwise ID hash.
//!
//! Every `AkUniqueID` in a generated soundbank header is the FNV-1 32-bit
//! hash of the lowercased authoring name. This module reimplements that hash
//! so Rust code can derive IDs for names exactly the way the sound engine
//! does at runtime.

/// Compute the Wwise `GetIDFromString` hash of a name.
///
/// This is FNV-1 (Fowler-Noll-Vo, multiply-then-XOR) over the ASCII-lowercased
/// bytes of the name:
///
/// 1. Start with the FNV offset basis `2166136261`
/// 2. For each byte: multiply the hash by the FNV prime `16777619`, then XOR
///    in the lowercased byte
/// 3. Return the final hash value
///
/// Note the operation order: the sound engine uses classic FNV-1, not the
/// more common FNV-1a, and it folds case before hashing — `"Footstep"` and
/// `"FOOTSTEP"` produce the same ID.
///
/// # Properties
///
/// - **Deterministic**: same name always yields the same ID, matching the
///   values the authoring tool writes into `Wwise_IDs.h`
/// - **Const-friendly**: usable to declare `const` IDs for names that are not
///   part of the generated table
/// - **Case-insensitive**: ASCII uppercase folds to lowercase before hashing
///
/// # Examples
///
/// ```
/// use wwise_ids_utils::fnv1_32;
///
/// // Matches AK::EVENTS::FOOTSTEP in the generated header.
/// assert_eq!(fnv1_32("Footstep"), 1866025847);
///
/// // Compile-time usage for a name outside the table.
/// const CUSTOM_EVENT_ID: u32 = fnv1_32("Play_Custom");
/// ```
#[inline]
pub const fn fnv1_32(name: &str) -> u32 {
    const FNV_OFFSET: u32 = 2166136261;
    const FNV_PRIME: u32 = 16777619;

    let bytes = name.as_bytes();
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        let mut byte = bytes[i];
        if byte.is_ascii_uppercase() {
            byte += b'a' - b'A';
        }
        hash = hash.wrapping_mul(FNV_PRIME);
        hash ^= byte as u32;
        i += 1;
    }
    hash
}

/// Compute the FNV-1 32-bit hash of raw bytes, without case folding.
///
/// The sound engine uses this form for non-string data (media payloads,
/// external source cookies). For authoring names use [`fnv1_32`], which
/// matches the generated header values.
#[inline]
pub const fn fnv1_32_bytes(data: &[u8]) -> u32 {
    const FNV_OFFSET: u32 = 2166136261;
    const FNV_PRIME: u32 = 16777619;

    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < data.len() {
        hash = hash.wrapping_mul(FNV_PRIME);
        hash ^= data[i] as u32;
        i += 1;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_offset_basis() {
        // FNV-1 of the empty string is the offset basis
        assert_eq!(fnv1_32(""), 2166136261);
    }

    #[test]
    fn test_known_header_values() {
        // Values taken from a Wwise-generated Wwise_IDs.h
        assert_eq!(fnv1_32("Footstep"), 1866025847);
        assert_eq!(fnv1_32("Play_TimeTravel"), 2398522065);
        assert_eq!(fnv1_32("Init"), 1355168291);
        assert_eq!(fnv1_32("Reverb"), 348963605);
        assert_eq!(fnv1_32("System"), 3859886410);
    }

    #[test]
    fn test_names_with_spaces() {
        // Bus names keep their spaces in the authoring tool; the hash sees
        // them, even though the generated identifier replaces them with '_'.
        assert_eq!(fnv1_32("Master Audio Bus"), 3803692087);
        assert_eq!(fnv1_32("Motion Factory Bus"), 985987111);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(fnv1_32("FOOTSTEP"), fnv1_32("footstep"));
        assert_eq!(fnv1_32("Master Audio Bus"), fnv1_32("MASTER AUDIO BUS"));
    }

    #[test]
    fn test_const_context() {
        const ID: u32 = fnv1_32("None");
        assert_eq!(ID, 748895195);
    }

    #[test]
    fn test_bytes_do_not_fold_case() {
        assert_eq!(fnv1_32_bytes(b"abc"), 1134309195);
        assert_eq!(fnv1_32_bytes(b"ABC"), 1665970155);
        assert_ne!(fnv1_32_bytes(b"ABC"), fnv1_32_bytes(b"abc"));
    }
}
