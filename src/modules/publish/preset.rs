//! Elastic Transcoder system presets, addressable by a short alias.

pub const DEFAULT_PRESET_ID: &str = "1351620000001-000001";

pub const SYSTEM_PRESETS: &[(&str, &str)] = &[
    ("1080p", "1351620000001-000001"),
    ("720p", "1351620000001-000010"),
    ("480p-16x9", "1351620000001-000020"),
    ("480p-4x3", "1351620000001-000030"),
    ("360p-16x9", "1351620000001-000040"),
    ("360p-4x3", "1351620000001-000050"),
    ("320x240", "1351620000001-000061"),
];

/// Maps a known alias to its preset id. Anything else is taken as an id already.
pub fn resolve_preset(value: &str) -> String {
    let value = value.trim();
    SYSTEM_PRESETS
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(value))
        .map(|(_, id)| id.to_string())
        .unwrap_or_else(|| value.to_string())
}
