/// Glyph for a multi-choice entry key, if one exists.
///
/// Only consulted when the preference declares `with_icons`.
pub fn icon_for(key: &str) -> Option<&'static str> {
    match key {
        "edit" => Some("✎"),
        "uninstall" => Some("🗑"),
        "info" => Some("ⓘ"),
        _ => None,
    }
}
