//! String resources referenced by `Label::Res` keys, page titles, and
//! section headers.

const TABLE: &[(&str, &str)] = &[
    ("title__general_dock", "Dock"),
    ("title__general_drawer", "App Drawer"),
    ("cat_drawer_icons", "Icons"),
    ("cat_drawer_grid", "Grid"),
    ("label_search", "Search"),
    ("pref_category__others", "Other"),
    ("popup_remove", "Remove"),
    ("popup_edit", "Edit"),
    ("popup_uninstall", "Uninstall"),
    ("popup_app_info", "App info"),
    ("sort_title_az", "Title (A-Z)"),
    ("sort_title_za", "Title (Z-A)"),
    ("sort_most_used", "Most used"),
    ("sort_install_date", "Install date"),
];

/// Resolve a resource key. Unknown keys render as the key itself.
pub fn resolve(key: &str) -> &str {
    TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves() {
        assert_eq!(resolve("cat_drawer_grid"), "Grid");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(resolve("no_such_string"), "no_such_string");
    }
}
