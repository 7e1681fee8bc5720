/// Unique identifier for each preference.
///
/// Adding a new preference: add a variant here + a `PrefDef` in the registry.
/// The `as_str()` value is used as TOML key; do not rename once published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrefId {
    DockHide,
    DockBackground,
    DockBackgroundColor,
    DockOpacity,
    DockScale,
    DockNumIcons,
    DockSearchBar,
    DrawerIconScale,
    DrawerHideAppLabels,
    DrawerMultilineLabel,
    DrawerTextScale,
    DrawerPopup,
    DrawerColumns,
    DrawerSortMode,
    DrawerSeparateWorkApps,
    DrawerSearch,
    SearchHiddenApps,
    DrawerEnableProtectedApps,
    ThemeCornerRadiusOverride,
    ThemeCornerRadius,
}

impl PrefId {
    /// Stable TOML key for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DockHide => "dock_hide",
            Self::DockBackground => "dock_background",
            Self::DockBackgroundColor => "dock_background_color",
            Self::DockOpacity => "dock_opacity",
            Self::DockScale => "dock_scale",
            Self::DockNumIcons => "dock_num_icons",
            Self::DockSearchBar => "dock_search_bar",
            Self::DrawerIconScale => "drawer_icon_scale",
            Self::DrawerHideAppLabels => "drawer_hide_app_labels",
            Self::DrawerMultilineLabel => "drawer_multiline_label",
            Self::DrawerTextScale => "drawer_text_scale",
            Self::DrawerPopup => "drawer_popup",
            Self::DrawerColumns => "drawer_columns",
            Self::DrawerSortMode => "drawer_sort_mode",
            Self::DrawerSeparateWorkApps => "drawer_separate_work_apps",
            Self::DrawerSearch => "drawer_search",
            Self::SearchHiddenApps => "search_hidden_apps",
            Self::DrawerEnableProtectedApps => "drawer_enable_protected_apps",
            Self::ThemeCornerRadiusOverride => "theme_corner_radius_override",
            Self::ThemeCornerRadius => "theme_corner_radius",
        }
    }

    /// All variants for iteration.
    pub fn all() -> &'static [PrefId] {
        &[
            Self::DockHide,
            Self::DockBackground,
            Self::DockBackgroundColor,
            Self::DockOpacity,
            Self::DockScale,
            Self::DockNumIcons,
            Self::DockSearchBar,
            Self::DrawerIconScale,
            Self::DrawerHideAppLabels,
            Self::DrawerMultilineLabel,
            Self::DrawerTextScale,
            Self::DrawerPopup,
            Self::DrawerColumns,
            Self::DrawerSortMode,
            Self::DrawerSeparateWorkApps,
            Self::DrawerSearch,
            Self::SearchHiddenApps,
            Self::DrawerEnableProtectedApps,
            Self::ThemeCornerRadiusOverride,
            Self::ThemeCornerRadius,
        ]
    }

    /// Parse from TOML key. Unknown keys return `None` (forward compat).
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == s)
    }
}
