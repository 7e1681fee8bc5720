use super::id::PrefId;
use super::strings;
use super::value::PrefValue;

/// Display label of a choice entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Already human-readable.
    Text(&'static str),
    /// String-resource key, resolved through the string table at render time.
    Res(&'static str),
}

impl Label {
    pub fn resolve(&self) -> &'static str {
        match self {
            Self::Text(text) => *text,
            Self::Res(key) => strings::resolve(*key),
        }
    }
}

/// Declared kind of a preference, including its default and entry list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrefKind {
    Boolean {
        default: bool,
    },
    Float {
        min: f32,
        max: f32,
        step: f32,
        default: f32,
    },
    IntSelection {
        entries: &'static [(i32, Label)],
        default: i32,
    },
    StringSelection {
        entries: &'static [(&'static str, Label)],
        default: &'static str,
    },
    StringMultiSelection {
        entries: &'static [(&'static str, Label)],
        default: &'static [&'static str],
        /// Rows show an icon from the icon lookup next to the label.
        with_icons: bool,
    },
}

impl PrefKind {
    pub fn default_value(&self) -> PrefValue {
        match self {
            Self::Boolean { default } => PrefValue::Bool(*default),
            Self::Float { default, .. } => PrefValue::Float(*default),
            Self::IntSelection { default, .. } => PrefValue::Int(*default),
            Self::StringSelection { default, .. } => PrefValue::Str(default.to_string()),
            Self::StringMultiSelection { default, .. } => {
                PrefValue::StrSet(default.iter().map(|key| key.to_string()).collect())
            }
        }
    }

    /// Check a value against this declaration.
    ///
    /// Floats are clamped into range. Selection values must be drawn from the
    /// entry list. Returns `None` when the value cannot belong to this kind.
    pub fn normalize(&self, value: PrefValue) -> Option<PrefValue> {
        match (self, value) {
            (Self::Boolean { .. }, PrefValue::Bool(v)) => Some(PrefValue::Bool(v)),
            (Self::Float { min, max, .. }, PrefValue::Float(v)) => {
                if v.is_nan() {
                    None
                } else {
                    Some(PrefValue::Float(v.clamp(*min, *max)))
                }
            }
            (Self::IntSelection { entries, .. }, PrefValue::Int(v)) => entries
                .iter()
                .any(|(key, _)| *key == v)
                .then_some(PrefValue::Int(v)),
            (Self::StringSelection { entries, .. }, PrefValue::Str(v)) => {
                let known = entries.iter().any(|(key, _)| *key == v);
                known.then_some(PrefValue::Str(v))
            }
            (Self::StringMultiSelection { entries, .. }, PrefValue::StrSet(set)) => {
                let known = set
                    .iter()
                    .all(|member| entries.iter().any(|(key, _)| key == member));
                known.then_some(PrefValue::StrSet(set))
            }
            _ => None,
        }
    }
}

/// Self-contained definition of a single preference.
#[derive(Debug, PartialEq)]
pub struct PrefDef {
    pub id: PrefId,
    pub title: &'static str,
    pub summary: Option<&'static str>,
    pub kind: PrefKind,
}

impl PrefId {
    /// Static definition for this preference.
    pub fn def(self) -> &'static PrefDef {
        match self {
            Self::DockHide => &DOCK_HIDE,
            Self::DockBackground => &DOCK_BACKGROUND,
            Self::DockBackgroundColor => &DOCK_BACKGROUND_COLOR,
            Self::DockOpacity => &DOCK_OPACITY,
            Self::DockScale => &DOCK_SCALE,
            Self::DockNumIcons => &DOCK_NUM_ICONS,
            Self::DockSearchBar => &DOCK_SEARCH_BAR,
            Self::DrawerIconScale => &DRAWER_ICON_SCALE,
            Self::DrawerHideAppLabels => &DRAWER_HIDE_APP_LABELS,
            Self::DrawerMultilineLabel => &DRAWER_MULTILINE_LABEL,
            Self::DrawerTextScale => &DRAWER_TEXT_SCALE,
            Self::DrawerPopup => &DRAWER_POPUP,
            Self::DrawerColumns => &DRAWER_COLUMNS,
            Self::DrawerSortMode => &DRAWER_SORT_MODE,
            Self::DrawerSeparateWorkApps => &DRAWER_SEPARATE_WORK_APPS,
            Self::DrawerSearch => &DRAWER_SEARCH,
            Self::SearchHiddenApps => &SEARCH_HIDDEN_APPS,
            Self::DrawerEnableProtectedApps => &DRAWER_ENABLE_PROTECTED_APPS,
            Self::ThemeCornerRadiusOverride => &THEME_CORNER_RADIUS_OVERRIDE,
            Self::ThemeCornerRadius => &THEME_CORNER_RADIUS,
        }
    }
}

// -- Dock ---------------------------------------------------------------------

static DOCK_HIDE: PrefDef = PrefDef {
    id: PrefId::DockHide,
    title: "Hide dock",
    summary: Some("Remove the dock from the home screen"),
    kind: PrefKind::Boolean { default: false },
};

static DOCK_BACKGROUND: PrefDef = PrefDef {
    id: PrefId::DockBackground,
    title: "Dock background",
    summary: Some("Draw a background behind dock icons"),
    kind: PrefKind::Boolean { default: false },
};

static DOCK_BACKGROUND_COLOR: PrefDef = PrefDef {
    id: PrefId::DockBackgroundColor,
    title: "Background color",
    summary: None,
    kind: PrefKind::StringSelection {
        entries: &[
            ("surface", Label::Text("Surface")),
            ("primary", Label::Text("Accent")),
            ("black", Label::Text("Black")),
            ("white", Label::Text("White")),
        ],
        default: "surface",
    },
};

static DOCK_OPACITY: PrefDef = PrefDef {
    id: PrefId::DockOpacity,
    title: "Background opacity",
    summary: None,
    kind: PrefKind::Float {
        min: 0.0,
        max: 1.0,
        step: 0.05,
        default: 0.9,
    },
};

static DOCK_SCALE: PrefDef = PrefDef {
    id: PrefId::DockScale,
    title: "Dock height",
    summary: None,
    kind: PrefKind::Float {
        min: 0.7,
        max: 1.5,
        step: 0.05,
        default: 1.0,
    },
};

static DOCK_NUM_ICONS: PrefDef = PrefDef {
    id: PrefId::DockNumIcons,
    title: "Dock icons",
    summary: Some("Number of icons in the dock"),
    kind: PrefKind::IntSelection {
        entries: &[
            (3, Label::Text("3")),
            (4, Label::Text("4")),
            (5, Label::Text("5")),
            (6, Label::Text("6")),
            (7, Label::Text("7")),
        ],
        default: 5,
    },
};

static DOCK_SEARCH_BAR: PrefDef = PrefDef {
    id: PrefId::DockSearchBar,
    title: "Search bar",
    summary: Some("Show a search bar below the dock"),
    kind: PrefKind::Boolean { default: false },
};

// -- Drawer -------------------------------------------------------------------

static DRAWER_ICON_SCALE: PrefDef = PrefDef {
    id: PrefId::DrawerIconScale,
    title: "Icon size",
    summary: None,
    kind: PrefKind::Float {
        min: 0.5,
        max: 1.5,
        step: 0.05,
        default: 1.0,
    },
};

static DRAWER_HIDE_APP_LABELS: PrefDef = PrefDef {
    id: PrefId::DrawerHideAppLabels,
    title: "Hide app labels",
    summary: None,
    kind: PrefKind::Boolean { default: false },
};

static DRAWER_MULTILINE_LABEL: PrefDef = PrefDef {
    id: PrefId::DrawerMultilineLabel,
    title: "Multiline labels",
    summary: Some("Let long app names wrap to a second line"),
    kind: PrefKind::Boolean { default: false },
};

static DRAWER_TEXT_SCALE: PrefDef = PrefDef {
    id: PrefId::DrawerTextScale,
    title: "Label size",
    summary: None,
    kind: PrefKind::Float {
        min: 0.7,
        max: 1.3,
        step: 0.05,
        default: 1.0,
    },
};

static DRAWER_POPUP: PrefDef = PrefDef {
    id: PrefId::DrawerPopup,
    title: "Icon popup",
    summary: Some("Actions shown on long press"),
    kind: PrefKind::StringMultiSelection {
        entries: &[
            ("remove", Label::Res("popup_remove")),
            ("edit", Label::Res("popup_edit")),
            ("uninstall", Label::Res("popup_uninstall")),
            ("info", Label::Res("popup_app_info")),
        ],
        default: &["edit", "uninstall"],
        with_icons: true,
    },
};

static DRAWER_COLUMNS: PrefDef = PrefDef {
    id: PrefId::DrawerColumns,
    title: "Grid columns",
    summary: None,
    kind: PrefKind::IntSelection {
        entries: &[
            (3, Label::Text("3")),
            (4, Label::Text("4")),
            (5, Label::Text("5")),
            (6, Label::Text("6")),
            (7, Label::Text("7")),
            (8, Label::Text("8")),
        ],
        default: 5,
    },
};

static DRAWER_SORT_MODE: PrefDef = PrefDef {
    id: PrefId::DrawerSortMode,
    title: "Sort apps",
    summary: None,
    kind: PrefKind::IntSelection {
        entries: &[
            (0, Label::Res("sort_title_az")),
            (1, Label::Res("sort_title_za")),
            (2, Label::Res("sort_most_used")),
            (3, Label::Res("sort_install_date")),
        ],
        default: 0,
    },
};

static DRAWER_SEPARATE_WORK_APPS: PrefDef = PrefDef {
    id: PrefId::DrawerSeparateWorkApps,
    title: "Separate work apps",
    summary: Some("Show work profile apps in their own tab"),
    kind: PrefKind::Boolean { default: true },
};

static DRAWER_SEARCH: PrefDef = PrefDef {
    id: PrefId::DrawerSearch,
    title: "Drawer search",
    summary: Some("Show a search field at the top of the drawer"),
    kind: PrefKind::Boolean { default: true },
};

static SEARCH_HIDDEN_APPS: PrefDef = PrefDef {
    id: PrefId::SearchHiddenApps,
    title: "Search hidden apps",
    summary: None,
    kind: PrefKind::Boolean { default: false },
};

static DRAWER_ENABLE_PROTECTED_APPS: PrefDef = PrefDef {
    id: PrefId::DrawerEnableProtectedApps,
    title: "Protected apps",
    summary: Some("Require authentication to open selected apps"),
    kind: PrefKind::Boolean { default: false },
};

// -- Theme --------------------------------------------------------------------

static THEME_CORNER_RADIUS_OVERRIDE: PrefDef = PrefDef {
    id: PrefId::ThemeCornerRadiusOverride,
    title: "Custom corner radius",
    summary: None,
    kind: PrefKind::Boolean { default: false },
};

static THEME_CORNER_RADIUS: PrefDef = PrefDef {
    id: PrefId::ThemeCornerRadius,
    title: "Corner radius",
    summary: None,
    kind: PrefKind::Float {
        min: 0.0,
        max: 24.0,
        step: 1.0,
        default: 16.0,
    },
};
