//! Static page layouts: which preferences each page shows, in which order,
//! under which section headers.

use crate::prefs::{resolve, PrefId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PageId {
    #[default]
    Dock,
    Drawer,
}

/// Preferences rendered under one (optional) header.
#[derive(Debug)]
pub struct Section {
    /// String-resource key of the header.
    pub header: Option<&'static str>,
    pub prefs: &'static [PrefId],
}

impl Section {
    pub fn header_text(&self) -> Option<&'static str> {
        self.header.map(resolve)
    }
}

const DOCK_SECTIONS: &[Section] = &[Section {
    header: None,
    prefs: &[
        PrefId::DockHide,
        PrefId::DockBackground,
        PrefId::DockBackgroundColor,
        PrefId::DockOpacity,
        PrefId::DockScale,
        PrefId::DockNumIcons,
        PrefId::DockSearchBar,
    ],
}];

const DRAWER_SECTIONS: &[Section] = &[
    Section {
        header: Some("cat_drawer_icons"),
        prefs: &[
            PrefId::DrawerIconScale,
            PrefId::DrawerHideAppLabels,
            PrefId::DrawerMultilineLabel,
            PrefId::DrawerTextScale,
            PrefId::DrawerPopup,
        ],
    },
    Section {
        header: Some("cat_drawer_grid"),
        prefs: &[
            PrefId::DrawerColumns,
            PrefId::DrawerSortMode,
            PrefId::DrawerSeparateWorkApps,
        ],
    },
    Section {
        header: Some("label_search"),
        prefs: &[PrefId::DrawerSearch, PrefId::SearchHiddenApps],
    },
    Section {
        header: Some("pref_category__others"),
        prefs: &[PrefId::DrawerEnableProtectedApps],
    },
];

impl PageId {
    pub fn all() -> &'static [PageId] {
        &[Self::Dock, Self::Drawer]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dock => resolve("title__general_dock"),
            Self::Drawer => resolve("title__general_drawer"),
        }
    }

    pub fn sections(&self) -> &'static [Section] {
        match self {
            Self::Dock => DOCK_SECTIONS,
            Self::Drawer => DRAWER_SECTIONS,
        }
    }

    /// Preferences of the page in display order, sections flattened.
    pub fn prefs(&self) -> Vec<PrefId> {
        self.sections()
            .iter()
            .flat_map(|section| section.prefs.iter().copied())
            .collect()
    }

    pub fn next(&self) -> PageId {
        match self {
            Self::Dock => Self::Drawer,
            Self::Drawer => Self::Dock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn no_preference_is_listed_twice() {
        for page in PageId::all() {
            let prefs = page.prefs();
            let unique: HashSet<_> = prefs.iter().collect();
            assert_eq!(unique.len(), prefs.len(), "{:?} repeats a preference", page);
        }
    }

    #[test]
    fn dock_keeps_declaration_order() {
        assert_eq!(
            PageId::Dock.prefs(),
            vec![
                PrefId::DockHide,
                PrefId::DockBackground,
                PrefId::DockBackgroundColor,
                PrefId::DockOpacity,
                PrefId::DockScale,
                PrefId::DockNumIcons,
                PrefId::DockSearchBar,
            ]
        );
    }

    #[test]
    fn drawer_sections_have_headers() {
        let headers: Vec<_> = PageId::Drawer
            .sections()
            .iter()
            .map(|s| s.header_text())
            .collect();
        assert_eq!(
            headers,
            vec![Some("Icons"), Some("Grid"), Some("Search"), Some("Other")]
        );
    }

    #[test]
    fn theme_prefs_are_not_on_any_page() {
        for page in PageId::all() {
            assert!(!page.prefs().contains(&PrefId::ThemeCornerRadius));
        }
    }
}
