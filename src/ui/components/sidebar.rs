// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Sidebar navigation shared by every authenticated page.

/// Brand shown in the sidebar header and the mobile top bar.
pub const BRAND_TITLE: &str = "Storyboard";

/// Icons available to navigation entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Playlist,
    MusicNote,
    Calendar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    /// An entry is highlighted for its own route and everything below it.
    pub fn is_active(&self, path: &str) -> bool {
        path.starts_with(self.href)
    }
}

pub static NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "콘티 목록",
        href: "/contis",
        icon: NavIcon::Playlist,
    },
    NavItem {
        label: "찬양 라이브러리",
        href: "/songs",
        icon: NavIcon::MusicNote,
    },
    NavItem {
        label: "예배 준비",
        href: "/worship-prep",
        icon: NavIcon::Calendar,
    },
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarModel {
    current_path: String,
    /// Page-provided replacement for the brand header.
    header_override: Option<String>,
    /// Mobile sheet visibility.
    mobile_open: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarMsg {
    PathChanged(String),
    SetHeader(Option<String>),
    SetMobileOpen(bool),
    LogoutRequested,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarCommand {
    Logout,
}

impl SidebarModel {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            ..Default::default()
        }
    }

    pub fn header_title(&self) -> &str {
        self.header_override.as_deref().unwrap_or(BRAND_TITLE)
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    /// Navigation entries paired with their highlight state.
    pub fn items(&self) -> impl Iterator<Item = (&'static NavItem, bool)> + '_ {
        NAV_ITEMS
            .iter()
            .map(|item| (item, item.is_active(&self.current_path)))
    }
}

pub fn update(model: &mut SidebarModel, msg: SidebarMsg, cmds: &mut Vec<SidebarCommand>) {
    match msg {
        SidebarMsg::PathChanged(path) => {
            if path != model.current_path {
                model.current_path = path;
                model.mobile_open = false;
            }
        }
        SidebarMsg::SetHeader(header) => model.header_override = header,
        SidebarMsg::SetMobileOpen(open) => model.mobile_open = open,
        SidebarMsg::LogoutRequested => cmds.push(SidebarCommand::Logout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(model: &SidebarModel) -> Vec<&'static str> {
        model
            .items()
            .filter(|(_, on)| *on)
            .map(|(item, _)| item.href)
            .collect()
    }

    // Nested routes keep their section highlighted.
    #[test]
    fn active_item_follows_path_prefix() {
        assert_eq!(active(&SidebarModel::new("/contis")), vec!["/contis"]);
        assert_eq!(active(&SidebarModel::new("/songs/s1/edit")), vec!["/songs"]);
        assert!(active(&SidebarModel::new("/")).is_empty());
    }

    // Navigating closes the mobile sheet; staying put does not.
    #[test]
    fn path_change_closes_mobile_nav() {
        let mut model = SidebarModel::new("/contis");
        let mut cmds = Vec::new();
        update(&mut model, SidebarMsg::SetMobileOpen(true), &mut cmds);
        update(&mut model, SidebarMsg::PathChanged("/contis".into()), &mut cmds);
        assert!(model.is_mobile_open());

        update(&mut model, SidebarMsg::PathChanged("/songs".into()), &mut cmds);
        assert!(!model.is_mobile_open());
        assert!(cmds.is_empty());
    }

    // Pages can swap the header and restore the brand.
    #[test]
    fn header_override_falls_back_to_brand() {
        let mut model = SidebarModel::default();
        let mut cmds = Vec::new();
        assert_eq!(model.header_title(), "Storyboard");
        update(&mut model, SidebarMsg::SetHeader(Some("PDF 편집".into())), &mut cmds);
        assert_eq!(model.header_title(), "PDF 편집");
        update(&mut model, SidebarMsg::SetHeader(None), &mut cmds);
        assert_eq!(model.header_title(), "Storyboard");

        update(&mut model, SidebarMsg::LogoutRequested, &mut cmds);
        assert_eq!(cmds, vec![SidebarCommand::Logout]);
    }
}
