// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring the shell, the active page, messages, and commands.

use crate::models::conti::ContiInput;
use crate::models::song::SongInput;
use crate::ui::components::FormEvent;
use crate::ui::components::conti_form::{self, ContiFormCommand, ContiFormModel, ContiFormMsg};
use crate::ui::components::sidebar::{self, SidebarCommand, SidebarModel, SidebarMsg};
use crate::ui::components::song_form::{self, SongFormCommand, SongFormModel, SongFormMsg};
use crate::ui::{EditContiPage, EditSongPage, NewContiPage, NewSongPage};

/// Page hosted in the main content region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    NewConti(NewContiPage),
    EditConti(EditContiPage),
    NewSong(NewSongPage),
    EditSong(EditSongPage),
}

impl Page {
    fn conti_form(&mut self) -> Option<&mut ContiFormModel> {
        match self {
            Page::NewConti(page) => Some(&mut page.form),
            Page::EditConti(page) => Some(&mut page.form),
            _ => None,
        }
    }

    fn song_form(&mut self) -> Option<&mut SongFormModel> {
        match self {
            Page::NewSong(page) => Some(&mut page.form),
            Page::EditSong(page) => Some(&mut page.form),
            _ => None,
        }
    }
}

/// Top-level application state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppModel {
    /// Persistent navigation sidebar.
    pub sidebar: SidebarModel,
    /// Page currently shown next to the sidebar.
    pub page: Option<Page>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display.
    pub error: Option<String>,
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    PageOpened { path: String, page: Page },
    DismissError,
    Sidebar(SidebarMsg),
    ContiForm(ContiFormMsg),
    SongForm(SongFormMsg),
}

/// Side effects the host executes (persistence, navigation, session).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    CreateConti(ContiInput),
    UpdateConti { id: String, input: ContiInput },
    CreateSong(SongInput),
    UpdateSong { id: String, input: SongInput },
    Navigate(String),
    GoBack,
    Logout,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::PageOpened { path, page } => {
            model.page = Some(page);
            let mut side_cmds = Vec::new();
            sidebar::update(&mut model.sidebar, SidebarMsg::PathChanged(path), &mut side_cmds);
            cmds.extend(side_cmds.into_iter().map(map_sidebar_command));
        }
        Msg::DismissError => model.error = None,
        Msg::Sidebar(m) => {
            let mut side_cmds = Vec::new();
            sidebar::update(&mut model.sidebar, m, &mut side_cmds);
            cmds.extend(side_cmds.into_iter().map(map_sidebar_command));
        }
        Msg::ContiForm(m) => {
            let Some(form) = model.page.as_mut().and_then(Page::conti_form) else {
                log::warn!("dropping conti form message without a conti page: {m:?}");
                return;
            };
            let mut form_cmds = Vec::new();
            let event = conti_form::update(form, m, &mut form_cmds);
            cmds.extend(form_cmds.into_iter().map(|c| match c {
                ContiFormCommand::Create(input) => Command::CreateConti(input),
                ContiFormCommand::Update { id, input } => Command::UpdateConti { id, input },
                ContiFormCommand::Navigate(path) => Command::Navigate(path),
                ContiFormCommand::GoBack => Command::GoBack,
            }));
            if let Some(event) = event {
                surface_event(model, event);
            }
        }
        Msg::SongForm(m) => {
            let Some(form) = model.page.as_mut().and_then(Page::song_form) else {
                log::warn!("dropping song form message without a song page: {m:?}");
                return;
            };
            let mut form_cmds = Vec::new();
            let event = song_form::update(form, m, &mut form_cmds);
            cmds.extend(form_cmds.into_iter().map(|c| match c {
                SongFormCommand::Create(input) => Command::CreateSong(input),
                SongFormCommand::Update { id, input } => Command::UpdateSong { id, input },
                SongFormCommand::Navigate(path) => Command::Navigate(path),
            }));
            if let Some(event) = event {
                surface_event(model, event);
            }
        }
    }
}

fn map_sidebar_command(cmd: SidebarCommand) -> Command {
    match cmd {
        SidebarCommand::Logout => Command::Logout,
    }
}

/// Route feedback either to the status line or the error banner.
fn surface_event(model: &mut AppModel, event: FormEvent) {
    if event.is_error {
        model.error = Some(event.message);
    } else {
        model.status = Some(event.message);
    }
}
