// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Page compositions: a header over a form, hosted inside the sidebar shell.

pub mod components;

use crate::models::conti::Conti;
use crate::models::song::Song;
use components::conti_form::ContiFormModel;
use components::page_header::PageHeader;
use components::song_form::SongFormModel;

/// "New conti" screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewContiPage {
    pub header: PageHeader,
    pub form: ContiFormModel,
}

impl Default for NewContiPage {
    fn default() -> Self {
        Self {
            header: PageHeader::new("새 콘티 만들기"),
            form: ContiFormModel::new(),
        }
    }
}

/// "Edit conti" screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditContiPage {
    pub header: PageHeader,
    pub form: ContiFormModel,
}

impl EditContiPage {
    pub fn new(conti: &Conti) -> Self {
        Self {
            header: PageHeader::new("콘티 편집"),
            form: ContiFormModel::edit(conti),
        }
    }
}

/// "New song" screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSongPage {
    pub header: PageHeader,
    pub form: SongFormModel,
}

impl Default for NewSongPage {
    fn default() -> Self {
        Self {
            header: PageHeader::new("새 곡 추가"),
            form: SongFormModel::new(),
        }
    }
}

/// "Edit song" screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSongPage {
    pub header: PageHeader,
    pub form: SongFormModel,
}

impl EditSongPage {
    pub fn new(song: &Song) -> Self {
        Self {
            header: PageHeader::new("곡 편집"),
            form: SongFormModel::edit(song),
        }
    }
}
