// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Song create/edit form.

use crate::models::song::{Song, SongInput};
use crate::ui::components::{FormEvent, error_text};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SongFormModel {
    name: String,
    editing: Option<String>,
    pending: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SongFormMsg {
    NameChanged(String),
    Submit,
    SubmitCompleted(Result<Song, String>),
    Cancel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SongFormCommand {
    Create(SongInput),
    Update { id: String, input: SongInput },
    Navigate(String),
}

impl SongFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(song: &Song) -> Self {
        Self {
            name: song.name.clone(),
            editing: Some(song.id.clone()),
            pending: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

pub fn update(
    model: &mut SongFormModel,
    msg: SongFormMsg,
    cmds: &mut Vec<SongFormCommand>,
) -> Option<FormEvent> {
    match msg {
        SongFormMsg::NameChanged(text) => {
            model.name = text;
            None
        }
        SongFormMsg::Submit => {
            if model.pending {
                return None;
            }
            model.pending = true;
            let input = SongInput::new(&model.name);
            cmds.push(match &model.editing {
                Some(id) => SongFormCommand::Update {
                    id: id.clone(),
                    input,
                },
                None => SongFormCommand::Create(input),
            });
            None
        }
        SongFormMsg::SubmitCompleted(result) => {
            model.pending = false;
            match result {
                Ok(saved) => {
                    // Edits stay on the edited song; creates jump to the new one.
                    let id = model.editing.clone().unwrap_or(saved.id);
                    cmds.push(SongFormCommand::Navigate(format!("/songs/{id}")));
                    Some(FormEvent::info("곡이 저장되었습니다"))
                }
                Err(err) => Some(FormEvent::error(error_text(err))),
            }
        }
        SongFormMsg::Cancel => {
            cmds.push(SongFormCommand::Navigate("/songs".to_string()));
            None
        }
    }
}
