// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Conti create/edit form in MVU shape: model, messages, update, commands.

use crate::models::conti::{Conti, ContiInput};
use crate::ui::components::{FormEvent, error_text};
use crate::utils::sanitize_conti_description;

/// Form state, kept free of side effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContiFormModel {
    title: String,
    date: String,
    description: String,
    /// Id of the conti being edited; `None` in create mode.
    editing: Option<String>,
    /// A save is in flight.
    pending: bool,
}

/// Messages emitted by the conti form view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContiFormMsg {
    TitleChanged(String),
    DateChanged(String),
    DescriptionChanged(String),
    Submit,
    SubmitCompleted(Result<Conti, String>),
    Cancel,
}

/// Side effects requested by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContiFormCommand {
    Create(ContiInput),
    Update { id: String, input: ContiInput },
    Navigate(String),
    GoBack,
}

impl ContiFormModel {
    /// Empty form for a new conti.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form seeded from a stored conti. Thread markers never reach the
    /// description field.
    pub fn edit(conti: &Conti) -> Self {
        Self {
            title: conti.title.clone().unwrap_or_default(),
            date: conti.date.clone(),
            description: sanitize_conti_description(conti.description.as_deref())
                .unwrap_or_default(),
            editing: Some(conti.id.clone()),
            pending: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.pending { "저장 중..." } else { "저장" }
    }
}

/// Apply a message to the model. Returns a feedback event when relevant.
pub fn update(
    model: &mut ContiFormModel,
    msg: ContiFormMsg,
    cmds: &mut Vec<ContiFormCommand>,
) -> Option<FormEvent> {
    match msg {
        ContiFormMsg::TitleChanged(text) => {
            model.title = text;
            None
        }
        ContiFormMsg::DateChanged(text) => {
            model.date = text;
            None
        }
        ContiFormMsg::DescriptionChanged(text) => {
            model.description = text;
            None
        }
        ContiFormMsg::Submit => {
            if model.pending {
                return None;
            }
            model.pending = true;
            let input = ContiInput::new(&model.title, &model.date, &model.description);
            match &model.editing {
                Some(id) => {
                    log::debug!("submitting edit for conti {id}");
                    cmds.push(ContiFormCommand::Update {
                        id: id.clone(),
                        input,
                    });
                }
                None => {
                    log::debug!("submitting new conti for {}", input.date);
                    cmds.push(ContiFormCommand::Create(input));
                }
            }
            None
        }
        ContiFormMsg::SubmitCompleted(result) => {
            model.pending = false;
            match result {
                Ok(saved) => {
                    if model.is_edit() {
                        cmds.push(ContiFormCommand::Navigate(format!("/contis/{}", saved.id)));
                        Some(FormEvent::info("콘티가 수정되었습니다"))
                    } else {
                        cmds.push(ContiFormCommand::Navigate("/contis".to_string()));
                        Some(FormEvent::info("콘티가 생성되었습니다"))
                    }
                }
                Err(err) => Some(FormEvent::error(error_text(err))),
            }
        }
        ContiFormMsg::Cancel => {
            if !model.pending {
                cmds.push(ContiFormCommand::GoBack);
            }
            None
        }
    }
}
