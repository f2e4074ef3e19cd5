// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! View models for the shared layout and form components.

pub mod conti_form;
pub mod page_header;
pub mod sidebar;
pub mod song_form;

/// User-facing feedback surfaced as a toast or error banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormEvent {
    /// Text shown to the user.
    pub message: String,
    /// Whether the message represents an error.
    pub is_error: bool,
}

impl FormEvent {
    pub(crate) fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Fallback shown when a failed save carries no usable message.
pub(crate) const GENERIC_ERROR: &str = "오류가 발생했습니다";

/// Pick the backend error text, or the generic fallback when it is blank.
pub(crate) fn error_text(err: String) -> String {
    if err.trim().is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        err
    }
}
