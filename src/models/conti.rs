// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Conti (setlist) record and the normalized payload produced by the conti form.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::generate_id;
use crate::utils::sanitize_conti_description;

/// Stored conti record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conti {
    pub id: String,
    /// Optional display title; absent contis are listed by date.
    pub title: Option<String>,
    /// Service date as `YYYY-MM-DD`.
    pub date: String,
    /// Raw stored description. May hold a thread marker; use
    /// [`Conti::display_description`] before showing it.
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Conti {
    /// Description safe to show to users.
    pub fn display_description(&self) -> Option<String> {
        sanitize_conti_description(self.description.as_deref())
    }
}

/// Normalized conti fields ready to be persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContiInput {
    pub title: Option<String>,
    pub date: String,
    pub description: Option<String>,
}

impl ContiInput {
    /// Normalize raw form values.
    ///
    /// The title is trimmed and dropped when blank, the date is kept as typed,
    /// and the description goes through the same sanitizer used for display.
    pub fn new(title: &str, date: &str, description: &str) -> Self {
        let title = title.trim();
        Self {
            title: (!title.is_empty()).then(|| title.to_string()),
            date: date.to_string(),
            description: sanitize_conti_description(Some(description)),
        }
    }

    /// Materialize a brand-new conti.
    pub fn into_new_conti(self, now: OffsetDateTime) -> Conti {
        Conti {
            id: generate_id(),
            title: self.title,
            date: self.date,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields of an existing conti.
    pub fn apply_to(self, conti: &mut Conti, now: OffsetDateTime) {
        conti.title = self.title;
        conti.date = self.date;
        conti.description = self.description;
        conti.updated_at = now;
    }
}
