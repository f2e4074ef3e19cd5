// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Song library record.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::generate_id;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Normalized song fields ready to be persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongInput {
    pub name: String,
}

impl SongInput {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }

    pub fn into_new_song(self, now: OffsetDateTime) -> Song {
        Song {
            id: generate_id(),
            name: self.name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, song: &mut Song, now: OffsetDateTime) {
        song.name = self.name;
        song.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    // Names are trimmed and edits keep the original id.
    #[test]
    fn song_input_trims_and_applies() {
        let now = datetime!(2025-05-01 00:00 UTC);
        let mut song = SongInput::new("  은혜 ").into_new_song(now);
        assert_eq!(song.name, "은혜");

        let id = song.id.clone();
        let later = datetime!(2025-05-02 00:00 UTC);
        SongInput::new("은혜 (Live)").apply_to(&mut song, later);
        assert_eq!(song.id, id);
        assert_eq!(song.name, "은혜 (Live)");
        assert_eq!(song.created_at, now);
        assert_eq!(song.updated_at, later);
    }

    // Two new songs never share an id.
    #[test]
    fn new_songs_get_distinct_ids() {
        let now = datetime!(2025-05-01 00:00 UTC);
        let a = SongInput::new("a").into_new_song(now);
        let b = SongInput::new("b").into_new_song(now);
        assert_ne!(a.id, b.id);
    }
}
