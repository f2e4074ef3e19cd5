// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Linking chat threads to contis.
//!
//! Responsibilities:
//! - Convert the `YYMMDD` service date used in thread names into `YYYY-MM-DD`.
//! - Upsert the conti for that date, keeping existing values the thread does not provide.
//! - Record the thread link as a description marker that the sanitizer hides.

use anyhow::{Context, Result, anyhow};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::models::conti::Conti;
use crate::utils::conti_thread_marker;

/// Convert a thread-style `YYMMDD` date (always in the 2000s) into `YYYY-MM-DD`.
///
/// Rejects anything that is not six ASCII digits naming a real calendar day.
pub fn iso_date_from_yymmdd(value: &str) -> Result<String> {
    if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(anyhow!("Expected a YYMMDD date, got {value:?}"));
    }

    let format = format_description!("[year]-[month]-[day]");
    let candidate = format!("20{}-{}-{}", &value[0..2], &value[2..4], &value[4..6]);
    let date = Date::parse(&candidate, format)
        .with_context(|| format!("Invalid calendar date in {value:?}"))?;

    date.format(format)
        .with_context(|| format!("Failed to format date {date}"))
}

/// Create or update the conti for `date` and return its id.
///
/// On update, `title` and `description` only replace the stored values when
/// present; `updated_at` is always bumped.
pub fn upsert_conti_by_date(
    contis: &mut Vec<Conti>,
    date: &str,
    title: Option<&str>,
    description: Option<&str>,
    now: OffsetDateTime,
) -> String {
    if let Some(conti) = contis.iter_mut().find(|c| c.date == date) {
        if let Some(title) = title {
            conti.title = Some(title.to_string());
        }
        if let Some(description) = description {
            conti.description = Some(description.to_string());
        }
        conti.updated_at = now;
        log::info!("updated conti {} for {date}", conti.id);
        return conti.id.clone();
    }

    let conti = Conti {
        id: crate::models::generate_id(),
        title: title.map(str::to_string),
        date: date.to_string(),
        description: description.map(str::to_string),
        created_at: now,
        updated_at: now,
    };
    log::info!("created conti {} for {date}", conti.id);
    let id = conti.id.clone();
    contis.push(conti);
    id
}

/// Attach a chat thread to the conti of its service date.
///
/// The conti description is set to the thread marker; the title is only
/// overwritten when the thread produced one.
pub fn link_thread_to_conti(
    contis: &mut Vec<Conti>,
    thread_id: &str,
    sunday_yymmdd: &str,
    title: Option<&str>,
    now: OffsetDateTime,
) -> Result<String> {
    let date = iso_date_from_yymmdd(sunday_yymmdd)
        .with_context(|| format!("Thread {thread_id} has an unusable service date"))?;
    let marker = conti_thread_marker(thread_id);
    log::debug!("linking thread {thread_id} to conti dated {date}");
    Ok(upsert_conti_by_date(contis, &date, title, Some(&marker), now))
}
