// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Storyboard core: conti and song records, their form view models, and the
//! description sanitizer that keeps chat-thread markers out of user-facing text.
//!
//! Rendering, routing and persistence belong to the host application; the
//! models here emit commands for it to execute.

pub mod logic;
pub mod models;
pub mod mvu;
pub mod ui;
pub mod utils;

pub use utils::{DISCORD_THREAD_PREFIX, sanitize_conti_description};
