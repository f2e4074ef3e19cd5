// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business rules that sit between chat-thread sync and the conti records.

pub mod thread_sync;
