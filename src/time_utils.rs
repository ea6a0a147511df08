// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for timestamps.

use chrono::Utc;

/// Current time as Unix epoch milliseconds, the unit stored in the document.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today_utc_date() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
