// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence layer (single JSON document on local disk).

pub mod json_store;

pub use json_store::{JsonStore, StoreError};
