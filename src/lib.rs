//! Data access for the `users` table.
//!
//! The repositories never open connections themselves; callers hand in a
//! `PgPool` (or connection / transaction) built elsewhere.

pub mod config;
pub mod db;
pub mod users;
