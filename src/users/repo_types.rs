use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the `users` table.
///
/// Column names differ from field names (`created`, `updated`, `deleted`);
/// queries alias them so `FromRow` can map the row directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,          // primary key, never reassigned
    pub full_name: String, // display name
    pub email: String,     // contact address, replaced by update_email
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>, // NULL until the first update
    #[serde(default, skip_serializing)]
    pub deleted_at: Option<OffsetDateTime>, // soft-delete marker, not exposed in JSON
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Current UTC time at microsecond precision, the resolution of `timestamptz`.
pub(crate) fn now_micros() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_nanosecond(now.nanosecond() / 1_000 * 1_000)
        .unwrap_or(now)
}
