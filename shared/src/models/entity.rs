//! Common persisted-entity fields

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and concurrency fields embedded in every persisted entity.
///
/// `row_version` is an opaque token the store replaces on every successful
/// write. Clients round-trip it unmodified into the next update; it is only
/// ever compared for equality, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct EntityMeta {
    pub id: Uuid,
    pub row_version: String,
}

impl EntityMeta {
    pub fn new(id: Uuid, row_version: impl Into<String>) -> Self {
        Self {
            id,
            row_version: row_version.into(),
        }
    }
}
