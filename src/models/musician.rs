use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Persisted musician document. Field names are camelCase both in the
/// `musicians` collection and on the wire; `_id` is assigned exactly once at
/// creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Musician {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub instrument: String,
    pub genre: String,
    pub years_experience: i32,
    pub bands: String,
    pub albums_recorded: String,
    pub concerts_performed: String,
}
