use crate::models::Musician;
use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Strict create payload: exactly the musician fields, no id, unknown fields
/// rejected. `yearsExperience` may be omitted and defaults to 0.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMusician {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "instrument must not be empty"))]
    pub instrument: String,
    #[validate(length(min = 1, message = "genre must not be empty"))]
    pub genre: String,
    #[serde(default)]
    pub years_experience: i32,
    #[validate(length(min = 1, message = "bands must not be empty"))]
    pub bands: String,
    #[validate(length(min = 1, message = "albumsRecorded must not be empty"))]
    pub albums_recorded: String,
    #[validate(length(min = 1, message = "concertsPerformed must not be empty"))]
    pub concerts_performed: String,
}

impl From<CreateMusician> for Musician {
    fn from(input: CreateMusician) -> Self {
        Musician {
            id: ObjectId::new(),
            name: input.name,
            instrument: input.instrument,
            genre: input.genre,
            years_experience: input.years_experience,
            bands: input.bands,
            albums_recorded: input.albums_recorded,
            concerts_performed: input.concerts_performed,
        }
    }
}

/// Partial update payload: every field optional, unknown fields rejected.
/// Fields absent from the body are left unchanged in the store.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMusician {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "instrument must not be empty"))]
    pub instrument: Option<String>,
    #[validate(length(min = 1, message = "genre must not be empty"))]
    pub genre: Option<String>,
    pub years_experience: Option<i32>,
    #[validate(length(min = 1, message = "bands must not be empty"))]
    pub bands: Option<String>,
    #[validate(length(min = 1, message = "albumsRecorded must not be empty"))]
    pub albums_recorded: Option<String>,
    #[validate(length(min = 1, message = "concertsPerformed must not be empty"))]
    pub concerts_performed: Option<String>,
}

impl UpdateMusician {
    /// `$set` document covering only the provided fields, or `None` when the
    /// body named no fields at all (MongoDB rejects an empty `$set`).
    pub fn update_document(&self) -> Option<Document> {
        let mut set = Document::new();
        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(instrument) = &self.instrument {
            set.insert("instrument", instrument.as_str());
        }
        if let Some(genre) = &self.genre {
            set.insert("genre", genre.as_str());
        }
        if let Some(years_experience) = self.years_experience {
            set.insert("yearsExperience", years_experience);
        }
        if let Some(bands) = &self.bands {
            set.insert("bands", bands.as_str());
        }
        if let Some(albums_recorded) = &self.albums_recorded {
            set.insert("albumsRecorded", albums_recorded.as_str());
        }
        if let Some(concerts_performed) = &self.concerts_performed {
            set.insert("concertsPerformed", concerts_performed.as_str());
        }
        if set.is_empty() {
            None
        } else {
            Some(doc! { "$set": set })
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicianResponse {
    pub id: String,
    pub name: String,
    pub instrument: String,
    pub genre: String,
    pub years_experience: i32,
    pub bands: String,
    pub albums_recorded: String,
    pub concerts_performed: String,
}

impl From<Musician> for MusicianResponse {
    fn from(musician: Musician) -> Self {
        Self {
            id: musician.id.to_hex(),
            name: musician.name,
            instrument: musician.instrument,
            genre: musician.genre,
            years_experience: musician.years_experience,
            bands: musician.bands,
            albums_recorded: musician.albums_recorded,
            concerts_performed: musician.concerts_performed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_document_is_none_for_empty_body() {
        let update = UpdateMusician::default();
        assert!(update.update_document().is_none());
    }

    #[test]
    fn update_document_sets_only_provided_fields() {
        let update = UpdateMusician {
            years_experience: Some(6),
            genre: Some("jazz".to_string()),
            ..Default::default()
        };

        let document = update.update_document().expect("expected a $set document");
        let set = document.get_document("$set").expect("missing $set");

        assert_eq!(set.len(), 2);
        assert_eq!(set.get_i32("yearsExperience").unwrap(), 6);
        assert_eq!(set.get_str("genre").unwrap(), "jazz");
        assert!(!set.contains_key("name"));
    }

    #[test]
    fn create_defaults_years_experience_to_zero() {
        let payload: CreateMusician = serde_json::from_value(json!({
            "name": "Ada",
            "instrument": "synth",
            "genre": "electronic",
            "bands": "X",
            "albumsRecorded": "2",
            "concertsPerformed": "10"
        }))
        .expect("payload should deserialize");

        assert_eq!(payload.years_experience, 0);
    }

    #[test]
    fn create_rejects_unknown_fields() {
        let result: Result<CreateMusician, _> = serde_json::from_value(json!({
            "name": "Ada",
            "instrument": "synth",
            "genre": "electronic",
            "bands": "X",
            "albumsRecorded": "2",
            "concertsPerformed": "10",
            "label": "unexpected"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_empty_required_strings() {
        let payload: CreateMusician = serde_json::from_value(json!({
            "name": "",
            "instrument": "synth",
            "genre": "electronic",
            "bands": "X",
            "albumsRecorded": "2",
            "concertsPerformed": "10"
        }))
        .expect("payload should deserialize");

        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_rejects_empty_provided_strings() {
        let update = UpdateMusician {
            name: Some(String::new()),
            ..Default::default()
        };

        assert!(update.validate().is_err());
    }

    #[test]
    fn response_serializes_id_as_hex_string() {
        let musician = Musician {
            id: ObjectId::new(),
            name: "Ada".to_string(),
            instrument: "synth".to_string(),
            genre: "electronic".to_string(),
            years_experience: 5,
            bands: "X".to_string(),
            albums_recorded: "2".to_string(),
            concerts_performed: "10".to_string(),
        };
        let expected_id = musician.id.to_hex();

        let response = MusicianResponse::from(musician);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["id"], json!(expected_id));
        assert_eq!(value["yearsExperience"], json!(5));
        assert_eq!(value["albumsRecorded"], json!("2"));
    }
}
