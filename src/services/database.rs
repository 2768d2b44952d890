use crate::error::AppError;
use crate::models::Musician;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Client as MongoClient, Collection, Database,
};

/// Wraps the MongoDB client. The CRUD methods surface driver errors opaquely;
/// `None` means "no matching document" and interpreting either is the
/// caller's responsibility.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to build MongoDB client for {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    pub fn musicians(&self) -> Collection<Musician> {
        self.db.collection("musicians")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub async fn find_all(&self) -> Result<Vec<Musician>, mongodb::error::Error> {
        let mut cursor = self.musicians().find(doc! {}, None).await?;
        let mut musicians = Vec::new();
        while let Some(musician) = cursor.try_next().await? {
            musicians.push(musician);
        }
        Ok(musicians)
    }

    pub async fn find_by_id(
        &self,
        id: ObjectId,
    ) -> Result<Option<Musician>, mongodb::error::Error> {
        self.musicians().find_one(doc! { "_id": id }, None).await
    }

    pub async fn insert(&self, musician: &Musician) -> Result<(), mongodb::error::Error> {
        self.musicians().insert_one(musician, None).await?;
        Ok(())
    }

    /// Applies `update` to the matching document and returns the post-update
    /// record, or `None` when no document matches.
    pub async fn update_by_id(
        &self,
        id: ObjectId,
        update: Document,
    ) -> Result<Option<Musician>, mongodb::error::Error> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        self.musicians()
            .find_one_and_update(doc! { "_id": id }, update, options)
            .await
    }

    pub async fn delete_by_id(
        &self,
        id: ObjectId,
    ) -> Result<Option<Musician>, mongodb::error::Error> {
        self.musicians()
            .find_one_and_delete(doc! { "_id": id }, None)
            .await
    }
}
