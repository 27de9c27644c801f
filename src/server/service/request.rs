use sea_orm::DatabaseConnection;

use crate::server::{
    data::blood_request::BloodRequestRepository,
    error::AppError,
    model::request::{BloodRequest, CreateBloodRequestParams, UpdateBloodRequestParams},
};

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all blood requests, most recently submitted first.
    pub async fn get_all(&self) -> Result<Vec<BloodRequest>, AppError> {
        let repo = BloodRequestRepository::new(self.db);

        repo.get_all().await.map_err(Into::into)
    }

    /// Submits a new blood request.
    pub async fn create(&self, params: CreateBloodRequestParams) -> Result<BloodRequest, AppError> {
        let repo = BloodRequestRepository::new(self.db);

        repo.create(params).await.map_err(Into::into)
    }

    /// Applies a partial update to a request.
    /// Returns None when no request matches the given ID.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBloodRequestParams,
    ) -> Result<Option<BloodRequest>, AppError> {
        let repo = BloodRequestRepository::new(self.db);

        repo.update(id, params).await.map_err(Into::into)
    }

    /// Deletes a request by ID; a nonexistent ID is a no-op.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = BloodRequestRepository::new(self.db);

        repo.delete(id).await.map_err(Into::into)
    }
}
