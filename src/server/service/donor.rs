use sea_orm::DatabaseConnection;

use crate::server::{
    data::donor::DonorRepository,
    error::AppError,
    model::donor::{CreateDonorParams, Donor},
};

pub struct DonorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all donors, most recently registered first.
    pub async fn get_all(&self) -> Result<Vec<Donor>, AppError> {
        let repo = DonorRepository::new(self.db);

        repo.get_all().await.map_err(Into::into)
    }

    /// Registers a new donor.
    pub async fn create(&self, params: CreateDonorParams) -> Result<Donor, AppError> {
        let repo = DonorRepository::new(self.db);

        repo.create(params).await.map_err(Into::into)
    }

    /// Deletes a donor by ID; a nonexistent ID is a no-op.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DonorRepository::new(self.db);

        repo.delete(id).await.map_err(Into::into)
    }
}
