use sea_orm::DatabaseConnection;

use crate::server::{
    data::{blood_unit::BloodUnitRepository, donor::DonorRepository},
    error::AppError,
    model::inventory::{BloodUnit, CreateBloodUnitParams, RecordedBloodUnit},
};

#[cfg(test)]
mod test;

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all inventory units, most recently recorded first.
    pub async fn get_all(&self) -> Result<Vec<BloodUnit>, AppError> {
        let repo = BloodUnitRepository::new(self.db);

        repo.get_all().await.map_err(Into::into)
    }

    /// Records a collected unit and refreshes the donor's last-donation date.
    ///
    /// The unit insert is authoritative. The donor refresh is a follow-up
    /// operation whose outcome is reported in the result rather than folded
    /// into the overall success: a missing donor or a failed refresh yields
    /// `donor_updated: false` and never rolls the unit back.
    pub async fn record_unit(
        &self,
        params: CreateBloodUnitParams,
    ) -> Result<RecordedBloodUnit, AppError> {
        let repo = BloodUnitRepository::new(self.db);

        let unit = repo.create(params).await?;

        let donor_updated = match DonorRepository::new(self.db)
            .set_last_donation(unit.donor_id, unit.collection_date)
            .await
        {
            Ok(updated) => updated,
            Err(err) => {
                tracing::warn!(
                    "Failed to refresh last donation for donor {}: {}",
                    unit.donor_id,
                    err
                );
                false
            }
        };

        Ok(RecordedBloodUnit { unit, donor_updated })
    }

    /// Deletes a unit by ID; a nonexistent ID is a no-op.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = BloodUnitRepository::new(self.db);

        repo.delete(id).await.map_err(Into::into)
    }
}
