use log::info;

use crate::data::DataError;
use crate::model::{Farm, FarmId};
use crate::persistence::{AnimalRow, CropRow, FarmSnapshot, ResourceRow, StructureRow};
use crate::planting::CropId;
use crate::Timestamp;

/// Durable home of farms, last write wins per record.
pub trait FarmStorage: Send {
    fn find_farm(&self, owner: &str) -> Result<Option<Farm>, DataError>;

    /// Registers new farm with level 1 and no currency.
    fn create_farm(&mut self, owner: &str, name: &str, now: Timestamp) -> Result<Farm, DataError>;

    fn save_farm(&mut self, farm: &Farm) -> Result<(), DataError>;

    fn find_resources(&self, farm: FarmId) -> Result<Vec<ResourceRow>, DataError>;

    fn save_resource(&mut self, row: &ResourceRow) -> Result<(), DataError>;

    fn find_structures(&self, farm: FarmId) -> Result<Vec<StructureRow>, DataError>;

    fn save_structure(&mut self, row: &StructureRow) -> Result<(), DataError>;

    fn find_crops(&self, farm: FarmId) -> Result<Vec<CropRow>, DataError>;

    fn save_crop(&mut self, row: &CropRow) -> Result<(), DataError>;

    fn delete_crop(&mut self, farm: FarmId, crop: CropId) -> Result<(), DataError>;

    fn find_animals(&self, farm: FarmId) -> Result<Vec<AnimalRow>, DataError>;

    fn save_animal(&mut self, row: &AnimalRow) -> Result<(), DataError>;
}

impl FarmSnapshot {
    pub fn load(storage: &dyn FarmStorage, farm: Farm) -> Result<Self, DataError> {
        info!("Begin farm {:?} loading", farm.id);
        let snapshot = FarmSnapshot {
            resources: storage.find_resources(farm.id)?,
            structures: storage.find_structures(farm.id)?,
            crops: storage.find_crops(farm.id)?,
            animals: storage.find_animals(farm.id)?,
            farm,
        };
        info!(
            "End farm {:?} loading: {} resources, {} structures, {} crops, {} animals",
            snapshot.farm.id,
            snapshot.resources.len(),
            snapshot.structures.len(),
            snapshot.crops.len(),
            snapshot.animals.len()
        );
        Ok(snapshot)
    }

    pub fn save(&self, storage: &mut dyn FarmStorage) -> Result<(), DataError> {
        storage.save_farm(&self.farm)?;
        for row in &self.resources {
            storage.save_resource(row)?;
        }
        for row in &self.structures {
            storage.save_structure(row)?;
        }
        for row in &self.crops {
            storage.save_crop(row)?;
        }
        for row in &self.animals {
            storage.save_animal(row)?;
        }
        Ok(())
    }
}
