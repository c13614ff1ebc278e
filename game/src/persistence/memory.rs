use crate::collections::Sequence;
use crate::data::DataError;
use crate::model::{Farm, FarmId};
use crate::persistence::{AnimalRow, CropRow, FarmStorage, ResourceRow, StructureRow};
use crate::planting::CropId;
use crate::Timestamp;

/// Storage living as long as the process, backs demo farms.
#[derive(Default)]
pub struct MemoryStorage {
    farms_id: Sequence,
    farms: Vec<Farm>,
    resources: Vec<ResourceRow>,
    structures: Vec<StructureRow>,
    crops: Vec<CropRow>,
    animals: Vec<AnimalRow>,
}

fn upsert<T: Clone>(rows: &mut Vec<T>, row: &T, same: impl Fn(&T) -> bool) {
    match rows.iter_mut().find(|stored| same(stored)) {
        Some(stored) => *stored = row.clone(),
        None => rows.push(row.clone()),
    }
}

fn select<T: Clone>(rows: &[T], filter: impl Fn(&T) -> bool) -> Vec<T> {
    rows.iter().filter(|row| filter(row)).cloned().collect()
}

impl FarmStorage for MemoryStorage {
    fn find_farm(&self, owner: &str) -> Result<Option<Farm>, DataError> {
        Ok(self.farms.iter().find(|farm| farm.owner == owner).cloned())
    }

    fn create_farm(&mut self, owner: &str, name: &str, now: Timestamp) -> Result<Farm, DataError> {
        if self.farms.iter().any(|farm| farm.owner == owner) {
            return Err(DataError::inconsistency(format!(
                "owner {} already has a farm",
                owner
            )));
        }
        let farm = Farm {
            id: self.farms_id.one(FarmId),
            owner: owner.to_string(),
            name: name.to_string(),
            level: 1,
            currency: 0,
            experience: 0,
            created_at: now,
        };
        self.farms.push(farm.clone());
        Ok(farm)
    }

    fn save_farm(&mut self, farm: &Farm) -> Result<(), DataError> {
        upsert(&mut self.farms, farm, |stored| stored.id == farm.id);
        Ok(())
    }

    fn find_resources(&self, farm: FarmId) -> Result<Vec<ResourceRow>, DataError> {
        Ok(select(&self.resources, |row| row.farm == farm))
    }

    fn save_resource(&mut self, row: &ResourceRow) -> Result<(), DataError> {
        upsert(&mut self.resources, row, |stored| {
            stored.farm == row.farm && stored.kind == row.kind
        });
        Ok(())
    }

    fn find_structures(&self, farm: FarmId) -> Result<Vec<StructureRow>, DataError> {
        Ok(select(&self.structures, |row| row.farm == farm))
    }

    fn save_structure(&mut self, row: &StructureRow) -> Result<(), DataError> {
        upsert(&mut self.structures, row, |stored| {
            stored.farm == row.farm && stored.id == row.id
        });
        Ok(())
    }

    fn find_crops(&self, farm: FarmId) -> Result<Vec<CropRow>, DataError> {
        Ok(select(&self.crops, |row| row.farm == farm))
    }

    fn save_crop(&mut self, row: &CropRow) -> Result<(), DataError> {
        upsert(&mut self.crops, row, |stored| {
            stored.farm == row.farm && stored.id == row.id
        });
        Ok(())
    }

    fn delete_crop(&mut self, farm: FarmId, crop: CropId) -> Result<(), DataError> {
        self.crops.retain(|row| !(row.farm == farm && row.id == crop));
        Ok(())
    }

    fn find_animals(&self, farm: FarmId) -> Result<Vec<AnimalRow>, DataError> {
        Ok(select(&self.animals, |row| row.farm == farm))
    }

    fn save_animal(&mut self, row: &AnimalRow) -> Result<(), DataError> {
        upsert(&mut self.animals, row, |stored| {
            stored.farm == row.farm && stored.id == row.id
        });
        Ok(())
    }
}
