use crate::building::StructureId;
use crate::planting::{Crop, CropId, PlantingDomain, PlantingError};
use crate::Timestamp;

impl PlantingDomain {
    pub fn get_crop(&self, id: CropId) -> Result<&Crop, PlantingError> {
        self.crops
            .iter()
            .find(|crop| crop.id == id)
            .ok_or(PlantingError::CropNotFound { id })
    }

    pub fn crop_on(&self, field: StructureId) -> Option<&Crop> {
        self.crops.iter().find(|crop| crop.field == field)
    }

    pub fn ready_crops(&self, now: Timestamp) -> impl Iterator<Item = &Crop> {
        self.crops.iter().filter(move |crop| crop.is_ready(now))
    }
}
