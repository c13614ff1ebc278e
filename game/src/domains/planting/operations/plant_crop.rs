use crate::building::StructureId;
use crate::collections::Shared;
use crate::planting::Planting::CropPlanted;
use crate::planting::PlantingError::FieldOccupied;
use crate::planting::{Crop, CropId, CropKind, Planting, PlantingDomain, PlantingError};
use crate::Timestamp;

impl PlantingDomain {
    pub fn plant_crop<'operation>(
        &'operation mut self,
        field: StructureId,
        kind: &Shared<CropKind>,
        now: Timestamp,
    ) -> Result<(CropId, impl FnOnce() -> Vec<Planting> + 'operation), PlantingError> {
        if let Some(crop) = self.crop_on(field) {
            return Err(FieldOccupied {
                field,
                crop: crop.id,
            });
        }
        let id = self.crops_id.introduce().one(CropId);
        let crop = Crop {
            id,
            kind: kind.clone(),
            field,
            planted_at: now,
            ready_at: now.saturating_add(kind.growth),
        };
        let operation = move || {
            let event = CropPlanted {
                id,
                field,
                kind: crop.kind.id,
                planted_at: crop.planted_at,
                ready_at: crop.ready_at,
            };
            self.crops_id.register(id.0);
            self.crops.push(crop);
            vec![event]
        };
        Ok((id, operation))
    }
}
