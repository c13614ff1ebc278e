use crate::collections::Shared;
use crate::planting::Planting::CropHarvested;
use crate::planting::PlantingError::{CropNotFound, NotReady};
use crate::planting::{CropId, CropKind, Planting, PlantingDomain, PlantingError};
use crate::Timestamp;

impl PlantingDomain {
    /// Removes ripe crop, caller credits the harvest of returned kind.
    pub fn harvest_crop(
        &mut self,
        id: CropId,
        now: Timestamp,
    ) -> Result<(Shared<CropKind>, impl FnOnce() -> Vec<Planting> + '_), PlantingError> {
        let index = self
            .crops
            .iter()
            .position(|crop| crop.id == id)
            .ok_or(CropNotFound { id })?;
        let crop = &self.crops[index];
        if !crop.is_ready(now) {
            return Err(NotReady {
                id,
                ready_at: crop.ready_at,
                now,
            });
        }
        let kind = crop.kind.clone();
        let operation = move || {
            let crop = self.crops.remove(index);
            vec![CropHarvested {
                id,
                field: crop.field,
                kind: crop.kind.id,
                resource: crop.kind.harvest.resource.id,
                amount: crop.kind.harvest.amount,
            }]
        };
        Ok((kind, operation))
    }
}
