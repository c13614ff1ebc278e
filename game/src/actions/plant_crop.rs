use crate::api::{ActionError, Event};
use crate::building::{StructureId, StructureKey};
use crate::planting::{CropKey, PlantingError};
use crate::{Game, Timestamp};

impl Game {
    pub(crate) fn plant_crop(
        &mut self,
        field: StructureId,
        kind: CropKey,
        now: Timestamp,
    ) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.crops.get(kind)?;
        let structure = self.building.get_structure(field)?;
        if structure.kind.id != StructureKey::Field {
            return Err(PlantingError::NotAField { structure: field }.into());
        }
        let pay = self.economy.debit_currency(kind.cost)?;
        let (_crop, plant_crop) = self.planting.plant_crop(field, &kind, now)?;
        let events = occur![pay(), plant_crop(),];
        Ok(events)
    }
}
