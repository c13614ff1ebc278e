use crate::api::{ActionError, Event};
use crate::planting::CropId;
use crate::{Game, Timestamp};

impl Game {
    pub(crate) fn harvest_crop(
        &mut self,
        crop: CropId,
        now: Timestamp,
    ) -> Result<Vec<Event>, ActionError> {
        let (kind, harvest_crop) = self.planting.harvest_crop(crop, now)?;
        let harvest = &kind.harvest;
        let store_harvest = self
            .economy
            .credit_resource(&harvest.resource, harvest.amount, now)?;
        let grant_experience = self.progression.grant_experience(kind.experience)?;
        let events = occur![harvest_crop(), store_harvest(), grant_experience(),];
        Ok(events)
    }
}
