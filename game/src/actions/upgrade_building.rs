use crate::api::{ActionError, Event};
use crate::building::StructureId;
use crate::Game;

impl Game {
    pub(crate) fn upgrade_building(
        &mut self,
        structure: StructureId,
    ) -> Result<Vec<Event>, ActionError> {
        let (cost, upgrade_structure) = self.building.upgrade_structure(structure)?;
        let pay = self.economy.debit_currency(cost)?;
        let events = occur![pay(), upgrade_structure(),];
        Ok(events)
    }
}
