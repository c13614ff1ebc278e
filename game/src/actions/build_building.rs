use crate::api::{ActionError, Event};
use crate::building::StructureKey;
use crate::Game;

impl Game {
    pub(crate) fn build_building(
        &mut self,
        kind: StructureKey,
        cell: [usize; 2],
    ) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.structures.get(kind)?;
        let (_structure, place_structure) = self.building.place_structure(&kind, cell)?;
        let pay = self.economy.debit_currency(kind.cost)?;
        let events = occur![pay(), place_structure(),];
        Ok(events)
    }
}
