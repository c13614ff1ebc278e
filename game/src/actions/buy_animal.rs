use crate::api::{ActionError, Event};
use crate::building::StructureId;
use crate::raising::{AnimalKey, RaisingError};
use crate::{Game, Timestamp};

impl Game {
    pub(crate) fn buy_animal(
        &mut self,
        barn: StructureId,
        kind: AnimalKey,
        name: Option<String>,
        now: Timestamp,
    ) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.animals.get(kind)?;
        let capacity = self
            .building
            .get_structure(barn)?
            .capacity()
            .ok_or(RaisingError::NotABarn { structure: barn })?;
        let pay = self.economy.debit_currency(kind.cost)?;
        let (_animal, buy_animal) = self.raising.buy_animal(barn, capacity, &kind, name, now)?;
        let events = occur![pay(), buy_animal(),];
        Ok(events)
    }
}
