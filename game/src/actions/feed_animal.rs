use crate::api::{ActionError, Event};
use crate::raising::AnimalId;
use crate::{Game, Timestamp};

impl Game {
    pub(crate) fn feed_animal(
        &mut self,
        animal: AnimalId,
        now: Timestamp,
    ) -> Result<Vec<Event>, ActionError> {
        let health = self.rules.feed_health;
        let happiness = self.rules.feed_happiness;
        let (kind, feed_animal) = self.raising.feed_animal(animal, health, happiness, now)?;
        let produce = &kind.produce;
        let store_produce = self
            .economy
            .credit_resource(&produce.resource, produce.amount, now)?;
        let grant_experience = self.progression.grant_experience(kind.experience)?;
        let events = occur![feed_animal(), store_produce(), grant_experience(),];
        Ok(events)
    }
}
