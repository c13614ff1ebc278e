use crate::collections::Shared;
use crate::raising::Raising::AnimalFed;
use crate::raising::{
    AnimalId, AnimalKind, Raising, RaisingDomain, RaisingError, MAX_WELLBEING, SECONDS_PER_DAY,
};
use crate::Timestamp;

impl RaisingDomain {
    /// Feeding is allowed regardless of cooldown, see [`crate::raising::Animal::can_feed`].
    pub fn feed_animal(
        &mut self,
        id: AnimalId,
        health: u8,
        happiness: u8,
        now: Timestamp,
    ) -> Result<(Shared<AnimalKind>, impl FnOnce() -> Vec<Raising> + '_), RaisingError> {
        let animal = self.get_animal_mut(id)?;
        let kind = animal.kind.clone();
        let operation = move || {
            animal.health = animal.health.saturating_add(health).min(MAX_WELLBEING);
            animal.happiness = animal
                .happiness
                .saturating_add(happiness)
                .min(MAX_WELLBEING);
            animal.last_fed = now;
            animal.age = (now.saturating_sub(animal.created_at) / SECONDS_PER_DAY) as u32;
            vec![AnimalFed {
                id,
                age: animal.age,
                health: animal.health,
                happiness: animal.happiness,
                last_fed: now,
            }]
        };
        Ok((kind, operation))
    }
}
