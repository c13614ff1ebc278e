use crate::building::StructureId;
use crate::collections::Shared;
use crate::raising::Raising::AnimalBought;
use crate::raising::RaisingError::BarnFull;
use crate::raising::{
    Animal, AnimalId, AnimalKind, Raising, RaisingDomain, RaisingError, MAX_WELLBEING,
};
use crate::Timestamp;

impl RaisingDomain {
    pub fn buy_animal<'operation>(
        &'operation mut self,
        barn: StructureId,
        capacity: u32,
        kind: &Shared<AnimalKind>,
        name: Option<String>,
        now: Timestamp,
    ) -> Result<(AnimalId, impl FnOnce() -> Vec<Raising> + 'operation), RaisingError> {
        let occupants = self.occupants(barn).count();
        if occupants >= capacity as usize {
            return Err(BarnFull { barn, capacity });
        }
        let id = self.animals_id.introduce().one(AnimalId);
        let animal = Animal {
            id,
            kind: kind.clone(),
            barn,
            name,
            age: 0,
            health: MAX_WELLBEING,
            happiness: MAX_WELLBEING,
            last_fed: now,
            created_at: now,
        };
        let operation = move || {
            let event = AnimalBought {
                id,
                barn,
                kind: animal.kind.id,
                name: animal.name.clone(),
            };
            self.animals_id.register(id.0);
            self.animals.push(animal);
            vec![event]
        };
        Ok((id, operation))
    }
}
