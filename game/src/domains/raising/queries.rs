use crate::building::StructureId;
use crate::raising::{Animal, AnimalId, RaisingDomain, RaisingError};
use crate::Timestamp;

impl RaisingDomain {
    pub fn get_animal(&self, id: AnimalId) -> Result<&Animal, RaisingError> {
        self.animals
            .iter()
            .find(|animal| animal.id == id)
            .ok_or(RaisingError::AnimalNotFound { id })
    }

    pub fn get_animal_mut(&mut self, id: AnimalId) -> Result<&mut Animal, RaisingError> {
        self.animals
            .iter_mut()
            .find(|animal| animal.id == id)
            .ok_or(RaisingError::AnimalNotFound { id })
    }

    pub fn occupants(&self, barn: StructureId) -> impl Iterator<Item = &Animal> {
        self.animals.iter().filter(move |animal| animal.barn == barn)
    }

    pub fn hungry_animals(&self, now: Timestamp) -> impl Iterator<Item = &Animal> {
        self.animals.iter().filter(move |animal| animal.can_feed(now))
    }
}
