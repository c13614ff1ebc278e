use crate::raising::{Animal, RaisingDomain};

impl RaisingDomain {
    pub fn load_animals(&mut self, animals: Vec<Animal>) {
        for animal in &animals {
            self.animals_id.register(animal.id.0);
        }
        self.animals.extend(animals);
    }
}
