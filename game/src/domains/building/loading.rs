use crate::building::{BuildingDomain, Structure};

impl BuildingDomain {
    pub fn load_structures(&mut self, structures: Vec<Structure>) {
        for structure in &structures {
            self.structures_id.register(structure.id.0);
        }
        self.structures.extend(structures);
    }
}
