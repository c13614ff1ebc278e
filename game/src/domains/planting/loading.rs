use crate::planting::{Crop, PlantingDomain};

impl PlantingDomain {
    pub fn load_crops(&mut self, crops: Vec<Crop>) {
        for crop in &crops {
            self.crops_id.register(crop.id.0);
        }
        self.crops.extend(crops);
    }
}
