use serde::{Deserialize, Serialize};

use crate::api::Event;
use crate::building::{Structure, StructureId, StructureKey};
use crate::economy::ResourceKey;
use crate::model::Farm;
use crate::planting::{Crop, CropId, CropKey, CropStatus};
use crate::raising::{Animal, AnimalId, AnimalKey};
use crate::{Game, Timestamp};

/// Read-only picture of the farm for presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Overview {
    FarmAppeared {
        farm: Farm,
        progress: u32,
        threshold: u32,
    },
    ResourceAppeared {
        kind: ResourceKey,
        quantity: u32,
        buy_price: u32,
        sell_price: u32,
    },
    StructureAppeared {
        id: StructureId,
        kind: StructureKey,
        level: u32,
        cell: [usize; 2],
        capacity: Option<u32>,
        occupants: u32,
        upgrade_cost: u32,
    },
    CropAppeared {
        id: CropId,
        field: StructureId,
        kind: CropKey,
        status: CropStatus,
        ready_at: Timestamp,
        remaining: u64,
    },
    AnimalAppeared {
        id: AnimalId,
        barn: StructureId,
        kind: AnimalKey,
        name: Option<String>,
        health: u8,
        happiness: u8,
        last_fed: Timestamp,
        can_feed: bool,
    },
}

/// Entities a player can act on right now.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readiness {
    pub ready_crops: Vec<CropId>,
    pub hungry_animals: Vec<AnimalId>,
}

impl Game {
    pub fn look_at_structure(&self, structure: &Structure) -> Overview {
        Overview::StructureAppeared {
            id: structure.id,
            kind: structure.kind.id,
            level: structure.level,
            cell: structure.cell,
            capacity: structure.capacity(),
            occupants: self.occupants_of(structure),
            upgrade_cost: structure.upgrade_cost(),
        }
    }

    pub fn look_at_crop(&self, crop: &Crop, now: Timestamp) -> Overview {
        Overview::CropAppeared {
            id: crop.id,
            field: crop.field,
            kind: crop.kind.id,
            status: crop.status(now),
            ready_at: crop.ready_at,
            remaining: crop.remaining(now),
        }
    }

    pub fn look_at_animal(&self, animal: &Animal, now: Timestamp) -> Overview {
        Overview::AnimalAppeared {
            id: animal.id,
            barn: animal.barn,
            kind: animal.kind.id,
            name: animal.name.clone(),
            health: animal.health,
            happiness: animal.happiness,
            last_fed: animal.last_fed,
            can_feed: animal.can_feed(now),
        }
    }

    pub fn look_around(&self, now: Timestamp) -> Vec<Event> {
        let (progress, threshold) = self.progression.progress();
        let mut stream = vec![Overview::FarmAppeared {
            farm: self.farm(),
            progress,
            threshold,
        }];
        for key in ResourceKey::ALL {
            if let Ok(kind) = self.known.resources.get(*key) {
                stream.push(Overview::ResourceAppeared {
                    kind: kind.id,
                    quantity: self.economy.quantity(kind.id),
                    buy_price: kind.buy_price,
                    sell_price: kind.sell_price,
                });
            }
        }
        for structure in &self.building.structures {
            stream.push(self.look_at_structure(structure));
        }
        for crop in &self.planting.crops {
            stream.push(self.look_at_crop(crop, now));
        }
        for animal in &self.raising.animals {
            stream.push(self.look_at_animal(animal, now));
        }
        vec![stream.into()]
    }

    pub fn readiness(&self, now: Timestamp) -> Readiness {
        Readiness {
            ready_crops: self.planting.ready_crops(now).map(|crop| crop.id).collect(),
            hungry_animals: self
                .raising
                .hungry_animals(now)
                .map(|animal| animal.id)
                .collect(),
        }
    }

    /// Crops on a field or animals in a barn.
    pub fn occupants_of(&self, structure: &Structure) -> u32 {
        match structure.kind.id {
            StructureKey::Field => self.planting.crop_on(structure.id).map_or(0, |_| 1),
            StructureKey::Barn => self.raising.occupants(structure.id).count() as u32,
        }
    }

    /// Field holding a crop or barn at capacity.
    pub fn is_occupied(&self, structure: &Structure) -> bool {
        let occupants = self.occupants_of(structure);
        match structure.capacity() {
            Some(capacity) => occupants >= capacity,
            None => occupants > 0,
        }
    }
}
