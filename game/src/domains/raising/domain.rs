use serde::{Deserialize, Serialize};

use crate::building::StructureId;
use crate::collections::{Sequence, Shared};
use crate::economy::Produce;
use crate::Timestamp;

pub const MAX_WELLBEING: u8 = 100;

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

catalog_key!(AnimalKey {
    Cow => "cow" | "karve",
    Chicken => "chicken" | "vista",
    Pig => "pig" | "kiaule",
});

#[derive(Debug)]
pub struct AnimalKind {
    pub id: AnimalKey,
    pub name: String,
    pub cost: u32,
    /// Seconds between feedings.
    pub feed_interval: u64,
    pub experience: u32,
    pub icon: String,
    pub produce: Produce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimalId(pub usize);

#[derive(Debug, Clone)]
pub struct Animal {
    pub id: AnimalId,
    pub kind: Shared<AnimalKind>,
    pub barn: StructureId,
    pub name: Option<String>,
    /// Whole days since purchase, refreshed on feeding.
    pub age: u32,
    pub health: u8,
    pub happiness: u8,
    pub last_fed: Timestamp,
    pub created_at: Timestamp,
}

impl Animal {
    pub fn next_feeding(&self) -> Timestamp {
        self.last_fed.saturating_add(self.kind.feed_interval)
    }

    /// Engine never refuses feeding, callers use this to gate it.
    #[inline]
    pub fn can_feed(&self, now: Timestamp) -> bool {
        now >= self.next_feeding()
    }
}

#[derive(Default)]
pub struct RaisingDomain {
    pub animals_id: Sequence,
    pub animals: Vec<Animal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Raising {
    AnimalBought {
        id: AnimalId,
        barn: StructureId,
        kind: AnimalKey,
        name: Option<String>,
    },
    AnimalFed {
        id: AnimalId,
        age: u32,
        health: u8,
        happiness: u8,
        last_fed: Timestamp,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaisingError {
    AnimalNotFound { id: AnimalId },
    BarnFull { barn: StructureId, capacity: u32 },
    NotABarn { structure: StructureId },
}
