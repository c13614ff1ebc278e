use serde::{Deserialize, Serialize};

use crate::building::StructureId;
use crate::collections::{Sequence, Shared};
use crate::economy::{Produce, ResourceKey};
use crate::Timestamp;

catalog_key!(CropKey {
    Wheat => "wheat" | "kvieciai",
    Corn => "corn" | "kukuruzai",
    Carrot => "carrot" | "morkos",
    Tomato => "tomato" | "pomidorai",
});

#[derive(Debug)]
pub struct CropKind {
    pub id: CropKey,
    pub name: String,
    /// Seconds from planting to harvest.
    pub growth: u64,
    pub cost: u32,
    /// Reference price shown to players, market trades use resource prices.
    pub sale_value: u32,
    pub experience: u32,
    pub icon: String,
    pub harvest: Produce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CropId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropStatus {
    Growing,
    ReadyToHarvest,
}

#[derive(Debug, Clone)]
pub struct Crop {
    pub id: CropId,
    pub kind: Shared<CropKind>,
    pub field: StructureId,
    pub planted_at: Timestamp,
    pub ready_at: Timestamp,
}

impl Crop {
    #[inline]
    pub fn is_ready(&self, now: Timestamp) -> bool {
        now >= self.ready_at
    }

    pub fn status(&self, now: Timestamp) -> CropStatus {
        if self.is_ready(now) {
            CropStatus::ReadyToHarvest
        } else {
            CropStatus::Growing
        }
    }

    /// Seconds left until harvest, zero once ready.
    pub fn remaining(&self, now: Timestamp) -> u64 {
        self.ready_at.saturating_sub(now)
    }
}

#[derive(Default)]
pub struct PlantingDomain {
    pub crops_id: Sequence,
    pub crops: Vec<Crop>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Planting {
    CropPlanted {
        id: CropId,
        field: StructureId,
        kind: CropKey,
        planted_at: Timestamp,
        ready_at: Timestamp,
    },
    CropHarvested {
        id: CropId,
        field: StructureId,
        kind: CropKey,
        resource: ResourceKey,
        amount: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantingError {
    CropNotFound {
        id: CropId,
    },
    NotReady {
        id: CropId,
        ready_at: Timestamp,
        now: Timestamp,
    },
    FieldOccupied {
        field: StructureId,
        crop: CropId,
    },
    NotAField {
        structure: StructureId,
    },
}
