use serde::{Deserialize, Serialize};

use crate::building::{StructureId, StructureKey};
use crate::economy::ResourceKey;
use crate::model::{Farm, FarmId};
use crate::planting::{CropId, CropKey, CropStatus};
use crate::raising::{AnimalId, AnimalKey};
use crate::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRow {
    pub farm: FarmId,
    pub kind: ResourceKey,
    pub quantity: u32,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureRow {
    pub farm: FarmId,
    pub id: StructureId,
    pub kind: StructureKey,
    pub level: u32,
    pub x: usize,
    pub y: usize,
    /// No room left for another crop or animal, recomputed on every save.
    pub occupied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRow {
    pub farm: FarmId,
    pub id: CropId,
    pub field: StructureId,
    pub kind: CropKey,
    pub planted_at: Timestamp,
    pub ready_at: Timestamp,
    /// Status at the moment of save, informational only.
    pub status: CropStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRow {
    pub farm: FarmId,
    pub id: AnimalId,
    pub barn: StructureId,
    pub kind: AnimalKey,
    pub name: Option<String>,
    pub age: u32,
    pub health: u8,
    pub happiness: u8,
    pub last_fed: Timestamp,
    pub created_at: Timestamp,
}

/// All stored records of one farm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmSnapshot {
    pub farm: Farm,
    pub resources: Vec<ResourceRow>,
    pub structures: Vec<StructureRow>,
    pub crops: Vec<CropRow>,
    pub animals: Vec<AnimalRow>,
}
