use serde::{Deserialize, Serialize};

use crate::collections::{Sequence, Shared};

catalog_key!(StructureKey {
    Field => "field" | "laukas",
    Barn => "barn" | "tvartas",
});

/// Linear function of structure level: `base` at level 1, plus `step` per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelScale {
    pub base: u32,
    pub step: u32,
}

impl LevelScale {
    pub fn at(&self, level: u32) -> u32 {
        let level = level.max(1);
        self.base
            .saturating_add(self.step.saturating_mul(level - 1))
    }
}

#[derive(Debug)]
pub struct StructureKind {
    pub id: StructureKey,
    pub name: String,
    pub cost: u32,
    pub upgrade: LevelScale,
    /// Only structures housing animals have capacity.
    pub capacity: Option<LevelScale>,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StructureId(pub usize);

#[derive(Debug, Clone)]
pub struct Structure {
    pub id: StructureId,
    pub kind: Shared<StructureKind>,
    pub level: u32,
    pub cell: [usize; 2],
}

impl Structure {
    pub fn capacity(&self) -> Option<u32> {
        self.kind.capacity.map(|capacity| capacity.at(self.level))
    }

    /// Cost to raise structure to the next level.
    pub fn upgrade_cost(&self) -> u32 {
        self.kind.upgrade.at(self.level)
    }
}

pub struct BuildingDomain {
    pub width: usize,
    pub height: usize,
    pub structures_id: Sequence,
    pub structures: Vec<Structure>,
}

impl BuildingDomain {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            structures_id: Sequence::default(),
            structures: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Building {
    StructurePlaced {
        id: StructureId,
        kind: StructureKey,
        level: u32,
        cell: [usize; 2],
    },
    StructureUpgraded {
        id: StructureId,
        level: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingError {
    StructureNotFound {
        id: StructureId,
    },
    CellOccupied {
        cell: [usize; 2],
        structure: StructureId,
    },
    OutOfBounds {
        cell: [usize; 2],
        width: usize,
        height: usize,
    },
}
