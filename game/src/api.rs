use serde::{Deserialize, Serialize};

use crate::building::{Building, BuildingError, StructureId, StructureKey};
use crate::economy::{Economy, EconomyError, ResourceKey};
use crate::knowledge::CatalogError;
use crate::planting::{CropId, CropKey, Planting, PlantingError};
use crate::progression::{Progression, ProgressionError};
use crate::raising::{AnimalId, AnimalKey, Raising, RaisingError};
use crate::view::Overview;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    BuildBuilding {
        kind: StructureKey,
        cell: [usize; 2],
    },
    UpgradeBuilding {
        structure: StructureId,
    },
    PlantCrop {
        field: StructureId,
        kind: CropKey,
    },
    HarvestCrop {
        crop: CropId,
    },
    BuyAnimal {
        barn: StructureId,
        kind: AnimalKey,
        name: Option<String>,
    },
    FeedAnimal {
        animal: AnimalId,
    },
    BuyResource {
        kind: ResourceKey,
        amount: u32,
    },
    SellResource {
        kind: ResourceKey,
        amount: u32,
    },
    HarvestAllReady,
    FeedAllDue,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::BuildBuilding { .. } => "build_building",
            Action::UpgradeBuilding { .. } => "upgrade_building",
            Action::PlantCrop { .. } => "plant_crop",
            Action::HarvestCrop { .. } => "harvest_crop",
            Action::BuyAnimal { .. } => "buy_animal",
            Action::FeedAnimal { .. } => "feed_animal",
            Action::BuyResource { .. } => "buy_resource",
            Action::SellResource { .. } => "sell_resource",
            Action::HarvestAllReady => "harvest_all_ready",
            Action::FeedAllDue => "feed_all_due",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Economy(Vec<Economy>),
    Building(Vec<Building>),
    Planting(Vec<Planting>),
    Raising(Vec<Raising>),
    Progression(Vec<Progression>),
    Overview(Vec<Overview>),
}

impl From<Vec<Economy>> for Event {
    fn from(events: Vec<Economy>) -> Self {
        Self::Economy(events)
    }
}

impl From<Vec<Building>> for Event {
    fn from(events: Vec<Building>) -> Self {
        Self::Building(events)
    }
}

impl From<Vec<Planting>> for Event {
    fn from(events: Vec<Planting>) -> Self {
        Self::Planting(events)
    }
}

impl From<Vec<Raising>> for Event {
    fn from(events: Vec<Raising>) -> Self {
        Self::Raising(events)
    }
}

impl From<Vec<Progression>> for Event {
    fn from(events: Vec<Progression>) -> Self {
        Self::Progression(events)
    }
}

impl From<Vec<Overview>> for Event {
    fn from(events: Vec<Overview>) -> Self {
        Self::Overview(events)
    }
}

/// Business rule violated by an action, no state is changed when returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    UnknownCatalogKey,
    InvalidAmount,
    InsufficientResource,
    InsufficientFunds,
    CellOccupied,
    OutOfBounds,
    NotFound,
    NotReady,
    BarnFull,
    FieldOccupied,
    WrongStructure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionError {
    Catalog(CatalogError),
    Economy(EconomyError),
    Building(BuildingError),
    Planting(PlantingError),
    Raising(RaisingError),
    Progression(ProgressionError),
}

impl ActionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::Catalog(CatalogError::UnknownCatalogKey { .. }) => {
                ErrorKind::UnknownCatalogKey
            }
            ActionError::Economy(error) => match error {
                EconomyError::InvalidAmount { .. } => ErrorKind::InvalidAmount,
                EconomyError::QuantityOverflow { .. } => ErrorKind::InvalidAmount,
                EconomyError::InsufficientResource { .. } => ErrorKind::InsufficientResource,
                EconomyError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            },
            ActionError::Building(error) => match error {
                BuildingError::StructureNotFound { .. } => ErrorKind::NotFound,
                BuildingError::CellOccupied { .. } => ErrorKind::CellOccupied,
                BuildingError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            },
            ActionError::Planting(error) => match error {
                PlantingError::CropNotFound { .. } => ErrorKind::NotFound,
                PlantingError::NotReady { .. } => ErrorKind::NotReady,
                PlantingError::FieldOccupied { .. } => ErrorKind::FieldOccupied,
                PlantingError::NotAField { .. } => ErrorKind::WrongStructure,
            },
            ActionError::Raising(error) => match error {
                RaisingError::AnimalNotFound { .. } => ErrorKind::NotFound,
                RaisingError::BarnFull { .. } => ErrorKind::BarnFull,
                RaisingError::NotABarn { .. } => ErrorKind::WrongStructure,
            },
            ActionError::Progression(ProgressionError::ExperienceOverflow { .. }) => {
                ErrorKind::InvalidAmount
            }
        }
    }
}

impl From<CatalogError> for ActionError {
    fn from(error: CatalogError) -> Self {
        Self::Catalog(error)
    }
}

impl From<EconomyError> for ActionError {
    fn from(error: EconomyError) -> Self {
        Self::Economy(error)
    }
}

impl From<BuildingError> for ActionError {
    fn from(error: BuildingError) -> Self {
        Self::Building(error)
    }
}

impl From<PlantingError> for ActionError {
    fn from(error: PlantingError) -> Self {
        Self::Planting(error)
    }
}

impl From<RaisingError> for ActionError {
    fn from(error: RaisingError) -> Self {
        Self::Raising(error)
    }
}

impl From<ProgressionError> for ActionError {
    fn from(error: ProgressionError) -> Self {
        Self::Progression(error)
    }
}
