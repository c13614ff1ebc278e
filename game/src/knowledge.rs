use log::info;
use serde::{Deserialize, Serialize};

use crate::building::{LevelScale, StructureKey, StructureKind};
use crate::collections::Dictionary;
use crate::data::DataError;
use crate::economy::{Produce, ResourceKey, ResourceKind};
use crate::planting::{CropKey, CropKind};
use crate::raising::{AnimalKey, AnimalKind};

/// Declares closed catalog key with canonical identifier and accepted aliases.
macro_rules! catalog_key {
    ($name:ident { $($variant:ident => $key:literal $(| $alias:literal)*),+ $(,)? }) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $key $(, alias = $alias)*)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::knowledge::CatalogError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($key $(| $alias)* => Ok($name::$variant),)+
                    _ => Err($crate::knowledge::CatalogError::UnknownCatalogKey {
                        key: value.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

const STANDARD_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogError {
    UnknownCatalogKey { key: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::UnknownCatalogKey { key } => write!(f, "unknown catalog key {:?}", key),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Clone, Default)]
pub struct Knowledge {
    pub resources: Dictionary<ResourceKey, ResourceKind>,
    pub structures: Dictionary<StructureKey, StructureKind>,
    pub crops: Dictionary<CropKey, CropKind>,
    pub animals: Dictionary<AnimalKey, AnimalKind>,
}

#[derive(Deserialize)]
struct CatalogDefinition {
    resources: Vec<ResourceDefinition>,
    structures: Vec<StructureDefinition>,
    crops: Vec<CropDefinition>,
    animals: Vec<AnimalDefinition>,
}

#[derive(Deserialize)]
struct ResourceDefinition {
    key: ResourceKey,
    name: String,
    buy_price: u32,
    sell_price: u32,
}

#[derive(Deserialize)]
struct StructureDefinition {
    key: StructureKey,
    name: String,
    cost: u32,
    upgrade: LevelScale,
    #[serde(default)]
    capacity: Option<LevelScale>,
    icon: String,
}

#[derive(Deserialize)]
struct ProduceDefinition {
    resource: ResourceKey,
    amount: u32,
}

#[derive(Deserialize)]
struct CropDefinition {
    key: CropKey,
    name: String,
    growth: u64,
    cost: u32,
    sale_value: u32,
    experience: u32,
    icon: String,
    harvest: ProduceDefinition,
}

#[derive(Deserialize)]
struct AnimalDefinition {
    key: AnimalKey,
    name: String,
    cost: u32,
    feed_interval: u64,
    experience: u32,
    icon: String,
    produce: ProduceDefinition,
}

impl Knowledge {
    /// Catalog shipped with the game.
    pub fn standard() -> Result<Self, DataError> {
        Self::from_json(STANDARD_CATALOG)
    }

    pub fn from_json(data: &str) -> Result<Self, DataError> {
        let definition: CatalogDefinition = serde_json::from_str(data)?;
        let mut known = Knowledge::default();
        for resource in definition.resources {
            known.resources.insert(
                resource.key,
                ResourceKind {
                    id: resource.key,
                    name: resource.name,
                    buy_price: resource.buy_price,
                    sell_price: resource.sell_price,
                },
            );
        }
        for structure in definition.structures {
            ensure_positive(structure.key, "cost", structure.cost)?;
            ensure_positive(structure.key, "upgrade", structure.upgrade.base)?;
            known.structures.insert(
                structure.key,
                StructureKind {
                    id: structure.key,
                    name: structure.name,
                    cost: structure.cost,
                    upgrade: structure.upgrade,
                    capacity: structure.capacity,
                    icon: structure.icon,
                },
            );
        }
        for crop in definition.crops {
            ensure_positive(crop.key, "cost", crop.cost)?;
            ensure_positive(crop.key, "harvest", crop.harvest.amount)?;
            let harvest = known.produce(crop.harvest)?;
            known.crops.insert(
                crop.key,
                CropKind {
                    id: crop.key,
                    name: crop.name,
                    growth: crop.growth,
                    cost: crop.cost,
                    sale_value: crop.sale_value,
                    experience: crop.experience,
                    icon: crop.icon,
                    harvest,
                },
            );
        }
        for animal in definition.animals {
            ensure_positive(animal.key, "cost", animal.cost)?;
            ensure_positive(animal.key, "produce", animal.produce.amount)?;
            let produce = known.produce(animal.produce)?;
            known.animals.insert(
                animal.key,
                AnimalKind {
                    id: animal.key,
                    name: animal.name,
                    cost: animal.cost,
                    feed_interval: animal.feed_interval,
                    experience: animal.experience,
                    icon: animal.icon,
                    produce,
                },
            );
        }
        info!(
            "Catalog loaded: {} resources, {} structures, {} crops, {} animals",
            known.resources.len(),
            known.structures.len(),
            known.crops.len(),
            known.animals.len()
        );
        Ok(known)
    }

    fn produce(&self, definition: ProduceDefinition) -> Result<Produce, CatalogError> {
        Ok(Produce {
            resource: self.resources.get(definition.resource)?,
            amount: definition.amount,
        })
    }
}

/// Zero prices and yields would turn into invalid ledger amounts.
fn ensure_positive<K: std::fmt::Display>(key: K, field: &str, value: u32) -> Result<(), DataError> {
    if value == 0 {
        return Err(DataError::inconsistency(format!(
            "catalog entry {} has zero {}",
            key, field
        )));
    }
    Ok(())
}
