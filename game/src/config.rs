use serde::{Deserialize, Serialize};

use crate::building::StructureKey;
use crate::data::DataError;
use crate::economy::ResourceKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub kind: ResourceKey,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: StructureKey,
    pub cell: [usize; 2],
}

/// Tunable game rules, everything that is not a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Experience required for every next level.
    pub level_threshold: u32,
    pub feed_health: u8,
    pub feed_happiness: u8,
    pub starting_currency: u32,
    pub starting_resources: Vec<Stock>,
    /// Structures given to ephemeral demo farm only.
    pub demo_structures: Vec<Placement>,
    pub fallback_farm_name: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            grid_width: 4,
            grid_height: 4,
            level_threshold: 100,
            feed_health: 10,
            feed_happiness: 20,
            starting_currency: 1000,
            starting_resources: vec![
                Stock {
                    kind: ResourceKey::Grain,
                    quantity: 50,
                },
                Stock {
                    kind: ResourceKey::Fruit,
                    quantity: 20,
                },
                Stock {
                    kind: ResourceKey::Milk,
                    quantity: 10,
                },
                Stock {
                    kind: ResourceKey::Eggs,
                    quantity: 15,
                },
                Stock {
                    kind: ResourceKey::Meat,
                    quantity: 5,
                },
            ],
            demo_structures: vec![
                Placement {
                    kind: StructureKey::Field,
                    cell: [0, 0],
                },
                Placement {
                    kind: StructureKey::Barn,
                    cell: [1, 0],
                },
            ],
            fallback_farm_name: "Mano ūkis".to_string(),
        }
    }
}

impl Rules {
    pub fn from_json(data: &str) -> Result<Self, DataError> {
        let rules = serde_json::from_str(data)?;
        Ok(rules)
    }
}
