use serde::{Deserialize, Serialize};

use crate::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FarmId(pub usize);

/// Identity of a farm, the part not owned by any domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmProfile {
    pub id: FarmId,
    pub owner: String,
    pub name: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farm {
    pub id: FarmId,
    pub owner: String,
    pub name: String,
    pub level: u32,
    pub currency: u32,
    pub experience: u32,
    pub created_at: Timestamp,
}

impl Farm {
    pub fn profile(&self) -> FarmProfile {
        FarmProfile {
            id: self.id,
            owner: self.owner.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }
}
