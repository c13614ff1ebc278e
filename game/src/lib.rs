pub use domains::*;

use log::debug;

use crate::api::{Action, ActionError, Event};
use crate::building::BuildingDomain;
use crate::config::Rules;
use crate::economy::EconomyDomain;
use crate::knowledge::Knowledge;
use crate::model::{Farm, FarmProfile};
use crate::planting::PlantingDomain;
use crate::progression::ProgressionDomain;
use crate::raising::RaisingDomain;

/// Converts applied domain operations into engine events.
#[macro_export]
macro_rules! occur {
    ($($event:expr),* $(,)?) => {
        vec![$($event.into()),*]
    };
}

#[macro_use]
pub mod knowledge;

mod actions;
pub mod api;
pub mod collections;
pub mod config;
pub mod data;
mod domains;
mod instantiation;
pub mod model;
pub mod persistence;
pub mod view;

pub use instantiation::DEMO_OWNER;

/// Wall-clock time in whole seconds.
pub type Timestamp = u64;

/// Simulation of one farm.
///
/// Every action validates all preconditions before the first mutation,
/// so failed action leaves the farm untouched.
pub struct Game {
    pub known: Knowledge,
    pub rules: Rules,
    pub profile: FarmProfile,
    pub economy: EconomyDomain,
    pub building: BuildingDomain,
    pub planting: PlantingDomain,
    pub raising: RaisingDomain,
    pub progression: ProgressionDomain,
}

impl Game {
    pub fn new(known: Knowledge, rules: Rules, profile: FarmProfile) -> Self {
        Self {
            economy: EconomyDomain::default(),
            building: BuildingDomain::new(rules.grid_width, rules.grid_height),
            planting: PlantingDomain::default(),
            raising: RaisingDomain::default(),
            progression: ProgressionDomain::new(rules.level_threshold),
            known,
            rules,
            profile,
        }
    }

    pub fn farm(&self) -> Farm {
        Farm {
            id: self.profile.id,
            owner: self.profile.owner.clone(),
            name: self.profile.name.clone(),
            level: self.progression.level,
            currency: self.economy.balance(),
            experience: self.progression.experience,
            created_at: self.profile.created_at,
        }
    }

    pub fn perform_action(
        &mut self,
        action: Action,
        now: Timestamp,
    ) -> Result<Vec<Event>, ActionError> {
        debug!("Farm {:?} performs {:?}", self.profile.id, action);
        match action {
            Action::BuildBuilding { kind, cell } => self.build_building(kind, cell),
            Action::UpgradeBuilding { structure } => self.upgrade_building(structure),
            Action::PlantCrop { field, kind } => self.plant_crop(field, kind, now),
            Action::HarvestCrop { crop } => self.harvest_crop(crop, now),
            Action::BuyAnimal { barn, kind, name } => self.buy_animal(barn, kind, name, now),
            Action::FeedAnimal { animal } => self.feed_animal(animal, now),
            Action::BuyResource { kind, amount } => self.buy_resource(kind, amount, now),
            Action::SellResource { kind, amount } => self.sell_resource(kind, amount, now),
            Action::HarvestAllReady => Ok(self.harvest_all_ready(now)),
            Action::FeedAllDue => Ok(self.feed_all_due(now)),
        }
    }
}
