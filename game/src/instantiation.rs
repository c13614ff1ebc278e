use log::info;

use crate::config::Rules;
use crate::data::DataError;
use crate::economy::Resource;
use crate::knowledge::Knowledge;
use crate::persistence::{FarmSnapshot, FarmStorage, MemoryStorage};
use crate::{Game, Timestamp};

/// Owner of ephemeral farm played without session.
pub const DEMO_OWNER: &str = "demo";

impl Game {
    /// Loads farm of the owner or establishes a new one.
    ///
    /// New farm receives starting currency and resources from [`Rules`],
    /// `with_structures` additionally places demo structures.
    pub fn open(
        storage: &mut dyn FarmStorage,
        known: Knowledge,
        rules: Rules,
        owner: &str,
        name: &str,
        with_structures: bool,
        now: Timestamp,
    ) -> Result<Game, DataError> {
        if let Some(farm) = storage.find_farm(owner)? {
            let snapshot = FarmSnapshot::load(storage, farm)?;
            return Game::restore(known, rules, snapshot);
        }
        let farm = storage.create_farm(owner, name, now)?;
        let mut game = Game::new(known, rules, farm.profile());
        game.seed(with_structures, now)?;
        game.snapshot(now).save(storage)?;
        info!("Farm {:?} established for {}", game.profile.id, owner);
        Ok(game)
    }

    /// Farm seeded with demo structures inside throwaway in-memory storage.
    pub fn demo(known: Knowledge, rules: Rules, now: Timestamp) -> Result<Game, DataError> {
        let name = rules.fallback_farm_name.clone();
        let mut storage = MemoryStorage::default();
        Game::open(&mut storage, known, rules, DEMO_OWNER, &name, true, now)
    }

    fn seed(&mut self, with_structures: bool, now: Timestamp) -> Result<(), DataError> {
        self.economy.load_currency(self.rules.starting_currency);
        let mut resources = vec![];
        for stock in &self.rules.starting_resources {
            resources.push(Resource {
                kind: self.known.resources.get(stock.kind)?,
                quantity: stock.quantity,
                updated_at: now,
            });
        }
        self.economy.load_resources(resources);
        if with_structures {
            for placement in &self.rules.demo_structures {
                let kind = self.known.structures.get(placement.kind)?;
                let (_, place_structure) = self
                    .building
                    .place_structure(&kind, placement.cell)
                    .map_err(|error| {
                        DataError::inconsistency(format!("invalid demo structure, {:?}", error))
                    })?;
                place_structure();
            }
        }
        Ok(())
    }
}
