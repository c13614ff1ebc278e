use std::collections::BTreeSet;

use log::{debug, info};

use crate::api::Event;
use crate::building::{Building, StructureId};
use crate::data::DataError;
use crate::economy::{Economy, ResourceKey};
use crate::persistence::FarmStorage;
use crate::planting::{CropId, Planting};
use crate::raising::{AnimalId, Raising};
use crate::{Game, Timestamp};

#[derive(Default)]
struct Changes {
    farm: bool,
    resources: BTreeSet<ResourceKey>,
    structures: BTreeSet<StructureId>,
    crops: BTreeSet<CropId>,
    removed_crops: BTreeSet<CropId>,
    animals: BTreeSet<AnimalId>,
}

impl Changes {
    fn collect(events: &[Event]) -> Self {
        let mut changes = Changes::default();
        for event in events {
            match event {
                Event::Economy(events) => {
                    for event in events {
                        match event {
                            Economy::CurrencyChanged { .. } => changes.farm = true,
                            Economy::ResourceChanged { kind, .. } => {
                                changes.resources.insert(*kind);
                            }
                        }
                    }
                }
                Event::Building(events) => {
                    for event in events {
                        match event {
                            Building::StructurePlaced { id, .. }
                            | Building::StructureUpgraded { id, .. } => {
                                changes.structures.insert(*id);
                            }
                        }
                    }
                }
                Event::Planting(events) => {
                    for event in events {
                        match event {
                            Planting::CropPlanted { id, field, .. } => {
                                changes.crops.insert(*id);
                                changes.structures.insert(*field);
                            }
                            Planting::CropHarvested { id, field, .. } => {
                                changes.crops.remove(id);
                                changes.removed_crops.insert(*id);
                                changes.structures.insert(*field);
                            }
                        }
                    }
                }
                Event::Raising(events) => {
                    for event in events {
                        match event {
                            Raising::AnimalBought { id, barn, .. } => {
                                changes.animals.insert(*id);
                                changes.structures.insert(*barn);
                            }
                            Raising::AnimalFed { id, .. } => {
                                changes.animals.insert(*id);
                            }
                        }
                    }
                }
                Event::Progression(events) => {
                    if !events.is_empty() {
                        changes.farm = true;
                    }
                }
                Event::Overview(_) => {}
            }
        }
        changes
    }
}

impl Game {
    /// Stores every record touched by events of performed actions.
    pub fn save_changes(
        &self,
        storage: &mut dyn FarmStorage,
        events: &[Event],
        now: Timestamp,
    ) -> Result<(), DataError> {
        let changes = Changes::collect(events);
        if changes.farm {
            storage.save_farm(&self.farm())?;
        }
        for kind in &changes.resources {
            if let Some(resource) = self.economy.get_resource(*kind) {
                storage.save_resource(&self.resource_row(resource))?;
            }
        }
        for id in &changes.structures {
            let structure = self.building.get_structure(*id).map_err(|_| {
                DataError::inconsistency(format!("changed structure {:?} not found", id))
            })?;
            storage.save_structure(&self.structure_row(structure))?;
        }
        for id in &changes.removed_crops {
            storage.delete_crop(self.profile.id, *id)?;
        }
        for id in &changes.crops {
            if let Ok(crop) = self.planting.get_crop(*id) {
                storage.save_crop(&self.crop_row(crop, now))?;
            }
        }
        for id in &changes.animals {
            let animal = self.raising.get_animal(*id).map_err(|_| {
                DataError::inconsistency(format!("changed animal {:?} not found", id))
            })?;
            storage.save_animal(&self.animal_row(animal))?;
        }
        debug!(
            "Farm {:?} changes saved: {} resources, {} structures, {} crops, {} animals",
            self.profile.id,
            changes.resources.len(),
            changes.structures.len(),
            changes.crops.len() + changes.removed_crops.len(),
            changes.animals.len()
        );
        Ok(())
    }

    /// Stores every record of the farm and drops stored crops harvested meanwhile,
    /// used when earlier write back was interrupted.
    pub fn save_all(
        &self,
        storage: &mut dyn FarmStorage,
        now: Timestamp,
    ) -> Result<(), DataError> {
        self.snapshot(now).save(storage)?;
        for row in storage.find_crops(self.profile.id)? {
            if self.planting.get_crop(row.id).is_err() {
                storage.delete_crop(self.profile.id, row.id)?;
            }
        }
        info!("Farm {:?} saved entirely", self.profile.id);
        Ok(())
    }
}
