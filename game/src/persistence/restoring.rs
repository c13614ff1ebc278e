use log::{info, warn};

use crate::building::{Structure, StructureId, StructureKey};
use crate::config::Rules;
use crate::data::DataError;
use crate::economy::Resource;
use crate::knowledge::Knowledge;
use crate::persistence::{AnimalRow, CropRow, FarmSnapshot, ResourceRow, StructureRow};
use crate::planting::Crop;
use crate::raising::{Animal, MAX_WELLBEING};
use crate::{Game, Timestamp};

impl Game {
    /// Rebuilds farm from stored records, catalog kinds are resolved again.
    pub fn restore(
        known: Knowledge,
        rules: Rules,
        snapshot: FarmSnapshot,
    ) -> Result<Game, DataError> {
        let mut game = Game::new(known, rules, snapshot.farm.profile());
        game.economy.load_currency(snapshot.farm.currency);
        game.progression
            .load_experience(snapshot.farm.experience, snapshot.farm.level);

        let mut resources = Vec::with_capacity(snapshot.resources.len());
        for row in snapshot.resources {
            resources.push(Resource {
                kind: game.known.resources.get(row.kind)?,
                quantity: row.quantity,
                updated_at: row.updated_at,
            });
        }
        game.economy.load_resources(resources);

        let mut structures: Vec<Structure> = Vec::with_capacity(snapshot.structures.len());
        for row in snapshot.structures {
            let cell = [row.x, row.y];
            if !game.building.contains(cell) {
                return Err(DataError::inconsistency(format!(
                    "structure {:?} lies outside of grid at {:?}",
                    row.id, cell
                )));
            }
            if let Some(other) = structures.iter().find(|structure| structure.cell == cell) {
                return Err(DataError::inconsistency(format!(
                    "structures {:?} and {:?} share cell {:?}",
                    other.id, row.id, cell
                )));
            }
            structures.push(Structure {
                id: row.id,
                kind: game.known.structures.get(row.kind)?,
                level: row.level.max(1),
                cell,
            });
        }
        game.building.load_structures(structures);

        let mut crops: Vec<Crop> = Vec::with_capacity(snapshot.crops.len());
        for row in snapshot.crops {
            let field = game.stored_structure(row.field)?;
            if field.kind.id != StructureKey::Field {
                return Err(DataError::inconsistency(format!(
                    "crop {:?} grows on {:?} which is not a field",
                    row.id, row.field
                )));
            }
            if let Some(other) = crops.iter().find(|crop| crop.field == row.field) {
                return Err(DataError::inconsistency(format!(
                    "crops {:?} and {:?} share field {:?}",
                    other.id, row.id, row.field
                )));
            }
            let kind = game.known.crops.get(row.kind)?;
            let ready_at = row.planted_at.saturating_add(kind.growth);
            if ready_at != row.ready_at {
                warn!(
                    "Crop {:?} stored ready at {} but grows until {}",
                    row.id, row.ready_at, ready_at
                );
            }
            crops.push(Crop {
                id: row.id,
                kind,
                field: row.field,
                planted_at: row.planted_at,
                ready_at,
            });
        }
        game.planting.load_crops(crops);

        let mut animals: Vec<Animal> = Vec::with_capacity(snapshot.animals.len());
        for row in snapshot.animals {
            let capacity = game.stored_structure(row.barn)?.capacity().ok_or_else(|| {
                DataError::inconsistency(format!(
                    "animal {:?} lives in {:?} which is not a barn",
                    row.id, row.barn
                ))
            })?;
            let occupants = animals.iter().filter(|animal| animal.barn == row.barn).count();
            if occupants >= capacity as usize {
                return Err(DataError::inconsistency(format!(
                    "barn {:?} holds more than {} animals",
                    row.barn, capacity
                )));
            }
            if row.health > MAX_WELLBEING || row.happiness > MAX_WELLBEING {
                warn!(
                    "Animal {:?} stored with health {} and happiness {}, clamped to {}",
                    row.id, row.health, row.happiness, MAX_WELLBEING
                );
            }
            animals.push(Animal {
                id: row.id,
                kind: game.known.animals.get(row.kind)?,
                barn: row.barn,
                name: row.name,
                age: row.age,
                health: row.health.min(MAX_WELLBEING),
                happiness: row.happiness.min(MAX_WELLBEING),
                last_fed: row.last_fed,
                created_at: row.created_at,
            });
        }
        game.raising.load_animals(animals);

        info!(
            "Farm {:?} of {} restored at level {}",
            game.profile.id, game.profile.owner, game.progression.level
        );
        Ok(game)
    }

    fn stored_structure(&self, id: StructureId) -> Result<&Structure, DataError> {
        self.building
            .get_structure(id)
            .map_err(|_| DataError::inconsistency(format!("structure {:?} not found", id)))
    }

    pub fn snapshot(&self, now: Timestamp) -> FarmSnapshot {
        let mut resources: Vec<ResourceRow> = self
            .economy
            .resources
            .iter()
            .map(|resource| self.resource_row(resource))
            .collect();
        resources.sort_by_key(|row| row.kind);
        FarmSnapshot {
            farm: self.farm(),
            resources,
            structures: self
                .building
                .structures
                .iter()
                .map(|structure| self.structure_row(structure))
                .collect(),
            crops: self
                .planting
                .crops
                .iter()
                .map(|crop| self.crop_row(crop, now))
                .collect(),
            animals: self
                .raising
                .animals
                .iter()
                .map(|animal| self.animal_row(animal))
                .collect(),
        }
    }

    pub(crate) fn resource_row(&self, resource: &Resource) -> ResourceRow {
        ResourceRow {
            farm: self.profile.id,
            kind: resource.kind.id,
            quantity: resource.quantity,
            updated_at: resource.updated_at,
        }
    }

    pub(crate) fn structure_row(&self, structure: &Structure) -> StructureRow {
        StructureRow {
            farm: self.profile.id,
            id: structure.id,
            kind: structure.kind.id,
            level: structure.level,
            x: structure.cell[0],
            y: structure.cell[1],
            occupied: self.is_occupied(structure),
        }
    }

    pub(crate) fn crop_row(&self, crop: &Crop, now: Timestamp) -> CropRow {
        CropRow {
            farm: self.profile.id,
            id: crop.id,
            field: crop.field,
            kind: crop.kind.id,
            planted_at: crop.planted_at,
            ready_at: crop.ready_at,
            status: crop.status(now),
        }
    }

    pub(crate) fn animal_row(&self, animal: &Animal) -> AnimalRow {
        AnimalRow {
            farm: self.profile.id,
            id: animal.id,
            barn: animal.barn,
            kind: animal.kind.id,
            name: animal.name.clone(),
            age: animal.age,
            health: animal.health,
            happiness: animal.happiness,
            last_fed: animal.last_fed,
            created_at: animal.created_at,
        }
    }
}
