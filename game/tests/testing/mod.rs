#![allow(dead_code)]

use std::collections::HashMap;

use game::api::{Action, ActionError, ErrorKind, Event};
use game::building::{Building, Structure, StructureId};
use game::config::Rules;
use game::economy::Resource;
use game::knowledge::Knowledge;
use game::model::{FarmId, FarmProfile};
use game::planting::{Crop, CropId, Planting};
use game::raising::{Animal, AnimalId, Raising, MAX_WELLBEING};
use game::{Game, Timestamp};

pub fn at(x: usize, y: usize) -> [usize; 2] {
    [x, y]
}

pub fn testing_profile() -> FarmProfile {
    FarmProfile {
        id: FarmId(1),
        owner: "tester".to_string(),
        name: "Testing farm".to_string(),
        created_at: 0,
    }
}

pub struct FarmTestScenario {
    pub game: Game,
    pub now: Timestamp,
    structures: HashMap<String, StructureId>,
    crops: HashMap<String, CropId>,
    animals: HashMap<String, AnimalId>,
    current_action_result: Option<Result<Vec<Event>, ActionError>>,
}

impl FarmTestScenario {
    /// Empty grid, no resources and 1000 currency.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        let known = Knowledge::standard().unwrap();
        let mut game = Game::new(known, rules, testing_profile());
        game.economy.load_currency(1000);
        Self::from_game(game)
    }

    pub fn from_game(game: Game) -> Self {
        Self {
            game,
            now: 1_000,
            structures: Default::default(),
            crops: Default::default(),
            animals: Default::default(),
            current_action_result: None,
        }
    }

    pub fn structure(&self, name: &str) -> StructureId {
        *self.structures.get(name).unwrap()
    }

    pub fn crop(&self, name: &str) -> CropId {
        *self.crops.get(name).unwrap()
    }

    pub fn animal(&self, name: &str) -> AnimalId {
        *self.animals.get(name).unwrap()
    }

    pub fn given_currency(mut self, amount: u32) -> Self {
        self.game.economy.load_currency(amount);
        self
    }

    pub fn given_resource(mut self, kind: &str, quantity: u32) -> Self {
        let kind = self.game.known.resources.find(kind).unwrap();
        self.game.economy.load_resources(vec![Resource {
            kind,
            quantity,
            updated_at: self.now,
        }]);
        self
    }

    pub fn given_structure(mut self, kind: &str, name: &str, cell: [usize; 2]) -> Self {
        let kind = self.game.known.structures.find(kind).unwrap();
        let id = self.game.building.structures_id.introduce().one(StructureId);
        let structure = Structure {
            id,
            kind,
            level: 1,
            cell,
        };
        self.game.building.load_structures(vec![structure]);
        self.structures.insert(name.to_string(), id);
        self
    }

    pub fn given_crop(mut self, kind: &str, name: &str, field: &str) -> Self {
        let kind = self.game.known.crops.find(kind).unwrap();
        let id = self.game.planting.crops_id.introduce().one(CropId);
        let crop = Crop {
            id,
            field: self.structure(field),
            planted_at: self.now,
            ready_at: self.now + kind.growth,
            kind,
        };
        self.game.planting.load_crops(vec![crop]);
        self.crops.insert(name.to_string(), id);
        self
    }

    pub fn given_animal(mut self, kind: &str, name: &str, barn: &str) -> Self {
        let kind = self.game.known.animals.find(kind).unwrap();
        let id = self.game.raising.animals_id.introduce().one(AnimalId);
        let animal = Animal {
            id,
            kind,
            barn: self.structure(barn),
            name: Some(name.to_string()),
            age: 0,
            health: MAX_WELLBEING,
            happiness: MAX_WELLBEING,
            last_fed: self.now,
            created_at: self.now,
        };
        self.game.raising.load_animals(vec![animal]);
        self.animals.insert(name.to_string(), id);
        self
    }

    pub fn given_wellbeing(mut self, animal: &str, health: u8, happiness: u8) -> Self {
        let id = self.animal(animal);
        let animal = self.game.raising.get_animal_mut(id).unwrap();
        animal.health = health;
        animal.happiness = happiness;
        self
    }

    pub fn when_time_passes(mut self, seconds: u64) -> Self {
        self.now += seconds;
        self
    }

    pub fn when_player_perform<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&Self) -> Action,
    {
        let action = action(&self);
        let result = self.game.perform_action(action, self.now);
        if let Ok(events) = &result {
            self.remember_entities(events);
        }
        self.current_action_result = Some(result);
        self
    }

    /// Names entities created by the last action in order of appearance.
    pub fn named(mut self, names: &[&str]) -> Self {
        let events = match &self.current_action_result {
            Some(Ok(events)) => events.clone(),
            _ => panic!("no successful action to name entities of"),
        };
        let mut names = names.iter();
        for event in events {
            match event {
                Event::Building(events) => {
                    for event in events {
                        if let Building::StructurePlaced { id, .. } = event {
                            let name = names.next().unwrap();
                            self.structures.insert(name.to_string(), id);
                        }
                    }
                }
                Event::Planting(events) => {
                    for event in events {
                        if let Planting::CropPlanted { id, .. } = event {
                            let name = names.next().unwrap();
                            self.crops.insert(name.to_string(), id);
                        }
                    }
                }
                Event::Raising(events) => {
                    for event in events {
                        if let Raising::AnimalBought { id, .. } = event {
                            let name = names.next().unwrap();
                            self.animals.insert(name.to_string(), id);
                        }
                    }
                }
                _ => {}
            }
        }
        self
    }

    fn remember_entities(&mut self, events: &[Event]) {
        for event in events {
            if let Event::Raising(events) = event {
                for event in events {
                    if let Raising::AnimalBought {
                        id,
                        name: Some(name),
                        ..
                    } = event
                    {
                        self.animals.insert(name.clone(), *id);
                    }
                }
            }
        }
    }

    pub fn then_events_should_be<F>(self, expected_events: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<Event>,
    {
        let actual_events = match &self.current_action_result {
            Some(Ok(events)) => events.clone(),
            other => panic!("action should succeed, but {:?}", other),
        };
        let expected_events = expected_events(&self);
        assert_eq!(actual_events, expected_events);
        self
    }

    pub fn then_action_should_succeed(self) -> Self {
        match &self.current_action_result {
            Some(Ok(_)) => self,
            other => panic!("action should succeed, but {:?}", other),
        }
    }

    pub fn then_error_should_be(self, kind: ErrorKind) -> Self {
        match &self.current_action_result {
            Some(Err(error)) => assert_eq!(error.kind(), kind, "{:?}", error),
            other => panic!("action should fail with {:?}, but {:?}", kind, other),
        }
        self
    }

    pub fn then_currency_should_be(self, expected: u32) -> Self {
        assert_eq!(self.game.economy.balance(), expected);
        self
    }

    pub fn then_resource_should_be(self, kind: &str, expected: u32) -> Self {
        let kind = self.game.known.resources.find(kind).unwrap();
        assert_eq!(self.game.economy.quantity(kind.id), expected, "{:?}", kind);
        self
    }

    pub fn then_experience_should_be(self, experience: u32, level: u32) -> Self {
        assert_eq!(self.game.progression.experience, experience);
        assert_eq!(self.game.progression.level, level);
        self
    }

    pub fn then_crops_count_should_be(self, expected: usize) -> Self {
        assert_eq!(self.game.planting.crops.len(), expected);
        self
    }

    pub fn then_structures_count_should_be(self, expected: usize) -> Self {
        assert_eq!(self.game.building.structures.len(), expected);
        self
    }

    pub fn then_animals_count_should_be(self, expected: usize) -> Self {
        assert_eq!(self.game.raising.animals.len(), expected);
        self
    }

    pub fn then_animal_wellbeing_should_be(self, animal: &str, health: u8, happiness: u8) -> Self {
        let animal = self.game.raising.get_animal(self.animal(animal)).unwrap();
        assert_eq!((animal.health, animal.happiness), (health, happiness));
        self
    }
}
