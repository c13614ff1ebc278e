use crate::testing::{at, FarmTestScenario};
use game::api::{Action, ErrorKind, Event};
use game::building::StructureKey;
use game::economy::{Economy, ResourceKey};
use game::planting::{CropKey, CropStatus, Planting};
use game::progression::Progression;

mod testing;

#[test]
fn test_plant_and_harvest_wheat() {
    let scenario = FarmTestScenario::new()
        .when_player_perform(|_| Action::BuildBuilding {
            kind: StructureKey::Field,
            cell: at(0, 0),
        })
        .named(&["field"])
        .when_player_perform(|given| Action::PlantCrop {
            field: given.structure("field"),
            kind: "kvieciai".parse().unwrap(),
        })
        .named(&["wheat"])
        .then_currency_should_be(790)
        .when_time_passes(30)
        .when_player_perform(|given| Action::HarvestCrop {
            crop: given.crop("wheat"),
        });
    let field = scenario.structure("field");
    let wheat = scenario.crop("wheat");
    scenario
        .then_events_should_be(|_| {
            vec![
                Event::Planting(vec![Planting::CropHarvested {
                    id: wheat,
                    field,
                    kind: CropKey::Wheat,
                    resource: ResourceKey::Grain,
                    amount: 2,
                }]),
                Event::Economy(vec![Economy::ResourceChanged {
                    kind: ResourceKey::Grain,
                    quantity: 2,
                }]),
                Event::Progression(vec![Progression::ExperienceGained {
                    amount: 5,
                    experience: 5,
                }]),
            ]
        })
        .then_currency_should_be(1000 - 200 - 10)
        .then_resource_should_be("grain", 2)
        .then_experience_should_be(5, 1)
        .then_crops_count_should_be(0);
}

#[test]
fn test_crop_not_ready_before_growth_elapsed() {
    for elapsed in [0, 1, 15, 29] {
        FarmTestScenario::new()
            .given_structure("field", "field", at(0, 0))
            .given_crop("wheat", "wheat", "field")
            .when_time_passes(elapsed)
            .when_player_perform(|given| Action::HarvestCrop {
                crop: given.crop("wheat"),
            })
            .then_error_should_be(ErrorKind::NotReady)
            .then_crops_count_should_be(1)
            .then_resource_should_be("grain", 0);
    }
}

#[test]
fn test_crop_ready_once_growth_elapsed() {
    for elapsed in [30, 31, 10_000] {
        FarmTestScenario::new()
            .given_structure("field", "field", at(0, 0))
            .given_crop("wheat", "wheat", "field")
            .when_time_passes(elapsed)
            .when_player_perform(|given| Action::HarvestCrop {
                crop: given.crop("wheat"),
            })
            .then_action_should_succeed()
            .then_crops_count_should_be(0);
    }
}

#[test]
fn test_readiness_derived_from_time() {
    let scenario = FarmTestScenario::new()
        .given_structure("field", "field", at(0, 0))
        .given_crop("corn", "corn", "field");
    let crop = scenario.game.planting.get_crop(scenario.crop("corn")).unwrap();
    let now = scenario.now;
    assert_eq!(crop.status(now), CropStatus::Growing);
    assert_eq!(crop.remaining(now), 60);
    assert_eq!(crop.remaining(now + 45), 15);
    assert_eq!(crop.status(now + 60), CropStatus::ReadyToHarvest);
    assert_eq!(crop.remaining(now + 61), 0);
    assert!(scenario.game.readiness(now).ready_crops.is_empty());
    assert_eq!(
        scenario.game.readiness(now + 60).ready_crops,
        vec![scenario.crop("corn")]
    );
}

#[test]
fn test_field_holds_single_crop() {
    FarmTestScenario::new()
        .given_structure("field", "field", at(0, 0))
        .given_crop("wheat", "wheat", "field")
        .when_player_perform(|given| Action::PlantCrop {
            field: given.structure("field"),
            kind: CropKey::Tomato,
        })
        .then_error_should_be(ErrorKind::FieldOccupied)
        .then_currency_should_be(1000)
        .then_crops_count_should_be(1);
}

#[test]
fn test_plant_in_barn() {
    FarmTestScenario::new()
        .given_structure("barn", "barn", at(0, 0))
        .when_player_perform(|given| Action::PlantCrop {
            field: given.structure("barn"),
            kind: CropKey::Wheat,
        })
        .then_error_should_be(ErrorKind::WrongStructure)
        .then_currency_should_be(1000);
}

#[test]
fn test_plant_without_funds() {
    FarmTestScenario::new()
        .given_currency(24)
        .given_structure("field", "field", at(0, 0))
        .when_player_perform(|given| Action::PlantCrop {
            field: given.structure("field"),
            kind: CropKey::Tomato,
        })
        .then_error_should_be(ErrorKind::InsufficientFunds)
        .then_currency_should_be(24)
        .then_crops_count_should_be(0);
}

#[test]
fn test_plant_on_missing_field() {
    FarmTestScenario::new()
        .when_player_perform(|_| Action::PlantCrop {
            field: game::building::StructureId(7),
            kind: CropKey::Carrot,
        })
        .then_error_should_be(ErrorKind::NotFound);
}

#[test]
fn test_harvest_missing_crop() {
    FarmTestScenario::new()
        .when_player_perform(|_| Action::HarvestCrop {
            crop: game::planting::CropId(3),
        })
        .then_error_should_be(ErrorKind::NotFound);
}

#[test]
fn test_planting_event_carries_ready_time() {
    let scenario = FarmTestScenario::new().given_structure("field", "field", at(3, 3));
    let field = scenario.structure("field");
    let now = scenario.now;
    scenario
        .when_player_perform(|given| Action::PlantCrop {
            field: given.structure("field"),
            kind: CropKey::Tomato,
        })
        .then_events_should_be(|_| {
            vec![
                Event::Economy(vec![Economy::CurrencyChanged { balance: 975 }]),
                Event::Planting(vec![Planting::CropPlanted {
                    id: game::planting::CropId(1),
                    field,
                    kind: CropKey::Tomato,
                    planted_at: now,
                    ready_at: now + 90,
                }]),
            ]
        });
}

#[test]
fn test_harvest_all_ready() {
    FarmTestScenario::new()
        .given_structure("field", "north", at(0, 0))
        .given_structure("field", "south", at(0, 1))
        .given_structure("field", "east", at(1, 0))
        .given_crop("wheat", "wheat", "north")
        .given_crop("carrot", "carrot", "south")
        .given_crop("tomato", "tomato", "east")
        .when_time_passes(45)
        .when_player_perform(|_| Action::HarvestAllReady)
        .then_action_should_succeed()
        .then_crops_count_should_be(1)
        .then_resource_should_be("grain", 2)
        .then_resource_should_be("fruit", 2)
        .then_experience_should_be(13, 1);
}

#[test]
fn test_harvest_all_with_nothing_ready() {
    FarmTestScenario::new()
        .given_structure("field", "field", at(0, 0))
        .given_crop("tomato", "tomato", "field")
        .when_player_perform(|_| Action::HarvestAllReady)
        .then_events_should_be(|_| vec![])
        .then_crops_count_should_be(1);
}
