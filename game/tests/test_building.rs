use crate::testing::{at, FarmTestScenario};
use game::api::{Action, ErrorKind, Event};
use game::building::{Building, StructureKey};
use game::economy::Economy;
use game::raising::AnimalKey;

mod testing;

#[test]
fn test_build_field() {
    FarmTestScenario::new()
        .when_player_perform(|_| Action::BuildBuilding {
            kind: StructureKey::Field,
            cell: at(2, 3),
        })
        .then_events_should_be(|_| {
            vec![
                Event::Economy(vec![Economy::CurrencyChanged { balance: 800 }]),
                Event::Building(vec![Building::StructurePlaced {
                    id: game::building::StructureId(1),
                    kind: StructureKey::Field,
                    level: 1,
                    cell: at(2, 3),
                }]),
            ]
        })
        .then_currency_should_be(800)
        .then_structures_count_should_be(1);
}

#[test]
fn test_barn_leaves_too_little_for_cow() {
    FarmTestScenario::new()
        .when_player_perform(|_| Action::BuildBuilding {
            kind: "tvartas".parse().unwrap(),
            cell: at(1, 0),
        })
        .named(&["barn"])
        .then_currency_should_be(200)
        .when_player_perform(|given| Action::BuyAnimal {
            barn: given.structure("barn"),
            kind: "karve".parse().unwrap(),
            name: None,
        })
        .then_error_should_be(ErrorKind::InsufficientFunds)
        .then_currency_should_be(200)
        .then_animals_count_should_be(0);
}

#[test]
fn test_cell_never_takes_second_structure() {
    FarmTestScenario::new()
        .given_currency(5000)
        .when_player_perform(|_| Action::BuildBuilding {
            kind: StructureKey::Field,
            cell: at(0, 0),
        })
        .then_action_should_succeed()
        .when_player_perform(|_| Action::BuildBuilding {
            kind: StructureKey::Field,
            cell: at(0, 0),
        })
        .then_error_should_be(ErrorKind::CellOccupied)
        .when_player_perform(|_| Action::BuildBuilding {
            kind: StructureKey::Barn,
            cell: at(0, 0),
        })
        .then_error_should_be(ErrorKind::CellOccupied)
        .then_currency_should_be(4800)
        .then_structures_count_should_be(1);
}

#[test]
fn test_build_outside_of_grid() {
    for cell in [at(4, 0), at(0, 4), at(10, 10)] {
        FarmTestScenario::new()
            .when_player_perform(|_| Action::BuildBuilding {
                kind: StructureKey::Field,
                cell,
            })
            .then_error_should_be(ErrorKind::OutOfBounds)
            .then_currency_should_be(1000)
            .then_structures_count_should_be(0);
    }
}

#[test]
fn test_bounds_checked_before_funds() {
    FarmTestScenario::new()
        .given_currency(0)
        .when_player_perform(|_| Action::BuildBuilding {
            kind: StructureKey::Barn,
            cell: at(7, 7),
        })
        .then_error_should_be(ErrorKind::OutOfBounds);
}

#[test]
fn test_build_without_funds() {
    FarmTestScenario::new()
        .given_currency(199)
        .when_player_perform(|_| Action::BuildBuilding {
            kind: StructureKey::Field,
            cell: at(0, 0),
        })
        .then_error_should_be(ErrorKind::InsufficientFunds)
        .then_currency_should_be(199)
        .then_structures_count_should_be(0);
}

#[test]
fn test_upgrade_barn_increases_capacity() {
    let scenario = FarmTestScenario::new()
        .given_structure("barn", "barn", at(1, 1))
        .when_player_perform(|given| Action::UpgradeBuilding {
            structure: given.structure("barn"),
        })
        .then_events_should_be(|given| {
            vec![
                Event::Economy(vec![Economy::CurrencyChanged { balance: 600 }]),
                Event::Building(vec![Building::StructureUpgraded {
                    id: given.structure("barn"),
                    level: 2,
                }]),
            ]
        });
    let barn = scenario.structure("barn");
    assert_eq!(scenario.game.building.capacity_of(barn), Ok(Some(4)));
    assert_eq!(
        scenario.game.building.get_structure(barn).unwrap().upgrade_cost(),
        800
    );
}

#[test]
fn test_upgrade_without_funds() {
    FarmTestScenario::new()
        .given_currency(399)
        .given_structure("barn", "barn", at(1, 1))
        .when_player_perform(|given| Action::UpgradeBuilding {
            structure: given.structure("barn"),
        })
        .then_error_should_be(ErrorKind::InsufficientFunds)
        .then_currency_should_be(399);
}

#[test]
fn test_upgrade_unknown_structure() {
    FarmTestScenario::new()
        .when_player_perform(|_| Action::UpgradeBuilding {
            structure: game::building::StructureId(42),
        })
        .then_error_should_be(ErrorKind::NotFound);
}

#[test]
fn test_field_has_no_capacity() {
    let scenario = FarmTestScenario::new().given_structure("field", "field", at(0, 0));
    let field = scenario.structure("field");
    assert_eq!(scenario.game.building.capacity_of(field), Ok(None));
    assert_eq!(
        scenario.game.building.find_at(at(0, 0)).map(|structure| structure.id),
        Some(field)
    );
    assert!(scenario.game.building.find_at(at(1, 0)).is_none());
}

#[test]
fn test_structures_of_kind() {
    let scenario = FarmTestScenario::new()
        .given_structure("field", "north", at(0, 0))
        .given_structure("barn", "barn", at(1, 0))
        .given_structure("field", "south", at(0, 1));
    let fields: Vec<_> = scenario
        .game
        .building
        .structures_of(StructureKey::Field)
        .map(|structure| structure.id)
        .collect();
    assert_eq!(fields, vec![scenario.structure("north"), scenario.structure("south")]);
}

#[test]
fn test_unknown_catalog_key() {
    let error = "pilis".parse::<StructureKey>().unwrap_err();
    assert_eq!(
        game::api::ActionError::from(error).kind(),
        ErrorKind::UnknownCatalogKey
    );
    assert_eq!("cow".parse::<AnimalKey>(), Ok(AnimalKey::Cow));
    assert_eq!("karve".parse::<AnimalKey>(), Ok(AnimalKey::Cow));
}
