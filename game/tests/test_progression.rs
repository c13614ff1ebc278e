use game::progression::{Progression, ProgressionDomain};

#[test]
fn test_level_follows_flat_threshold() {
    let domain = ProgressionDomain::new(100);
    assert_eq!(domain.level_for(0), 1);
    assert_eq!(domain.level_for(99), 1);
    assert_eq!(domain.level_for(100), 2);
    assert_eq!(domain.level_for(250), 3);
}

#[test]
fn test_level_change_reported() {
    let mut domain = ProgressionDomain::new(100);
    let grant = domain.grant_experience(95).unwrap();
    assert_eq!(
        grant(),
        vec![Progression::ExperienceGained {
            amount: 95,
            experience: 95
        }]
    );
    let grant = domain.grant_experience(10).unwrap();
    assert_eq!(
        grant(),
        vec![
            Progression::ExperienceGained {
                amount: 10,
                experience: 105
            },
            Progression::LevelChanged { level: 2 }
        ]
    );
    assert_eq!(domain.progress(), (5, 100));
}

#[test]
fn test_experience_monotonic() {
    let mut domain = ProgressionDomain::new(100);
    let mut experience = 0;
    let mut level = 1;
    for amount in [0, 5, 0, 95, 1, 300, 20, 0, 499] {
        let grant = domain.grant_experience(amount).unwrap();
        grant();
        assert!(domain.experience >= experience);
        assert!(domain.level >= level);
        assert_eq!(domain.level, domain.level_for(domain.experience));
        experience = domain.experience;
        level = domain.level;
    }
    assert_eq!(domain.experience, 920);
    assert_eq!(domain.level, 10);
}

#[test]
fn test_zero_experience_is_silent() {
    let mut domain = ProgressionDomain::new(100);
    let grant = domain.grant_experience(0).unwrap();
    assert!(grant().is_empty());
}

#[test]
fn test_overflow_rejected() {
    let mut domain = ProgressionDomain::new(100);
    domain.load_experience(u32::MAX - 1, 0);
    assert!(domain.grant_experience(2).is_err());
    assert_eq!(domain.experience, u32::MAX - 1);
}

#[test]
fn test_stored_level_recomputed() {
    let mut domain = ProgressionDomain::new(100);
    domain.load_experience(310, 1);
    assert_eq!(domain.level, 4);
}
