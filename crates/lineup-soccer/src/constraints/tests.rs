use std::sync::Arc;

use lineup_core::{Constraint, LineupError};

use super::*;
use crate::player::PlayerPool;
use crate::roster::GameRoster;
use crate::test_utils::{
    balanced_roster, quarter, roster_from, sample_pool, BALANCED, GOOD_PLAYERS, SQUAD,
};

fn playing_time(minimum_quarters: usize) -> PlayingTimeConstraint {
    PlayingTimeConstraint::new(&sample_pool(), SQUAD, minimum_quarters).unwrap()
}

fn variety(minimum_positions: usize) -> PlayerPositionVarietyConstraint {
    PlayerPositionVarietyConstraint::new(&sample_pool(), SQUAD, minimum_positions).unwrap()
}

#[test]
fn test_balanced_roster_meets_every_rule() {
    let pool = sample_pool();
    let game = balanced_roster();
    let rules: Vec<Box<dyn Constraint<GameRoster>>> = vec![
        Box::new(MinimumGoodPlayersConstraint::new(&pool, GOOD_PLAYERS, 2).unwrap()),
        Box::new(UniqueQuartersConstraint),
        Box::new(playing_time(2)),
        Box::new(variety(2)),
        Box::new(DistinctQuarterPlayersConstraint),
    ];
    for rule in &rules {
        assert!(rule.is_met(&game), "{} rejected the balanced roster", rule.name());
        assert!(rule.is_met(&game), "{} is not stable", rule.name());
    }
}

#[test]
fn test_good_players_minimum_per_quarter() {
    let pool = sample_pool();
    let game = balanced_roster();
    // Quarters 2 and 4 field only Nolan and Kylas.
    let three = MinimumGoodPlayersConstraint::new(&pool, GOOD_PLAYERS, 3).unwrap();
    assert!(!three.is_met(&game));
    let zero = MinimumGoodPlayersConstraint::new(&pool, GOOD_PLAYERS, 0).unwrap();
    assert!(zero.is_met(&game));
}

#[test]
fn test_good_players_unreachable_minimum_accepted_at_construction() {
    let rule = MinimumGoodPlayersConstraint::new(&sample_pool(), GOOD_PLAYERS, 6).unwrap();
    assert_eq!(rule.minimum(), 6);
    assert!(!rule.is_met(&balanced_roster()));
}

#[test]
fn test_good_players_unknown_name() {
    let err =
        MinimumGoodPlayersConstraint::new(&sample_pool(), ["Jacob", "Pele"], 1).unwrap_err();
    assert_eq!(err, LineupError::UnknownPlayer("Pele".to_string()));
}

#[test]
fn test_unique_quarters_compares_instances() {
    let q1 = Arc::new(quarter(
        "Asher",
        ["Ransom", "Jacob"],
        ["Zeke", "Timothy"],
        ["Peter", "Aiden"],
    ));
    let q2 = Arc::new(quarter(
        "Nolan",
        ["Kylas", "Owen"],
        ["Cyrus", "Marc"],
        ["Jude", "Elias"],
    ));

    let aliased = GameRoster::from_shared([q1.clone(), q2.clone(), q1.clone(), q2.clone()]);
    assert!(!UniqueQuartersConstraint.is_met(&aliased));

    let copies = GameRoster::from_shared([
        q1.clone(),
        q2.clone(),
        Arc::new(q1.as_ref().clone()),
        Arc::new(q2.as_ref().clone()),
    ]);
    assert!(UniqueQuartersConstraint.is_met(&copies));
}

#[test]
fn test_absent_player_fails_playing_time() {
    let mut names = SQUAD.to_vec();
    names.push("Bench");
    let pool = PlayerPool::new(names.clone()).unwrap();
    let rule = PlayingTimeConstraint::new(&pool, names, 1).unwrap();
    assert!(!rule.is_met(&balanced_roster()));
}

#[test]
fn test_absent_squad_player_fails_minimum_quarters() {
    let mut slots = BALANCED;
    // Asher and Peter take Elias's Q2 and Q4 spots; Elias never plays.
    slots[1][6] = "Asher";
    slots[3][1] = "Peter";
    let game = roster_from(slots);
    assert!(DistinctQuarterPlayersConstraint.is_met(&game));
    assert_eq!(game.quarters_played(&"Elias".into()).count(), 0);

    assert!(!playing_time(2).is_met(&game));

    let without_elias = SQUAD.iter().copied().filter(|name| *name != "Elias");
    let rule = PlayingTimeConstraint::new(&sample_pool(), without_elias, 2).unwrap();
    assert!(rule.is_met(&game));
}

#[test]
fn test_forbidden_patterns_rejected() {
    let mut slots = BALANCED;
    // Asher keeps goal in Q2 and Nolan takes his Q3 spot: Asher 1-2, Nolan 3-4.
    slots[1][0] = "Asher";
    slots[2][2] = "Nolan";
    let game = roster_from(slots);

    assert!(!playing_time(2).is_met(&game));

    let relaxed = playing_time(2)
        .with_forbidden_patterns(Vec::<[usize; 2]>::new())
        .unwrap();
    assert!(relaxed.is_met(&game));

    let only_last = playing_time(2).with_forbidden_patterns([[4, 3]]).unwrap();
    assert!(!only_last.is_met(&game));
}

#[test]
fn test_first_and_last_quarter_forbidden() {
    let mut slots = BALANCED;
    // Asher swaps his Q3 spot for Elias's Q4 spot: Asher 1-4, Elias 2-3.
    slots[2][2] = "Elias";
    slots[3][1] = "Asher";
    let game = roster_from(slots);
    assert!(!playing_time(2).is_met(&game));
}

#[test]
fn test_forbidden_pattern_out_of_range() {
    let err = playing_time(2)
        .with_forbidden_patterns([vec![0, 1]])
        .unwrap_err();
    assert!(matches!(err, LineupError::InvalidRule(_)));
    assert!(playing_time(2).with_forbidden_patterns([[1, 5]]).is_err());
}

#[test]
fn test_playing_time_spread() {
    let mut slots = BALANCED;
    // Asher replaces Elias in Q4: Asher plays 3 quarters, Elias 1.
    slots[3][1] = "Asher";
    let game = roster_from(slots);

    assert!(!playing_time(1).is_met(&game));

    // Untracked players are ignored.
    let asher_only = PlayingTimeConstraint::new(&sample_pool(), ["Asher"], 2).unwrap();
    assert!(asher_only.is_met(&game));
}

#[test]
fn test_goalie_only_fails_variety() {
    let mut slots = BALANCED;
    // Asher keeps goal in Q3; Peter moves to defence.
    slots[2][0] = "Asher";
    slots[2][2] = "Peter";
    let game = roster_from(slots);

    assert!(!variety(2).is_met(&game));
    assert!(variety(1).is_met(&game));

    let peter = PlayerPositionVarietyConstraint::new(&sample_pool(), ["Peter"], 2).unwrap();
    assert!(peter.is_met(&game));
}

#[test]
fn test_variety_minimum_is_honored() {
    assert!(!variety(3).is_met(&balanced_roster()));
    assert_eq!(variety(3).minimum_positions(), 3);
}

#[test]
fn test_duplicate_slot_rejected() {
    let mut slots = BALANCED;
    slots[0][6] = "Peter";
    let game = roster_from(slots);
    assert!(!DistinctQuarterPlayersConstraint.is_met(&game));
    assert!(DistinctQuarterPlayersConstraint.is_met(&balanced_roster()));
}

#[test]
fn test_rule_names() {
    assert_eq!(Constraint::<GameRoster>::name(&UniqueQuartersConstraint), "unique_quarters");
    assert_eq!(Constraint::<GameRoster>::name(&playing_time(2)), "playing_time");
    assert_eq!(Constraint::<GameRoster>::name(&variety(2)), "position_variety");
}
