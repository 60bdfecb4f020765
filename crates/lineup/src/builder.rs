//! Turns a [`LineupConfig`] into a ready-to-run picker.

use lineup_config::{LineupConfig, RulesConfig};
use lineup_core::{Constraint, Result, UniqueConstraint};
use lineup_soccer::{
    DistinctQuarterPlayersConstraint, GameRoster, GameRosterGenerator,
    MinimumGoodPlayersConstraint, PlayerPool, PlayerPositionVarietyConstraint,
    PlayingTimeConstraint, PositionPreferenceHeuristic, UniqueQuartersConstraint,
};
use lineup_solver::{Picker, PickerBuilder};
use tracing::debug;

/// Builds the configured rules, in the order they are checked.
///
/// Player-tracking rules cover the whole pool.
pub fn build_constraints(
    pool: &PlayerPool,
    rules: &RulesConfig,
) -> Result<Vec<Box<dyn Constraint<GameRoster>>>> {
    let squad = || pool.iter().map(|p| p.name());
    let mut constraints: Vec<Box<dyn Constraint<GameRoster>>> = Vec::new();

    if let Some(good) = &rules.minimum_good_players {
        constraints.push(Box::new(MinimumGoodPlayersConstraint::new(
            pool,
            &good.players,
            good.minimum,
        )?));
    }
    if rules.unique_quarters {
        constraints.push(Box::new(UniqueQuartersConstraint));
    }
    if let Some(playing_time) = &rules.playing_time {
        let mut rule = PlayingTimeConstraint::new(pool, squad(), playing_time.minimum_quarters)?;
        if let Some(patterns) = &playing_time.forbidden_patterns {
            rule = rule.with_forbidden_patterns(patterns)?;
        }
        constraints.push(Box::new(rule));
    }
    if let Some(variety) = &rules.position_variety {
        constraints.push(Box::new(PlayerPositionVarietyConstraint::new(
            pool,
            squad(),
            variety.minimum_positions,
        )?));
    }
    if rules.distinct_quarter_players {
        constraints.push(Box::new(DistinctQuarterPlayersConstraint));
    }
    if rules.unique_games {
        constraints.push(Box::new(UniqueConstraint::<GameRoster>::new()));
    }

    Ok(constraints)
}

/// Resolves the config into a builder so callers can attach a progress
/// listener or clock before building.
pub fn picker_builder(config: &LineupConfig) -> Result<PickerBuilder<GameRosterGenerator>> {
    config.validate()?;

    let pool = PlayerPool::new(&config.players)?;
    let generator = GameRosterGenerator::new(&pool)?;
    let constraints = build_constraints(&pool, &config.rules)?;
    let heuristic = PositionPreferenceHeuristic::new(
        &pool,
        config
            .preferences
            .iter()
            .map(|(name, preference)| (name, preference.clone())),
    )?;

    debug!(
        event = "picker_configured",
        players = pool.len() as u64,
        constraints = constraints.len() as u64,
        preferences = config.preferences.len() as u64,
    );

    let mut builder = PickerBuilder::new(generator)
        .with_constraints(constraints)
        .with_heuristic(heuristic);
    if let Some(sample_size) = config.search.sample_size {
        builder = builder.with_sample_size(sample_size);
    }
    if let Some(limit) = config.time_limit() {
        builder = builder.with_time_limit(limit);
    }
    if let Some(seed) = config.search.random_seed {
        builder = builder.with_seed(seed);
    }
    Ok(builder)
}

/// Builds a picker for the configured lineup problem.
///
/// # Errors
///
/// Fails on invalid search settings, an unusable pool, or any rule or
/// preference naming a player outside the squad.
pub fn build_picker(config: &LineupConfig) -> Result<Picker<GameRosterGenerator>> {
    picker_builder(config)?.build()
}
