//! Tests for lineup configuration.

use std::io::Write;

use lineup_soccer::Position;

use super::*;

const TOML_CONFIG: &str = r#"
    players = ["Asher", "Ransom", "Jacob", "Zeke", "Nolan", "Kylas", "Timothy", "Peter"]

    [search]
    sample_size = 30
    time_limit_millis = 5000
    random_seed = 42

    [rules]
    unique_quarters = false
    unique_games = true

    [rules.minimum_good_players]
    players = ["Jacob", "Zeke"]
    minimum = 1

    [rules.playing_time]
    minimum_quarters = 2
    forbidden_patterns = [[1, 2], [3, 4]]

    [rules.position_variety]
    minimum_positions = 2

    [preferences.Timothy]
    goalie = 5

    [preferences.Asher]
    defender = 1
    forward = -1
"#;

#[test]
fn test_toml_parsing() {
    let config = LineupConfig::from_toml_str(TOML_CONFIG).unwrap();
    assert_eq!(config.players.len(), 8);
    assert_eq!(config.search.sample_size, Some(30));
    assert_eq!(config.search.random_seed, Some(42));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));

    assert!(!config.rules.unique_quarters);
    assert!(config.rules.distinct_quarter_players);
    assert!(config.rules.unique_games);
    let good = config.rules.minimum_good_players.as_ref().unwrap();
    assert_eq!(good.players, vec!["Jacob", "Zeke"]);
    assert_eq!(good.minimum, 1);
    let playing_time = config.rules.playing_time.as_ref().unwrap();
    assert_eq!(
        playing_time.forbidden_patterns,
        Some(vec![vec![1, 2], vec![3, 4]])
    );
    assert_eq!(
        config.rules.position_variety,
        Some(PositionVarietyConfig {
            minimum_positions: 2
        })
    );

    let asher = &config.preferences["Asher"];
    assert_eq!(asher.score(Position::Defender), 1.0);
    assert_eq!(asher.score(Position::Forward), -1.0);
    assert_eq!(asher.score(Position::Goalie), 0.0);
    assert_eq!(config.preferences["Timothy"].score(Position::Goalie), 5.0);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        players: [Asher, Ransom, Jacob, Zeke, Nolan, Kylas, Timothy]
        search:
          sample_size: 10
        rules:
          playing_time:
            minimum_quarters: 2
        preferences:
          Timothy:
            goalie: 5
            midfielder: -0.5
    "#;

    let config = LineupConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.players[6], "Timothy");
    assert_eq!(config.search.sample_size, Some(10));
    assert_eq!(config.search.time_limit_millis, None);
    let playing_time = config.rules.playing_time.as_ref().unwrap();
    assert_eq!(playing_time.forbidden_patterns, None);
    assert!(config.rules.unique_quarters);
    assert_eq!(
        config.preferences["Timothy"].score(Position::Midfielder),
        -0.5
    );
}

#[test]
fn test_defaults() {
    let config = LineupConfig::from_toml_str(r#"players = ["A"]"#).unwrap();
    assert_eq!(config.search, SearchConfig::default());
    assert_eq!(config.rules, RulesConfig::default());
    assert!(config.rules.unique_quarters);
    assert!(config.rules.distinct_quarter_players);
    assert!(!config.rules.unique_games);
    assert!(config.rules.playing_time.is_none());
    assert!(config.preferences.is_empty());
    assert_eq!(config.time_limit(), None);
}

#[test]
fn test_unknown_position_rejected() {
    let toml = r#"
        players = ["A"]
        [preferences.A]
        sweeper = 1
    "#;
    assert!(matches!(
        LineupConfig::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_missing_players_rejected() {
    assert!(LineupConfig::from_toml_str("[search]\nsample_size = 3").is_err());
}

#[test]
fn test_validate() {
    assert!(matches!(
        LineupConfig::default().validate(),
        Err(ConfigError::Invalid(_))
    ));

    let config = LineupConfig::new(["A", "B"]);
    assert!(config.validate().is_ok());
    assert!(config.clone().with_sample_size(0).validate().is_err());
    assert!(config.clone().with_time_limit_millis(0).validate().is_err());
    assert!(config.with_sample_size(1).with_time_limit_millis(1).validate().is_ok());
}

#[test]
fn test_builder() {
    let config = LineupConfig::new(["Timothy"])
        .with_sample_size(3)
        .with_time_limit_millis(250)
        .with_random_seed(7)
        .with_preference("Timothy", PositionPreference::new().with(Position::Goalie, 5.0));

    assert_eq!(config.search.sample_size, Some(3));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
    assert_eq!(config.search.random_seed, Some(7));
    assert_eq!(config.preferences.len(), 1);
}

#[test]
fn test_load_picks_format_by_extension() {
    let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(toml_file, "{}", TOML_CONFIG).unwrap();
    let from_toml = LineupConfig::load(toml_file.path()).unwrap();

    let mut yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(yaml_file, "{}", serde_yaml::to_string(&from_toml).unwrap()).unwrap();
    let from_yaml = LineupConfig::load(yaml_file.path()).unwrap();

    assert_eq!(from_toml, from_yaml);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = LineupConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_converts_into_lineup_error() {
    let err: LineupError = ConfigError::Invalid("no players listed".to_string()).into();
    assert_eq!(
        err,
        LineupError::Config("Invalid configuration: no players listed".to_string())
    );
}
