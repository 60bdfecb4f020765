use lineup_config::{GoodPlayersConfig, LineupConfig, PlayingTimeConfig, PositionVarietyConfig};
use lineup_soccer::{Position, PositionPreference};

const SQUAD: [&str; 14] = [
    "Asher", "Ransom", "Jacob", "Zeke", "Nolan", "Kylas", "Timothy", "Peter", "Aiden", "Owen",
    "Cyrus", "Marc", "Jude", "Elias",
];

const GOOD_PLAYERS: [&str; 5] = ["Jacob", "Zeke", "Nolan", "Kylas", "Ransom"];

/// The built-in squad the binary uses when no config file is given.
pub fn sample_config() -> LineupConfig {
    use Position::*;

    let mut config = LineupConfig::new(SQUAD).with_sample_size(30);
    config.rules.minimum_good_players = Some(GoodPlayersConfig {
        players: GOOD_PLAYERS.iter().map(|p| p.to_string()).collect(),
        minimum: 2,
    });
    config.rules.playing_time = Some(PlayingTimeConfig {
        minimum_quarters: 2,
        forbidden_patterns: None,
    });
    config.rules.position_variety = Some(PositionVarietyConfig {
        minimum_positions: 2,
    });

    let preferences: [(&str, &[(Position, f64)]); 9] = [
        ("Asher", &[(Defender, 1.0), (Forward, -1.0), (Goalie, -1.0)]),
        ("Timothy", &[(Goalie, 5.0)]),
        ("Jacob", &[(Forward, 1.0)]),
        ("Zeke", &[(Defender, -1.0), (Goalie, -1.0)]),
        ("Peter", &[(Defender, 1.0), (Goalie, 5.0)]),
        ("Aiden", &[(Defender, 1.0)]),
        ("Cyrus", &[(Defender, -1.0), (Goalie, -1.0)]),
        ("Marc", &[(Defender, 1.0)]),
        ("Elias", &[(Defender, 1.0), (Forward, -1.0)]),
    ];
    for (name, weights) in preferences {
        let preference: PositionPreference = weights.iter().copied().collect();
        config = config.with_preference(name, preference);
    }
    config
}
