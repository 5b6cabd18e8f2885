use super::*;
use classical_engine::{ClassicalEngine, Difficulty, EngineConfig};

fn seeded(difficulty: Difficulty, seed: u64) -> ClassicalEngine {
    let mut config = EngineConfig::default();
    config.difficulty = difficulty;
    ClassicalEngine::with_config(config).with_seed(seed)
}

#[test]
fn test_random_game_replays_legally() {
    let mut white = seeded(Difficulty::Easy, 1);
    let mut black = seeded(Difficulty::Easy, 2);
    let config = GameConfig {
        max_plies: 60,
        ..Default::default()
    };

    let record = play_game(&mut white, &mut black, &config);
    assert!(record.moves.len() <= 60);
    assert_ne!(record.result, GameResult::IllegalMove);

    let (board, side) = record.replay().unwrap();
    assert_eq!(board.to_fen(side), record.final_fen);
}

#[test]
fn test_move_limit_is_a_draw() {
    let mut white = seeded(Difficulty::Easy, 3);
    let mut black = seeded(Difficulty::Easy, 4);
    let config = GameConfig {
        max_plies: 4,
        ..Default::default()
    };
    let record = play_game(&mut white, &mut black, &config);
    assert_eq!(record.moves.len(), 4);
    assert_eq!(record.result, GameResult::MoveLimit);
    assert_eq!(record.result.score(), "1/2-1/2");
}

#[test]
fn test_searching_engines_play_short_game() {
    let mut white = seeded(Difficulty::Hard, 5);
    let mut black = seeded(Difficulty::Hard, 6);
    let config = GameConfig {
        max_plies: 6,
        depth: Some(2),
        move_time: None,
    };
    let record = play_game(&mut white, &mut black, &config);
    assert!(record.moves.len() <= 6);
    assert_ne!(record.result, GameResult::IllegalMove);
    assert!(record.replay().is_ok());
}

#[test]
fn test_record_json_round_trip() {
    let mut white = seeded(Difficulty::Easy, 7);
    let mut black = seeded(Difficulty::Easy, 8);
    let config = GameConfig {
        max_plies: 10,
        ..Default::default()
    };
    let record = play_game(&mut white, &mut black, &config);

    let json = record.to_json().unwrap();
    let parsed: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.moves, record.moves);
    assert_eq!(parsed.result, record.result);
    assert_eq!(parsed.started_at, record.started_at);
    assert!(json.contains("\"result\""));
}

#[test]
fn test_replay_rejects_bad_record() {
    let record = GameRecord {
        started_at: Utc::now(),
        white: "a".into(),
        black: "b".into(),
        moves: vec!["e2e4".into(), "e2e4".into()],
        result: GameResult::MoveLimit,
        final_fen: String::new(),
    };
    assert!(record.replay().is_err());
}
