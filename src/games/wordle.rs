//! Wordle game state
//!
//! The page keeps its state in local storage under a date-scoped key
//! `games-state-wordleV2/<id>`; the value is a JSON string whose first state
//! holds the submitted guesses and their evaluations.

use super::{Board, BoardError, BoardRow, Cell};
use crate::core::LetterStatus;
use serde::Deserialize;
use serde_json::Value;

/// Prefix of the local-storage key holding the game state
pub const STATE_KEY_PREFIX: &str = "games-state-wordleV2/";

#[derive(Debug, Deserialize)]
struct StateBlob {
    states: Vec<GameState>,
}

#[derive(Debug, Deserialize)]
struct GameState {
    data: GameData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameData {
    #[serde(default)]
    board_state: Vec<Option<String>>,
    #[serde(default)]
    evaluations: Vec<Option<Vec<Option<LetterStatus>>>>,
}

/// Find the game-state entry in a local-storage dump
fn find_state(storage: &Value) -> Option<&str> {
    storage
        .as_object()?
        .iter()
        .find(|(key, _)| key.starts_with(STATE_KEY_PREFIX))
        .and_then(|(_, value)| value.as_str())
}

/// Decode either a local-storage dump or a bare state blob
///
/// Empty guesses are skipped. Cells without an evaluation read as absent,
/// matching a freshly drawn grid.
///
/// # Errors
/// Returns `BoardError` for malformed JSON, a dump without a Wordle entry, or
/// a blob with no states.
pub fn parse_board(json: &str) -> Result<Board, BoardError> {
    let value: Value = serde_json::from_str(json)?;

    let blob: StateBlob = if value.get("states").is_some() {
        serde_json::from_value(value)?
    } else {
        let state = find_state(&value).ok_or(BoardError::MissingState(STATE_KEY_PREFIX))?;
        serde_json::from_str(state)?
    };

    let data = blob
        .states
        .into_iter()
        .next()
        .ok_or(BoardError::NoStates)?
        .data;

    let rows = data
        .board_state
        .iter()
        .enumerate()
        .filter_map(|(row, guess)| {
            let guess = guess.as_deref().filter(|g| !g.is_empty())?.to_ascii_uppercase();
            let evaluation = data.evaluations.get(row).and_then(Option::as_ref);

            let cells = guess
                .chars()
                .enumerate()
                .map(|(col, letter)| {
                    let status = evaluation
                        .and_then(|e| e.get(col).copied().flatten())
                        .unwrap_or(LetterStatus::Absent);
                    Cell::new(letter, status)
                })
                .collect();

            Some(BoardRow { guess, cells })
        })
        .collect();

    Ok(Board::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    const BLOB: &str = r#"{"states":[{"data":{
        "boardState":["crane","sloth","","","",""],
        "evaluations":[["absent","present","correct","absent","absent"],null,null,null,null,null]
    }}]}"#;

    fn statuses(row: &BoardRow) -> Vec<Option<LetterStatus>> {
        row.cells.iter().map(|c| c.status).collect()
    }

    #[test]
    fn parses_bare_blob() {
        let board = parse_board(BLOB).unwrap();

        assert_eq!(board.rows.len(), 2);
        assert_eq!(board.rows[0].guess, "CRANE");
        assert_eq!(
            statuses(&board.rows[0]),
            vec![Some(Absent), Some(Present), Some(Correct), Some(Absent), Some(Absent)]
        );
    }

    #[test]
    fn unevaluated_rows_default_to_absent() {
        let board = parse_board(BLOB).unwrap();
        assert!(board.rows[1].cells.iter().all(|c| c.status == Some(Absent)));
    }

    #[test]
    fn parses_local_storage_dump() {
        let dump = serde_json::json!({
            "nyt-wordle-moogle/ANON": "{}",
            "games-state-wordleV2/ANON": BLOB,
        })
        .to_string();

        let board = parse_board(&dump).unwrap();
        assert_eq!(board.rows[1].guess, "SLOTH");
    }

    #[test]
    fn dump_without_state_is_missing() {
        let dump = r#"{"other": "value"}"#;
        assert!(matches!(
            parse_board(dump),
            Err(BoardError::MissingState(STATE_KEY_PREFIX))
        ));
    }

    #[test]
    fn empty_states_is_error() {
        assert!(matches!(
            parse_board(r#"{"states": []}"#),
            Err(BoardError::NoStates)
        ));
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(matches!(parse_board("{not json"), Err(BoardError::Json(_))));
    }

    #[test]
    fn fresh_game_is_empty_board() {
        let blob = r#"{"states":[{"data":{"boardState":["","","","","",""]}}]}"#;
        assert!(parse_board(blob).unwrap().is_empty());
    }
}
