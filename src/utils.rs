use crate::engine::{Board, Tiles, CELLS};

/// Parses a whitespace-separated text grid into a `Board`.
///
/// Any whitespace layout is accepted — three lines of three values, or all
/// nine values on one line. The values must be the digits 0 through 8, each
/// appearing exactly once, with `0` marking the blank cell.
///
/// # Arguments
/// * `s`: The text to parse, e.g. the contents of a board file.
///
/// # Returns
/// * `Ok(Board)` with path cost 0 if parsing succeeds.
/// * `Err(String)` if a token is not a tile value, if there are more or
///   fewer than nine values, or if the values do not form a permutation
///   of `0..=8`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("1 0 2\n3 4 5\n6 7 8").unwrap();
/// assert_eq!(board.blank(), 1);
/// assert_eq!(board.moves(), 0);
///
/// assert!(board_from_str("1 0 2").is_err());
/// assert!(board_from_str("1 0 2 3 4 5 6 7 x").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, String> {
    let mut tiles: Tiles = [0; CELLS];
    let mut count = 0;

    for token in s.split_whitespace() {
        if count == CELLS {
            return Err(format!(
                "Too many tile values. Expected exactly {}",
                CELLS
            ));
        }
        let value: u8 = token
            .parse()
            .map_err(|_| format!("Unrecognized tile value '{}'", token))?;
        tiles[count] = value;
        count += 1;
    }

    if count < CELLS {
        return Err(format!(
            "Not enough tile values. Expected {}, found {}",
            CELLS, count
        ));
    }

    Board::from_tiles(tiles).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_three_line_layout() {
        let board = board_from_str("0 1 2\n3 4 5\n6 7 8").unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_board_from_str_single_line_layout() {
        let board = board_from_str("1 0 2 3 4 5 6 7 8").unwrap();
        assert_eq!(board.tiles(), &[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.blank(), 1);
    }

    #[test]
    fn test_board_from_str_invalid_token() {
        let result = board_from_str("0 1 2 3 4 5 6 7 X");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized tile value 'X'"));
    }

    #[test]
    fn test_board_from_str_too_few_values() {
        let result = board_from_str("0 1 2 3");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Not enough tile values"));
    }

    #[test]
    fn test_board_from_str_too_many_values() {
        let result = board_from_str("0 1 2 3 4 5 6 7 8 8");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Too many tile values"));
    }

    #[test]
    fn test_board_from_str_rejects_duplicates() {
        let result = board_from_str("0 1 2 3 4 5 6 7 7");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not a permutation"));
    }

    #[test]
    fn test_board_from_str_rejects_out_of_range_value() {
        assert!(board_from_str("0 1 2 3 4 5 6 7 9").is_err());
    }
}
