//! Win evaluation over the ownership grid.
//!
//! After every matched pair is claimed, the 16 `owner` values form a 4x4
//! grid of `Option<Player>`. A round is won by the first line holding
//! [`WIN_RUN`] or more consecutive cells owned by the same player; an
//! unowned cell breaks a run.
//!
//! ## Scan order
//!
//! Rows top to bottom, then columns left to right, then the six diagonals
//! in a fixed order: the main descending diagonal, its two length-3
//! neighbors, the anti-diagonal, then its two length-3 neighbors. The scan
//! stops at the first qualifying line, which doubles as the tie-break when
//! a single claim completes lines for both players.
//!
//! Evaluation runs only after a match resolution; a mismatch cannot
//! change ownership, so there is nothing to re-check.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::config::{GRID_SIZE, WIN_RUN};
use crate::core::player::Player;

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// A player completed a line.
    Winner(Player),
    /// Every card is matched and no line qualifies.
    Draw,
}

impl RoundResult {
    /// Check if a player won.
    ///
    /// ```
    /// use memory_toe::{Player, RoundResult};
    ///
    /// assert!(RoundResult::Winner(Player::O).is_winner(Player::O));
    /// assert!(!RoundResult::Winner(Player::O).is_winner(Player::X));
    /// assert!(!RoundResult::Draw.is_winner(Player::X));
    /// ```
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, RoundResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::Winner(p) => write!(f, "{} wins", p),
            RoundResult::Draw => write!(f, "Draw"),
        }
    }
}

/// The six diagonal lines, scanned after rows and columns in exactly this
/// order: main descending diagonal, its two length-3 neighbors, the
/// anti-diagonal, its two length-3 neighbors.
const DIAGONAL_LINES: [&[usize]; 6] = [
    &[0, 5, 10, 15],
    &[1, 6, 11],
    &[4, 9, 14],
    &[3, 6, 9, 12],
    &[2, 5, 8],
    &[7, 10, 13],
];

/// Evaluate the board after a match resolution.
///
/// Returns `Some(Winner)` for the first qualifying line in scan order,
/// `Some(Draw)` when every card is matched and no line qualifies, and
/// `None` while the round continues.
#[must_use]
pub fn evaluate(board: &Board) -> Option<RoundResult> {
    for row in 0..GRID_SIZE {
        let line = (0..GRID_SIZE).map(|col| board.owner_at(row, col));
        if let Some(player) = scan_line(line) {
            return Some(RoundResult::Winner(player));
        }
    }

    for col in 0..GRID_SIZE {
        let line = (0..GRID_SIZE).map(|row| board.owner_at(row, col));
        if let Some(player) = scan_line(line) {
            return Some(RoundResult::Winner(player));
        }
    }

    for cells in DIAGONAL_LINES {
        let line = cells.iter().map(|&index| board.owner(index));
        if let Some(player) = scan_line(line) {
            return Some(RoundResult::Winner(player));
        }
    }

    if board.all_matched() {
        return Some(RoundResult::Draw);
    }

    None
}

/// Find a run of [`WIN_RUN`]+ consecutive same-owner cells in one line.
/// An unowned cell (or a change of owner) resets the run.
fn scan_line(owners: impl Iterator<Item = Option<Player>>) -> Option<Player> {
    let mut run = 0;
    let mut last: Option<Player> = None;

    for owner in owners {
        match (owner, last) {
            (Some(player), Some(prev)) if player == prev => {
                run += 1;
                if run >= WIN_RUN {
                    return Some(player);
                }
            }
            _ => {
                run = 1;
                last = owner;
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::rng::GameRng;

    fn empty_board() -> Board {
        let mut rng = GameRng::new(42);
        Board::deal(&mut rng)
    }

    fn claim_all(board: &mut Board, cells: &[usize], player: Player) {
        for &cell in cells {
            board.claim(CardId::new(cell as u8), player);
        }
    }

    #[test]
    fn test_no_result_on_fresh_board() {
        assert_eq!(evaluate(&empty_board()), None);
    }

    #[test]
    fn test_two_in_a_row_is_not_enough() {
        let mut board = empty_board();
        claim_all(&mut board, &[0, 1], Player::X);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_row_run_at_start() {
        let mut board = empty_board();
        claim_all(&mut board, &[0, 1, 2], Player::X);
        assert_eq!(evaluate(&board), Some(RoundResult::Winner(Player::X)));
    }

    #[test]
    fn test_row_run_at_end() {
        // A run of 3 anywhere within the length-4 row counts.
        let mut board = empty_board();
        claim_all(&mut board, &[5, 6, 7], Player::O);
        assert_eq!(evaluate(&board), Some(RoundResult::Winner(Player::O)));
    }

    #[test]
    fn test_gap_breaks_row_run() {
        let mut board = empty_board();
        claim_all(&mut board, &[0, 1, 3], Player::X);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_opponent_cell_breaks_run() {
        let mut board = empty_board();
        claim_all(&mut board, &[0, 1, 3], Player::X);
        claim_all(&mut board, &[2], Player::O);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_column_run() {
        let mut board = empty_board();
        claim_all(&mut board, &[2, 6, 10], Player::O);
        assert_eq!(evaluate(&board), Some(RoundResult::Winner(Player::O)));
    }

    #[test]
    fn test_column_run_at_bottom() {
        let mut board = empty_board();
        claim_all(&mut board, &[7, 11, 15], Player::X);
        assert_eq!(evaluate(&board), Some(RoundResult::Winner(Player::X)));
    }

    #[test]
    fn test_main_diagonal_run() {
        let mut board = empty_board();
        claim_all(&mut board, &[5, 10, 15], Player::X);
        assert_eq!(evaluate(&board), Some(RoundResult::Winner(Player::X)));
    }

    #[test]
    fn test_short_diagonal_runs() {
        for cells in [[1usize, 6, 11], [4, 9, 14], [2, 5, 8], [7, 10, 13]] {
            let mut board = empty_board();
            claim_all(&mut board, &cells, Player::O);
            assert_eq!(
                evaluate(&board),
                Some(RoundResult::Winner(Player::O)),
                "diagonal {:?} not detected",
                cells
            );
        }
    }

    #[test]
    fn test_anti_diagonal_run() {
        let mut board = empty_board();
        claim_all(&mut board, &[6, 9, 12], Player::X);
        assert_eq!(evaluate(&board), Some(RoundResult::Winner(Player::X)));
    }

    #[test]
    fn test_full_run_of_four() {
        let mut board = empty_board();
        claim_all(&mut board, &[0, 1, 2, 3], Player::X);
        assert_eq!(evaluate(&board), Some(RoundResult::Winner(Player::X)));
    }

    #[test]
    fn test_scan_order_rows_before_columns() {
        // Both players hold a qualifying line; the row is scanned first.
        let mut board = empty_board();
        claim_all(&mut board, &[4, 5, 6], Player::O);
        claim_all(&mut board, &[3, 7, 11], Player::X);
        assert_eq!(evaluate(&board), Some(RoundResult::Winner(Player::O)));
    }

    #[test]
    fn test_scan_order_columns_before_diagonals() {
        // X holds column 3, O holds a short diagonal; disjoint cells.
        let mut board = empty_board();
        claim_all(&mut board, &[3, 7, 11], Player::X);
        claim_all(&mut board, &[4, 9, 14], Player::O);
        assert_eq!(evaluate(&board), Some(RoundResult::Winner(Player::X)));

        // Sanity: the diagonal alone would have won for O.
        let mut diagonal_only = empty_board();
        claim_all(&mut diagonal_only, &[4, 9, 14], Player::O);
        assert_eq!(
            evaluate(&diagonal_only),
            Some(RoundResult::Winner(Player::O))
        );
    }

    #[test]
    fn test_earlier_row_wins_tie() {
        let mut board = empty_board();
        claim_all(&mut board, &[8, 9, 10], Player::O);
        claim_all(&mut board, &[0, 1, 2], Player::X);
        assert_eq!(evaluate(&board), Some(RoundResult::Winner(Player::X)));
    }

    #[test]
    fn test_draw_on_full_board_without_runs() {
        // 2x2 blocks of alternating ownership: no line holds 3 in a row.
        //   X X O O
        //   O O X X
        //   X X O O
        //   O O X X
        let mut board = empty_board();
        claim_all(&mut board, &[0, 1, 6, 7, 8, 9, 14, 15], Player::X);
        claim_all(&mut board, &[2, 3, 4, 5, 10, 11, 12, 13], Player::O);
        assert!(board.all_matched());
        assert_eq!(evaluate(&board), Some(RoundResult::Draw));
    }

    #[test]
    fn test_winner_takes_precedence_over_draw() {
        // Full board where X holds row 0: winner, not draw.
        let mut board = empty_board();
        claim_all(&mut board, &[0, 1, 2, 3, 8, 9, 14, 15], Player::X);
        claim_all(&mut board, &[4, 5, 6, 7, 10, 11, 12, 13], Player::O);
        assert!(board.all_matched());
        assert_eq!(evaluate(&board), Some(RoundResult::Winner(Player::X)));
    }

    #[test]
    fn test_round_result_display() {
        assert_eq!(format!("{}", RoundResult::Winner(Player::X)), "X wins");
        assert_eq!(format!("{}", RoundResult::Draw), "Draw");
    }
}
