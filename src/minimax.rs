use log::{debug, trace};

use crate::game::Game;

pub(crate) const WIN: i32 = 1;
pub(crate) const LOSS: i32 = -1;
pub(crate) const DRAW: i32 = 0;

/// Full-depth minimax with alpha-beta pruning, scored from the computer's
/// side.
///
/// The search works on the caller's game in place: every speculative mark is
/// cleared again before the next sibling is tried, so the game is unchanged
/// once a call returns.
pub(crate) struct Minimax<G: Game> {
    computer: G::Player,
    player: G::Player,
    nodes: usize,
}

impl<G: Game> Minimax<G> {
    pub(crate) fn new(computer: G::Player, player: G::Player) -> Self {
        Self {
            computer,
            player,
            nodes: 0,
        }
    }

    /// Positions evaluated by the last `select_move` call.
    pub(crate) fn nodes(&self) -> usize {
        self.nodes
    }

    /// Picks the computer's move. Among equally scored moves the first one in
    /// the game's move order wins. Returns `None` if there is nothing to play.
    pub(crate) fn select_move(&mut self, game: &mut G) -> anyhow::Result<Option<G::Action>> {
        self.nodes = 0;
        let mut best: Option<(G::Action, i32)> = None;

        for action in game.get_available_moves() {
            game.place(action, self.computer)?;
            let score = self.search(game, false, i32::MIN, i32::MAX);
            game.clear(action);
            let score = score?;
            trace!("move {:?} scores {}", action, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((action, score));
            }
        }

        if let Some((action, score)) = best {
            debug!("selected {:?} with score {}", action, score);
        }
        Ok(best.map(|(action, _)| action))
    }

    /// Scores the current position with `is_computer_turn` to move.
    pub(crate) fn search(
        &mut self,
        game: &mut G,
        is_computer_turn: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> anyhow::Result<i32> {
        self.nodes += 1;

        // A winning move can fill the board, so wins are checked first.
        if game.is_winner(self.computer) {
            return Ok(WIN);
        }
        if game.is_winner(self.player) {
            return Ok(LOSS);
        }
        if game.is_full() {
            return Ok(DRAW);
        }

        if is_computer_turn {
            let mut max_eval = i32::MIN;
            for action in game.get_available_moves() {
                game.place(action, self.computer)?;
                let eval = self.search(game, false, alpha, beta);
                game.clear(action);
                let eval = eval?;

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            Ok(max_eval)
        } else {
            let mut min_eval = i32::MAX;
            for action in game.get_available_moves() {
                game.place(action, self.player)?;
                let eval = self.search(game, true, alpha, beta);
                game.clear(action);
                let eval = eval?;

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            Ok(min_eval)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tic_tac_toe::{Board, Mark};

    fn engine() -> Minimax<Board> {
        Minimax::new(Mark::Computer, Mark::Player)
    }

    fn best(s: &str) -> Option<(usize, usize)> {
        let mut board: Board = s.parse().unwrap();
        let before = board.clone();
        let action = engine().select_move(&mut board).unwrap();
        assert_eq!(board, before, "search must leave the board untouched");
        action
    }

    /// Plain minimax without pruning, as a reference for the scores.
    fn reference(board: &mut Board, is_computer_turn: bool) -> i32 {
        if board.is_winner(Mark::Computer) {
            return WIN;
        }
        if board.is_winner(Mark::Player) {
            return LOSS;
        }
        if board.is_full() {
            return DRAW;
        }
        let mark = if is_computer_turn {
            Mark::Computer
        } else {
            Mark::Player
        };
        let mut scores = Vec::new();
        for (row, col) in board.empty_cells() {
            board.place(row, col, mark).unwrap();
            scores.push(reference(board, !is_computer_turn));
            board.clear(row, col);
        }
        if is_computer_turn {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    #[test]
    fn test_terminal_scores() {
        let mut engine = engine();
        let mut board: Board = "XX. OOO X..".parse().unwrap();
        assert_eq!(engine.search(&mut board, false, i32::MIN, i32::MAX).unwrap(), WIN);

        let mut board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(engine.search(&mut board, true, i32::MIN, i32::MAX).unwrap(), LOSS);

        let mut board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(engine.search(&mut board, true, i32::MIN, i32::MAX).unwrap(), DRAW);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X fills the board with a diagonal: scored as a loss, not a draw.
        let mut board: Board = "XOX OXO OXX".parse().unwrap();
        assert_eq!(engine().search(&mut board, true, i32::MIN, i32::MAX).unwrap(), LOSS);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O can finish the middle row.
        assert_eq!(best("XX. OO. X.."), Some((1, 2)));
        // Winning beats blocking X's bottom row.
        assert_eq!(best("X.. OO. XX."), Some((1, 2)));
        // The winning cell is also the one X needs.
        assert_eq!(best("OO. XX. X.."), Some((0, 2)));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // X threatens the top row; O has no win of its own.
        assert_eq!(best("XX. .O. ..."), Some((0, 2)));
        // X threatens the anti-diagonal.
        assert_eq!(best("O.X .X. ..."), Some((2, 0)));
    }

    #[test]
    fn test_opening_replies() {
        // Every cell draws on an empty board, so the first one scanned wins.
        assert_eq!(best("... ... ..."), Some((0, 0)));
        // Against a centre opening every corner draws and (0, 0) comes first.
        assert_eq!(best("... .X. ..."), Some((0, 0)));
        // Against a corner opening only the centre holds the draw.
        assert_eq!(best("X.. ... ..."), Some((1, 1)));
        assert_eq!(best("..X ... ..."), Some((1, 1)));
    }

    #[test]
    fn test_deterministic() {
        let board = "X.. .O. ..X";
        let first = best(board);
        for _ in 0..10 {
            assert_eq!(best(board), first);
        }
    }

    #[test]
    fn test_no_move_on_full_board() {
        assert_eq!(best("XOX XOO OXX"), None);
    }

    #[test]
    fn test_pruned_scores_match_plain_minimax() {
        let positions = [
            "... ... ...",
            "X.. ... ...",
            "... .X. ...",
            ".X. ... ...",
            "X.. .O. ..X",
            "XX. .O. ...",
            "X.O .X. ...",
            "XO. .X. ..O",
        ];
        for position in positions {
            let mut board: Board = position.parse().unwrap();
            let expected = reference(&mut board, true);
            let actual = engine()
                .search(&mut board, true, i32::MIN, i32::MAX)
                .unwrap();
            assert_eq!(actual, expected, "{}", position);
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        // Plain minimax visits 549,946 positions from the empty board.
        let mut board = Board::new();
        let mut engine = engine();
        engine.search(&mut board, false, i32::MIN, i32::MAX).unwrap();
        assert!(engine.nodes() > 0);
        assert!(engine.nodes() < 549_946, "visited {}", engine.nodes());
    }
}
