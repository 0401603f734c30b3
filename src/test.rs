#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::board::{Board, Cell, Color};
    use crate::solver::{evaluate, solve_position, SearchResult, Solver, LOSS_SCORE, WIN_SCORE};
    use crate::tree::build_tree;

    #[test]
    pub fn parse_round_trip() -> Result<()> {
        let rows = ["-bw", "w--", "b-b"];
        let board = Board::from_rows(&rows, 3)?;

        assert_eq!(board.size(), 3);
        assert_eq!(board.get(0, 1), Cell::Black);
        assert_eq!(board.get(1, 0), Cell::White);
        assert_eq!(board.get(2, 1), Cell::Empty);
        assert_eq!(board.to_rows(), rows);
        Ok(())
    }

    #[test]
    pub fn rejects_malformed_boards() {
        // wrong row count
        assert!(Board::from_rows(&["---", "---"], 3).is_err());
        // ragged row
        assert!(Board::from_rows(&["---", "--", "---"], 3).is_err());
        // unknown cell character
        assert!(Board::from_rows(&["--x", "---", "---"], 3).is_err());
        // degenerate size
        assert!(Board::from_rows::<&str>(&[], 0).is_err());
        // unknown color
        assert!(solve_position(&["---", "b-w", "---"], 3, 'x', 1).is_err());
    }

    #[test]
    pub fn starting_position_layout() {
        let board = Board::starting(3);

        assert_eq!(board.to_rows(), ["www", "---", "bbb"]);
        assert_eq!(board.pawn_count(Color::Black), 3);
        assert_eq!(board.pawn_count(Color::White), 3);
        assert_eq!(board.winner(), None);
    }

    #[test]
    pub fn evaluation_antisymmetry() -> Result<()> {
        let boards = [
            // quiet positions
            Board::from_rows(&["---", "b-w", "---"], 3)?,
            Board::starting(3),
            Board::from_rows(&["-w-", "b-w", "---"], 3)?,
            // decided positions
            Board::from_rows(&["b--", "--w", "---"], 3)?,
            Board::from_rows(&["---", "---", "w-b"], 3)?,
            // both goal rows occupied, White's is checked first
            Board::from_rows(&["b--", "---", "w--"], 3)?,
        ];

        for board in &boards {
            assert_eq!(evaluate(board, Color::Black), -evaluate(board, Color::White));
        }
        Ok(())
    }

    #[test]
    pub fn evaluation_terminal_scores() -> Result<()> {
        let black_win = Board::from_rows(&["b--", "--w", "---"], 3)?;
        assert_eq!(evaluate(&black_win, Color::Black), WIN_SCORE);
        assert_eq!(evaluate(&black_win, Color::White), LOSS_SCORE);

        let white_win = Board::from_rows(&["---", "b--", "--w"], 3)?;
        assert_eq!(evaluate(&white_win, Color::White), WIN_SCORE);
        assert_eq!(evaluate(&white_win, Color::Black), LOSS_SCORE);

        // one pawn up for Black on a quiet board
        let material = Board::from_rows(&["---", "bbw", "---"], 3)?;
        assert_eq!(evaluate(&material, Color::Black), 1);
        assert_eq!(evaluate(&material, Color::White), -1);
        Ok(())
    }

    #[test]
    pub fn forward_moves_come_before_captures() -> Result<()> {
        // the Black pawn can advance or capture to either side
        let board = Board::from_rows(&["w-w", "-b-", "---"], 3)?;
        let moves = board.generate_moves(Color::Black);

        let expected = [
            Board::from_rows(&["wbw", "---", "---"], 3)?,
            Board::from_rows(&["b-w", "---", "---"], 3)?,
            Board::from_rows(&["w-b", "---", "---"], 3)?,
        ];
        assert_eq!(moves, expected);
        Ok(())
    }

    #[test]
    pub fn forward_only_when_no_capture_target() -> Result<()> {
        // the White pawn sits beside the Black pawn, not on its diagonal
        let board = Board::from_rows(&["---", "bw-", "---"], 3)?;
        let moves = board.generate_moves(Color::Black);

        assert_eq!(moves, [Board::from_rows(&["b--", "-w-", "---"], 3)?]);
        Ok(())
    }

    #[test]
    pub fn settled_positions_generate_nothing() -> Result<()> {
        // Black has already reached row 0
        let decided = Board::from_rows(&["b--", "-w-", "--b"], 3)?;
        assert!(decided.generate_moves(Color::Black).is_empty());
        assert!(decided.generate_moves(Color::White).is_empty());

        // Black has no pawns left
        let wiped_out = Board::from_rows(&["---", "-w-", "---"], 3)?;
        assert!(wiped_out.generate_moves(Color::Black).is_empty());
        assert!(wiped_out.generate_moves(Color::White).is_empty());
        Ok(())
    }

    #[test]
    pub fn blocked_position_reports_no_move() -> Result<()> {
        // the Black pawn is blocked head-on with nothing to capture
        let result = solve_position(&["w--", "b--", "---"], 3, 'b', 2)?;

        assert_eq!(result, SearchResult::NoLegalMove);
        Ok(())
    }

    #[test]
    pub fn winning_advance_found_at_depth_one() -> Result<()> {
        let result = solve_position(&["---", "b-w", "---"], 3, 'b', 1)?;

        let chosen = Board::from_rows(&["b--", "--w", "---"], 3)?;
        assert_eq!(
            result,
            SearchResult::Best {
                board: chosen,
                score: WIN_SCORE
            }
        );
        Ok(())
    }

    #[test]
    pub fn first_of_equal_children_wins() -> Result<()> {
        // both Black pawns can advance to the goal row for the same value;
        // the pawn scanned first must be the one that moves
        let board = Board::from_rows(&["---", "bwb", "---"], 3)?;
        let mut solver = Solver::new(board, Color::Black, 1);

        let chosen = Board::from_rows(&["b--", "-wb", "---"], 3)?;
        assert_eq!(
            solver.solve(),
            SearchResult::Best {
                board: chosen,
                score: WIN_SCORE
            }
        );
        Ok(())
    }

    #[test]
    pub fn capture_avoids_forced_loss() -> Result<()> {
        // either forward move lets White promote next ply; either capture
        // wipes White out. Both captures tie at +2 and the left-hand pawn
        // is scanned first, so its capture is chosen.
        let board = Board::from_rows(&["---", "-w-", "b-b"], 3)?;
        let mut solver = Solver::new(board, Color::Black, 2);

        let chosen = Board::from_rows(&["---", "-b-", "--b"], 3)?;
        assert_eq!(
            solver.solve(),
            SearchResult::Best {
                board: chosen,
                score: 2
            }
        );
        // root, two forward subtrees of three nodes, two leaf captures
        assert_eq!(solver.node_count, 9);
        Ok(())
    }

    #[test]
    pub fn depth_zero_reports_no_move() {
        // a depth of 0 cuts the tree off before move generation, so even a
        // winnable position comes back as unmovable
        let mut solver = Solver::new(Board::starting(3), Color::Black, 0);
        assert_eq!(solver.solve(), SearchResult::NoLegalMove);
    }

    #[test]
    pub fn tree_alternates_movers_to_depth() {
        let root = build_tree(Board::starting(3), Color::Black, 2);

        assert_eq!(root.mover, Color::Black);
        assert_eq!(root.value, None);
        assert_eq!(root.children.len(), 3);
        for child in &root.children {
            assert_eq!(child.mover, Color::White);
            assert!(!child.children.is_empty());
            for grandchild in &child.children {
                assert_eq!(grandchild.mover, Color::Black);
                // the depth limit stops expansion here
                assert!(grandchild.children.is_empty());
            }
        }

        let stump = build_tree(Board::starting(3), Color::Black, 0);
        assert!(stump.children.is_empty());
    }

    #[test]
    pub fn four_by_four_prefers_first_quiet_advance() {
        // no contact within two plies, every line holds even material, so
        // the first generated advance is kept
        let mut solver = Solver::new(Board::starting(4), Color::Black, 2);

        match solver.solve() {
            SearchResult::Best { board, score } => {
                assert_eq!(board.to_rows(), ["wwww", "----", "b---", "-bbb"]);
                assert_eq!(score, 0);
            }
            SearchResult::NoLegalMove => panic!("expected a legal move"),
        }
    }

    #[test]
    pub fn repeated_solves_are_identical() -> Result<()> {
        let rows = ["w-w", "-b-", "---"];
        let first = solve_position(&rows, 3, 'b', 3)?;
        let second = solve_position(&rows, 3, 'b', 3)?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    pub fn node_count_tracks_visits() {
        let mut solver = Solver::new(Board::starting(3), Color::Black, 1);
        solver.solve();

        // the root plus its three forward moves
        assert_eq!(solver.node_count, 4);
    }
}
