//! Review navigation over the move log.
//!
//! `go_back` parks taken-back moves on the undone stack and `go_forth`
//! replays them with the values they originally produced. While the stack is
//! non-empty new moves are refused; `discard_redo` drops it so play can
//! branch from the current position.

use log::debug;

use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::UndoneMove;
use crate::moves::move_descriptions::ChessMove;

impl GameState {
    /// Step one ply back, keeping the move for `go_forth`.
    pub fn go_back(&mut self) -> Option<ChessMove> {
        let castling_rights_after = self.castling_rights();
        let en_passant_after = self.en_passant_square();
        let halfmove_clock_after = self.halfmove_clock();

        let mv = self.unmake_move()?;
        self.undone_moves.push(UndoneMove {
            mv,
            castling_rights_after,
            en_passant_after,
            halfmove_clock_after,
        });
        Some(mv)
    }

    /// Replay the most recently undone move. `None` when nothing is pending.
    pub fn go_forth(&mut self) -> Option<ChessMove> {
        let undone = self.undone_moves.pop()?;
        self.replay_move(undone);
        debug!("replayed {}", undone.mv);
        Some(undone.mv)
    }

    #[inline]
    pub fn redo_move(&mut self) -> Option<ChessMove> {
        self.go_forth()
    }

    /// Forget every undone move.
    pub fn discard_redo(&mut self) {
        if !self.undone_moves.is_empty() {
            debug!("discarding {} undone move(s)", self.undone_moves.len());
        }
        self.undone_moves.clear();
    }

    /// Undone moves, the next one to replay last.
    #[inline]
    pub fn undone_moves(&self) -> &[UndoneMove] {
        &self.undone_moves
    }
}
