use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;

/// A move taken back with `go_back`, with the forward values it produced.
///
/// Replaying restores these values instead of recomputing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoneMove {
    pub mv: ChessMove,
    pub castling_rights_after: CastlingRights,
    pub en_passant_after: Option<Square>,
    pub halfmove_clock_after: u16,
}

/// Position identity used for repetition detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSnapshot {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square an en-passant capture could land on, if one is available.
    pub en_passant: Option<Square>,
}
