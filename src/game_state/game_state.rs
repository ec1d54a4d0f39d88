//! Authoritative game state and the move commit/undo machinery.
//!
//! `GameState` is the single owner of the board. Every mutation goes through
//! [`GameState::commit_move`], [`GameState::undo_move`] or the review helpers
//! in `history.rs`, so the king cache, clocks and logs always agree with the
//! board.
//!
//! History layout: `castling_rights_log`, `en_passant_log` and `position_log`
//! hold one entry per committed ply plus one for the initial position, so
//! their last element always describes the current position.
//! `halfmove_clock_log` holds the clock value from before each committed ply.

use log::{debug, warn};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::PromotionSelector;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home_square, GameRules, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::{PositionSnapshot, UndoneMove};
use crate::move_generation::legal_move_apply::{
    apply_move_to_board, castling_rights_after, en_passant_target_after,
    en_passant_target_if_capturable, revert_move_on_board,
};
use crate::move_generation::legal_move_generator::{generate_legal_moves, generate_legal_moves_from};
use crate::moves::move_descriptions::{ChessMove, MoveId};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    // [color]
    king_squares: [Square; 2],
    rules: GameRules,

    halfmove_clock: u16,
    initial_fullmove_number: u16,
    initial_side_to_move: Color,

    move_log: Vec<ChessMove>,
    pub(crate) undone_moves: Vec<UndoneMove>,
    castling_rights_log: Vec<CastlingRights>,
    en_passant_log: Vec<Option<Square>>,
    halfmove_clock_log: Vec<u16>,
    position_log: Vec<PositionSnapshot>,
}

/// Starting values for a position set up from outside (FEN or code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSetup {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position with default rules.
    pub fn new_game() -> Self {
        Self::with_rules(GameRules::default())
    }

    /// Standard starting position under `rules`.
    pub fn with_rules(rules: GameRules) -> Self {
        let board = Board::standard();
        Self::from_trusted_setup(
            PositionSetup {
                board,
                side_to_move: Color::Light,
                castling_rights: CastlingRights::ALL,
                en_passant: None,
                halfmove_clock: 0,
                fullmove_number: 1,
            },
            [king_home_square(Color::Light), king_home_square(Color::Dark)],
            rules,
        )
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Self::from_fen_with_rules(fen, GameRules::default())
    }

    pub fn from_fen_with_rules(fen: &str, rules: GameRules) -> Result<Self, ChessErrors> {
        Self::from_setup(parse_fen(fen)?, rules)
    }

    /// Validate `setup` and build a game from it.
    ///
    /// Requires exactly one king per colour. An en-passant square is kept
    /// only if a pawn of the side to move can actually capture onto it.
    pub fn from_setup(setup: PositionSetup, rules: GameRules) -> Result<Self, ChessErrors> {
        let mut king_squares = [Square::new(0, 0); 2];
        for color in [Color::Light, Color::Dark] {
            let mut kings = setup.board.squares_of(Piece::new(color, PieceKind::King));
            let (Some(king), None) = (kings.next(), kings.next()) else {
                return Err(ChessErrors::KingCountMismatch(color));
            };
            king_squares[color.index()] = king;
        }

        let en_passant = setup.en_passant.and_then(|target| {
            en_passant_target_if_capturable(&setup.board, setup.side_to_move, target)
        });

        Ok(Self::from_trusted_setup(
            PositionSetup {
                en_passant,
                ..setup
            },
            king_squares,
            rules,
        ))
    }

    fn from_trusted_setup(setup: PositionSetup, king_squares: [Square; 2], rules: GameRules) -> Self {
        let mut game = Self {
            board: setup.board,
            side_to_move: setup.side_to_move,
            king_squares,
            rules,
            halfmove_clock: setup.halfmove_clock,
            initial_fullmove_number: setup.fullmove_number.max(1),
            initial_side_to_move: setup.side_to_move,
            move_log: Vec::new(),
            undone_moves: Vec::new(),
            castling_rights_log: vec![setup.castling_rights],
            en_passant_log: vec![setup.en_passant],
            halfmove_clock_log: Vec::new(),
            position_log: Vec::new(),
        };
        game.position_log.push(game.snapshot());
        game
    }

    #[inline]
    pub fn is_standard_start(&self) -> bool {
        self.move_log.is_empty() && self.get_fen() == STARTING_POSITION_FEN
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    // --- Read-only views ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Cached king location; never recomputed by scanning.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn rules(&self) -> GameRules {
        self.rules
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights_log
            .last()
            .copied()
            .unwrap_or(CastlingRights::NONE)
    }

    /// Target square of an en-passant capture available right now.
    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_log.last().copied().flatten()
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u16 {
        let plies = u16::try_from(self.move_log.len()).unwrap_or(u16::MAX);
        let dark_moves_played = match self.initial_side_to_move {
            Color::Light => plies / 2,
            Color::Dark => plies.saturating_add(1) / 2,
        };
        self.initial_fullmove_number.saturating_add(dark_moves_played)
    }

    /// Committed moves, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[ChessMove] {
        &self.move_log
    }

    /// Rights before the first move and after each committed move.
    #[inline]
    pub fn castling_rights_history(&self) -> &[CastlingRights] {
        &self.castling_rights_log
    }

    /// Position snapshots, initial position first.
    #[inline]
    pub fn position_history(&self) -> &[PositionSnapshot] {
        &self.position_log
    }

    pub fn has_castled(&self, color: Color) -> bool {
        self.move_log
            .iter()
            .any(|mv| mv.is_castle && mv.piece_moved.color == color)
    }

    /// Identity of the current position for repetition checks.
    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            board: self.board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights(),
            en_passant: self.en_passant_square(),
        }
    }

    // --- Move generation ---

    #[inline]
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        generate_legal_moves(self)
    }

    /// Legal moves starting on `from`, for move previews.
    #[inline]
    pub fn legal_moves_from(&self, from: Square) -> Vec<ChessMove> {
        generate_legal_moves_from(self, from)
    }

    // --- Commit / undo ---

    /// Play the legal move identified by `id`.
    ///
    /// Rejected without any mutation if the move is not legal here or if
    /// undone moves are waiting to be replayed.
    pub fn commit_move(&mut self, id: MoveId) -> Result<ChessMove, ChessErrors> {
        if !self.undone_moves.is_empty() {
            warn!("rejected {id}: {} undone move(s) pending", self.undone_moves.len());
            return Err(ChessErrors::RedoPending);
        }

        let Some(mv) = self.legal_moves().into_iter().find(|mv| mv.id() == id) else {
            warn!("rejected illegal move {id}");
            return Err(ChessErrors::IllegalMove(id));
        };

        self.make_move(mv);
        debug!("committed {mv} (ply {})", self.move_log.len());
        Ok(mv)
    }

    /// Play the move from `from` to `to`, asking `selector` for the piece
    /// when the move promotes.
    pub fn commit_move_with_selector<S>(
        &mut self,
        from: Square,
        to: Square,
        selector: &mut S,
    ) -> Result<ChessMove, ChessErrors>
    where
        S: PromotionSelector + ?Sized,
    {
        if !self.undone_moves.is_empty() {
            warn!(
                "rejected {}: {} undone move(s) pending",
                MoveId::new(from, to),
                self.undone_moves.len()
            );
            return Err(ChessErrors::RedoPending);
        }

        let candidate = self
            .legal_moves_from(from)
            .into_iter()
            .find(|mv| mv.to == to)
            .ok_or(ChessErrors::IllegalMove(MoveId::new(from, to)))?;

        let id = if candidate.is_promotion() {
            let kind = selector.select_promotion(self, from, to);
            if !kind.is_promotable() {
                return Err(ChessErrors::InvalidPromotionPiece(kind));
            }
            MoveId::with_promotion(from, to, kind)
        } else {
            candidate.id()
        };

        self.commit_move(id)
    }

    /// Apply a move known to be legal and update every derived value.
    pub(crate) fn make_move(&mut self, mv: ChessMove) {
        let rights = castling_rights_after(self.castling_rights(), &mv);
        apply_move_to_board(&mut self.board, &mv);
        let en_passant = en_passant_target_after(&self.board, &mv);
        let halfmove_clock = if mv.is_capture() || mv.piece_moved.kind == PieceKind::Pawn {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        self.record_ply(mv, rights, en_passant, halfmove_clock);
    }

    /// Replay a move taken back with `go_back`, reusing its recorded values.
    pub(crate) fn replay_move(&mut self, undone: UndoneMove) {
        apply_move_to_board(&mut self.board, &undone.mv);
        self.record_ply(
            undone.mv,
            undone.castling_rights_after,
            undone.en_passant_after,
            undone.halfmove_clock_after,
        );
    }

    // Board must already show the move.
    fn record_ply(
        &mut self,
        mv: ChessMove,
        castling_rights: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
    ) {
        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mv.piece_moved.color.index()] = mv.to;
        }
        self.halfmove_clock_log.push(self.halfmove_clock);
        self.halfmove_clock = halfmove_clock;
        self.castling_rights_log.push(castling_rights);
        self.en_passant_log.push(en_passant);
        self.side_to_move = mv.piece_moved.color.opposite();
        self.move_log.push(mv);
        self.position_log.push(self.snapshot());
    }

    /// Take back the most recent move. No-op returning `None` on an empty log.
    ///
    /// Any moves parked by `go_back` are discarded, since they no longer
    /// continue from the resulting position.
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        if self.move_log.is_empty() {
            return None;
        }
        self.discard_redo();
        self.unmake_move()
    }

    /// Pop the last ply without touching the undone-move stack.
    pub(crate) fn unmake_move(&mut self) -> Option<ChessMove> {
        let mv = self.move_log.pop()?;

        revert_move_on_board(&mut self.board, &mv);
        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mv.piece_moved.color.index()] = mv.from;
        }
        self.side_to_move = mv.piece_moved.color;
        self.castling_rights_log.pop();
        self.en_passant_log.pop();
        self.position_log.pop();
        if let Some(previous) = self.halfmove_clock_log.pop() {
            self.halfmove_clock = previous;
        }

        debug!("undid {mv}");
        Some(mv)
    }
}
