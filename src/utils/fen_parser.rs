//! FEN parser.
//!
//! Turns a Forsyth-Edwards Notation string into a [`PositionSetup`]. King
//! counts and en-passant capturability are checked by
//! [`GameState::from_setup`](crate::game_state::game_state::GameState::from_setup).

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::PositionSetup;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<PositionSetup, ChessErrors> {
    let mut parts = fen.split_whitespace();
    let mut next_field = |name: &str| {
        parts
            .next()
            .ok_or_else(|| ChessErrors::InvalidFENstringForm(format!("missing {name} field")))
    };

    let board_part = next_field("board")?;
    let side_part = next_field("side-to-move")?;
    let castling_part = next_field("castling")?;
    let en_passant_part = next_field("en-passant")?;
    let halfmove_part = next_field("halfmove clock")?;
    let fullmove_part = next_field("fullmove number")?;

    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFENstringForm(
            "extra trailing fields".to_owned(),
        ));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let en_passant = parse_en_passant_square(en_passant_part, side_to_move)?;

    Ok(PositionSetup {
        board: parse_board(board_part)?,
        side_to_move,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant,
        halfmove_clock: parse_counter(halfmove_part, "halfmove clock")?,
        fullmove_number: parse_counter(fullmove_part, "fullmove number")?,
    })
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFENstringForm(format!(
            "board has {} ranks, expected 8",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    // FEN lists rank "8" first, which is board rank 0.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENtoken(ch));
                }
                file += empty_count as u8;
            } else {
                let piece = Piece::from_fen_char(ch).ok_or(ChessErrors::InvalidFENtoken(ch))?;
                if file >= 8 {
                    return Err(ChessErrors::InvalidFENstringForm(format!(
                        "rank \"{rank_str}\" has too many files"
                    )));
                }
                board.set(Square::new(file, rank as u8), Some(piece));
                file += 1;
            }

            if file > 8 {
                return Err(ChessErrors::InvalidFENstringForm(format!(
                    "rank \"{rank_str}\" has too many files"
                )));
            }
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFENstringForm(format!(
                "rank \"{rank_str}\" does not cover 8 files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFENstringForm(format!(
            "side to move \"{side_part}\""
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => return Err(ChessErrors::InvalidFENtoken(ch)),
        }
    }

    Ok(rights)
}

/// The target must sit on the rank a double push of the side that just
/// moved skips over.
fn parse_en_passant_square(
    en_passant_part: &str,
    side_to_move: Color,
) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    let pusher = side_to_move.opposite();
    let skipped_rank = pusher.pawn_start_rank() as i8 + pusher.pawn_direction();
    if square.rank as i8 != skipped_rank {
        return Err(ChessErrors::InvalidFENstringForm(format!(
            "en-passant square {en_passant_part} is on the wrong rank"
        )));
    }

    Ok(Some(square))
}

fn parse_counter(field: &str, name: &str) -> Result<u16, ChessErrors> {
    field
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFENstringForm(format!("{name} \"{field}\"")))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn parse_starting_fen() {
        let setup = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(setup.board, crate::game_state::board::Board::standard());
        assert_eq!(setup.side_to_move, Color::Light);
        assert_eq!(setup.castling_rights, CastlingRights::ALL);
        assert_eq!(setup.en_passant, None);
        assert_eq!(setup.halfmove_clock, 0);
        assert_eq!(setup.fullmove_number, 1);
    }

    #[test]
    fn parse_places_pieces_on_expected_squares() {
        let setup = parse_fen("4k3/8/8/8/8/8/8/R3K3 b Q - 7 40").expect("FEN should parse");
        assert_eq!(
            setup.board.piece_at(Square::new(0, 7)),
            Some(Piece::new(Color::Light, PieceKind::Rook))
        );
        assert_eq!(
            setup.board.piece_at(Square::new(4, 0)),
            Some(Piece::new(Color::Dark, PieceKind::King))
        );
        assert!(setup.castling_rights.light_queenside);
        assert!(!setup.castling_rights.light_kingside);
        assert_eq!(setup.halfmove_clock, 7);
        assert_eq!(setup.fullmove_number, 40);
    }

    #[test]
    fn malformed_fen_is_rejected() {
        assert!(matches!(
            parse_fen("8/8/8 w - - 0 1"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1"),
            Err(ChessErrors::InvalidFENtoken('X'))
        );
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
    }

    #[test]
    fn en_passant_square_must_match_side_to_move() {
        assert!(parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").is_ok());
        assert!(matches!(
            parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d3 0 2"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
    }

    #[test]
    fn uncapturable_en_passant_square_is_dropped() {
        let game = GameState::from_fen(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        )
        .expect("FEN should parse");
        assert_eq!(game.en_passant_square(), None);

        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2")
            .expect("FEN should parse");
        assert_eq!(game.en_passant_square(), Some(Square::new(3, 2)));
    }
}
