//! Plain-text board renderer for terminals, logs and test output.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Render the board with rank "8" on top, FEN letters for pieces and `.` for
/// empty squares.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 0..8u8 {
        let label = char::from(b'8' - rank);
        out.push(label);
        out.push(' ');

        for file in 0..8u8 {
            match board.piece_at(Square::new(file, rank)) {
                Some(piece) => out.push(piece.to_fen_char()),
                None => out.push('.'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
