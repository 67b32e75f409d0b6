use shakmaty::{Color, Role, Square};

/// Piece types in feature order. The position of a role in this array is its
/// type rank.
pub const PIECE_TYPES: [Role; 6] = [
    Role::Pawn,
    Role::Knight,
    Role::Bishop,
    Role::Rook,
    Role::Queen,
    Role::King,
];

/// Colors in feature order. White pieces occupy the first half of the vector.
pub const COLORS: [Color; 2] = [Color::White, Color::Black];

/// Square numbering: a1 = 0, b1 = 1, ..., h1 = 7, a2 = 8, ..., h8 = 63.
pub const SQUARES: [Square; 64] = Square::ALL;

pub const NUM_PIECE_TYPES: usize = PIECE_TYPES.len();
pub const NUM_COLORS: usize = COLORS.len();
pub const NUM_SQUARES: usize = SQUARES.len();
pub const NUM_PIECES: usize = NUM_PIECE_TYPES * NUM_COLORS;
pub const NUM_FEATURES: usize = NUM_PIECES * NUM_SQUARES;

#[inline]
pub const fn type_rank(role: Role) -> usize {
    match role {
        Role::Pawn => 0,
        Role::Knight => 1,
        Role::Bishop => 2,
        Role::Rook => 3,
        Role::Queen => 4,
        Role::King => 5,
    }
}

#[inline]
pub const fn color_offset(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => NUM_PIECE_TYPES,
    }
}

#[inline]
pub const fn piece_index(color: Color, role: Role) -> usize {
    type_rank(role) + color_offset(color)
}

#[inline]
pub const fn feature(color: Color, role: Role, square: Square) -> usize {
    piece_index(color, role) * NUM_SQUARES + square.to_usize()
}

/// Inverse of [`feature`].
pub fn describe(index: usize) -> Option<(Color, Role, Square)> {
    if index >= NUM_FEATURES {
        return None;
    }
    let piece = index / NUM_SQUARES;
    let color = COLORS[piece / NUM_PIECE_TYPES];
    let role = PIECE_TYPES[piece % NUM_PIECE_TYPES];
    Some((color, role, SQUARES[index % NUM_SQUARES]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(NUM_PIECES, 12);
        assert_eq!(NUM_SQUARES, 64);
        assert_eq!(NUM_FEATURES, 768);
    }

    #[test]
    fn type_rank_follows_piece_order() {
        for (rank, role) in PIECE_TYPES.into_iter().enumerate() {
            assert_eq!(type_rank(role), rank);
        }
    }

    #[test]
    fn square_numbering() {
        assert_eq!(SQUARES[0], Square::A1);
        assert_eq!(SQUARES[7], Square::H1);
        assert_eq!(SQUARES[8], Square::A2);
        assert_eq!(SQUARES[63], Square::H8);
        for (index, square) in SQUARES.into_iter().enumerate() {
            assert_eq!(square.to_usize(), index);
        }
    }

    #[test]
    fn corner_features() {
        assert_eq!(feature(Color::White, Role::Pawn, Square::A1), 0);
        assert_eq!(feature(Color::White, Role::King, Square::H8), 5 * 64 + 63);
        assert_eq!(feature(Color::Black, Role::Pawn, Square::A1), 6 * 64);
        assert_eq!(feature(Color::Black, Role::King, Square::H8), 767);
    }

    #[test]
    fn describe_inverts_feature() {
        for color in COLORS {
            for role in PIECE_TYPES {
                for square in SQUARES {
                    let index = feature(color, role, square);
                    assert!(index < NUM_FEATURES);
                    assert_eq!(describe(index), Some((color, role, square)));
                }
            }
        }
        assert_eq!(describe(NUM_FEATURES), None);
    }
}
