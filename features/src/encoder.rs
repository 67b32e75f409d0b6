use crate::layout::{self, NUM_FEATURES, NUM_SQUARES, SQUARES};
use arrayvec::ArrayVec;
use shakmaty::{Board, Position};
use std::ops;

/// One-hot occupancy of a single board, indexed by [`layout::feature`].
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector(Box<[f32; NUM_FEATURES]>);

impl FeatureVector {
    #[inline]
    fn zeroed() -> Self {
        Self(Box::new([0.0; NUM_FEATURES]))
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.0.as_slice()
    }

    #[inline]
    pub fn active(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, value)| **value != 0.0)
            .map(|(index, _)| index)
    }

    #[inline]
    pub fn count_active(&self) -> usize {
        self.active().count()
    }
}

impl ops::Index<usize> for FeatureVector {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl AsRef<[f32]> for FeatureVector {
    #[inline]
    fn as_ref(&self) -> &[f32] {
        self.as_slice()
    }
}

/// Indices of the features set on `board`, in square order.
#[inline]
pub fn active_features(board: &Board) -> ArrayVec<usize, NUM_SQUARES> {
    let mut active = ArrayVec::new();
    for square in SQUARES {
        if let Some(piece) = board.piece_at(square) {
            active.push(layout::feature(piece.color, piece.role, square));
        }
    }
    active
}

pub fn encode(board: &Board) -> FeatureVector {
    let mut features = FeatureVector::zeroed();
    for index in active_features(board) {
        features.0[index] = 1.0;
    }
    features
}

#[inline]
pub fn encode_position<P: Position>(position: &P) -> FeatureVector {
    encode(position.board())
}
