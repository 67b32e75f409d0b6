use crate::{encoder::FeatureVector, layout::NUM_FEATURES};
use ndarray::{Array2, ArrayView1};
use std::fmt;

/// Stacks `positions` into a `(positions.len(), NUM_FEATURES)` matrix, one row
/// per position.
pub fn to_tensor(positions: &[FeatureVector]) -> Array2<f32> {
    let mut tensor = Array2::<f32>::zeros((positions.len(), NUM_FEATURES));
    for (mut row, features) in tensor.rows_mut().into_iter().zip(positions) {
        row.assign(&ArrayView1::from(features.as_slice()));
    }
    tensor
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[inline]
    pub fn of(tensor: &Array2<f32>) -> Shape {
        let (rows, cols) = tensor.dim();
        Shape { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::walk;
    use shakmaty::{Chess, san::SanPlus};

    #[test]
    fn empty_sequence() {
        let tensor = to_tensor(&[]);
        assert_eq!(tensor.dim(), (0, NUM_FEATURES));
        assert_eq!(Shape::of(&tensor).to_string(), "(0, 768)");
    }

    #[test]
    fn rows_follow_positions() {
        let moves = ["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6", "Qxf7#"]
            .map(|mv| mv.parse::<SanPlus>().unwrap());
        let positions = walk(Chess::default(), &moves).unwrap();
        let tensor = to_tensor(&positions);

        assert_eq!(Shape::of(&tensor), Shape { rows: 7, cols: NUM_FEATURES });
        for (row, features) in tensor.rows().into_iter().zip(&positions) {
            assert_eq!(row.as_slice().unwrap(), features.as_slice());
        }
        assert_eq!(tensor.row(6).sum(), 31.0);
        assert_eq!(tensor.sum(), 6.0 * 32.0 + 31.0);
    }
}
