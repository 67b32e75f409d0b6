//! Piece/color/square feature encoding of chess positions for NNUE-style
//! training data.

pub mod encoder;
pub mod layout;
pub mod pgn;
pub mod tensor;
pub mod walker;

pub use encoder::{FeatureVector, active_features, encode, encode_position};
pub use layout::NUM_FEATURES;
pub use pgn::{GameRecord, PgnError, parse_game, read_games};
pub use tensor::{Shape, to_tensor};
pub use walker::{MoveError, ToMove, WalkError, WalkerConfigError, walk, walk_all, walk_record};
