use crate::{
    encoder::{self, FeatureVector},
    pgn::GameRecord,
};
use shakmaty::{
    Chess, Move, Position,
    san::{San, SanError, SanPlus},
    uci::{IllegalUciMoveError, UciMove},
};
use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum MoveError {
    #[error(transparent)]
    San(#[from] SanError),
    #[error("illegal uci move")]
    Uci(#[from] IllegalUciMoveError),
    #[error("illegal move")]
    Illegal,
}

#[derive(Clone, Debug, Error)]
#[error("cannot play move {notation} at ply {ply}: {source}")]
pub struct WalkError {
    pub ply: usize,
    pub notation: String,
    #[source]
    pub source: MoveError,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WalkerConfigError {
    #[error("at least one thread is required")]
    NoThreads,
}

/// A move in some notation that can be resolved against a position.
pub trait ToMove: fmt::Display {
    fn to_move(&self, position: &Chess) -> Result<Move, MoveError>;
}

/// A capture written without `x` (or a quiet move written with one) still
/// resolves, as long as exactly one legal move matches the other fields.
impl ToMove for San {
    fn to_move(&self, position: &Chess) -> Result<Move, MoveError> {
        match San::to_move(*self, position) {
            Err(SanError::IllegalSan) => match *self {
                San::Normal { role, file, rank, capture, to, promotion } => Ok(San::Normal {
                    role,
                    file,
                    rank,
                    capture: !capture,
                    to,
                    promotion,
                }
                .to_move(position)?),
                _ => Err(SanError::IllegalSan.into()),
            },
            result => Ok(result?),
        }
    }
}

impl ToMove for SanPlus {
    #[inline]
    fn to_move(&self, position: &Chess) -> Result<Move, MoveError> {
        ToMove::to_move(&self.san, position)
    }
}

impl ToMove for UciMove {
    #[inline]
    fn to_move(&self, position: &Chess) -> Result<Move, MoveError> {
        Ok(UciMove::to_move(*self, position)?)
    }
}

impl ToMove for Move {
    #[inline]
    fn to_move(&self, position: &Chess) -> Result<Move, MoveError> {
        if position.is_legal(*self) {
            Ok(*self)
        } else {
            Err(MoveError::Illegal)
        }
    }
}

#[inline]
fn play<M: ToMove>(position: &mut Chess, mv: &M, ply: usize) -> Result<(), WalkError> {
    let m = mv.to_move(position).map_err(|source| WalkError {
        ply,
        notation: mv.to_string(),
        source,
    })?;
    position.play_unchecked(m);
    Ok(())
}

/// Plays `moves` from `position` and encodes the board after every move.
///
/// The starting position itself is not encoded. The first move that cannot
/// be played aborts the walk.
pub fn walk<M: ToMove>(mut position: Chess, moves: &[M]) -> Result<Vec<FeatureVector>, WalkError> {
    let mut positions = Vec::with_capacity(moves.len());
    for (index, mv) in moves.iter().enumerate() {
        play(&mut position, mv, index + 1)?;
        log::trace!("ply {}: {}", index + 1, mv);
        positions.push(encoder::encode(position.board()));
    }
    Ok(positions)
}

#[inline]
pub fn walk_record(record: &GameRecord) -> Result<Vec<FeatureVector>, WalkError> {
    let positions = walk(record.position.clone(), &record.moves)?;
    log::debug!(
        "walked {} - {}: {} positions",
        record.tag("White").unwrap_or("?"),
        record.tag("Black").unwrap_or("?"),
        positions.len()
    );
    Ok(positions)
}

/// Walks independent games on up to `threads` worker threads. Results are in
/// the same order as `records`.
pub fn walk_all(
    records: &[GameRecord],
    threads: usize,
) -> Result<Vec<Result<Vec<FeatureVector>, WalkError>>, WalkerConfigError> {
    if threads == 0 {
        return Err(WalkerConfigError::NoThreads);
    }
    if threads == 1 || records.len() <= 1 {
        return Ok(records.iter().map(walk_record).collect());
    }

    let chunk_size = records.len().div_ceil(threads);
    let results = crossbeam::scope(|scope| {
        let handles = records
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move |_| chunk.iter().map(walk_record).collect::<Vec<_>>()))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(results) => results,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect::<Vec<_>>()
    });
    match results {
        Ok(results) => Ok(results),
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
