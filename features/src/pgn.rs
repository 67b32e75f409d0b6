use pgn_reader::{Outcome, RawTag, Reader, SanPlus, Visitor};
use shakmaty::{
    CastlingMode, Chess,
    fen::{Fen, ParseFenError},
};
use std::{io, ops::ControlFlow};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PgnError {
    #[error("failed to read pgn: {0}")]
    Io(#[from] io::Error),
    #[error("invalid fen '{fen}': {source}")]
    InvalidFen {
        fen: String,
        #[source]
        source: ParseFenError,
    },
    #[error("illegal fen '{fen}': {reason}")]
    IllegalFen { fen: String, reason: String },
    #[error("no game found")]
    NoGame,
}

/// The mainline of a single game.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub tags: Vec<(String, String)>,
    pub position: Chess,
    pub moves: Vec<SanPlus>,
    pub outcome: Option<Outcome>,
}

impl GameRecord {
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(tag, _)| tag == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Default)]
struct Tags {
    tags: Vec<(String, String)>,
    position: Option<Chess>,
}

struct Recorder;

impl Recorder {
    fn position_from_fen(value: RawTag<'_>) -> Result<Chess, PgnError> {
        let fen = value.decode_utf8_lossy().into_owned();
        let parsed = Fen::from_ascii(fen.as_bytes())
            .map_err(|source| PgnError::InvalidFen { fen: fen.clone(), source })?;
        parsed
            .into_position(CastlingMode::Standard)
            .map_err(|error| PgnError::IllegalFen {
                reason: error.to_string(),
                fen,
            })
    }
}

impl Visitor for Recorder {
    type Tags = Tags;
    type Movetext = GameRecord;
    type Output = Result<GameRecord, PgnError>;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        ControlFlow::Continue(Tags::default())
    }

    fn tag(
        &mut self,
        tags: &mut Self::Tags,
        name: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        if name == b"FEN" {
            match Self::position_from_fen(value) {
                Ok(position) => tags.position = Some(position),
                Err(error) => return ControlFlow::Break(Err(error)),
            }
        }
        tags.tags.push((
            String::from_utf8_lossy(name).into_owned(),
            value.decode_utf8_lossy().into_owned(),
        ));
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, tags: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(GameRecord {
            tags: tags.tags,
            position: tags.position.unwrap_or_default(),
            moves: Vec::new(),
            outcome: None,
        })
    }

    fn san(&mut self, movetext: &mut Self::Movetext, san_plus: SanPlus) -> ControlFlow<Self::Output> {
        movetext.moves.push(san_plus);
        ControlFlow::Continue(())
    }

    fn outcome(&mut self, movetext: &mut Self::Movetext, outcome: Outcome) -> ControlFlow<Self::Output> {
        movetext.outcome = Some(outcome);
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, movetext: Self::Movetext) -> Self::Output {
        log::debug!(
            "read game with {} tags and {} moves",
            movetext.tags.len(),
            movetext.moves.len()
        );
        Ok(movetext)
    }
}

/// Reads every game in `reader`. Variations, comments and NAGs are skipped.
pub fn read_games<R: io::Read>(reader: R) -> Result<Vec<GameRecord>, PgnError> {
    let mut reader = Reader::new(reader);
    let mut recorder = Recorder;
    let mut games = Vec::new();
    while let Some(game) = reader.read_game(&mut recorder)? {
        games.push(game?);
    }
    Ok(games)
}

/// Reads the first game in `pgn`.
pub fn parse_game(pgn: &str) -> Result<GameRecord, PgnError> {
    let mut reader = Reader::new(pgn.as_bytes());
    match reader.read_game(&mut Recorder)? {
        Some(game) => game,
        None => Err(PgnError::NoGame),
    }
}
