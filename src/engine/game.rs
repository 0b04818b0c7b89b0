//! Game entry points.
//!
//! A run validates the settings once. If any problem is found the problems
//! are the result and no sequence is replayed (when loading from files, the
//! moves file is not even read). Otherwise every sequence is replayed and
//! yields one outcome line.
//!
//! Problems and outcomes leave [`start`] through the same channel: a list of
//! printable lines. [`play`] keeps them apart as a [`GameReport`].

use std::path::Path;

use tracing::{info, instrument, warn};

use super::{GameReport, Simulation};
use crate::core::{GameSettings, Sequence};
use crate::data::{DataError, DiskFileAccess, FileAccess, GameDataManager};
use crate::rules;

/// Validate and, if the settings are playable, replay every sequence.
///
/// ```
/// use turtle_challenge::core::{Board, Direction, GameSettings, Position, Sequence};
/// use turtle_challenge::engine::{play, GameReport};
///
/// let settings = GameSettings::new(
///     Board::new(2, 2),
///     Position::new(0, 0),
///     Position::new(0, 0),
///     Direction::North,
/// );
/// let report = play(&settings, &[Sequence::new("s").step()]);
/// assert!(report.is_invalid());
/// ```
#[must_use]
pub fn play(settings: &GameSettings, sequences: &[Sequence]) -> GameReport {
    match play_with(settings, || Ok::<_, std::convert::Infallible>(sequences)) {
        Ok(report) => report,
        Err(never) => match never {},
    }
}

/// Like [`play`], but returns printable lines.
///
/// ```
/// use turtle_challenge::core::{Board, Direction, GameSettings, Position, Sequence};
/// use turtle_challenge::engine::start;
///
/// let settings = GameSettings::new(
///     Board::new(5, 5),
///     Position::new(0, 0),
///     Position::new(1, 1),
///     Direction::East,
/// )
/// .with_mines([Position::new(1, 2), Position::new(3, 1)]);
///
/// let lines = start(&settings, &[Sequence::new("Sequence 1").step().turn().step()]);
/// assert_eq!(lines, vec!["Sequence 1: Success!"]);
/// ```
#[must_use]
pub fn start(settings: &GameSettings, sequences: &[Sequence]) -> Vec<String> {
    play(settings, sequences).into_lines()
}

/// Validate, then obtain the sequences only if the settings are playable.
///
/// `load` is not called when validation fails.
pub fn play_with<S, E>(
    settings: &GameSettings,
    load: impl FnOnce() -> Result<S, E>,
) -> Result<GameReport, E>
where
    S: AsRef<[Sequence]>,
{
    let problems = rules::validate(settings);
    if !problems.is_empty() {
        warn!(problems = problems.len(), "game settings rejected");
        return Ok(GameReport::Invalid(problems.into_vec()));
    }

    let sequences = load()?;
    let sequences = sequences.as_ref();
    info!(
        board = %settings.board,
        mines = settings.mines.len(),
        sequences = sequences.len(),
        "replaying sequences"
    );

    let outcomes = Simulation::new(settings).run(sequences);
    Ok(GameReport::Completed(outcomes))
}

/// Runs games from settings and moves files.
#[derive(Debug)]
pub struct GameManager<F = DiskFileAccess> {
    data: GameDataManager<F>,
}

impl GameManager<DiskFileAccess> {
    /// Manager reading JSON and XML files from disk.
    #[must_use]
    pub fn new() -> Self {
        Self::with_data_manager(GameDataManager::new())
    }
}

impl Default for GameManager<DiskFileAccess> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileAccess> GameManager<F> {
    /// Manager using an explicit data manager.
    #[must_use]
    pub fn with_data_manager(data: GameDataManager<F>) -> Self {
        Self { data }
    }

    /// The data manager in use.
    #[must_use]
    pub fn data(&self) -> &GameDataManager<F> {
        &self.data
    }

    /// Load settings, validate, and replay the moves file.
    ///
    /// The moves file is read only when the settings are valid.
    #[instrument(skip_all, fields(settings = %settings_path.display(), moves = %moves_path.display()))]
    pub fn play_files(&self, settings_path: &Path, moves_path: &Path) -> Result<GameReport, DataError> {
        let settings = self.data.settings(settings_path)?;
        play_with(&settings, || self.data.sequences(moves_path))
    }

    /// Like [`GameManager::play_files`], but returns printable lines.
    pub fn start_files(
        &self,
        settings_path: impl AsRef<Path>,
        moves_path: impl AsRef<Path>,
    ) -> Result<Vec<String>, DataError> {
        self.play_files(settings_path.as_ref(), moves_path.as_ref())
            .map(GameReport::into_lines)
    }
}
