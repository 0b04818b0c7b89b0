//! JSON game data.
//!
//! Settings:
//!
//! ```json
//! {
//!   "boardSize": { "columns": 5, "rows": 5 },
//!   "startingPosition": { "x": 0, "y": 0 },
//!   "direction": "North",
//!   "exitPoint": { "x": 4, "y": 4 },
//!   "mines": [{ "x": 1, "y": 1 }]
//! }
//! ```
//!
//! Moves:
//!
//! ```json
//! [{ "name": "Sequence 1", "moves": ["move", "rotate", "move"] }]
//! ```
//!
//! Numbers may also be written as numeric strings (`"5"`). Directions are
//! names in any case or their 0..=3 encoding. `mines` may be omitted.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;

use super::{DataProvider, FormatError};
use crate::core::{Board, Direction, GameSettings, Move, Position, Sequence};

/// Reads `.json` game data.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonProvider;

impl JsonProvider {
    /// Create a new JSON provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DataProvider for JsonProvider {
    fn extension(&self) -> &'static str {
        ".json"
    }

    fn parse_settings(&self, text: &str) -> Result<GameSettings, FormatError> {
        let doc: SettingsDoc = serde_json::from_str(text)?;
        Ok(doc.into())
    }

    fn parse_sequences(&self, text: &str) -> Result<Vec<Sequence>, FormatError> {
        let docs: Vec<SequenceDoc> = serde_json::from_str(text)?;
        Ok(docs.into_iter().map(Into::into).collect())
    }
}

// === Document shapes ===

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsDoc {
    board_size: BoardDoc,
    starting_position: PointDoc,
    direction: DirectionDoc,
    exit_point: PointDoc,
    #[serde(default)]
    mines: Vec<PointDoc>,
}

#[derive(Deserialize)]
struct BoardDoc {
    columns: Count,
    rows: Count,
}

#[derive(Deserialize)]
struct PointDoc {
    x: Count,
    y: Count,
}

#[derive(Deserialize)]
struct SequenceDoc {
    name: String,
    moves: Vec<MoveDoc>,
}

impl From<PointDoc> for Position {
    fn from(doc: PointDoc) -> Self {
        Position::new(doc.x.0, doc.y.0)
    }
}

impl From<SettingsDoc> for GameSettings {
    fn from(doc: SettingsDoc) -> Self {
        GameSettings::new(
            Board::new(doc.board_size.columns.0, doc.board_size.rows.0),
            doc.starting_position.into(),
            doc.exit_point.into(),
            doc.direction.0,
        )
        .with_mines(doc.mines.into_iter().map(Position::from))
    }
}

impl From<SequenceDoc> for Sequence {
    fn from(doc: SequenceDoc) -> Self {
        Sequence::new(doc.name).with_moves(doc.moves.into_iter().map(|m| m.0))
    }
}

// === Lenient scalars ===

/// Non-negative integer given as a JSON number or a numeric string.
struct Count(u32);

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountVisitor;

        impl Visitor<'_> for CountVisitor {
            type Value = Count;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a non-negative integer or numeric string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Count, E> {
                u32::try_from(v)
                    .map(Count)
                    .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Count, E> {
                u32::try_from(v)
                    .map(Count)
                    .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Count, E> {
                v.trim()
                    .parse()
                    .map(Count)
                    .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(CountVisitor)
    }
}

/// Heading given by name (any case) or by its 0..=3 encoding.
struct DirectionDoc(Direction);

impl<'de> Deserialize<'de> for DirectionDoc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectionVisitor;

        impl Visitor<'_> for DirectionVisitor {
            type Value = DirectionDoc;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("North, East, South, West or 0..=3")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<DirectionDoc, E> {
                u8::try_from(v)
                    .ok()
                    .and_then(Direction::from_index)
                    .map(DirectionDoc)
                    .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<DirectionDoc, E> {
                u64::try_from(v)
                    .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<DirectionDoc, E> {
                v.parse().map(DirectionDoc).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(DirectionVisitor)
    }
}

/// Move given by its data-file name.
struct MoveDoc(Move);

impl<'de> Deserialize<'de> for MoveDoc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map(MoveDoc).map_err(de::Error::custom)
    }
}
