//! XML game data.
//!
//! Settings:
//!
//! ```xml
//! <gameSettings>
//!   <boardSize><columns>4</columns><rows>4</rows></boardSize>
//!   <startingPosition><x>0</x><y>0</y></startingPosition>
//!   <direction>South</direction>
//!   <exitPoint><x>3</x><y>3</y></exitPoint>
//!   <mine><x>1</x><y>1</y></mine>
//!   <mine><x>2</x><y>1</y></mine>
//! </gameSettings>
//! ```
//!
//! Moves:
//!
//! ```xml
//! <sequences>
//!   <sequence name="Sequence 1">
//!     <action>move</action>
//!     <action>rotate</action>
//!   </sequence>
//! </sequences>
//! ```

use serde::Deserialize;

use super::{DataProvider, FormatError};
use crate::core::{Board, Direction, GameSettings, Move, Position, Sequence};

/// Reads `.xml` game data.
#[derive(Clone, Copy, Debug, Default)]
pub struct XmlProvider;

impl XmlProvider {
    /// Create a new XML provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DataProvider for XmlProvider {
    fn extension(&self) -> &'static str {
        ".xml"
    }

    fn parse_settings(&self, text: &str) -> Result<GameSettings, FormatError> {
        let doc: SettingsDoc = quick_xml::de::from_str(text)?;
        let direction: Direction = doc.direction.parse()?;

        Ok(GameSettings::new(
            Board::new(doc.board_size.columns, doc.board_size.rows),
            doc.starting_position.into(),
            doc.exit_point.into(),
            direction,
        )
        .with_mines(doc.mines.into_iter().map(Position::from)))
    }

    fn parse_sequences(&self, text: &str) -> Result<Vec<Sequence>, FormatError> {
        let doc: SequencesDoc = quick_xml::de::from_str(text)?;

        doc.sequences
            .into_iter()
            .map(|sequence| -> Result<Sequence, FormatError> {
                let moves = sequence
                    .actions
                    .iter()
                    .map(|action| action.parse::<Move>())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Sequence::new(sequence.name).with_moves(moves))
            })
            .collect()
    }
}

#[derive(Deserialize)]
struct SettingsDoc {
    #[serde(rename = "boardSize")]
    board_size: BoardDoc,
    #[serde(rename = "startingPosition")]
    starting_position: PointDoc,
    direction: String,
    #[serde(rename = "exitPoint")]
    exit_point: PointDoc,
    #[serde(rename = "mine", default)]
    mines: Vec<PointDoc>,
}

#[derive(Deserialize)]
struct BoardDoc {
    columns: u32,
    rows: u32,
}

#[derive(Deserialize)]
struct PointDoc {
    x: u32,
    y: u32,
}

impl From<PointDoc> for Position {
    fn from(doc: PointDoc) -> Self {
        Position::new(doc.x, doc.y)
    }
}

#[derive(Deserialize)]
struct SequencesDoc {
    #[serde(rename = "sequence", default)]
    sequences: Vec<SequenceDoc>,
}

#[derive(Deserialize)]
struct SequenceDoc {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "action", default)]
    actions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = "<gameSettings>\t<boardSize>\t\t<columns>4</columns>\t\t<rows>4</rows>\t</boardSize>\
        \t<startingPosition>\t\t<x>0</x>\t\t<y>0</y>\t</startingPosition>\t<direction>South</direction>\
        \t<exitPoint>\t\t<x>3</x>\t\t<y>3</y>\t</exitPoint>\
        \t<mine>\t\t<x>1</x>\t\t<y>1</y>\t</mine>\t<mine>\t\t<x>2</x>\t\t<y>1</y>\t</mine>\
        \t<mine>\t\t<x>1</x>\t\t<y>2</y>\t</mine>\t<mine>\t\t<x>2</x>\t\t<y>2</y>\t</mine>\
        </gameSettings>";

    #[test]
    fn test_settings() {
        let settings = XmlProvider.parse_settings(SETTINGS).unwrap();
        assert_eq!(settings.board, Board::new(4, 4));
        assert_eq!(settings.start, Position::new(0, 0));
        assert_eq!(settings.direction, Direction::South);
        assert_eq!(settings.exit, Position::new(3, 3));
        assert_eq!(
            settings.mines,
            vec![
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_negative_coordinates_rejected() {
        let text = SETTINGS.replacen("<x>0</x>", "<x>-2</x>", 1);
        assert!(matches!(
            XmlProvider.parse_settings(&text),
            Err(FormatError::Xml(_))
        ));
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let text = SETTINGS.replace("South", "Up");
        assert!(matches!(
            XmlProvider.parse_settings(&text),
            Err(FormatError::Name(_))
        ));
    }

    #[test]
    fn test_sequences() {
        let text = r#"<sequences>
            <sequence  name="sequence 1 - success">
                <action>rotate</action>
                <action>move</action>
            </sequence>
            <sequence name="sequence 2 - idle"></sequence>
        </sequences>"#;

        let sequences = XmlProvider.parse_sequences(text).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].name, "sequence 1 - success");
        assert_eq!(sequences[0].moves, vec![Move::Turn, Move::StepForward]);
        assert!(sequences[1].is_empty());
    }

    #[test]
    fn test_unknown_action_rejected() {
        let text = r#"<sequences><sequence name="s"><action>spin</action></sequence></sequences>"#;
        let err = XmlProvider.parse_sequences(text).unwrap_err();
        assert_eq!(err.to_string(), "unknown move `spin`");
    }
}
