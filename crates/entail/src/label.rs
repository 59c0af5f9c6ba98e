//! Labels, navigation directions and keyboard shortcuts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// Entailment category assigned to a premise/hypothesis pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Contradiction,
    Neutral,
    Entailment,
}

impl Label {
    /// All labels in shortcut order.
    pub const ALL: [Label; 3] = [Label::Contradiction, Label::Neutral, Label::Entailment];

    /// Wire name of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Contradiction => "contradiction",
            Label::Neutral => "neutral",
            Label::Entailment => "entailment",
        }
    }

    /// Exact wire-name lookup, as used for labels found in input files.
    pub fn from_wire(name: &str) -> Option<Label> {
        Label::ALL.into_iter().find(|label| label.as_str() == name)
    }

    /// Keyboard key that selects this label.
    pub fn shortcut_key(&self) -> &'static str {
        match self {
            Label::Contradiction => "1",
            Label::Neutral => "2",
            Label::Entailment => "3",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = LabelError;

    /// Accepts the wire name (any case) or the shortcut digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "contradiction" | "1" => Ok(Label::Contradiction),
            "neutral" | "2" => Ok(Label::Neutral),
            "entailment" | "3" => Ok(Label::Entailment),
            _ => Err(LabelError::InvalidLabel(s.to_string())),
        }
    }
}

/// One step of cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Signed offset applied to the cursor.
    pub fn offset(&self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = LabelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Direction::Previous),
            1 => Ok(Direction::Next),
            other => Err(LabelError::InvalidDirection(other)),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "next" | "n" | "+1" | "1" | "right" => Ok(Direction::Next),
            "prev" | "previous" | "p" | "-1" | "left" => Ok(Direction::Previous),
            _ => Err(format!("Unknown direction: {}. Use next or prev.", s)),
        }
    }
}

/// Action bound to a keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Select(Label),
    Navigate(Direction),
}

impl Shortcut {
    /// Map a key name (as reported by a browser `KeyboardEvent.key`) to its action.
    pub fn from_key(key: &str) -> Option<Shortcut> {
        match key {
            "1" => Some(Shortcut::Select(Label::Contradiction)),
            "2" => Some(Shortcut::Select(Label::Neutral)),
            "3" => Some(Shortcut::Select(Label::Entailment)),
            "ArrowLeft" => Some(Shortcut::Navigate(Direction::Previous)),
            "ArrowRight" => Some(Shortcut::Navigate(Direction::Next)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse() {
        assert_eq!("neutral".parse::<Label>().unwrap(), Label::Neutral);
        assert_eq!("Entailment".parse::<Label>().unwrap(), Label::Entailment);
        assert_eq!("1".parse::<Label>().unwrap(), Label::Contradiction);
        assert_eq!(Label::from_wire("neutral"), Some(Label::Neutral));
        assert_eq!(Label::from_wire("Neutral"), None);
        assert!(matches!(
            "maybe".parse::<Label>(),
            Err(LabelError::InvalidLabel(_))
        ));
    }

    #[test]
    fn test_label_serde_names() {
        assert_eq!(
            serde_json::to_string(&Label::Contradiction).unwrap(),
            "\"contradiction\""
        );
        let label: Label = serde_json::from_str("\"entailment\"").unwrap();
        assert_eq!(label, Label::Entailment);
    }

    #[test]
    fn test_shortcut_keys_match_labels() {
        for label in Label::ALL {
            assert_eq!(
                Shortcut::from_key(label.shortcut_key()),
                Some(Shortcut::Select(label))
            );
        }
        assert_eq!(
            Shortcut::from_key("ArrowLeft"),
            Some(Shortcut::Navigate(Direction::Previous))
        );
        assert_eq!(
            Shortcut::from_key("ArrowRight"),
            Some(Shortcut::Navigate(Direction::Next))
        );
        assert_eq!(Shortcut::from_key("4"), None);
        assert_eq!(Shortcut::from_key("Enter"), None);
    }

    #[test]
    fn test_direction_from_integer() {
        assert_eq!(Direction::try_from(-1).unwrap(), Direction::Previous);
        assert_eq!(Direction::try_from(1).unwrap(), Direction::Next);
        assert!(matches!(
            Direction::try_from(2),
            Err(LabelError::InvalidDirection(2))
        ));
        assert!(Direction::try_from(0).is_err());
    }
}
