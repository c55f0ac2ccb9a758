//! Actions a binding can resolve to.

use crate::error::ConfigError;
use std::{fmt, str::FromStr};

/// Zero-argument operators, selected by name from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    CancelLabel,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    ConfirmSentence,
    SetMark,
}

impl Operator {
    pub const ALL: [Operator; 7] = [
        Operator::CancelLabel,
        Operator::CursorLeft,
        Operator::CursorRight,
        Operator::CursorUp,
        Operator::CursorDown,
        Operator::ConfirmSentence,
        Operator::SetMark,
    ];

    /// Name used as the configuration key.
    pub fn name(self) -> &'static str {
        match self {
            Operator::CancelLabel => "CancelLabel",
            Operator::CursorLeft => "CursorLeft",
            Operator::CursorRight => "CursorRight",
            Operator::CursorUp => "CursorUp",
            Operator::CursorDown => "CursorDown",
            Operator::ConfirmSentence => "ConfirmSentence",
            Operator::SetMark => "SetMark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Operator::CancelLabel => "Remove the label under the cursor",
            Operator::CursorLeft => "Move the cursor one unit left",
            Operator::CursorRight => "Move the cursor one unit right",
            Operator::CursorUp => "Move the cursor to the previous sentence",
            Operator::CursorDown => "Move the cursor to the next sentence",
            Operator::ConfirmSentence => "Accept the labels of the current sentence",
            Operator::SetMark => "Start a selection at the cursor",
        }
    }
}

pub(crate) fn known_operators() -> String {
    Operator::ALL.map(Operator::name).join(", ")
}

impl FromStr for Operator {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| ConfigError::UnknownOperator {
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A labeled command: apply `label` from `group`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    pub group: String,
    pub label: String,
}

impl Label {
    pub fn new(group: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({}, {})", self.group, self.label)
    }
}

/// What a completed key sequence asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    Label(Label),
    Operator(Operator),
}

impl Op {
    pub fn label(group: impl Into<String>, label: impl Into<String>) -> Self {
        Op::Label(Label::new(group, label))
    }
}

impl From<Label> for Op {
    fn from(label: Label) -> Self {
        Op::Label(label)
    }
}

impl From<Operator> for Op {
    fn from(op: Operator) -> Self {
        Op::Operator(op)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Label(label) => label.fmt(f),
            Op::Operator(op) => op.fmt(f),
        }
    }
}
