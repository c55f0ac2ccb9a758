use crate::op::known_operators;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::ops::Range;
use thiserror::Error;

/// A problem in key notation, located by character span.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {}..{}", .span.start, .span.end)]
pub struct NotationError {
    pub span: Range<usize>,
    pub message: String,
    pub label: Option<String>,
}

impl NotationError {
    pub fn new(span: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn write_report(&self, source: &str, sink: &mut Vec<u8>) -> std::io::Result<()> {
        let marker = Label::new(self.span.clone()).with_color(Color::Red);
        let marker = match &self.label {
            Some(note) => marker.with_message(note),
            None => marker,
        };
        Report::build(ReportKind::Error, (), self.span.start)
            .with_message(&self.message)
            .with_label(marker)
            .finish()
            .write(Source::from(source), sink)
    }
}

/// Render notation errors against their source as annotated reports.
pub fn format_errors(source: &str, errors: &[NotationError]) -> String {
    let mut rendered = Vec::new();
    for error in errors {
        if let Err(io) = error.write_report(source, &mut rendered) {
            tracing::debug!(%io, "Failed to render notation error");
        }
    }
    String::from_utf8_lossy(&rendered).into_owned()
}

/// A configuration that cannot be turned into bindings.
///
/// Raised while building, never while walking: a trie is only handed out once the whole
/// configuration has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown operator `{name}`; expected `labels` or one of: {}", known_operators())]
    UnknownOperator { name: String },

    #[error("`labels` must map group names to lists of entries")]
    LabelsNotGroups,

    #[error("operator `{name}` must be bound to a key or a list of keys")]
    OperatorNotSequence { name: String },

    #[error("{entry}: key sequence is empty")]
    EmptySequence { entry: String },

    #[error("{entry}: an empty string is not a key")]
    EmptyKey { entry: String },

    #[error("{entry}: {reason}")]
    MalformedLabel { entry: String, reason: &'static str },
}
