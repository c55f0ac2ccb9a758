//! Vim-like key notation.
//!
//! Plain characters stand for themselves. Anything in angle brackets is a single key:
//!
//! - `<escape>`, `<Enter>` are named keys, matched exactly (`<Enter>` is not `<enter>`)
//! - `<13>` is a raw key code
//! - `<lt>` is a literal `<`
//!
//! `"pr<escape>"` parses to `[Char('p'), Char('r'), Named("escape")]`.

use crate::{error::NotationError, key::Key};
use chumsky::{error::SimpleReason, prelude::*};

fn code() -> impl Parser<char, Key, Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|digits, span| {
            digits
                .parse::<u32>()
                .map(Key::Code)
                .map_err(|_| Simple::custom(span, "key code out of range"))
        })
}

fn named() -> impl Parser<char, Key, Error = Simple<char>> + Clone {
    filter(|c: &char| *c != '<' && *c != '>' && !c.is_whitespace())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|name, span| {
            if name.chars().all(|c| c.is_ascii_digit()) {
                return Err(Simple::custom(span, "key code out of range"));
            }
            Ok(if name == "lt" {
                Key::Char('<')
            } else {
                Key::Named(name)
            })
        })
}

fn bracketed() -> impl Parser<char, Key, Error = Simple<char>> + Clone {
    just('<').ignore_then(
        code()
            .then_ignore(just('>'))
            .or(named().then_ignore(just('>'))),
    )
}

fn plain() -> impl Parser<char, Key, Error = Simple<char>> + Clone {
    filter(|c: &char| *c != '<').map(Key::Char)
}

pub fn parser() -> impl Parser<char, Vec<Key>, Error = Simple<char>> {
    bracketed().or(plain()).repeated().then_ignore(end())
}

/// Parse notation into keys. An empty string yields no keys.
pub fn parse_keys(source: &str) -> Result<Vec<Key>, Vec<NotationError>> {
    parser().parse(source).map_err(|failures| {
        failures
            .iter()
            .map(|failure| {
                NotationError::new(failure.span(), describe(failure)).with_label("in this key")
            })
            .collect()
    })
}

fn describe(failure: &Simple<char>) -> String {
    match failure.reason() {
        SimpleReason::Custom(text) => text.clone(),
        SimpleReason::Unclosed { delimiter, .. } => format!("`{delimiter}` is never closed"),
        SimpleReason::Unexpected => {
            let found = failure
                .found()
                .map_or_else(|| "end of input".to_string(), |c| format!("`{c}`"));
            let mut wanted: Vec<String> = failure
                .expected()
                .flatten()
                .map(|c| format!("`{c}`"))
                .collect();
            wanted.sort();
            match wanted.as_slice() {
                [] => format!("unexpected {found}"),
                options => format!("unexpected {found}, wanted {}", options.join(" or ")),
            }
        },
    }
}
