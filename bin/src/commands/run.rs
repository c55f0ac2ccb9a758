use anyhow::{Context, Result};
use keytrie::{Dispatch, Trie};
use keytrie_config::{display_keys, format_errors, parse_keys, Key, Op};
use std::io::{BufRead, Write};
use tracing::{debug, trace, warn};

/// Feed every line of `input` to one walker and print each resolved action.
///
/// The walk carries across lines, so a sequence may be split over several of them. Lines with
/// bad notation are reported on `err` and skipped. A sequence left unfinished at the end of
/// input is reported as one `pending: +<rest>  <action>` line per completion.
pub fn handle(
    trie: &Trie<Key, Op>,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let mut walker = trie.walker();

    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let keys = match parse_keys(&line) {
            Ok(keys) => keys,
            Err(errors) => {
                warn!(line = index + 1, "Skipping line with invalid key notation");
                write!(err, "{}", format_errors(&line, &errors))?;
                continue;
            },
        };

        for key in keys {
            match walker.feed(key) {
                Dispatch::Resolved(op) => writeln!(out, "{op}")?,
                Dispatch::Rejected(no_match) => {
                    debug!(%no_match, "Key rejected");
                    writeln!(out, "no match: {}", no_match.symbol)?;
                },
                Dispatch::Pending { candidates } => {
                    trace!(candidates, depth = walker.depth(), "Waiting for more keys");
                },
            }
        }
    }

    if !walker.is_at_root() {
        for (rest, op) in walker.completions() {
            writeln!(out, "pending: +{}  {op}", display_keys(&rest))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keytrie_config::RawConfig;

    fn run(input: &str) -> (String, String) {
        let trie = keytrie_config::build(&RawConfig::load_embedded().unwrap()).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle(&trie, input.as_bytes(), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn resolves_and_recovers() {
        let (out, err) = run("j\npr\no\nsz\n<escape>\n");
        assert_eq!(
            out,
            "CursorLeft\nLabel(role, problem)\nno match: z\nCancelLabel\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn unfinished_sequence_lists_completions() {
        let (out, _) = run("j\np\n");
        assert_eq!(
            out,
            "CursorLeft\npending: +ro  Label(role, problem)\npending: +re  Label(role, premise)\n"
        );
    }

    #[test]
    fn codes_resolve() {
        let (out, _) = run("<13>");
        assert_eq!(out, "ConfirmSentence\n");
    }

    #[test]
    fn bad_notation_is_skipped() {
        let (out, err) = run("<esc\nm\n");
        assert_eq!(out, "SetMark\n");
        assert!(!err.is_empty());
    }
}
