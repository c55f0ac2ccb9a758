use anyhow::Result;
use keytrie::Trie;
use keytrie_config::{bindings, Key, Op};
use std::io::Write;

pub fn handle(trie: &Trie<Key, Op>, out: &mut impl Write) -> Result<()> {
    let count = bindings(trie).len();
    writeln!(out, "ok: {count} bindings, {} nodes", trie.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::load_trie;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reports_counts() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("keys.toml");
        fs::write(&path, "CursorLeft = \"j\"\nCursorRight = \"jl\"\n").unwrap();

        let trie = load_trie(Some(&path)).unwrap();
        let mut out = Vec::new();
        handle(&trie, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ok: 2 bindings, 3 nodes\n");
    }

    #[test]
    fn unknown_operator_is_reported() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("keys.toml");
        fs::write(&path, "Teleport = \"t\"\n").unwrap();

        let err = load_trie(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("unknown operator `Teleport`"));
    }
}
