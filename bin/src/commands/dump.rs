use anyhow::Result;
use keytrie::Trie;
use keytrie_config::{bindings, display_keys, Key, Op};
use std::io::Write;

/// One `<notation>  <action>` line per binding, in the order a walk reports them. Operator
/// bindings also carry the operator's description.
pub fn render(trie: &Trie<Key, Op>) -> String {
    bindings(trie)
        .into_iter()
        .map(|(keys, op)| match op {
            Op::Operator(operator) => {
                format!("{}  {op}  {}", display_keys(&keys), operator.description())
            },
            Op::Label(_) => format!("{}  {op}", display_keys(&keys)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn handle(trie: &Trie<Key, Op>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", render(trie))?;
    Ok(())
}
