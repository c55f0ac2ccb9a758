//! Walking behaviour of a trie built from several overlapping bindings.

use keytrie::{Dispatch, Fsa, NoMatch, Trie};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cmd {
    Label(&'static str),
    Left,
    Right,
}

fn bindings() -> Trie<char, Cmd> {
    keytrie_log::test();

    let mut trie = Trie::new();
    trie.insert_paths(
        [("pro".chars(), "problem"), ("sol".chars(), "solution")],
        Cmd::Label,
    )
    .unwrap();
    trie.insert_paths([("j".chars(), ()), ("jj".chars(), ())], {
        let mut next = [Cmd::Left, Cmd::Right].into_iter();
        move |_| next.next().unwrap_or(Cmd::Left)
    })
    .unwrap();
    trie
}

#[test]
fn unique_sequence_resolves() {
    let trie = bindings();
    let mut walker = trie.walker();
    for c in "sol".chars() {
        walker.consume(c).unwrap();
    }
    assert_eq!(
        walker.current_actions().collect::<Vec<_>>(),
        vec![&Cmd::Label("solution")]
    );
    assert!(walker.can_terminate());
}

#[test]
fn strict_prefix_is_ambiguous_until_extended() {
    let trie = bindings();
    let mut walker = trie.walker();

    walker.consume('j').unwrap();
    assert_eq!(
        walker.current_actions().collect::<Vec<_>>(),
        vec![&Cmd::Left, &Cmd::Right]
    );
    assert!(walker.is_accepting());
    assert!(!walker.can_terminate());

    walker.consume('j').unwrap();
    assert_eq!(walker.current_actions().collect::<Vec<_>>(), vec![&Cmd::Right]);
    assert!(walker.can_terminate());
}

#[test]
fn lone_branch_resolves_before_sequence_completes() {
    let trie = bindings();
    let mut walker = trie.walker();
    walker.consume('p').unwrap();
    walker.consume('r').unwrap();
    // Only one action is reachable, so the walk is already resolved even though `o` is missing.
    assert!(walker.can_terminate());
    assert!(!walker.is_accepting());
}

#[test]
fn unmatched_symbol_resets_and_next_sequence_resolves() {
    let trie = bindings();
    let mut walker = trie.walker();

    walker.consume('p').unwrap();
    assert_eq!(walker.consume('x'), Err(NoMatch { symbol: 'x', depth: 1 }));
    assert!(walker.is_at_root());

    for c in "pro".chars() {
        walker.consume(c).unwrap();
    }
    assert_eq!(
        walker.current_actions().collect::<Vec<_>>(),
        vec![&Cmd::Label("problem")]
    );
}

#[test]
fn reset_matches_fresh_walker() {
    let trie = bindings();
    let fresh: Vec<_> = trie.walker().current_actions().cloned().collect();

    let mut walker = trie.walker();
    walker.consume('s').unwrap();
    walker.consume('o').unwrap();
    walker.reset();

    let after: Vec<_> = walker.current_actions().cloned().collect();
    assert_eq!(after, fresh);
    assert_eq!(fresh.len(), 4);
}

#[test]
fn empty_trie_never_terminates() {
    let trie: Trie<char, Cmd> = Trie::new();
    let mut walker = trie.walker();
    assert!(!walker.can_terminate());
    assert_eq!(walker.current_actions().count(), 0);
    assert!(walker.consume('a').is_err());
}

#[test]
fn feed_drives_host_loop() {
    let trie = bindings();
    let mut walker = trie.walker();
    let mut dispatched = Vec::new();

    // `s` alone already leads to a single action.
    for c in "jjqs".chars() {
        match walker.feed(c) {
            Dispatch::Resolved(cmd) => dispatched.push(cmd.clone()),
            Dispatch::Pending { .. } | Dispatch::Rejected(_) => {},
        }
    }

    assert_eq!(dispatched, vec![Cmd::Right, Cmd::Label("solution")]);
}

#[test]
fn walkers_share_trie_across_threads() {
    let trie = bindings();

    let results: Vec<Vec<Cmd>> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["pro", "sol", "jj"]
            .into_iter()
            .map(|input| {
                let trie = &trie;
                scope.spawn(move || {
                    let mut walker = trie.walker();
                    for c in input.chars() {
                        walker.consume(c).unwrap();
                    }
                    walker.current_actions().cloned().collect()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(
        results,
        vec![
            vec![Cmd::Label("problem")],
            vec![Cmd::Label("solution")],
            vec![Cmd::Right],
        ]
    );
}

#[test]
fn fsa_owns_single_cursor() {
    let mut fsa: Fsa<char, Cmd> = bindings().into();
    fsa.take('j').unwrap();
    assert_eq!(fsa.ops().len(), 2);
    assert!(fsa.take('z').is_err());
    assert_eq!(fsa.depth(), 0);
    assert_eq!(fsa.feed('j'), Dispatch::Pending { candidates: 2 });
    assert_eq!(fsa.feed('s'), Dispatch::Rejected(NoMatch { symbol: 's', depth: 1 }));
    assert_eq!(fsa.feed('s'), Dispatch::Resolved(&Cmd::Label("solution")));
}

#[test]
fn completions_follow_the_walk() {
    let trie = bindings();
    let mut walker = trie.walker();
    assert_eq!(walker.completions().len(), 4);

    walker.consume('j').unwrap();
    assert_eq!(
        walker.completions(),
        vec![(vec![], &Cmd::Left), (vec!['j'], &Cmd::Right)]
    );

    walker.consume('j').unwrap();
    assert_eq!(walker.completions(), vec![(Vec::<char>::new(), &Cmd::Right)]);
}
