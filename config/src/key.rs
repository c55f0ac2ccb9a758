use std::fmt;

/// One input symbol.
///
/// Keys compare exactly. `Char('J')` and `Char('j')` are different keys, and nothing is
/// normalized on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// A raw key code, as delivered by hosts that report integers.
    Code(u32),
    /// A named key such as `escape` or `enter`, kept exactly as written.
    Named(String),
}

impl Key {
    pub fn named(name: impl AsRef<str>) -> Self {
        Key::Named(name.as_ref().to_string())
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Char(c)
    }
}

impl From<u32> for Key {
    fn from(code: u32) -> Self {
        Key::Code(code)
    }
}

/// Renders in the notation accepted by [`parse_keys`](crate::parse_keys).
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char('<') => write!(f, "<lt>"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Code(code) => write!(f, "<{code}>"),
            Key::Named(name) => write!(f, "<{name}>"),
        }
    }
}

/// Join a key sequence into notation, e.g. `pro<escape>`.
pub fn display_keys(keys: &[Key]) -> String {
    keys.iter().map(ToString::to_string).collect()
}
