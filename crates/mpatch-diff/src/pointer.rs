//! RFC 6901 JSON pointer construction.

/// Escape a single reference token: `~` becomes `~0` and `/` becomes `~1`.
///
/// `~` must be replaced first so that the `~` introduced by `~1` is not
/// escaped a second time.
pub fn escape(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Append an object key to a pointer.
pub fn push_key(base: &str, key: &str) -> String {
    format!("{base}/{}", escape(key))
}

/// Append an array index to a pointer.
pub fn push_index(base: &str, index: usize) -> String {
    format!("{base}/{index}")
}

/// The pointer that addresses one past the end of an array (`<base>/-`).
pub fn push_end(base: &str) -> String {
    format!("{base}/-")
}
