//! Whole-file text loading and writing.
//!
//! Candidate files are small JSON documents, so they are read fully into
//! memory. The optional comment stripping is deliberately naive: it scans for
//! `//` and `/*` markers without any notion of JSON string literals, so a
//! marker inside a string value is removed as if it were a comment. Callers
//! that need such strings intact must load with [`CommentMode::Keep`].

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::config::CommentMode;
use crate::error::{PatchError, PatchResult};

/// Read `path` fully as UTF-8 text, stripping comments if `mode` asks for it.
///
/// Files larger than `max_size` (or than the address space, whichever is
/// smaller) are rejected before any content is read.
pub fn load_text(path: &Path, mode: CommentMode, max_size: Option<u64>) -> PatchResult<String> {
    let io_err = |source: std::io::Error| PatchError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let size = file.metadata().map_err(io_err)?.len();

    let addressable = u64::try_from(usize::MAX).unwrap_or(u64::MAX);
    let limit = max_size.map_or(addressable, |cap| cap.min(addressable));
    if size > limit {
        return Err(PatchError::Size {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }

    // `size <= limit <= usize::MAX`, so the conversion cannot truncate.
    let mut bytes = Vec::with_capacity(size as usize);
    file.read_to_end(&mut bytes).map_err(io_err)?;

    let text = String::from_utf8(bytes).map_err(|_| PatchError::Encoding {
        path: path.to_path_buf(),
    })?;

    debug!(path = %path.display(), bytes = size, ?mode, "loaded");

    Ok(match mode {
        CommentMode::Strip => strip_comments(&text),
        CommentMode::Keep => text,
    })
}

/// Remove `//` line comments, then `/* */` block comments.
///
/// A line comment runs up to (not including) the next `\r` or `\n`. A block
/// comment runs through the first `*/` after its opening marker. Either kind
/// left unterminated swallows the rest of the buffer.
pub fn strip_comments(text: &str) -> String {
    strip_block_comments(&strip_line_comments(text))
}

fn strip_line_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("//") {
        out.push_str(&rest[..start]);
        let comment = &rest[start..];
        rest = match comment.find(['\r', '\n']) {
            Some(end) => &comment[end..],
            None => "",
        };
    }

    out.push_str(rest);
    out
}

fn strip_block_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        let body = &rest[start + 2..];
        rest = match body.find("*/") {
            Some(end) => &body[end + 2..],
            None => "",
        };
    }

    out.push_str(rest);
    out
}

/// Write `text` to `path`, creating or truncating the file, and flush it.
pub fn write_text(path: &Path, text: &str) -> PatchResult<()> {
    let io_err = |source: std::io::Error| PatchError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    debug!(path = %path.display(), bytes = text.len(), "written");
    Ok(())
}
