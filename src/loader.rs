//! Reading whitespace code from disk
//!
//! The loader reads the whole input into memory, measures the longest line
//! (with tabs expanded to `tab_scale` spaces) and seals the buffer with a
//! single trailing linefeed.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::Error;

pub const TAB: u8 = b'\t';
pub const LINEFEED: u8 = b'\n';
pub const SPACE: u8 = b' ';

/// Path that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

/// Normalized whitespace code and its longest expanded line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCode {
    /// Source bytes ending in exactly one linefeed
    pub code: Vec<u8>,
    /// Maximum of `spaces + tabs * tab_scale` over all lines
    pub longest_sequence: u64,
}

impl LoadedCode {
    /// Build from raw bytes, measuring before normalizing
    pub fn from_bytes(raw: Vec<u8>, tab_scale: u32) -> Self {
        let longest_sequence = longest_sequence(&raw, tab_scale);
        Self {
            code: normalize(raw),
            longest_sequence,
        }
    }

    /// Number of lines, i.e. linefeeds in the normalized buffer
    pub fn line_count(&self) -> usize {
        line_count(&self.code)
    }
}

pub fn reads_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Load whitespace code from `path`, or from stdin when `path` is `-`
pub fn load(path: &Path, tab_scale: u32) -> Result<LoadedCode, Error> {
    if reads_stdin(path) {
        return load_from_reader(io::stdin().lock(), path, tab_scale);
    }

    let file = File::open(path).map_err(|e| Error::open_input(path, e))?;
    load_from_reader(file, path, tab_scale)
}

/// Load whitespace code from any reader; `path` is only used for errors
pub fn load_from_reader(
    mut reader: impl Read,
    path: &Path,
    tab_scale: u32,
) -> Result<LoadedCode, Error> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|e| Error::read_input(path, e))?;

    let loaded = LoadedCode::from_bytes(raw, tab_scale);
    debug!(
        bytes = loaded.code.len(),
        preview = ?&loaded.code[..loaded.code.len().min(12)],
        longest_sequence = loaded.longest_sequence,
        "loaded whitespace code"
    );
    Ok(loaded)
}

/// Expanded length of one line: spaces plus `tab_scale` per tab
pub fn expanded_length(line: &[u8], tab_scale: u32) -> u64 {
    line.iter().fold(0u64, |len, &byte| match byte {
        SPACE => len.saturating_add(1),
        TAB => len.saturating_add(u64::from(tab_scale)),
        _ => len,
    })
}

/// Longest expanded line, 0 when there is no tab or space content
pub fn longest_sequence(code: &[u8], tab_scale: u32) -> u64 {
    code.split(|&b| b == LINEFEED)
        .map(|line| expanded_length(line, tab_scale))
        .max()
        .unwrap_or(0)
}

/// Collapse the trailing linefeed run into exactly one linefeed.
///
/// An empty or linefeed-only buffer becomes a single linefeed.
pub fn normalize(mut code: Vec<u8>) -> Vec<u8> {
    while code.last() == Some(&LINEFEED) {
        code.pop();
    }
    code.push(LINEFEED);
    code
}

pub fn line_count(code: &[u8]) -> usize {
    code.iter().filter(|&&b| b == LINEFEED).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_collapses_trailing_linefeeds() {
        assert_eq!(normalize(b" \t\n\n\n".to_vec()), b" \t\n".to_vec());
    }

    #[test]
    fn test_normalize_appends_missing_linefeed() {
        assert_eq!(normalize(b"\t \t".to_vec()), b"\t \t\n".to_vec());
    }

    #[test]
    fn test_normalize_keeps_inner_linefeeds() {
        assert_eq!(normalize(b" \n\n\t\n\n".to_vec()), b" \n\n\t\n".to_vec());
    }

    #[test]
    fn test_normalize_empty_and_linefeed_only() {
        assert_eq!(normalize(Vec::new()), vec![LINEFEED]);
        assert_eq!(normalize(b"\n\n".to_vec()), vec![LINEFEED]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in [&b""[..], b"\n", b" \t", b" \n\t\n\n", b"abc\n"] {
            let once = normalize(input.to_vec());
            assert_eq!(normalize(once.clone()), once);
        }
    }

    #[test]
    fn test_expanded_length() {
        assert_eq!(expanded_length(b"\t ", 7), 8);
        assert_eq!(expanded_length(b"  \t\t", 3), 8);
        assert_eq!(expanded_length(b"", 7), 0);
    }

    #[test]
    fn test_other_bytes_are_inert() {
        assert_eq!(expanded_length(b"push 1\t", 4), 5);
        assert_eq!(longest_sequence(b"hello\nworld", 7), 0);
    }

    #[test]
    fn test_longest_sequence_picks_maximum_line() {
        let code = b"   \n\t\n \t \n\n";
        assert_eq!(longest_sequence(code, 7), 9);
        assert_eq!(longest_sequence(code, 1), 3);
    }

    #[test]
    fn test_longest_sequence_without_content() {
        assert_eq!(longest_sequence(b"", 7), 0);
        assert_eq!(longest_sequence(b"\n\n\n", 7), 0);
    }

    #[test]
    fn test_from_bytes_scenario() {
        let loaded = LoadedCode::from_bytes(b"\t \n".to_vec(), 7);
        assert_eq!(loaded.code, b"\t \n".to_vec());
        assert_eq!(loaded.longest_sequence, 8);
        assert_eq!(loaded.line_count(), 1);
    }

    #[test]
    fn test_load_from_reader() {
        let loaded = load_from_reader(&b" \t\n\n"[..], Path::new("mem"), 2).unwrap();
        assert_eq!(loaded.code, b" \t\n".to_vec());
        assert_eq!(loaded.longest_sequence, 3);
    }

    #[test]
    fn test_load_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.ws"), 7).unwrap_err();
        assert!(matches!(err, Error::OpenInput { .. }));
    }

    /// Reader whose every read fails
    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_read_failure_is_read_error() {
        let err = load_from_reader(BrokenPipe, Path::new("code.ws"), 7).unwrap_err();
        assert!(matches!(err, Error::ReadInput { .. }));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[cfg(unix)]
    #[test]
    fn test_load_directory_is_read_error() {
        // Opening a directory succeeds on unix; reading it fails
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path(), 7).unwrap_err();
        assert!(matches!(err, Error::ReadInput { .. }));
    }

    #[test]
    fn test_dash_selects_stdin() {
        assert!(reads_stdin(Path::new("-")));
        assert!(!reads_stdin(Path::new("code.ws")));
        assert!(!reads_stdin(Path::new("--")));
    }
}
