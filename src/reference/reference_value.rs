use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::{debug, warn};

use crate::reference::ReferenceError;

pub const DEFAULT_REFERENCE_FILE: &str = "SquareRootTwo.txt";

/// How raw file lines become the reference string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ReferenceMode {
    /// Each line trimmed, lines concatenated.
    #[default]
    Trimmed,
    /// Only ASCII digits and a single decimal point survive; anything else is
    /// dropped. A second decimal point rejects the input.
    DigitsOnly,
}

/// Trusted decimal string read once from an external file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceValue {
    text: String,
    source: PathBuf,
}

impl ReferenceValue {
    /// Reads `path` line by line. The file handle is dropped on every return
    /// path, including errors.
    pub fn load<P: AsRef<Path>>(path: P, mode: ReferenceMode) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReferenceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ReferenceError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let mut acc = Accumulator::new(mode);
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| ReferenceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            acc.push_line(&line).map_err(|reason| {
                warn!(path = %path.display(), %reason, "rejecting reference file");
                ReferenceError::Malformed {
                    path: path.to_path_buf(),
                    reason,
                }
            })?;
        }

        debug!(path = %path.display(), len = acc.text.len(), %mode, "reference loaded");
        Ok(Self {
            text: acc.text,
            source: path.to_path_buf(),
        })
    }

    /// Same normalization as [`load`](Self::load), applied to in-memory text.
    pub fn parse<P: Into<PathBuf>>(
        contents: &str,
        mode: ReferenceMode,
        source: P,
    ) -> Result<Self, ReferenceError> {
        let source = source.into();
        let mut acc = Accumulator::new(mode);
        for line in contents.lines() {
            if let Err(reason) = acc.push_line(line) {
                return Err(ReferenceError::Malformed {
                    path: source,
                    reason,
                });
            }
        }
        Ok(Self {
            text: acc.text,
            source,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Digits after the decimal point, or `None` without one.
    pub fn fractional_digits(&self) -> Option<usize> {
        let (_, frac) = self.text.split_once('.')?;
        Some(frac.chars().take_while(|c| c.is_ascii_digit()).count())
    }
}

struct Accumulator {
    mode: ReferenceMode,
    text: String,
    seen_decimal: bool,
}

impl Accumulator {
    fn new(mode: ReferenceMode) -> Self {
        Self {
            mode,
            text: String::new(),
            seen_decimal: false,
        }
    }

    fn push_line(&mut self, line: &str) -> Result<(), String> {
        match self.mode {
            ReferenceMode::Trimmed => {
                self.text.push_str(line.trim());
                Ok(())
            }
            ReferenceMode::DigitsOnly => {
                for c in line.chars() {
                    if c == '.' {
                        if self.seen_decimal {
                            return Err("more than one decimal point".into());
                        }
                        self.seen_decimal = true;
                        self.text.push(c);
                    } else if c.is_ascii_digit() {
                        self.text.push(c);
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::reference_file;
    use std::str::FromStr;
    use tempfile::tempdir;

    #[test]
    fn trims_and_concatenates_lines() {
        let f = reference_file("  1.41421356\n 23730950 \n\n48801688\n");
        let r = ReferenceValue::load(f.path(), ReferenceMode::Trimmed).unwrap();
        assert_eq!(r.as_str(), "1.414213562373095048801688");
        assert_eq!(r.source(), f.path());
        assert_eq!(r.fractional_digits(), Some(24));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_REFERENCE_FILE);
        let err = ReferenceValue::load(&path, ReferenceMode::Trimmed).unwrap_err();
        match err {
            ReferenceError::NotFound { path: p } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn not_found_message_names_the_file() {
        let err = ReferenceValue::load("no/such/SquareRootTwo.txt", ReferenceMode::Trimmed)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Not able to find the file: no/such/SquareRootTwo.txt"
        );
    }

    #[test]
    fn directory_is_unreadable() {
        let dir = tempdir().unwrap();
        let err = ReferenceValue::load(dir.path(), ReferenceMode::Trimmed).unwrap_err();
        assert!(matches!(err, ReferenceError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn digits_only_drops_noise() {
        let r = ReferenceValue::parse(
            "sqrt(2) = 1.41421 35623\n73095 (NASA)\n",
            ReferenceMode::DigitsOnly,
            "inline",
        )
        .unwrap();
        assert_eq!(r.as_str(), "21.414213562373095");
    }

    #[test]
    fn digits_only_rejects_second_decimal_point() {
        let f = reference_file("1.414\n2.13\n");
        let err = ReferenceValue::load(f.path(), ReferenceMode::DigitsOnly).unwrap_err();
        assert!(matches!(err, ReferenceError::Malformed { .. }));

        // trimmed mode keeps the text as is
        let r = ReferenceValue::load(f.path(), ReferenceMode::Trimmed).unwrap();
        assert_eq!(r.as_str(), "1.4142.13");
    }

    #[test]
    fn empty_file_gives_empty_reference() {
        let f = reference_file("");
        let r = ReferenceValue::load(f.path(), ReferenceMode::Trimmed).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.fractional_digits(), None);
    }

    #[test]
    fn mode_names_are_kebab_case() {
        assert_eq!(ReferenceMode::DigitsOnly.to_string(), "digits-only");
        assert_eq!(
            ReferenceMode::from_str("trimmed").unwrap(),
            ReferenceMode::Trimmed
        );
    }
}
