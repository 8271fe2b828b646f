use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Result, WalletError};

/// Reads note values from any buffered source. Values may be separated by
/// whitespace or commas and the list may be wrapped in brackets, so both
/// `100 200 500` and `[100, 200, 500]` load the same wallet.
pub struct NoteReader {
    reader: Box<dyn BufRead>,
}

impl NoteReader {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        debug!("reading notes from {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }

    pub fn read_notes(&mut self) -> Result<Vec<u64>> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        parse_notes(&text)
    }
}

/// Parses a list of note values. Any token that is not an unsigned integer is
/// rejected with its position in the list.
pub fn parse_notes(text: &str) -> Result<Vec<u64>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .map(|token| token.trim_matches(|c| c == '[' || c == ']'))
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token.parse::<u64>().map_err(|_| {
                warn!("rejecting token {:?} at position {}", token, index);
                WalletError::InvalidInputShape {
                    index,
                    token: token.to_string(),
                }
            })
        })
        .collect()
}
