//! Static lookup resources for content aggregation.
//!
//! The word-frequency and emoji queries depend on two flat-file resources
//! supplied by the caller: a stop-word list and an emoji membership table.
//! Both are loaded once at startup into immutable hash sets and injected
//! into the aggregator; a missing file is a configuration error raised
//! before any record is touched.
//!
//! # Example
//!
//! ```
//! use chatlens::resources::{EmojiTable, StopWords};
//!
//! let stop = StopWords::from_text("the\nand\nis");
//! assert!(stop.contains("the"));
//! assert!(!stop.contains("hello"));
//!
//! let emoji = EmojiTable::from_text("😂❤️🔥");
//! assert!(emoji.contains('😂'));
//! assert!(!emoji.contains('a'));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ChatLensError, Result};

/// Immutable stop-word set for [`top_words`](crate::stats::top_words).
///
/// Built from a flat newline- or whitespace-delimited word list. Lookups
/// are against lowercased tokens, so the list is lowercased on load.
#[derive(Debug, Clone, Default)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    /// Builds the set from whitespace/newline-delimited text.
    pub fn from_text(content: &str) -> Self {
        Self(
            content
                .split_whitespace()
                .map(str::to_lowercase)
                .collect(),
        )
    }

    /// Loads the word list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatLensError::Resource`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ChatLensError::resource("stop-word list", path, e))?;
        Ok(Self::from_text(&content))
    }

    /// Returns `true` if `word` (already lowercased) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    /// Number of stop words loaded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Immutable emoji membership table for [`top_emoji`](crate::stats::top_emoji).
///
/// Built from a file whose non-whitespace characters are the emoji to
/// count. Membership is per Unicode scalar; multi-scalar sequences count
/// each member that appears in the table.
#[derive(Debug, Clone, Default)]
pub struct EmojiTable(HashSet<char>);

impl EmojiTable {
    /// Builds the table from every non-whitespace character of `content`.
    pub fn from_text(content: &str) -> Self {
        Self(content.chars().filter(|c| !c.is_whitespace()).collect())
    }

    /// Loads the emoji table from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatLensError::Resource`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ChatLensError::resource("emoji table", path, e))?;
        Ok(Self::from_text(&content))
    }

    /// Returns `true` if `c` is in the table.
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Number of characters in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Both lookup resources, loaded together at startup.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    /// Stop words dropped from word rankings.
    pub stop_words: StopWords,
    /// Emoji membership table.
    pub emoji: EmojiTable,
}

impl Resources {
    /// Loads both resources, failing fast on the first missing file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatLensError::Resource`] naming whichever file failed.
    pub fn load(stop_words_path: &Path, emoji_path: &Path) -> Result<Self> {
        Ok(Self {
            stop_words: StopWords::load(stop_words_path)?,
            emoji: EmojiTable::load(emoji_path)?,
        })
    }
}
