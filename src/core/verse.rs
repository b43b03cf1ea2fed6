//! # Verses
//!
//! The fixed, ordered verse sequence and the languages it is displayed in.
//!
//! A catalog is loaded once at startup (bundled asset or a user-supplied JSON
//! file) and never mutated afterwards. Records look like:
//!
//! ```json
//! { "number": 1, "title": "Margazhi thingal", "tamil": "...", "english": null,
//!   "audio": "https://.../01.mp3", "video": null }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

/// Bundled verse data, compiled into the binary.
const BUILTIN_VERSES: &str = include_str!("../../assets/verses.json");

// ============================================================================
// Language
// ============================================================================

/// Supported display languages. The lowercase key is what gets persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Tamil,
    Sanskrit,
    #[default]
    English,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Tamil, Language::Sanskrit, Language::English];

    pub fn key(self) -> &'static str {
        match self {
            Language::Tamil => "tamil",
            Language::Sanskrit => "sanskrit",
            Language::English => "english",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Tamil => "Tamil",
            Language::Sanskrit => "Sanskrit",
            Language::English => "English",
        }
    }

    /// Name of the language in its own script.
    pub fn native_label(self) -> &'static str {
        match self {
            Language::Tamil => "தமிழ்",
            Language::Sanskrit => "संस्कृतम्",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string is not one of the supported language keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub String);

impl fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language: {:?}", self.0)
    }
}

impl std::error::Error for UnsupportedLanguage {}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.key() == s)
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

// ============================================================================
// VerseRecord
// ============================================================================

/// Display label of a verse: the data uses both plain numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerseLabel {
    Number(u32),
    Text(String),
}

impl fmt::Display for VerseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerseLabel::Number(n) => write!(f, "{n}"),
            VerseLabel::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub number: VerseLabel,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tamil: Option<String>,
    #[serde(default)]
    pub sanskrit: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
}

impl VerseRecord {
    /// Text in `language`, or `None` when missing or blank.
    pub fn text(&self, language: Language) -> Option<&str> {
        let raw = match language {
            Language::Tamil => self.tamil.as_deref(),
            Language::Sanskrit => self.sanskrit.as_deref(),
            Language::English => self.english.as_deref(),
        };
        raw.filter(|text| !text.trim().is_empty())
    }

    pub fn audio(&self) -> Option<&str> {
        non_blank(self.audio.as_deref())
    }

    pub fn video(&self) -> Option<&str> {
        non_blank(self.video.as_deref())
    }

    pub fn has_media(&self) -> bool {
        self.audio().is_some() || self.video().is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "verse data I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "verse data parse error: {e}"),
            CatalogError::Empty => write!(f, "verse data contains no verses"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable, non-empty ordered sequence of verses.
#[derive(Debug, Clone)]
pub struct VerseCatalog {
    verses: Vec<VerseRecord>,
}

impl VerseCatalog {
    pub fn new(verses: Vec<VerseRecord>) -> Result<Self, CatalogError> {
        if verses.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { verses })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let verses: Vec<VerseRecord> = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::new(verses)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} verses from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The verse set shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_VERSES)
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Never true for a loaded catalog.
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VerseRecord> {
        self.verses.get(index)
    }

    pub fn as_slice(&self) -> &[VerseRecord] {
        &self.verses
    }

    pub fn iter(&self) -> impl Iterator<Item = &VerseRecord> {
        self.verses.iter()
    }

    pub fn last_index(&self) -> usize {
        self.verses.len() - 1
    }
}
