//! Ledger Models
//!
//! Data structures persisted to local storage.

use serde::{Deserialize, Serialize};

/// Current persisted schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Which list an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Movie,
    Manga,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Movie, ItemKind::Manga];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Movie => "movie",
            ItemKind::Manga => "manga",
        }
    }

    /// Anything other than "movie" goes to the manga list
    pub fn from_name(s: &str) -> Self {
        match s {
            "movie" => ItemKind::Movie,
            _ => ItemKind::Manga,
        }
    }

    /// Label shown in the type selector
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Movie => "Movie",
            ItemKind::Manga => "Manga",
        }
    }

    pub fn empty_placeholder(&self) -> &'static str {
        match self {
            ItemKind::Movie => "No movies added yet.",
            ItemKind::Manga => "No manga added yet.",
        }
    }

    pub fn row_class(&self) -> &'static str {
        match self {
            ItemKind::Movie => "movie-item",
            ItemKind::Manga => "manga-item",
        }
    }

    pub fn list_id(&self) -> &'static str {
        match self {
            ItemKind::Movie => "moviesList",
            ItemKind::Manga => "mangaList",
        }
    }
}

/// A purchased movie or manga volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Creation time in milliseconds, unique within a ledger
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub notes: String,
    /// ISO-8601 creation timestamp
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Free-form theme name, kept as stored
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            currency: default_currency(),
        }
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

/// Everything written to storage in one blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Missing in blobs written before versioning (reads as 0)
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub movies: Vec<Item>,
    #[serde(default)]
    pub manga: Vec<Item>,
    #[serde(default)]
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            movies: Vec::new(),
            manga: Vec::new(),
            settings: Settings::default(),
        }
    }
}

impl AppState {
    pub fn items(&self, kind: ItemKind) -> &[Item] {
        match kind {
            ItemKind::Movie => &self.movies,
            ItemKind::Manga => &self.manga,
        }
    }

    pub fn items_mut(&mut self, kind: ItemKind) -> &mut Vec<Item> {
        match kind {
            ItemKind::Movie => &mut self.movies,
            ItemKind::Manga => &mut self.manga,
        }
    }
}

/// Raw form input for a new item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub title: String,
    pub price: String,
    pub notes: String,
}

impl ItemDraft {
    pub fn new(title: impl Into<String>, price: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            notes: notes.into(),
        }
    }
}
