//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{LedgerError, LedgerResult};
use crate::models::ItemKind;

/// The two panels of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Movies,
    Manga,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Movies, Tab::Manga];

    /// Value of the `data-tab` attribute and of the panel id
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Movies => "movies",
            Tab::Manga => "manga",
        }
    }

    pub fn from_name(name: &str) -> LedgerResult<Self> {
        match name {
            "movies" => Ok(Tab::Movies),
            "manga" => Ok(Tab::Manga),
            other => Err(LedgerError::UnknownTab(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Movies => "Movies",
            Tab::Manga => "Manga",
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Tab::Movies => ItemKind::Movie,
            Tab::Manga => ItemKind::Manga,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Non-blocking status message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Increments per notice so stale timers can tell they are stale
    pub seq: u32,
    pub level: NoticeLevel,
    pub message: String,
    /// Recent log lines shown under error notices
    pub details: Vec<String>,
}

impl Notice {
    pub fn class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Info => "notice info",
            NoticeLevel::Error => "notice error",
        }
    }
}

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Which panel is visible
    pub active_tab: Tab,
    /// Message currently shown in the banner
    pub notice: Option<Notice>,
    /// Last notice sequence number handed out
    pub notice_seq: u32,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Activate the tab called `name`; unknown names leave the view as it is
pub fn switch_tab(ui: UiStore, name: &str) -> LedgerResult<Tab> {
    let tab = Tab::from_name(name)?;
    ui.active_tab().set(tab);
    Ok(tab)
}

/// Hand out the next notice sequence number
pub fn next_notice_seq(ui: UiStore) -> u32 {
    let field = ui.notice_seq();
    let mut seq = field.write();
    let next = *seq + 1;
    *seq = next;
    next
}

/// A dismiss timer only clears the notice it was started for
pub fn should_clear(current: Option<u32>, seq: u32) -> bool {
    current == Some(seq)
}
