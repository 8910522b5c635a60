//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Item, ItemDraft, ItemKind};
use crate::render::{project_list, total_label, ListView};
use crate::storage::BrowserStorage;
use crate::store::{
    next_notice_seq, should_clear, switch_tab, Notice, NoticeLevel, Tab, UiStateStoreFields, UiStore,
};

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// Recent log lines attached to error notices
const NOTICE_LOG_LINES: usize = 5;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The ledger; every write notifies list and total views
    pub ledger: RwSignal<Ledger<BrowserStorage>>,
    /// Tab and notice state
    pub ui: UiStore,
}

impl AppContext {
    pub fn new(ledger: Ledger<BrowserStorage>, ui: UiStore) -> Self {
        Self {
            ledger: RwSignal::new(ledger),
            ui,
        }
    }

    /// Add an item and persist the ledger
    pub fn add_item(&self, kind: ItemKind, draft: &ItemDraft) -> LedgerResult<Item> {
        let mut result = None;
        self.ledger.update(|ledger| result = Some(ledger.add_item(kind, draft)));
        result.unwrap_or_else(|| Err(LedgerError::Storage("ledger is gone".to_string())))
    }

    /// Activate the tab called `name`
    pub fn switch_tab(&self, name: &str) -> LedgerResult<Tab> {
        switch_tab(self.ui, name)
    }

    /// Tracked projection of one list
    pub fn list_view(&self, kind: ItemKind) -> ListView {
        self.ledger
            .with(|ledger| project_list(kind, ledger.items(kind), &ledger.settings().currency))
    }

    /// Tracked label of the running total
    pub fn total_label(&self) -> String {
        self.ledger
            .with(|ledger| total_label(ledger.total(), &ledger.settings().currency))
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(NoticeLevel::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NoticeLevel::Error, message.into());
    }

    /// Show a notice and clear it after a while unless a newer one replaced it
    fn notify(&self, level: NoticeLevel, message: String) {
        let seq = next_notice_seq(self.ui);
        let details = match level {
            NoticeLevel::Error => console_logger::recent_tail(NOTICE_LOG_LINES),
            NoticeLevel::Info => Vec::new(),
        };
        self.ui.notice().set(Some(Notice { seq, level, message, details }));

        let ui = self.ui;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            let current = ui.notice().with_untracked(|notice| notice.as_ref().map(|n| n.seq));
            if should_clear(current, seq) {
                ui.notice().set(None);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.ui.notice().set(None);
    }
}
