//! Ledger
//!
//! Owns the `AppState` and the storage it is persisted to. Every mutation
//! writes the whole state back before returning.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{AppState, Item, ItemDraft, ItemKind, Settings, SCHEMA_VERSION};
use crate::storage::StateStorage;

/// How the initial state was obtained
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// A stored blob replaced the defaults
    Restored,
    /// Nothing stored yet
    Fresh,
    /// Stored blob was unusable, defaults were used instead
    Recovered(LedgerError),
}

pub struct Ledger<S: StateStorage> {
    state: AppState,
    storage: S,
    last_id: i64,
}

impl<S: StateStorage> Ledger<S> {
    /// Load the stored state, falling back to defaults when it is missing or unusable
    pub fn open(storage: S) -> (Self, LoadOutcome) {
        let (mut state, outcome) = match storage.load() {
            Ok(Some(state)) => (state, LoadOutcome::Restored),
            Ok(None) => (AppState::default(), LoadOutcome::Fresh),
            Err(err) => {
                log::warn!("Ignoring stored ledger: {}", err);
                (AppState::default(), LoadOutcome::Recovered(err))
            }
        };
        state.version = SCHEMA_VERSION;

        let last_id = state.movies.iter().chain(&state.manga).map(|item| item.id).max().unwrap_or(0);
        log::info!(
            "Ledger opened: {} movies, {} manga ({:?})",
            state.movies.len(),
            state.manga.len(),
            outcome
        );

        (Self { state, storage, last_id }, outcome)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn items(&self, kind: ItemKind) -> &[Item] {
        self.state.items(kind)
    }

    /// Record a purchase stamped with the current time
    pub fn add_item(&mut self, kind: ItemKind, draft: &ItemDraft) -> LedgerResult<Item> {
        self.add_item_at(kind, draft, Utc::now())
    }

    pub fn add_item_at(&mut self, kind: ItemKind, draft: &ItemDraft, now: DateTime<Utc>) -> LedgerResult<Item> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(LedgerError::EmptyTitle);
        }

        let previous_id = self.last_id;
        let item = Item {
            id: self.next_id(now),
            title: title.to_string(),
            price: parse_price(&draft.price),
            notes: draft.notes.clone(),
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.state.items_mut(kind).push(item.clone());

        if let Err(err) = self.persist() {
            self.state.items_mut(kind).pop();
            self.last_id = previous_id;
            log::error!("Failed to save {} '{}': {}", kind.as_str(), item.title, err);
            return Err(err);
        }

        log::info!("Added {} '{}' at {:.2}", kind.as_str(), item.title, item.price);
        Ok(item)
    }

    /// Write the whole state to storage
    pub fn persist(&self) -> LedgerResult<()> {
        self.storage.save(&self.state)
    }

    /// Sum of every movie and manga price
    pub fn total(&self) -> f64 {
        self.state
            .movies
            .iter()
            .chain(&self.state.manga)
            .fold(0.0, |sum, item| sum + item.price)
    }

    /// Millisecond timestamp, bumped past the last id on collision
    fn next_id(&mut self, now: DateTime<Utc>) -> i64 {
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

/// Parse the leading decimal number of `raw`, like the browser's `parseFloat`.
/// Anything unparsable, negative, infinite or signed zero becomes 0.
pub fn parse_price(raw: &str) -> f64 {
    let s = raw.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
        .unwrap_or(s.len());
    let candidate = &s[..end];

    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{project_list, total_label, ListView};
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn fresh() -> Ledger<MemoryStorage> {
        let (ledger, outcome) = Ledger::open(MemoryStorage::default());
        assert_eq!(outcome, LoadOutcome::Fresh);
        ledger
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.5"), 12.5);
        assert_eq!(parse_price("  3"), 3.0);
        assert_eq!(parse_price("7abc"), 7.0);
        assert_eq!(parse_price("1.5e1"), 15.0);
        assert_eq!(parse_price("2e"), 2.0);
        assert_eq!(parse_price(".75"), 0.75);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("-4"), 0.0);
        assert_eq!(parse_price("inf"), 0.0);
        assert_eq!(parse_price("1e999"), 0.0);
        assert!(parse_price("-0").is_sign_positive());
    }

    #[test]
    fn test_zero_totals_show_unsigned() {
        let mut ledger = fresh();
        assert_eq!(total_label(ledger.total(), "$"), "$0.00");

        let item = ledger.add_item_at(ItemKind::Movie, &ItemDraft::new("Ghost in the Shell", "-0", ""), at(1)).unwrap();
        assert!(item.price.is_sign_positive());
        match project_list(ItemKind::Movie, ledger.items(ItemKind::Movie), "$") {
            ListView::Rows(rows) => assert_eq!(rows[0].price, "$0.00"),
            other => panic!("expected rows, got {:?}", other),
        }
        assert_eq!(total_label(ledger.total(), "$"), "$0.00");
    }

    #[test]
    fn test_add_movie_scenario() {
        let mut ledger = fresh();
        let item = ledger
            .add_item_at(ItemKind::Movie, &ItemDraft::new("Akira", "12.5", "classic"), at(1_700_000_000_000))
            .unwrap();

        assert_eq!(ledger.items(ItemKind::Movie).len(), 1);
        assert_eq!(item.title, "Akira");
        assert_eq!(item.price, 12.5);
        assert_eq!(item.notes, "classic");
        assert_eq!(item.id, 1_700_000_000_000);
        assert_eq!(item.date, "2023-11-14T22:13:20.000Z");
        assert_eq!(total_label(ledger.total(), &ledger.settings().currency), "$12.50");
    }

    #[test]
    fn test_add_appends_and_grows_total() {
        let mut ledger = fresh();
        ledger.add_item_at(ItemKind::Manga, &ItemDraft::new("Berserk", "9.5", ""), at(1)).unwrap();
        ledger.add_item_at(ItemKind::Movie, &ItemDraft::new("Paprika", "8", ""), at(2)).unwrap();

        let before_len = ledger.items(ItemKind::Manga).len();
        let before_total = ledger.total();
        let item = ledger.add_item_at(ItemKind::Manga, &ItemDraft::new("Monster", "4.25", ""), at(3)).unwrap();

        let manga = ledger.items(ItemKind::Manga);
        assert_eq!(manga.len(), before_len + 1);
        assert_eq!(manga.last(), Some(&item));
        assert_eq!(ledger.total(), before_total + 4.25);
        assert_eq!(ledger.items(ItemKind::Movie).len(), 1);
    }

    #[test]
    fn test_two_lists_total() {
        let mut ledger = fresh();
        ledger.add_item_at(ItemKind::Movie, &ItemDraft::new("Perfect Blue", "10.00", ""), at(1)).unwrap();
        ledger.add_item_at(ItemKind::Manga, &ItemDraft::new("Pluto", "5.25", ""), at(2)).unwrap();
        assert_eq!(total_label(ledger.total(), "$"), "$15.25");
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut ledger = fresh();
        ledger.add_item_at(ItemKind::Movie, &ItemDraft::new("Akira", "1", ""), at(1)).unwrap();
        let stored = ledger.storage.raw();

        let result = ledger.add_item_at(ItemKind::Movie, &ItemDraft::new("   ", "5", "x"), at(2));

        assert_eq!(result, Err(LedgerError::EmptyTitle));
        assert_eq!(result.unwrap_err().to_string(), "Please enter a title!");
        assert_eq!(ledger.items(ItemKind::Movie).len(), 1);
        assert!(ledger.items(ItemKind::Manga).is_empty());
        assert_eq!(ledger.storage.raw(), stored);
    }

    #[test]
    fn test_unparsable_price_is_zero() {
        let mut ledger = fresh();
        let item = ledger.add_item_at(ItemKind::Manga, &ItemDraft::new("Nana", "abc", ""), at(1)).unwrap();
        assert_eq!(item.price, 0.0);
        assert_eq!(ledger.total(), 0.0);
    }

    #[test]
    fn test_title_is_trimmed() {
        let mut ledger = fresh();
        let item = ledger.add_item_at(ItemKind::Movie, &ItemDraft::new("  Akira ", "1", ""), at(1)).unwrap();
        assert_eq!(item.title, "Akira");
    }

    #[test]
    fn test_same_millisecond_ids_unique() {
        let mut ledger = fresh();
        let now = at(5_000);
        let a = ledger.add_item_at(ItemKind::Movie, &ItemDraft::new("A", "1", ""), now).unwrap();
        let b = ledger.add_item_at(ItemKind::Manga, &ItemDraft::new("B", "1", ""), now).unwrap();
        let c = ledger.add_item_at(ItemKind::Movie, &ItemDraft::new("C", "1", ""), at(4_000)).unwrap();
        assert_eq!(a.id, 5_000);
        assert_eq!(b.id, 5_001);
        assert_eq!(c.id, 5_002);
    }

    #[test]
    fn test_reload_restores_lists() {
        let storage = MemoryStorage::default();
        let (mut ledger, _) = Ledger::open(storage);
        ledger.add_item_at(ItemKind::Movie, &ItemDraft::new("Perfect Blue", "10.00", "dvd"), at(1)).unwrap();
        ledger.add_item_at(ItemKind::Manga, &ItemDraft::new("Pluto", "5.25", "vol 1"), at(2)).unwrap();
        ledger.add_item_at(ItemKind::Manga, &ItemDraft::new("Pluto", "5.25", "vol 2"), at(3)).unwrap();
        let snapshot = ledger.state().clone();

        let (reloaded, outcome) = Ledger::open(ledger.storage);

        assert_eq!(outcome, LoadOutcome::Restored);
        assert_eq!(reloaded.state(), &snapshot);
        assert_eq!(reloaded.items(ItemKind::Manga)[0].notes, "vol 1");
        assert_eq!(reloaded.items(ItemKind::Manga)[1].notes, "vol 2");
        assert_eq!(total_label(reloaded.total(), "$"), "$20.50");
    }

    #[test]
    fn test_reload_keeps_ids_monotonic() {
        let (mut ledger, _) = Ledger::open(MemoryStorage::default());
        ledger.add_item_at(ItemKind::Movie, &ItemDraft::new("A", "1", ""), at(9_000)).unwrap();

        let (mut reloaded, _) = Ledger::open(ledger.storage);
        let item = reloaded.add_item_at(ItemKind::Movie, &ItemDraft::new("B", "1", ""), at(8_000)).unwrap();
        assert_eq!(item.id, 9_001);
    }

    #[test]
    fn test_corrupt_blob_recovers_defaults() {
        let (ledger, outcome) = Ledger::open(MemoryStorage::with_blob("{\"movies\": 3"));
        assert!(matches!(outcome, LoadOutcome::Recovered(LedgerError::CorruptState(_))));
        assert_eq!(ledger.state(), &AppState::default());
    }

    #[test]
    fn test_legacy_blob_restored_with_settings() {
        let raw = r#"{"movies":[{"id":10,"title":"Akira","price":12.5,"notes":"","date":"2020-01-01T00:00:00.000Z"}],"manga":[],"settings":{"theme":"dark","currency":"€"}}"#;
        let (mut ledger, outcome) = Ledger::open(MemoryStorage::with_blob(raw));

        assert_eq!(outcome, LoadOutcome::Restored);
        assert_eq!(ledger.settings().currency, "€");
        match project_list(ItemKind::Movie, ledger.items(ItemKind::Movie), &ledger.settings().currency) {
            ListView::Rows(rows) => assert_eq!(rows[0].price, "€12.50"),
            other => panic!("expected rows, got {:?}", other),
        }

        ledger.add_item_at(ItemKind::Manga, &ItemDraft::new("Nana", "1", ""), at(20)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&ledger.storage.raw().unwrap()).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["settings"]["currency"], "€");
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let (mut ledger, _) = Ledger::open(MemoryStorage::failing_writes());

        let result = ledger.add_item_at(ItemKind::Movie, &ItemDraft::new("Akira", "1", ""), at(100));

        assert!(matches!(result, Err(LedgerError::Storage(_))));
        assert!(ledger.items(ItemKind::Movie).is_empty());
        assert_eq!(ledger.last_id, 0);
    }
}
