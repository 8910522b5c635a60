//! List Projections
//!
//! Pure view models for the item lists and the running total.

use crate::models::{Item, ItemKind};

/// What an item list displays
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Placeholder shown when the list has no items
    Empty { placeholder: &'static str },
    Rows(Vec<RowView>),
}

/// One rendered item row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: i64,
    pub title: String,
    pub notes: String,
    pub price: String,
}

/// Project a list into rows, in list order
pub fn project_list(kind: ItemKind, items: &[Item], currency: &str) -> ListView {
    if items.is_empty() {
        return ListView::Empty {
            placeholder: kind.empty_placeholder(),
        };
    }

    ListView::Rows(
        items
            .iter()
            .map(|item| RowView {
                id: item.id,
                title: item.title.clone(),
                notes: item.notes.clone(),
                price: format_money(currency, item.price),
            })
            .collect(),
    )
}

/// Currency symbol followed by the amount with two decimals
pub fn format_money(currency: &str, amount: f64) -> String {
    // An empty f64 sum is -0.0
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{}{:.2}", currency, amount)
}

pub fn total_label(total: f64, currency: &str) -> String {
    format_money(currency, total)
}
