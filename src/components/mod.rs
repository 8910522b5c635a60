//! UI Components
//!
//! Leptos components for the ledger widget.

mod add_item_form;
mod item_list;
mod notice_banner;
mod tab_bar;
mod total_display;

pub use add_item_form::AddItemForm;
pub use item_list::ItemList;
pub use notice_banner::NoticeBanner;
pub use tab_bar::{TabBar, TabPanel};
pub use total_display::TotalDisplay;
