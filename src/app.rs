//! Anime Ledger App
//!
//! Root component: loads the ledger and lays out tabs, form and total.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, ItemList, NoticeBanner, TabBar, TabPanel, TotalDisplay};
use crate::context::AppContext;
use crate::ledger::{Ledger, LoadOutcome};
use crate::storage::BrowserStorage;
use crate::store::{Tab, UiState};

#[component]
pub fn App() -> impl IntoView {
    let (ledger, outcome) = Ledger::open(BrowserStorage);
    let theme = ledger.settings().theme.clone();

    let ui = Store::new(UiState::default());
    let ctx = AppContext::new(ledger, ui);

    // Provide context to all children
    provide_context(ctx);

    if let LoadOutcome::Recovered(err) = outcome {
        ctx.error(format!("{}. Starting with an empty ledger.", err));
    }

    view! {
        <div class=format!("app theme-{}", theme)>
            <header class="app-header">
                <h1>"Anime Ledger"</h1>
                <TotalDisplay />
            </header>

            <NoticeBanner />

            <AddItemForm />

            <TabBar />

            {Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                view! {
                    <TabPanel tab=tab>
                        <ItemList kind=tab.kind() />
                    </TabPanel>
                }
            }).collect_view()}
        </div>
    }
}
