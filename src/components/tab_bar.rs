//! Tab Bar Component
//!
//! Switches between the movies and manga panels.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{Tab, UiStateStoreFields};

/// Tab controls, one per panel
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="tabs">
            {Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                let is_active = move || ctx.ui.active_tab().get() == tab;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "tab active" } else { "tab" }
                        data-tab=tab.name()
                        on:click=move |_| {
                            if let Err(err) = ctx.switch_tab(tab.name()) {
                                log::error!("[TabBar] {}", err);
                            }
                        }
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Content panel shown only while its tab is active
#[component]
pub fn TabPanel(tab: Tab, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let class = move || {
        if ctx.ui.active_tab().get() == tab { "tab-content active" } else { "tab-content" }
    };

    view! {
        <section id=tab.name() class=class>
            {children()}
        </section>
    }
}
