//! Total Display Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Running total of every purchase
#[component]
pub fn TotalDisplay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let total = Memo::new(move |_| ctx.total_label());

    view! {
        <div class="total">
            <span class="total-label">"Total spent: "</span>
            <span id="totalValue">{move || total.get()}</span>
        </div>
    }
}
