//! Notice Banner Component
//!
//! Shows the current status message without blocking the page.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::UiStateStoreFields;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.ui.notice().get().map(|notice| view! {
            <div class=notice.class() role="status">
                <span>{notice.message.clone()}</span>
                {(!notice.details.is_empty()).then(|| view! {
                    <details class="notice-log">
                        <summary>"Log"</summary>
                        <pre>{notice.details.join("\n")}</pre>
                    </details>
                })}
                <button type="button" class="notice-close" on:click=move |_| ctx.dismiss_notice()>
                    "×"
                </button>
            </div>
        })}
    }
}
