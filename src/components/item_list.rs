//! Item List Component
//!
//! Renders one list of purchases, or a placeholder when it is empty.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::ItemKind;
use crate::render::ListView;

#[component]
pub fn ItemList(kind: ItemKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    // Memo so adding to the other list does not re-render this one
    let projection = Memo::new(move |_| ctx.list_view(kind));

    view! {
        <div id=kind.list_id() class="item-list">
            {move || match projection.get() {
                ListView::Empty { placeholder } => view! {
                    <p class="empty">{placeholder}</p>
                }.into_any(),
                ListView::Rows(rows) => rows.into_iter().map(|row| view! {
                    <div class=kind.row_class() data-id=row.id.to_string()>
                        <div>
                            <div class="item-title">{row.title}</div>
                            <div class="item-notes">{row.notes}</div>
                        </div>
                        <div class="item-price">{row.price}</div>
                    </div>
                }).collect_view().into_any(),
            }}
        </div>
    }
}
