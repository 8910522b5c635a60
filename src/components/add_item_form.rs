//! Add Item Form Component
//!
//! Form for recording a new movie or manga purchase.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{ItemDraft, ItemKind};

/// Form for adding an item to either list
#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (kind, set_kind) = signal(ItemKind::Movie);
    let (title, set_title) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let selected = kind.get_untracked();
        let draft = ItemDraft::new(title.get_untracked(), price.get_untracked(), notes.get_untracked());

        match ctx.add_item(selected, &draft) {
            Ok(_) => {
                // Kind selector keeps its value
                set_title.set(String::new());
                set_price.set(String::new());
                set_notes.set(String::new());
                ctx.info(format!("{} added successfully!", selected.as_str()));
            }
            Err(err) => ctx.error(err.to_string()),
        }
    };

    view! {
        <form id="addForm" class="add-form" on:submit=add_item>
            <select
                id="itemType"
                on:change=move |ev| set_kind.set(ItemKind::from_name(&event_target_value(&ev)))
            >
                {ItemKind::ALL.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option.as_str() selected=move || kind.get() == option>
                            {option.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <input
                id="title"
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                id="price"
                type="number"
                step="0.01"
                min="0"
                placeholder="Price"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <input
                id="notes"
                type="text"
                placeholder="Notes"
                prop:value=move || notes.get()
                on:input=move |ev| set_notes.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
