//! Repository Row Component
//!
//! One list row with view and edit modes. Edits and removal stay local.

use leptos::prelude::*;

use crate::context::use_list_context;
use crate::models::Item;

#[component]
pub fn RepoRow(item: Item) -> impl IntoView {
    let ctx = use_list_context();

    let id = item.id;
    let stars = item.stars;

    // Memo so draft keystrokes don't rebuild the row
    let editing = Memo::new(move |_| ctx.is_editing(id));

    let body = {
        let name = item.name.clone();
        let description = item.description.clone();
        move || {
            if editing.get() {
                view! {
                    <div class="edit-fields">
                        <input
                            type="text"
                            placeholder="Name"
                            prop:value=move || ctx.edit.with(|s| s.draft_name.clone())
                            on:input=move |ev| ctx.set_draft_name(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Description"
                            prop:value=move || ctx.edit.with(|s| s.draft_description.clone())
                            on:input=move |ev| ctx.set_draft_description(event_target_value(&ev))
                        />
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="list-item-meta">
                        <h4 class="list-item-title">{name.clone()}</h4>
                        <p class="list-item-description">{description.clone()}</p>
                        <span class="stars">{format!("★ {}", stars)}</span>
                    </div>
                }
                .into_any()
            }
        }
    };

    // Edit while viewing, Save while editing
    let primary_action = move || {
        if editing.get() {
            view! {
                <button class="btn" on:click=move |_| ctx.save_edit(id)>"Save"</button>
            }
            .into_any()
        } else {
            let name = item.name.clone();
            let description = item.description.clone();
            view! {
                <button class="btn" on:click=move |_| ctx.start_editing(id, &name, &description)>
                    "Edit"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <div class="list-item">
            <div class="list-item-body">{body}</div>
            <div class="list-item-actions">
                {primary_action}
                <button class="btn danger" on:click=move |_| ctx.remove_item(id)>"Delete"</button>
            </div>
        </div>
    }
}
