//! Resource List Page
//!
//! Wellness resources with a category filter and per-card delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{CategoryBadge, ConfirmDialog, DeletePrompt, ErrorText, Spinner};
use crate::context::use_app_context;
use crate::load::LoadState;
use crate::models::{Resource, ResourceCategory};
use crate::routes::Route;
use crate::store::{filter_by_category, store_remove_resource, ResourceShelf, ResourceShelfStoreFields};
use super::action_failed;

#[component]
pub fn ResourceListPage() -> impl IntoView {
    let ctx = use_app_context();
    let shelf = Store::new(ResourceShelf::default());
    let (load, set_load) = signal(LoadState::<()>::Loading);
    let (action_error, set_action_error) = signal::<Option<String>>(None);
    let prompt = RwSignal::new(DeletePrompt::default());

    Effect::new(move |_| {
        let Some(client) = ctx.authorize() else { return };
        spawn_local(async move {
            let result = api::list_resources(&client).await;
            if let Err(err) = &result {
                ctx.check_auth(err);
            }
            let result = result.map(|resources| shelf.resources().set(resources));
            set_load.set(LoadState::from_result("resources", result));
        });
    });

    let shown = Memo::new(move |_| {
        let category = shelf.category().get();
        shelf.resources().with(|all| filter_by_category(all, category))
    });

    let delete_resource = move |id: String| {
        let Some(client) = ctx.authorize() else { return };
        set_action_error.set(None);
        spawn_local(async move {
            match api::delete_resource(&client, &id).await {
                Ok(()) => {
                    log::info!("deleted resource {}", id);
                    store_remove_resource(&shelf, &id);
                }
                Err(err) => set_action_error.set(Some(action_failed(ctx, "delete resource", &err))),
            }
        });
    };

    view! {
        <section class="page resource-list-page">
            <div class="page-header">
                <h1>"Wellness Resources"</h1>
                <div class="page-actions">
                    <select
                        class="category-filter"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            let category = (!value.is_empty()).then(|| ResourceCategory::parse(&value));
                            shelf.category().set(category);
                        }
                    >
                        <option value="" selected=move || shelf.category().get().is_none()>"All categories"</option>
                        {ResourceCategory::ALL.into_iter().map(|c| view! {
                            <option value=c.as_str() selected=move || shelf.category().get() == Some(c)>{c.label()}</option>
                        }).collect_view()}
                    </select>
                    <a class="button primary" href=Route::ResourceNew.to_hash()>"Add resource"</a>
                </div>
            </div>

            {move || action_error.get().map(|message| view! { <ErrorText message=message /> })}

            {move || match load.get() {
                LoadState::Loading => view! { <Spinner label="Loading resources..." /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorText message=message /> }.into_any(),
                LoadState::Loaded(()) => view! {
                    <Show
                        when=move || shown.with(|list| !list.is_empty())
                        fallback=|| view! { <p class="empty-message">"No resources in this category."</p> }
                    >
                        <div class="resource-grid">
                            <For
                                each=move || shown.get()
                                key=|resource| resource.id.clone()
                                children=move |resource| view! { <ResourceCard resource=resource prompt=prompt /> }
                            />
                        </div>
                    </Show>
                }.into_any(),
            }}

            <ConfirmDialog
                prompt=prompt
                message="Delete this resource?"
                on_confirm=delete_resource
            />
        </section>
    }
}

#[component]
fn ResourceCard(resource: Resource, prompt: RwSignal<DeletePrompt>) -> impl IntoView {
    let id = resource.id.clone();

    view! {
        <article class="resource-card">
            <header>
                <h2>{resource.title}</h2>
                <CategoryBadge category=resource.category />
            </header>
            {resource.description.map(|text| view! { <p>{text}</p> })}
            <div class="row-actions">
                <a href=resource.link.clone() target="_blank" rel="noopener noreferrer">"Open link"</a>
                <button class="delete-btn" on:click=move |_| prompt.update(|p| p.open(id.clone()))>
                    "Delete"
                </button>
            </div>
        </article>
    }
}
