//! Bound Form Fields
//!
//! Inputs wired to one field of a draft held in an `RwSignal`. Each edit
//! replaces that field and leaves the rest of the draft untouched.

use leptos::prelude::*;

use crate::models::Person;

#[component]
pub fn BoundInput<T: Send + Sync + 'static>(
    draft: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
    #[prop(into)] disabled: Signal<bool>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            id=id
            type=kind
            placeholder=placeholder
            prop:value=move || draft.with(get)
            prop:disabled=move || disabled.get()
            on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
        />
    }
}

#[component]
pub fn BoundTextArea<T: Send + Sync + 'static>(
    draft: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <textarea
            id=id
            rows="3"
            prop:value=move || draft.with(get)
            prop:disabled=move || disabled.get()
            on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
        ></textarea>
    }
}

/// Picker over caregivers or patients; the draft stores the chosen id
#[component]
pub fn PersonSelect<T: Send + Sync + 'static>(
    draft: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
    #[prop(into)] options: Signal<Vec<Person>>,
    #[prop(into)] disabled: Signal<bool>,
    placeholder: &'static str,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <select
            id=id
            prop:disabled=move || disabled.get()
            on:change=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
        >
            <option value="" selected=move || draft.with(get).is_empty()>{placeholder}</option>
            <For
                each=move || options.get()
                key=|person| person.id.clone()
                children=move |person| {
                    let person_id = person.id.clone();
                    let selected = move || draft.with(get) == person_id;
                    view! { <option value=person.id.clone() selected=selected>{person.name}</option> }
                }
            />
        </select>
    }
}
