//! Confirm Dialog Component
//!
//! Modal delete confirmation. Closes on outside click, Escape, cancel or
//! confirm; only confirm hands the pending id to the caller.

use leptos::ev;
use leptos::prelude::*;

/// How the dialog was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Cancel,
    OutsideClick,
    Escape,
}

/// Which entry, if any, is waiting for confirmation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeletePrompt {
    target: Option<String>,
}

impl DeletePrompt {
    pub fn open(&mut self, id: impl Into<String>) {
        self.target = Some(id.into());
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Close the prompt. Returns the id to delete only for `Confirm`.
    pub fn resolve(&mut self, action: DialogAction) -> Option<String> {
        let target = self.target.take();
        match action {
            DialogAction::Confirm => target,
            DialogAction::Cancel | DialogAction::OutsideClick | DialogAction::Escape => None,
        }
    }
}

/// Modal confirmation bound to a `DeletePrompt` signal
///
/// # Arguments
/// * `prompt` - Open with `prompt.update(|p| p.open(id))`
/// * `message` - Question shown in the dialog
/// * `on_confirm` - Receives the id once the user confirms
#[component]
pub fn ConfirmDialog(
    prompt: RwSignal<DeletePrompt>,
    message: &'static str,
    #[prop(into)] on_confirm: Callback<String>,
) -> impl IntoView {
    let act = move |action: DialogAction| {
        let mut confirmed = None;
        prompt.update(|p| confirmed = p.resolve(action));
        if let Some(id) = confirmed {
            on_confirm.run(id);
        }
    };

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && prompt.with_untracked(DeletePrompt::is_open) {
            act(DialogAction::Escape);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || prompt.with(DeletePrompt::is_open)>
            <div class="modal-overlay" on:click=move |_| act(DialogAction::OutsideClick)>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <p class="modal-message">{message}</p>
                    <div class="modal-actions">
                        <button class="cancel-btn" on:click=move |_| act(DialogAction::Cancel)>
                            "Cancel"
                        </button>
                        <button class="confirm-btn danger" on:click=move |_| act(DialogAction::Confirm)>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
