use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Порядок открытых модальных окон
///
/// Escape closes only the topmost modal; a search modal opened over a form
/// must not take the form down with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalStack {
    next_id: u64,
    open: Vec<u64>,
}

impl ModalStack {
    pub fn push(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.open.push(id);
        id
    }

    pub fn remove(&mut self, id: u64) {
        self.open.retain(|open| *open != id);
    }

    pub fn is_top(&self, id: u64) -> bool {
        self.open.last() == Some(&id)
    }
}

/// Shared `ModalStack`, provided through context
#[derive(Clone, Copy)]
pub struct ModalStackService(StoredValue<ModalStack>);

impl ModalStackService {
    pub fn new() -> Self {
        Self(StoredValue::new(ModalStack::default()))
    }

    /// Context service, or a new one scoped to the caller's subtree
    pub fn use_or_provide() -> Self {
        use_context::<Self>().unwrap_or_else(|| {
            let service = Self::new();
            provide_context(service);
            service
        })
    }

    pub fn push(&self) -> u64 {
        self.0.try_update_value(|stack| stack.push()).unwrap_or_default()
    }

    pub fn remove(&self, id: u64) {
        self.0.try_update_value(|stack| stack.remove(id));
    }

    pub fn is_top(&self, id: u64) -> bool {
        self.0.try_with_value(|stack| stack.is_top(id)).unwrap_or(false)
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close (Escape, overlay, close button)
    #[prop(into)]
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let stack = ModalStackService::use_or_provide();
    let id = stack.push();

    // Handle Escape key, topmost modal only
    let listener = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && stack.is_top(id) {
            on_close.run(());
        }
    });
    on_cleanup(move || {
        listener.remove();
        stack.remove(id);
    });

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
