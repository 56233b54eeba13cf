use contracts::domain::common::{Resource, SearchLink};
use contracts::shared::search::{filter_rows, value_text};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::shared::modal::Modal;
use crate::shared::resource_client::ResourceClient;

/// Окно поиска по связанной коллекции
///
/// Loads the linked collection once, then filters it locally on every
/// keystroke over the link's columns. A click on a row hands it to `on_pick`.
#[component]
pub fn SearchPicker<R: Resource>(
    /// Client of the form's resource; only its configuration is used
    client: ResourceClient<R>,
    link: SearchLink,
    #[prop(into)]
    on_pick: Callback<Value>,
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let rows = RwSignal::new(Vec::<Value>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let query = RwSignal::new(String::new());

    spawn_local(async move {
        let envelope = client.list_linked(&link).await;
        match envelope.into_result() {
            Ok(data) => rows.set(data.unwrap_or_default()),
            Err(e) => error.set(Some(e)),
        }
        loading.set(false);
    });

    let columns = link.column_names();

    view! {
        <Modal title=link.title on_close=on_close>
            <div class="picker-container">
                <input
                    class="picker-search form-control"
                    type="text"
                    placeholder="Search..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <div class="picker-content">
                    {move || {
                        if loading.get() {
                            view! { <div class="picker-loading">"Loading..."</div> }.into_any()
                        } else if let Some(err) = error.get() {
                            view! {
                                <div class="picker-error">
                                    <p>"Failed to load: " {err}</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            let q = query.get();
                            rows.with(|rows| {
                                let visible = filter_rows(rows, &columns, &q);
                                if visible.is_empty() {
                                    return view! { <div class="picker-empty">"Nothing found"</div> }
                                        .into_any();
                                }
                                view! {
                                    <table class="picker-table">
                                        <thead>
                                            <tr>
                                                {link
                                                    .columns
                                                    .iter()
                                                    .map(|(_, label)| view! { <th>{*label}</th> })
                                                    .collect_view()}
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {visible
                                                .into_iter()
                                                .map(|row| {
                                                    let picked = row.clone();
                                                    view! {
                                                        <tr
                                                            class="picker-row"
                                                            on:click=move |_| on_pick.run(picked.clone())
                                                        >
                                                            {link
                                                                .columns
                                                                .iter()
                                                                .map(|(name, _)| {
                                                                    view! { <td>{value_text(row.get(*name))}</td> }
                                                                })
                                                                .collect_view()}
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            })
                        }
                    }}
                </div>
            </div>
        </Modal>
    }
}
