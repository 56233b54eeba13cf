use contracts::domain::common::Resource;
use contracts::shared::metadata::{FieldMetadata, FieldType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use super::cells::humanize;
use super::draft::FormDraft;
use super::state::{FormMode, ModalState};
use super::submit::{submit_draft, SubmitOutcome};
use crate::shared::dialog::alert;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::picker_aggregate::SearchPicker;
use crate::shared::resource_client::ResourceClient;

/// Поле ввода по дескриптору
fn field_input<R: Resource>(field: &'static FieldMetadata, draft: RwSignal<FormDraft<R>>) -> AnyView {
    let name = field.name;
    let value = move || draft.with(|d| d.get(name));
    let placeholder = field.ui.placeholder.unwrap_or("");

    match field.field_type {
        FieldType::TextArea => view! {
            <textarea
                class="form-control"
                rows="3"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| draft.update(|d| d.set_input(name, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        FieldType::Enum => view! {
            <select
                class="form-control"
                on:change=move |ev| draft.update(|d| d.set_input(name, event_target_value(&ev)))
            >
                {field
                    .enum_values
                    .unwrap_or(&[])
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option
                                value=option
                                selected=move || draft.with(|d| d.get(name) == option)
                            >
                                {humanize(option)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldType::Date => view! {
            <input
                class="form-control"
                type="date"
                prop:value=value
                on:input=move |ev| draft.update(|d| d.set_input(name, event_target_value(&ev)))
            />
        }
        .into_any(),
        FieldType::Integer | FieldType::Number => view! {
            <input
                class="form-control form-control--number"
                type="text"
                inputmode="decimal"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| draft.update(|d| d.set_input(name, event_target_value(&ev)))
            />
        }
        .into_any(),
        FieldType::Text => view! {
            <input
                class="form-control"
                type="text"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| draft.update(|d| d.set_input(name, event_target_value(&ev)))
            />
        }
        .into_any(),
    }
}

/// Модальная форма создания/редактирования ресурса
#[component]
pub fn ResourceFormModal<R: Resource>(
    client: ResourceClient<R>,
    /// Parent's draft; the local draft is reset whenever it changes
    #[prop(into)]
    form_data: Signal<R>,
    modal: RwSignal<ModalState>,
    /// Called after a successful create/update
    #[prop(into)]
    on_success: Callback<()>,
) -> impl IntoView {
    let client = StoredValue::new(client);
    let draft = RwSignal::new(FormDraft::<R>::from_dto(&form_data.get_untracked()));
    let error = RwSignal::new(None::<String>);
    let search_open = RwSignal::new(false);

    Effect::new(move |_| {
        let data = form_data.get();
        draft.set(FormDraft::from_dto(&data));
        error.set(None);
    });

    let title = match modal.get_untracked().mode() {
        Some(FormMode::Edit(id)) => format!("Edit {} #{}", R::element_name().to_lowercase(), id),
        _ => format!("New {}", R::element_name().to_lowercase()),
    };

    let close = move || {
        modal.update(|m| {
            m.close();
        });
    };

    let submit = move || {
        if modal.with_untracked(|m| m.is_submitting()) {
            return;
        }
        error.set(None);
        let current = draft.get_untracked();
        let client = client.get_value();
        spawn_local(async move {
            match submit_draft(&client, &current, modal).await {
                SubmitOutcome::Rejected(message) => alert(&message),
                SubmitOutcome::Ignored => {}
                SubmitOutcome::Saved(message) => {
                    log::info!("{}", message.unwrap_or_default());
                    on_success.run(());
                }
                SubmitOutcome::Failed(e) => error.set(Some(e)),
            }
        });
    };

    let submitting = move || modal.with(|m| m.is_submitting());

    view! {
        <Modal title=title on_close=Callback::new(move |_| close())>
            <form
                class="details-container"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                {R::search_link()
                    .map(|link| {
                        view! {
                            <div class="details-header">
                                <button
                                    type="button"
                                    class="button button--secondary"
                                    on:click=move |_| search_open.set(true)
                                >
                                    {icon("search")}
                                    {link.title}
                                </button>
                            </div>
                        }
                    })}

                {FormDraft::<R>::form_fields()
                    .map(|field| {
                        view! {
                            <div class="form-group">
                                <label>
                                    {field.label()}
                                    {field.validation.required.then_some(" *")}
                                </label>
                                {field_input(field, draft)}
                            </div>
                        }
                    })
                    .collect_view()}

                {move || {
                    error
                        .get()
                        .map(|e| {
                            view! {
                                <div class="warning-box">
                                    <span class="warning-box__icon">"⚠"</span>
                                    <span class="warning-box__text">{e}</span>
                                </div>
                            }
                        })
                }}

                <div class="details-actions">
                    <button type="submit" class="button button--primary" disabled=submitting>
                        {move || if submitting() { "Saving..." } else { "Save" }}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        disabled=submitting
                        on:click=move |_| close()
                    >
                        "Cancel"
                    </button>
                </div>
            </form>

            <Show when=move || search_open.get()>
                {move || {
                    R::search_link()
                        .map(|link| {
                            view! {
                                <SearchPicker
                                    client=client.get_value()
                                    link=link
                                    on_pick=move |row: Value| {
                                        draft.update(|d| d.apply_selection(&link, &row));
                                        search_open.set(false);
                                    }
                                    on_close=Callback::new(move |_| search_open.set(false))
                                />
                            }
                        })
                }}
            </Show>
        </Modal>
    }
}
