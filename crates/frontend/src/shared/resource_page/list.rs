use contracts::domain::common::{Record, RecordId, Resource};
use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::cells::cell_text;
use super::form::ResourceFormModal;
use super::state::{ListState, ModalState};
use crate::shared::components::stat_card::StatCard;
use crate::shared::dialog::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::resource_client::ResourceClient;

fn list_columns<R: Resource>() -> Vec<&'static FieldMetadata> {
    R::fields().iter().filter(|f| f.visible_in_list()).collect()
}

/// Ячейки строки таблицы по дескрипторам
fn row_cells<R: Resource>(record: &Record<R>) -> Vec<String> {
    let value = serde_json::to_value(&record.data).unwrap_or_default();
    list_columns::<R>()
        .into_iter()
        .map(|field| cell_text(field, value.get(field.name)))
        .collect()
}

/// Draft source for the form modal. Notifies only when the draft itself
/// changes, so a finished refresh does not reset what the user typed.
fn form_source<R: Resource>(state: RwSignal<ListState<R>>) -> Memo<R> {
    Memo::new(move |_| state.with(|s| s.form_data.clone()))
}

/// Страница списка ресурса: сводка, таблица, модальная форма
#[component]
#[allow(non_snake_case)]
pub fn ResourceListPage<R: Resource>(client: ResourceClient<R>) -> impl IntoView {
    let client = StoredValue::new(client);
    let state = RwSignal::new(ListState::<R>::default());
    let modal = RwSignal::new(ModalState::default());
    let form_data = form_source(state);

    let fetch = move || {
        state.update(|s| s.begin_load());
        let client = client.get_value();
        spawn_local(async move {
            let envelope = client.list_all().await;
            state.update(|s| s.apply_load(envelope));
        });
    };

    let handle_create_new = move || {
        let mut mode = None;
        state.update(|s| mode = Some(s.start_create()));
        if let Some(mode) = mode {
            modal.update(|m| {
                m.open(mode);
            });
        }
    };

    let handle_edit = move |id: RecordId| {
        let mut mode = None;
        state.update(|s| mode = s.start_edit(id));
        if let Some(mode) = mode {
            modal.update(|m| {
                m.open(mode);
            });
        }
    };

    let handle_delete = move |id: RecordId| {
        let question = format!("Delete this {}?", R::element_name().to_lowercase());
        if !confirm(&question) {
            return;
        }
        let client = client.get_value();
        spawn_local(async move {
            let envelope = client.delete(id).await;
            match envelope.into_result() {
                Ok(_) => state.update(|s| s.remove(id)),
                Err(e) => alert(&e),
            }
        });
    };

    fetch();

    let columns = list_columns::<R>();
    let column_count = columns.len() + 1;

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{R::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {format!("New {}", R::element_name().to_lowercase())}
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=move || state.with(|s| s.loading)
                        on:click=move |_| fetch()
                    >
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|e| {
                        view! {
                            <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                                <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                                <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                            </div>
                        }
                    })
            }}

            <Show when=move || state.with(|s| s.showing_sample)>
                <div class="info-box">"Showing sample data. Changes are disabled until the server is reachable."</div>
            </Show>

            <div class="stat-cards">
                {move || {
                    state
                        .with(|s| s.summary())
                        .into_iter()
                        .map(|indicator| view! { <StatCard indicator=indicator /> })
                        .collect_view()
                }}
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns
                                .iter()
                                .map(|field| view! { <th class="table__header-cell">{field.label()}</th> })
                                .collect_view()}
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if state.with(|s| s.loading && s.records.is_empty()) {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan=column_count.to_string()>"Loading..."</td>
                                    </tr>
                                }
                                .into_any();
                            }
                            let rows = state.with(|s| {
                                s.records
                                    .iter()
                                    .map(|record| (record.id, record.is_sample(), row_cells(record)))
                                    .collect::<Vec<_>>()
                            });
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan=column_count.to_string()>"No records"</td>
                                    </tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|(id, is_sample, cells)| {
                                    view! {
                                        <tr class="table__row">
                                            {cells
                                                .into_iter()
                                                .map(|text| view! { <td class="table__cell">{text}</td> })
                                                .collect_view()}
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Edit"
                                                    disabled=is_sample
                                                    on:click=move |_| handle_edit(id)
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Delete"
                                                    disabled=is_sample
                                                    on:click=move |_| handle_delete(id)
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || modal.with(|m| m.is_open())>
                <ResourceFormModal
                    client=client.get_value()
                    form_data=form_data
                    modal=modal
                    on_success=move |_: ()| fetch()
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::a002_claim::aggregate::{ClaimDto, ClaimStatus};
    use contracts::domain::common::ApiEnvelope;

    #[test]
    fn test_columns_follow_descriptors() {
        let labels: Vec<_> = list_columns::<ClaimDto>().iter().map(|f| f.label()).collect();
        assert!(labels.contains(&"Customer"));
        assert!(!labels.contains(&"Description"));
    }

    #[test]
    fn test_row_cells() {
        let now = Utc::now();
        let record = Record::new(
            1,
            ClaimDto {
                customer_name: "A Corp".into(),
                quantity: Some(1200),
                status: ClaimStatus::InProgress,
                ..Default::default()
            },
            now,
            now,
        );
        let cells = row_cells(&record);
        assert_eq!(cells.len(), list_columns::<ClaimDto>().len());
        assert!(cells.contains(&"A Corp".to_string()));
        assert!(cells.contains(&"1,200".to_string()));
        assert!(cells.contains(&"In progress".to_string()));
    }

    #[test]
    fn test_form_source_ignores_list_reloads() {
        let owner = Owner::new();
        owner.with(|| {
            let now = Utc::now();
            let record = Record::new(
                3,
                ClaimDto {
                    customer_name: "B Corp".into(),
                    ..Default::default()
                },
                now,
                now,
            );
            let state = RwSignal::new(ListState::<ClaimDto>::default());
            let form_data = form_source(state);
            let resyncs = Memo::new(move |prev: Option<&usize>| {
                form_data.track();
                prev.map_or(0, |n| n + 1)
            });
            assert_eq!(resyncs.get_untracked(), 0);

            state.update(|s| s.begin_load());
            state.update(|s| s.apply_load(ApiEnvelope::ok(vec![record.clone()])));
            assert_eq!(resyncs.get_untracked(), 0);

            state.update(|s| {
                s.start_edit(3);
            });
            assert_eq!(resyncs.get_untracked(), 1);
            assert_eq!(form_data.get_untracked().customer_name, "B Corp");

            state.update(|s| s.begin_load());
            state.update(|s| s.apply_load(ApiEnvelope::ok(vec![record])));
            assert_eq!(resyncs.get_untracked(), 1);
        });
    }
}
