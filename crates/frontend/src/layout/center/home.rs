use crate::domain::nav_entries;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Стартовая страница: карточки разделов
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"MES Admin"</h1>
                </div>
            </div>
            <div class="home-cards">
                {nav_entries()
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <A href=format!("/{}", entry.path)>
                                <div class="home-card">
                                    <div class="home-card__icon">{icon(entry.icon)}</div>
                                    <div class="home-card__title">{entry.label}</div>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
