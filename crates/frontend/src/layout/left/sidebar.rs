//! Sidebar with one link per resource page

use crate::domain::nav_entries;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__group-label">"Production"</div>
            <ul class="sidebar__items">
                {nav_entries()
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="sidebar__item">
                                <A href=format!("/{}", entry.path)>
                                    {icon(entry.icon)}
                                    <span>{entry.label}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
