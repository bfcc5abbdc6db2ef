//! Sidebar Component
//!
//! Menu that picks which sections the main area shows.

use leptos::prelude::*;

use crate::store::{store_select_menu, use_admin_store, AdminStateStoreFields, Menu};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <aside class="sidebar">
            <div class="sidebar-title">"Admin Panel"</div>
            <nav class="sidebar-nav">
                {Menu::ALL.iter().map(|&menu| {
                    let is_active = move || store.active_menu().get() == menu;
                    view! {
                        <button
                            class=move || if is_active() { "menu-btn active" } else { "menu-btn" }
                            on:click=move |_| store_select_menu(&store, menu)
                        >
                            <span class="menu-icon">{menu.icon()}</span>
                            {menu.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
