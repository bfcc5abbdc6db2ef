//! Page Header Component
//!
//! Title of the active menu entry and the profile stub.

use leptos::prelude::*;

use crate::store::{use_admin_store, AdminStateStoreFields};

#[component]
pub fn PageHeader() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <header class="page-header">
            <div>
                <h1>{move || store.active_menu().get().label()}</h1>
                <p class="muted">"Welcome back, Admin"</p>
            </div>
            <div class="profile">
                <span class="muted">"Profile"</span>
                <div class="avatar"></div>
            </div>
        </header>
    }
}
