//! Drawing Admin App
//!
//! Root component: sidebar plus the customer, upload and search sections.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::AdminApi;
use crate::components::{CustomerSection, DrawingSearch, DrawingUpload, PageHeader, Sidebar};
use crate::config::ApiConfig;
use crate::context::{AdminContext, use_admin_context};
use crate::notice;
use crate::store::{
    store_customers_loaded, store_drawings_loaded, AdminState, AdminStateStoreFields, AdminStore, Menu,
};

/// Initial loads. The two requests are independent; a failure only logs and
/// leaves that list empty.
fn load_lists(store: AdminStore) {
    let ctx = use_admin_context();

    let api = ctx.api();
    spawn_local(async move {
        match api.list_customers().await {
            Ok(loaded) => {
                notice::log("APP", &format!("Loaded {} customers", loaded.len()));
                store_customers_loaded(&store, loaded);
            }
            Err(e) => notice::log_error("APP", &format!("Error fetching customers: {}", e)),
        }
    });

    let api = ctx.api();
    spawn_local(async move {
        match api.list_drawings().await {
            Ok(loaded) => {
                notice::log("APP", &format!("Loaded {} drawings", loaded.len()));
                store_drawings_loaded(&store, loaded);
            }
            Err(e) => notice::log_error("APP", &format!("Error fetching drawings: {}", e)),
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let store: AdminStore = Store::new(AdminState::new());
    provide_context(store);
    provide_context(AdminContext::new(ApiConfig::default()));

    load_lists(store);

    // Sections stay mounted and are only hidden, so the file input keeps
    // matching the stored selection across menu changes
    let hidden = move |section: Menu| !store.active_menu().get().shows(section);

    view! {
        <div class="admin-layout">
            <Sidebar />
            <main class="main-content">
                <PageHeader />
                <div class:hidden=move || hidden(Menu::Customers)>
                    <CustomerSection />
                </div>
                <div class:hidden=move || hidden(Menu::Drawings)>
                    <DrawingUpload />
                </div>
                <div class:hidden=move || hidden(Menu::Search)>
                    <DrawingSearch />
                </div>
            </main>
        </div>
    }
}
