//! Customer Management Component
//!
//! Add-customer form and the list of known customers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_admin_context;
use crate::notice;
use crate::store::{store_customer_added, use_admin_store, AdminStateStoreFields, Operation};

#[component]
pub fn CustomerSection() -> impl IntoView {
    let store = use_admin_store();
    let ctx = use_admin_context();

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !store.in_flight().write().try_begin(Operation::AddCustomer) {
            return;
        }
        let name = store.customer_name().get_untracked();
        let api = ctx.api();

        spawn_local(async move {
            let result = actions::add_customer(&api, &name).await;
            store.in_flight().write().finish(Operation::AddCustomer);
            match result {
                Ok(customer) => {
                    notice::log("CUSTOMERS", &format!("Created customer {}", customer.id));
                    let message = actions::customer_added_notice(&customer);
                    store_customer_added(&store, customer);
                    notice::alert(&message);
                }
                Err(err) => notice::report("CUSTOMERS", &err),
            }
        });
    };

    let adding = move || store.in_flight().get().is_running(Operation::AddCustomer);

    view! {
        <section class="card customer-section">
            <h2>"Customer Management"</h2>
            <form class="customer-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Customer Name"
                    prop:value=move || store.customer_name().get()
                    on:input=move |ev| store.customer_name().set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn" disabled=adding>
                    <span class="plus">"+"</span>
                    " Add"
                </button>
            </form>
            <ul class="customer-list">
                <For
                    each=move || store.customers().get()
                    key=|customer| customer.id.clone()
                    children=move |customer| view! { <li>{customer.name}</li> }
                />
            </ul>
        </section>
    }
}
