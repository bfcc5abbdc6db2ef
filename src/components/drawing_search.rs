//! Search & Display Component
//!
//! Drawing table filtered by drawing number.

use leptos::prelude::*;

use crate::context::use_admin_context;
use crate::filter::DrawingView;
use crate::store::{store_clear_search, use_admin_store, AdminStateStoreFields};

#[component]
pub fn DrawingSearch() -> impl IntoView {
    let store = use_admin_store();
    let ctx = use_admin_context();

    // Rows and the "no results" row both come from this one derivation
    let drawing_view = Memo::new(move |_| {
        let term = store.search_term().get();
        store.drawings().with(|drawings| DrawingView::build(drawings, &term))
    });

    view! {
        <section class="card search-section">
            <h2>"Search & Display"</h2>
            <div class="search-row">
                <input
                    type="text"
                    placeholder="Search Drawing No..."
                    prop:value=move || store.search_term().get()
                    on:input=move |ev| store.search_term().set(event_target_value(&ev))
                />
                <button class="clear-btn" on:click=move |_| store_clear_search(&store)>
                    "Clear"
                </button>
            </div>
            <div class="table-wrap">
                <table class="drawing-table">
                    <thead>
                        <tr>
                            <th>"Sr No"</th>
                            <th>"Drawing No"</th>
                            <th>"File"</th>
                            <th>"Uploaded Time"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match drawing_view.get() {
                            DrawingView::NoResults => view! {
                                <tr>
                                    <td colspan="4" class="no-results">"No results found"</td>
                                </tr>
                            }.into_any(),
                            DrawingView::Rows(rows) => rows.into_iter().map(|row| {
                                let href = ctx.file_url(&row.drawing.file_path);
                                let uploaded = row.drawing.uploaded_at_local();
                                view! {
                                    <tr>
                                        <td class="center">{row.index}</td>
                                        <td class="drawing-no">{row.drawing.drawing_no}</td>
                                        <td>
                                            <a href=href target="_blank" rel="noreferrer">"View File"</a>
                                        </td>
                                        <td class="muted">{uploaded}</td>
                                    </tr>
                                }
                            }).collect_view().into_any(),
                        }}
                    </tbody>
                </table>
            </div>
            <p class="item-count">
                {move || format!("{} of {} drawings", drawing_view.get().len(), store.drawings().read().len())}
            </p>
        </section>
    }
}
