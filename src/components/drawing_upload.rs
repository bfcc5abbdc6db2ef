//! Drawing Upload Component
//!
//! PDF picker with the derived drawing number, and the upload button.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::actions::{self, DRAWING_UPLOADED_NOTICE};
use crate::context::use_admin_context;
use crate::models::PdfFile;
use crate::notice;
use crate::store::{
    store_drawing_uploaded, store_file_selected, use_admin_store, AdminStateStoreFields, Operation,
};

/// Read the picked file fully into memory
async fn read_pdf(file: web_sys::File) -> Result<PdfFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(PdfFile { name: file.name(), bytes })
}

#[component]
pub fn DrawingUpload() -> impl IntoView {
    let store = use_admin_store();
    let ctx = use_admin_context();
    let file_input = NodeRef::<html::Input>::new();

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match read_pdf(file).await {
                Ok(pdf) => {
                    notice::log("UPLOAD", &format!("Selected {} ({} bytes)", pdf.name, pdf.bytes.len()));
                    store_file_selected(&store, pdf);
                }
                Err(e) => notice::log_error("UPLOAD", &format!("Could not read file: {}", e)),
            }
        });
    };

    let on_upload = move |_: web_sys::MouseEvent| {
        if !store.in_flight().write().try_begin(Operation::UploadDrawing) {
            return;
        }
        let file = store.selected_file().get_untracked();
        let drawing_no = store.drawing_no().get_untracked();
        let api = ctx.api();

        spawn_local(async move {
            let result = actions::upload_drawing(&api, file.as_ref(), &drawing_no).await;
            store.in_flight().write().finish(Operation::UploadDrawing);
            match result {
                Ok(drawing) => {
                    notice::log("UPLOAD", &format!("Uploaded {} as {}", drawing.drawing_no, drawing.id));
                    store_drawing_uploaded(&store, drawing);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    notice::alert(DRAWING_UPLOADED_NOTICE);
                }
                Err(err) => notice::report("UPLOAD", &err),
            }
        });
    };

    let uploading = move || store.in_flight().get().is_running(Operation::UploadDrawing);

    view! {
        <section class="card upload-section">
            <h2>"Drawing Upload"</h2>
            <div class="upload-grid">
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    store.selected_customer().set((!value.is_empty()).then_some(value));
                }>
                    <option value="">"Select Customer"</option>
                    <For
                        each=move || store.customers().get()
                        key=|customer| customer.id.clone()
                        children=move |customer| view! {
                            <option value=customer.id.clone()>{customer.name}</option>
                        }
                    />
                </select>
                <input
                    type="text"
                    class="readonly"
                    placeholder="Drawing No."
                    readonly=true
                    prop:value=move || store.drawing_no().get()
                />
                <input
                    type="file"
                    accept=".pdf"
                    node_ref=file_input
                    on:change=on_file_change
                />
            </div>
            <button class="primary-btn" on:click=on_upload disabled=uploading>
                <span>"📤"</span>
                " Upload"
            </button>
        </section>
    }
}
