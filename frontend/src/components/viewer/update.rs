//! Update function for the viewer component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`,
//! mutates the state and returns whether the view should re-render. The only
//! side effect with I/O is the upload itself, which runs in `spawn_local` and
//! answers with `Msg::Loaded` or `Msg::Failed`.

use common::model::upload::UploadResponse;
use common::requests::{UPLOAD_FIELD, UPLOAD_PATH};
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, File, FormData};
use yew::prelude::*;

use super::helpers::{describe_failure, js_error};
use super::messages::Msg;
use super::state::ViewerComponent;

pub fn update(component: &mut ViewerComponent, ctx: &Context<ViewerComponent>, msg: Msg) -> bool {
    match msg {
        Msg::FileChanged(file) => {
            component.file = file;
            component.table.reset_selection();
            true
        }
        Msg::Submit => {
            if !component.table.begin_submit(component.file.is_some()) {
                return true;
            }
            if let Some(file) = component.file.clone() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match send_upload(&file).await {
                        Ok(response) => link.send_message(Msg::Loaded(response)),
                        Err(e) => {
                            gloo_console::error!(format!("Upload of {} failed: {}", file.name(), e));
                            link.send_message(Msg::Failed(e));
                        }
                    }
                });
            }
            true
        }
        Msg::Loaded(response) => {
            component.table.finish_loaded(response);
            true
        }
        Msg::Failed(message) => {
            component.table.finish_failed(message);
            true
        }
        Msg::ToggleColumn(name) => {
            component.table.toggle_column(&name);
            true
        }
        Msg::SelectAllColumns => {
            component.table.set_all_columns(true);
            true
        }
        Msg::DeselectAllColumns => {
            component.table.set_all_columns(false);
            true
        }
        Msg::NextPage => {
            component.table.next_page();
            true
        }
        Msg::PreviousPage => {
            component.table.previous_page();
            true
        }
        Msg::GoToPage(page) => {
            component.table.go_to_page(page);
            true
        }
        Msg::TableScrolled => {
            mirror_scroll(&component.table_wrapper_ref, &component.top_scroll_ref);
            false
        }
        Msg::TopScrolled => {
            mirror_scroll(&component.top_scroll_ref, &component.table_wrapper_ref);
            false
        }
        Msg::TableMeasured(width) => {
            if component.table_scroll_width == width {
                return false;
            }
            component.table_scroll_width = width;
            true
        }
    }
}

/// Posts `file` as `multipart/form-data` and decodes the answer.
async fn send_upload(file: &File) -> Result<UploadResponse, String> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(js_error)?;

    let response = Request::post(UPLOAD_PATH)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(describe_failure(
            response.status(),
            &response.status_text(),
            &body,
        ));
    }

    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| format!("Unexpected response from server: {}", e))
}

fn mirror_scroll(from: &NodeRef, to: &NodeRef) {
    if let (Some(from), Some(to)) = (from.cast::<Element>(), to.cast::<Element>()) {
        to.set_scroll_left(from.scroll_left());
    }
}
