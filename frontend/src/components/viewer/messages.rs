//! Messages handled by the viewer's update function.

use common::model::upload::UploadResponse;

pub enum Msg {
    FileChanged(Option<web_sys::File>),
    Submit,
    Loaded(UploadResponse),
    Failed(String),
    ToggleColumn(String),
    SelectAllColumns,
    DeselectAllColumns,
    NextPage,
    PreviousPage,
    GoToPage(usize),
    TableScrolled,
    TopScrolled,
    TableMeasured(i32),
}
