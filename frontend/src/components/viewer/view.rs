//! View rendering for the viewer component.
//!
//! Three stacked cards: the upload form with its banners, the column panel
//! (only once columns are known), and the table with its pagination strip.

use common::model::column::ColumnMetadata;
use common::model::upload::Record;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{cell_content, CellContent};
use super::messages::Msg;
use super::pagination::{PageButton, Pager};
use super::state::ViewerComponent;

pub fn view(component: &ViewerComponent, ctx: &Context<ViewerComponent>) -> Html {
    let link = ctx.link();
    let table = &component.table;

    html! {
        <div class="viewer-root">
            <header class="viewer-header">
                <h1>{"Parquet File Viewer"}</h1>
            </header>
            { build_upload_card(component, link) }
            {
                if table.columns.is_empty() {
                    html! {}
                } else {
                    build_column_panel(component, link)
                }
            }
            { build_table_card(component, link) }
        </div>
    }
}

fn build_upload_card(component: &ViewerComponent, link: &Scope<ViewerComponent>) -> Html {
    let table = &component.table;
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChanged(input.files().and_then(|files| files.get(0)))
    });
    let disabled = table.loading || component.file.is_none();

    html! {
        <div class="card">
            <h2>{"Upload Parquet File"}</h2>
            <input type="file" accept=".parquet" class="file-input" {onchange} />
            <button
                class="submit-btn"
                {disabled}
                onclick={link.callback(|_| Msg::Submit)}
            >
                {
                    if table.loading {
                        html! { <span class="spinner" aria-label="Loading" /> }
                    } else {
                        html! { {"View Data"} }
                    }
                }
            </button>
            {
                match &table.info {
                    Some(info) => html! { <p class="banner banner-info">{ format!("Info: {}", info) }</p> },
                    None => html! {},
                }
            }
            {
                match &table.error {
                    Some(error) => html! { <p class="banner banner-error">{ format!("Error: {}", error) }</p> },
                    None => html! {},
                }
            }
        </div>
    }
}

fn build_column_panel(component: &ViewerComponent, link: &Scope<ViewerComponent>) -> Html {
    let table = &component.table;

    html! {
        <div class="card">
            <div class="panel-header">
                <h3>{"Column Visibility & Info"}</h3>
                <div class="panel-actions">
                    <button class="btn btn-select" onclick={link.callback(|_| Msg::SelectAllColumns)}>
                        {"Select All"}
                    </button>
                    <button class="btn btn-deselect" onclick={link.callback(|_| Msg::DeselectAllColumns)}>
                        {"Deselect All"}
                    </button>
                </div>
            </div>
            <div class="column-grid">
                { for table.columns.iter().map(|column| column_toggle(column, table.visibility.is_visible(&column.name), link)) }
            </div>
        </div>
    }
}

fn column_toggle(column: &ColumnMetadata, checked: bool, link: &Scope<ViewerComponent>) -> Html {
    let id = format!("col-{}", column.name);
    let name = column.name.clone();
    let onchange = link.callback(move |_: Event| Msg::ToggleColumn(name.clone()));
    let title = format!("{} ({})", column.name, column.column_type);

    html! {
        <div class="column-toggle" key={column.name.clone()}>
            <input type="checkbox" id={id.clone()} {checked} {onchange} />
            <label for={id} {title}>
                { column.name.clone() }
                <span class="column-type">{ format!(" ({})", column.column_type) }</span>
            </label>
        </div>
    }
}

fn build_table_card(component: &ViewerComponent, link: &Scope<ViewerComponent>) -> Html {
    let table = &component.table;
    if table.rows.is_empty() {
        return html! {};
    }

    let headers = table.displayed_columns();
    if headers.is_empty() {
        return html! {
            <div class="card">
                <p class="hint">
                    {"All columns are hidden. Please select columns to display from the 'Column Visibility & Info' panel above."}
                </p>
            </div>
        };
    }

    let pager = table.pager();
    let rows = table.current_rows();
    let spacer_style = if component.table_scroll_width > 0 {
        format!("height: 1px; width: {}px;", component.table_scroll_width)
    } else {
        "height: 1px; width: 100%;".to_string()
    };

    html! {
        <div class="card table-card">
            <h2>{"File Content"}</h2>
            <div
                class="top-scroll"
                ref={component.top_scroll_ref.clone()}
                onscroll={link.callback(|_: Event| Msg::TopScrolled)}
            >
                <div style={spacer_style} />
            </div>
            <div
                class="table-wrapper"
                ref={component.table_wrapper_ref.clone()}
                onscroll={link.callback(|_: Event| Msg::TableScrolled)}
            >
                <table>
                    <thead>
                        <tr>
                            { for headers.iter().map(|h| html! { <th key={h.name.clone()}>{ h.name.clone() }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().enumerate().map(|(index, row)| table_row(index, row, &headers)) }
                    </tbody>
                </table>
            </div>
            {
                if pager.page_count() > 1 {
                    build_pagination(&pager, link)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn table_row(index: usize, row: &Record, headers: &[&ColumnMetadata]) -> Html {
    let class = if index % 2 == 0 { "row-even" } else { "row-odd" };

    html! {
        <tr {class}>
            {
                for headers.iter().map(|header| {
                    let content = match cell_content(row.get(&header.name)) {
                        CellContent::Placeholder => html! { <span class="null-cell">{"null"}</span> },
                        CellContent::Text(text) => html! { { text } },
                        CellContent::Structure(json) => html! { { json } },
                    };
                    html! { <td class="cell">{ content }</td> }
                })
            }
        </tr>
    }
}

fn build_pagination(pager: &Pager, link: &Scope<ViewerComponent>) -> Html {
    let current = pager.current();

    html! {
        <div class="pagination">
            <button
                class="nav-btn"
                disabled={!pager.has_previous()}
                onclick={link.callback(|_| Msg::PreviousPage)}
            >
                {"Previous"}
            </button>
            <div class="page-buttons">
                {
                    for pager.buttons().into_iter().enumerate().map(|(slot, button)| match button {
                        PageButton::Page(page) => html! {
                            <button
                                key={format!("page-{}", page)}
                                class={classes!("page-btn", (page == current).then_some("active"))}
                                onclick={link.callback(move |_| Msg::GoToPage(page))}
                            >
                                { page.to_string() }
                            </button>
                        },
                        PageButton::Ellipsis => html! {
                            <span key={format!("ellipsis-{}", slot)} class="page-ellipsis">{"..."}</span>
                        },
                    })
                }
            </div>
            <button
                class="nav-btn"
                disabled={!pager.has_next()}
                onclick={link.callback(|_| Msg::NextPage)}
            >
                {"Next"}
            </button>
        </div>
    }
}
