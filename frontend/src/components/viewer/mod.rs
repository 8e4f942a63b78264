//! Parquet viewer: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export the component and its message type.
//! - Delegate to `update::update` and `view::view`.
//! - After each render, measure the table so the scrollbar above it matches
//!   its scroll width.

use web_sys::Element;
use yew::prelude::*;

mod helpers;
mod messages;
mod pagination;
mod state;
mod update;
mod view;
mod visibility;

pub use messages::Msg;
pub use state::ViewerComponent;

impl Component for ViewerComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ViewerComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Some(wrapper) = self.table_wrapper_ref.cast::<Element>() {
            let width = wrapper.scroll_width();
            if width != self.table_scroll_width {
                ctx.link().send_message(Msg::TableMeasured(width));
            }
        }
    }
}
