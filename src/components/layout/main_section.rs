//! Main Component
//!
//! The content band below the fixed header.

use gpui::{AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*, px};

use crate::domain::Dimension;
use crate::theme::colors::BordadosColors;
use crate::theme::typography::{CONTAINER_LG_MAX_WIDTH, spacing};

/// Main content band
#[derive(IntoElement)]
pub struct Main {
    top: Dimension,
    filter: Option<AnyElement>,
    children: Vec<AnyElement>,
}

impl Default for Main {
    fn default() -> Self {
        Self {
            top: Dimension::Px(0.0),
            filter: None,
            children: Vec::new(),
        }
    }
}

impl Main {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset from the top of the window, usually the header height
    pub fn top(mut self, top: Dimension) -> Self {
        self.top = top;
        self
    }

    /// Filter slot, drawn above the children
    pub fn filter(mut self, filter: impl IntoElement) -> Self {
        self.filter = Some(filter.into_any_element());
        self
    }

    pub fn offset(&self) -> Dimension {
        self.top
    }
}

impl ParentElement for Main {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Main {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .absolute()
            .top(self.top)
            .left_0()
            .right_0()
            .bottom_0()
            .bg(BordadosColors::secondary())
            .p(px(spacing(5)))
            .child(
                div()
                    .w_full()
                    .max_w(px(CONTAINER_LG_MAX_WIDTH))
                    .mx_auto()
                    .flex()
                    .flex_col()
                    .gap(px(spacing(3)))
                    .children(self.filter)
                    .child(div().flex().gap(px(spacing(3))).children(self.children)),
            )
    }
}
