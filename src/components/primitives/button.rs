//! Button Component

use gpui::{
    AnyElement, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::primitives::icon::NamedIcon;
use crate::domain::Dimension;
use crate::theme::colors::BordadosColors;
use crate::theme::typography::Typography;

/// Size of the leading icon
pub const BUTTON_ICON_SIZE: f32 = 20.0;

/// A primary button with a leading icon and optional content
///
/// `width` and `height` are accepted and kept, but the button always sizes
/// to its content.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    icon: SharedString,
    width: Option<Dimension>,
    height: Option<Dimension>,
    children: Vec<AnyElement>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button showing `icon`
    pub fn new(id: impl Into<ElementId>, icon: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            width: None,
            height: None,
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Requested width (not applied)
    pub fn width(mut self, width: Dimension) -> Self {
        self.width = Some(width);
        self
    }

    /// Requested height (not applied)
    pub fn height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn icon(&self) -> &SharedString {
        &self.icon
    }

    pub fn requested_width(&self) -> Option<Dimension> {
        self.width
    }

    pub fn requested_height(&self) -> Option<Dimension> {
        self.height
    }
}

impl ParentElement for Button {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .px(px(12.0))
            .py(px(6.0))
            .rounded_md()
            .bg(BordadosColors::primary())
            .text_color(BordadosColors::light())
            .text_size(px(Typography::TEXT_2XL))
            .cursor_pointer()
            .hover(|s| s.bg(BordadosColors::primary_hover()))
            .active(|s| s.bg(BordadosColors::primary_active()).mt(px(1.0)))
            .child(
                NamedIcon::new(self.icon)
                    .size(BUTTON_ICON_SIZE)
                    .color(BordadosColors::light()),
            )
            .children(self.children);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
