//! AsideLeft Component
//!
//! The left aside region of the catalog page.

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Window, prelude::*};

use crate::components::layout::container_aside::ContainerAside;
use crate::states::i18n;

/// Left aside region with placeholder content
#[derive(IntoElement, Default)]
pub struct AsideLeft {
    class_name: Option<SharedString>,
}

impl AsideLeft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Utility classes forwarded to the container
    pub fn class_name(mut self, class_name: impl Into<SharedString>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    fn container(&self) -> ContainerAside {
        match &self.class_name {
            Some(class_name) => ContainerAside::new().class_name(class_name.clone()),
            None => ContainerAside::new(),
        }
    }
}

impl RenderOnce for AsideLeft {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        self.container().child(i18n(cx, "aside-placeholder"))
    }
}
