//! ContainerAside Component
//!
//! A styled box used as a layout slot.

use gpui::{AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*};

use crate::domain::Dimension;
use crate::theme::utility::{ClassList, ShadowSize, Tone};

/// Generic aside container
#[derive(IntoElement, Default)]
pub struct ContainerAside {
    width: Dimension,
    height: Dimension,
    background: Option<Tone>,
    shadow: Option<ShadowSize>,
    class_name: Option<SharedString>,
    children: Vec<AnyElement>,
}

impl ContainerAside {
    /// Auto sized, no modifiers
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    /// Background tone, added as `bg-<tone>`
    pub fn background(mut self, tone: Tone) -> Self {
        self.background = Some(tone);
        self
    }

    pub fn shadow(mut self, shadow: ShadowSize) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Extra utility classes, space separated
    pub fn class_name(mut self, class_name: impl Into<SharedString>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn dimensions(&self) -> (Dimension, Dimension) {
        (self.width, self.height)
    }

    /// Background, shadow, then caller classes
    pub fn class_list(&self) -> ClassList {
        let mut classes = ClassList::new();
        classes.push_opt(self.background.map(Tone::background_class));
        classes.push_opt(self.shadow.map(ShadowSize::class));
        classes.push_opt(self.class_name.as_ref());
        classes
    }
}

impl ParentElement for ContainerAside {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for ContainerAside {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let classes = self.class_list();
        let aside = div().w(self.width).h(self.height);
        classes.apply(aside).children(self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_auto_without_classes() {
        let aside = ContainerAside::new();
        assert_eq!(aside.dimensions(), (Dimension::Auto, Dimension::Auto));
        assert!(aside.class_list().is_empty());
        assert_eq!(aside.class_list().to_string(), "");
    }

    #[test]
    fn class_name_alone_is_the_only_token() {
        let aside = ContainerAside::new().class_name("col-3");
        assert_eq!(aside.class_list().to_string(), "col-3");
    }

    #[test]
    fn classes_keep_background_shadow_caller_order() {
        let aside = ContainerAside::new()
            .class_name("p-3 d-flex")
            .shadow(ShadowSize::Md)
            .background(Tone::Light);
        assert_eq!(aside.class_list().to_string(), "bg-light shadow-md p-3 d-flex");
    }

    #[test]
    fn explicit_size_is_kept() {
        let aside = ContainerAside::new()
            .width(Dimension::FULL)
            .height(Dimension::Px(200.0));
        assert_eq!(aside.dimensions(), (Dimension::Percent(100.0), Dimension::Px(200.0)));
    }
}
