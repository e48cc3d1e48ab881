//! TextField Component
//!
//! Single-line text input that reports every edit as a [`TextFieldEvent`].

use gpui::{
    App, Context, Div, Entity, EventEmitter, IntoElement, ParentElement, Render, SharedString,
    Styled, Subscription, Window, div, prelude::*, px,
};
use gpui_component::input::{Input, InputEvent, InputState};

use crate::domain::{Dimension, TextAlign};
use crate::theme::colors::BordadosColors;
use crate::theme::typography::FieldStyle;

/// TextField options
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldOptions {
    /// Defaults to `100%`
    pub width: Dimension,
    /// Accepted but not applied: the input always draws its text from the left
    pub align: TextAlign,
    pub placeholder: SharedString,
}

impl Default for TextFieldOptions {
    fn default() -> Self {
        Self {
            width: Dimension::FULL,
            align: TextAlign::Left,
            placeholder: SharedString::default(),
        }
    }
}

impl TextFieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// Events emitted by [`TextField`]
#[derive(Debug, Clone, PartialEq)]
pub enum TextFieldEvent {
    /// The text changed; carries the full current value
    Change(SharedString),
}

impl TextFieldEvent {
    /// Map an input event to a field event; only edits are forwarded
    pub fn from_input(event: &InputEvent, value: &str) -> Option<Self> {
        match event {
            InputEvent::Change => Some(TextFieldEvent::Change(value.to_string().into())),
            _ => None,
        }
    }
}

/// A single-line text input
pub struct TextField {
    options: TextFieldOptions,
    state: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<TextFieldEvent> for TextField {}

impl TextField {
    /// Create a new text field
    pub fn new(options: TextFieldOptions, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let placeholder = options.placeholder.clone();
        let state = cx.new(|cx| InputState::new(window, cx).placeholder(placeholder));

        let subscription = cx.subscribe_in(&state, window, {
            move |_this, state, ev: &InputEvent, _window, cx| {
                let value = state.read(cx).value();
                if let Some(event) = TextFieldEvent::from_input(ev, &value) {
                    cx.emit(event);
                }
            }
        });

        Self {
            options,
            state,
            _subscriptions: vec![subscription],
        }
    }

    /// Get the current text
    pub fn value(&self, cx: &App) -> SharedString {
        self.state.read(cx).value()
    }

    pub fn options(&self) -> &TextFieldOptions {
        &self.options
    }
}

/// Bordered, padded box around the input
fn field_frame(width: Dimension) -> Div {
    div()
        .w(width)
        .px(px(FieldStyle::PADDING_X))
        .py(px(FieldStyle::PADDING_Y))
        .border_1()
        .border_color(BordadosColors::input_border())
        .rounded(px(FieldStyle::RADIUS))
        .bg(BordadosColors::input_bg())
        .text_color(BordadosColors::text_primary())
        .text_size(px(FieldStyle::FONT_SIZE))
}

impl Render for TextField {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        field_frame(self.options.width).child(Input::new(&self.state).appearance(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_width_and_align_left() {
        let options = TextFieldOptions::default();
        assert_eq!(options.width, Dimension::FULL);
        assert_eq!(options.align, TextAlign::Left);
        assert!(options.placeholder.is_empty());
    }

    #[test]
    fn builder_overrides_defaults() {
        let options = TextFieldOptions::new()
            .align(TextAlign::Center)
            .width(Dimension::Px(450.0))
            .placeholder("Buscar un bordado...");
        assert_eq!(options.align, TextAlign::Center);
        assert_eq!(options.width, Dimension::Px(450.0));
        assert_eq!(options.placeholder.to_string(), "Buscar un bordado...");
    }

    #[test]
    fn frame_is_padded_and_bordered() {
        let mut frame = field_frame(Dimension::FULL);
        let style = frame.style();
        assert_eq!(style.padding.left, Some(px(FieldStyle::PADDING_X).into()));
        assert_eq!(style.padding.top, Some(px(FieldStyle::PADDING_Y).into()));
        assert_eq!(style.border_widths.bottom, Some(px(1.0).into()));
    }

    #[test]
    fn alignment_is_recorded_but_not_styled() {
        let options = TextFieldOptions::new().align(TextAlign::Center);
        assert_eq!(options.align, TextAlign::Center);

        let mut frame = field_frame(options.width);
        assert_eq!(frame.text_style().as_ref().and_then(|t| t.text_align), None);
    }

    #[test]
    fn each_change_event_forwards_the_value() {
        let events: Vec<_> = ["b", "bo", "bor"]
            .into_iter()
            .filter_map(|value| TextFieldEvent::from_input(&InputEvent::Change, value))
            .collect();

        assert_eq!(
            events,
            vec![
                TextFieldEvent::Change("b".into()),
                TextFieldEvent::Change("bo".into()),
                TextFieldEvent::Change("bor".into()),
            ]
        );
    }

    #[test]
    fn focus_and_blur_are_not_forwarded() {
        assert_eq!(TextFieldEvent::from_input(&InputEvent::Focus, "x"), None);
        assert_eq!(TextFieldEvent::from_input(&InputEvent::Blur, "x"), None);
        assert_eq!(
            TextFieldEvent::from_input(&InputEvent::PressEnter { secondary: false }, "x"),
            None
        );
    }
}
