//! SelectField Component
//!
//! A searchable select of [`OptionItem`]s, each drawn as icon + label, on top
//! of gpui-component's `Select`.

use gpui::{
    AnyElement, App, Context, Div, Entity, EventEmitter, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Window, div, prelude::*,
};
use gpui_component::h_flex;
use gpui_component::select::{SearchableVec, Select, SelectEvent, SelectItem, SelectState};

use crate::components::primitives::icon::NamedIcon;
use crate::domain::{Dimension, OptionItem};
use crate::i18n::{Locale, t};
use crate::states::current_locale;

/// Icon size inside option rows
pub const OPTION_ICON_SIZE: f32 = 18.0;

type OptionState = SelectState<SearchableVec<OptionItem>>;

fn option_row(item: &OptionItem) -> Div {
    h_flex()
        .items_center()
        .gap_2()
        .child(NamedIcon::new(item.icon.clone()).size(OPTION_ICON_SIZE))
        .child(item.label.clone())
}

impl SelectItem for OptionItem {
    type Value = u32;

    fn title(&self) -> SharedString {
        self.label.clone()
    }

    fn display_title(&self) -> Option<AnyElement> {
        Some(option_row(self).into_any_element())
    }

    fn render(&self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        option_row(self)
    }

    fn value(&self) -> &Self::Value {
        &self.value
    }
}

/// First option carrying `value`
pub fn find_option(options: &[OptionItem], value: u32) -> Option<&OptionItem> {
    options.iter().find(|o| o.value == value)
}

/// SelectField options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectFieldOptions {
    /// Width of the outer container, `auto` by default
    pub width: Dimension,
    /// Value of the initially selected option
    pub value: Option<u32>,
    /// Falls back to a localized "select an option" text
    pub placeholder: Option<SharedString>,
}

impl SelectFieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    pub fn value(mut self, value: u32) -> Self {
        self.value = Some(value);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// The placeholder to show for `locale`
    pub fn placeholder_or_default(&self, locale: Locale) -> SharedString {
        self.placeholder
            .clone()
            .unwrap_or_else(|| t(locale, "select-placeholder"))
    }
}

/// Events emitted by [`SelectField`]
#[derive(Debug, Clone, PartialEq)]
pub enum SelectFieldEvent {
    /// An option was chosen
    Change(OptionItem),
}

/// A searchable select of icon + label options
pub struct SelectField {
    options: Vec<OptionItem>,
    width: Dimension,
    placeholder: SharedString,
    search_placeholder: SharedString,
    empty_label: SharedString,
    state: Entity<OptionState>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<SelectFieldEvent> for SelectField {}

impl SelectField {
    /// Create a new select field
    pub fn new(
        options: Vec<OptionItem>,
        settings: SelectFieldOptions,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let locale = current_locale(cx);

        let items = SearchableVec::new(options.clone());
        let initial = settings.value;
        let state = cx.new(|cx| {
            let mut state = SelectState::new(items, None, window, cx).searchable(true);
            if let Some(value) = initial {
                state.set_selected_value(&value, window, cx);
            }
            state
        });

        let subscription = cx.subscribe(
            &state,
            |this, _, event: &SelectEvent<SearchableVec<OptionItem>>, cx| {
                let SelectEvent::Confirm(value) = event;
                let Some(item) = value.and_then(|v| find_option(&this.options, v)).cloned() else {
                    return;
                };
                cx.emit(SelectFieldEvent::Change(item));
            },
        );

        Self {
            options,
            width: settings.width,
            placeholder: settings.placeholder_or_default(locale),
            search_placeholder: t(locale, "select-search-placeholder"),
            empty_label: t(locale, "select-no-options"),
            state,
            _subscriptions: vec![subscription],
        }
    }

    /// Currently selected option
    pub fn selected(&self, cx: &App) -> Option<&OptionItem> {
        let value = *self.state.read(cx).selected_value()?;
        find_option(&self.options, value)
    }

    pub fn select_state(&self) -> &Entity<OptionState> {
        &self.state
    }
}

impl Render for SelectField {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div().w(self.width).child(
            Select::new(&self.state)
                .placeholder(self.placeholder.clone())
                .search_placeholder(self.search_placeholder.clone())
                .empty(div().px_3().py_2().child(self.empty_label.clone())),
        )
    }
}
