//! Header Component
//!
//! The fixed top bar: logo, search, sort selector, favorites and upload.

use gpui::{
    Context, Div, Entity, FontWeight, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Window, div, prelude::*, px, relative,
};
use tracing::info;

use crate::assets::BootstrapIcon;
use crate::components::primitives::button::Button;
use crate::components::primitives::logo::Logo;
use crate::components::primitives::select_field::{SelectField, SelectFieldEvent, SelectFieldOptions};
use crate::components::primitives::text_field::{TextField, TextFieldEvent, TextFieldOptions};
use crate::domain::{Dimension, OptionItem, TextAlign};
use crate::states::i18n;
use crate::theme::colors::BordadosColors;
use crate::theme::typography::{Typography, spacing};

/// Width of the middle column holding search and sort
const SEARCH_COLUMN_WIDTH: f32 = 450.0;
/// Width of the "Filtrar por:" label
const FILTER_LABEL_WIDTH: f32 = 150.0;

/// Logo filling the height of the bar
fn header_logo() -> Logo {
    Logo::new().height(Dimension::FULL).width(Dimension::Auto)
}

fn filter_label(text: SharedString) -> Div {
    div()
        .w(px(FILTER_LABEL_WIDTH))
        .flex_none()
        .text_color(BordadosColors::text_primary())
        .text_size(px(Typography::TEXT_XL))
        .font_weight(FontWeight::SEMIBOLD)
        .child(text)
}

/// Header options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderOptions {
    /// Defaults to `auto`
    pub height: Dimension,
    /// Entries of the sort selector
    pub select_options: Vec<OptionItem>,
}

impl HeaderOptions {
    pub fn new(select_options: Vec<OptionItem>) -> Self {
        Self {
            select_options,
            ..Default::default()
        }
    }

    pub fn height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }
}

/// Header component
pub struct Header {
    height: Dimension,
    search: Entity<TextField>,
    sort: Entity<SelectField>,
    search_query: SharedString,
    sort_value: Option<u32>,
    favorites_only: bool,
    _subscriptions: Vec<Subscription>,
}

impl Header {
    pub fn new(options: HeaderOptions, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let search_placeholder = i18n(cx, "header-search-placeholder");
        let search = cx.new(|cx| {
            TextField::new(
                TextFieldOptions::new()
                    .align(TextAlign::Center)
                    .width(Dimension::FULL)
                    .placeholder(search_placeholder),
                window,
                cx,
            )
        });

        let sort_placeholder = i18n(cx, "header-sort-placeholder");
        let select_options = options.select_options;
        let sort = cx.new(|cx| {
            SelectField::new(
                select_options,
                SelectFieldOptions::new().placeholder(sort_placeholder),
                window,
                cx,
            )
        });

        let subscriptions = vec![
            cx.subscribe(&search, |this, _, event: &TextFieldEvent, _cx| {
                let TextFieldEvent::Change(value) = event;
                this.handle_change(value);
            }),
            cx.subscribe(&sort, |this, _, event: &SelectFieldEvent, _cx| {
                let SelectFieldEvent::Change(item) = event;
                this.handle_select_change(item);
            }),
        ];

        Self {
            height: options.height,
            search,
            sort,
            search_query: SharedString::default(),
            sort_value: None,
            favorites_only: false,
            _subscriptions: subscriptions,
        }
    }

    /// Search text changed
    pub fn handle_change(&mut self, value: &SharedString) {
        info!(query = %value, "Search changed");
        self.search_query = value.clone();
    }

    /// Sort order picked
    pub fn handle_select_change(&mut self, item: &OptionItem) {
        info!(value = item.value, label = %item.label, "Sort order changed");
        self.sort_value = Some(item.value);
    }

    /// Last text seen in the search field
    pub fn search_query(&self) -> &SharedString {
        &self.search_query
    }

    /// Value of the last sort option picked
    pub fn sort_value(&self) -> Option<u32> {
        self.sort_value
    }

    fn toggle_favorites(&mut self, cx: &mut Context<Self>) {
        self.favorites_only = !self.favorites_only;
        info!(favorites_only = self.favorites_only, "Favorites filter toggled");
        cx.notify();
    }

    fn handle_upload(&mut self) {
        info!("Upload requested");
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let label = i18n(cx, "header-filter-by");
        let upload_label = i18n(cx, "header-upload");

        let sort_row = div()
            .flex()
            .items_center()
            .gap(px(spacing(2)))
            .child(filter_label(label))
            .child(div().flex_1().child(self.sort.clone()))
            .child(
                Button::new("header-favorites", BootstrapIcon::HeartFill.name())
                    .on_click(cx.listener(|this, _, _window, cx| this.toggle_favorites(cx))),
            );

        div()
            .absolute()
            .top_0()
            .left_0()
            .right_0()
            .h(self.height)
            .flex()
            .items_center()
            .justify_between()
            .px(px(spacing(3)))
            .py(px(spacing(2)))
            .bg(BordadosColors::light())
            .shadow_md()
            // Left: logo
            .child(div().w(relative(0.33)).h_full().child(header_logo()))
            // Middle: search and sort
            .child(
                div()
                    .w(px(SEARCH_COLUMN_WIDTH))
                    .flex()
                    .flex_col()
                    .gap(px(spacing(2)))
                    .child(self.search.clone())
                    .child(sort_row),
            )
            // Right: upload
            .child(
                div().w(relative(0.33)).flex().justify_end().child(
                    Button::new("header-upload", BootstrapIcon::PlusCircleFill.name())
                        .on_click(cx.listener(|this, _, _window, _cx| this.handle_upload()))
                        .child(upload_label),
                ),
            )
    }
}
