//! Bordados Page
//!
//! The catalog page: fixed header over the main band.

use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px,
};

use crate::components::layout::aside_left::AsideLeft;
use crate::components::layout::header::{Header, HeaderOptions};
use crate::components::layout::main_section::Main;
use crate::domain::{Dimension, sort_options};
use crate::states::i18n;
use crate::theme::colors::BordadosColors;
use crate::theme::typography::{Typography, spacing};

/// Classes of the left aside column
const ASIDE_CLASSES: &str = "col-3 bg-light shadow-sm p-3";

/// Header configuration used by the page
pub fn header_options(header_height: Dimension) -> HeaderOptions {
    HeaderOptions::new(sort_options()).height(header_height)
}

/// Catalog page
pub struct BordadosPage {
    header_height: Dimension,
    header: Entity<Header>,
}

impl BordadosPage {
    pub fn new(header_height: Dimension, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(header_options(header_height), window, cx));
        Self {
            header_height,
            header,
        }
    }
}

impl Render for BordadosPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let filter = div()
            .p(px(spacing(3)))
            .rounded_md()
            .bg(BordadosColors::light())
            .text_color(BordadosColors::text_muted())
            .text_size(px(Typography::TEXT_SM))
            .child(i18n(cx, "main-filter"));

        let catalog = div()
            .flex_1()
            .p(px(spacing(3)))
            .rounded_md()
            .bg(BordadosColors::white())
            .text_color(BordadosColors::text_primary())
            .child(i18n(cx, "main-catalog"));

        let main = Main::new()
            .top(self.header_height)
            .filter(filter)
            .child(AsideLeft::new().class_name(ASIDE_CLASSES))
            .child(catalog);

        // Header last so it paints over the band
        div()
            .relative()
            .size_full()
            .bg(BordadosColors::secondary())
            .child(main)
            .child(self.header.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::utility::{ClassList, Utility};

    #[test]
    fn header_gets_the_four_sort_orders() {
        let options = header_options(Dimension::Px(200.0));
        assert_eq!(options.height, Dimension::Px(200.0));

        let entries: Vec<(String, String, u32)> = options
            .select_options
            .iter()
            .map(|o| (o.icon.to_string(), o.label.to_string(), o.value))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("SortAlphaDown".to_string(), "Ascendente".to_string(), 1),
                ("SortAlphaUp".to_string(), "Descendente".to_string(), 2),
                ("CaretUpFill".to_string(), "Ascendente".to_string(), 3),
                ("CaretDownFill".to_string(), "Descendente".to_string(), 4),
            ]
        );
    }

    #[test]
    fn aside_takes_a_quarter_of_the_band() {
        let utilities = ClassList::parse(ASIDE_CLASSES).utilities();
        assert_eq!(utilities.first(), Some(&Utility::Column(3)));
        assert_eq!(utilities.len(), 4);
    }
}
