//! Logo Component
//!
//! The company logo drawn from the embedded `Logo.svg`.

use gpui::{App, IntoElement, RenderOnce, Styled, Window, div, img, prelude::*};

use crate::assets::LOGO_ASSET;
use crate::domain::{Border, Dimension};

/// Company logo with a configurable box
#[derive(IntoElement)]
pub struct Logo {
    width: Dimension,
    height: Dimension,
    border: Border,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            width: Dimension::Px(100.0),
            height: Dimension::Auto,
            border: Border::none(),
        }
    }
}

impl Logo {
    /// 100px wide, auto height, no border
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

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn dimensions(&self) -> (Dimension, Dimension) {
        (self.width, self.height)
    }

    pub fn border_style(&self) -> Border {
        self.border
    }
}

/// Nearest border width GPUI has a shorthand for
fn border_step(width: f32) -> u8 {
    match width {
        w if w <= 0.0 => 0,
        w if w < 1.5 => 1,
        w if w < 3.0 => 2,
        w if w < 6.0 => 4,
        _ => 8,
    }
}

impl RenderOnce for Logo {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let frame = div().w(self.width).h(self.height);

        let frame = match border_step(self.border.width) {
            0 => frame,
            1 => frame.border_1(),
            2 => frame.border_2(),
            4 => frame.border_4(),
            _ => frame.border_8(),
        }
        .border_color(self.border.color);

        let image = img(LOGO_ASSET)
            .when(!self.width.is_auto(), |this| this.w_full())
            .when(!self.height.is_auto(), |this| this.h_full());

        frame.child(image)
    }
}
