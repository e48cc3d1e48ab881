//! Typography - Font Sizes and Spacing

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_2XL: f32 = 24.0;
}

/// Spacing scale used by the `p-*` and `gap-*` utilities (steps 0..=5)
pub const SPACING_SCALE: [f32; 6] = [0.0, 4.0, 8.0, 16.0, 24.0, 48.0];

/// Max width of the `container-lg` utility
pub const CONTAINER_LG_MAX_WIDTH: f32 = 960.0;

/// Text field look
pub struct FieldStyle;

impl FieldStyle {
    pub const PADDING_X: f32 = 12.0;
    pub const PADDING_Y: f32 = 6.0;
    pub const RADIUS: f32 = 6.0;
    pub const FONT_SIZE: f32 = Typography::TEXT_BASE;
}

/// Spacing step in pixels, clamped to the largest step
pub fn spacing(step: u8) -> f32 {
    SPACING_SCALE[usize::from(step).min(SPACING_SCALE.len() - 1)]
}
