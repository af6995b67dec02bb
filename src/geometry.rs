//! Sizes the journey column is laid out with.
//!
//! The view and the layout estimate both read these so the estimated stop
//! tops line up with what is drawn.

use crate::config::AppConfig;
use journey_core::LayoutModel;

pub(crate) const CONTENT_PADDING_PX: f32 = 24.0;
pub(crate) const HEADER_HEIGHT_PX: f32 = 160.0;
pub(crate) const STOP_SPACING_PX: f32 = 48.0;
pub(crate) const STOP_PADDING_PX: f32 = 20.0;
pub(crate) const FOOTER_HEIGHT_PX: f32 = 320.0;
pub(crate) const TITLE_SCALE: f32 = 1.4;
pub(crate) const LABEL_SCALE: f32 = 0.8;
/// Rough advance width of one glyph relative to the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.55;

pub(crate) fn layout_model(config: &AppConfig, window_width: f32) -> LayoutModel {
    let font_size = config.font_size.max(8) as f32;
    let line_height = font_size * config.line_spacing.max(1.0);
    let column_width = (window_width - config.hud_width - CONTENT_PADDING_PX * 2.0
        - STOP_PADDING_PX * 2.0)
        .max(font_size * 8.0);
    let chars_per_line = (column_width / (font_size * GLYPH_WIDTH_RATIO)).floor() as usize;

    LayoutModel {
        header_height: CONTENT_PADDING_PX + HEADER_HEIGHT_PX + STOP_SPACING_PX,
        stop_spacing: STOP_SPACING_PX,
        stop_padding: STOP_PADDING_PX,
        title_height: line_height * TITLE_SCALE,
        label_height: line_height * LABEL_SCALE,
        line_height,
        chars_per_line: chars_per_line.max(8),
        footer_height: STOP_SPACING_PX + FOOTER_HEIGHT_PX + CONTENT_PADDING_PX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_windows_fit_more_characters() {
        let config = AppConfig::default();
        let narrow = layout_model(&config, 700.0);
        let wide = layout_model(&config, 1600.0);
        assert!(wide.chars_per_line > narrow.chars_per_line);
        assert_eq!(narrow.line_height, wide.line_height);
    }

    #[test]
    fn tiny_windows_stay_sane() {
        let model = layout_model(&AppConfig::default(), 10.0);
        assert!(model.chars_per_line >= 8);
        assert!(model.line_height > 0.0);
    }
}
