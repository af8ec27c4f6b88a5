//! Painting the canvas with egui.

use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Rounding, Stroke};

use crate::Particle;
use crate::controls::{Controls, Shape};

pub const GLYPH_SIZE: f32 = 12.0;
pub const DOT_RADIUS: f32 = 3.0;
pub const TITLE: &str = "Vortext";
pub const TITLE_SIZE: f32 = 48.0;

/// How one particle is painted this frame.
#[derive(Clone, Copy, Debug)]
pub struct GlyphStyle {
    pub shape: Shape,
    pub fill: Color32,
}

impl GlyphStyle {
    pub fn from_controls(controls: &Controls) -> Self {
        let [r, g, b] = controls.color.0;
        Self {
            shape: controls.shape,
            fill: Color32::from_rgb(r, g, b),
        }
    }
}

/// Canvas-space particle position to screen space.
pub fn to_screen(origin: Pos2, particle: &Particle) -> Pos2 {
    egui::pos2(origin.x + particle.position.x, origin.y + particle.position.y)
}

pub fn clear(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, Rounding::none(), Color32::BLACK);
}

pub fn draw_particle(painter: &Painter, origin: Pos2, particle: &Particle, style: GlyphStyle) {
    let pos = to_screen(origin, particle);
    match style.shape {
        // anchored at the baseline like canvas text
        Shape::Text => {
            painter.text(
                pos,
                Align2::LEFT_BOTTOM,
                particle.glyph,
                FontId::proportional(GLYPH_SIZE),
                style.fill,
            );
        }
        Shape::Circle => painter.circle_filled(pos, DOT_RADIUS, style.fill),
        Shape::Square => painter.rect_filled(
            Rect::from_center_size(pos, egui::vec2(DOT_RADIUS * 2.0, DOT_RADIUS * 2.0)),
            Rounding::none(),
            style.fill,
        ),
    }
}

/// Title card over the middle of the canvas.
pub fn draw_title(painter: &Painter, rect: Rect) {
    let font = FontId::monospace(TITLE_SIZE);
    let galley = painter.layout_no_wrap(TITLE.to_owned(), font.clone(), Color32::WHITE);
    let center = rect.center();
    let card = Rect::from_center_size(center, galley.size()).expand(10.0);

    painter.rect(
        card,
        Rounding::same(5.0),
        Color32::from_black_alpha(128),
        Stroke::NONE,
    );
    painter.text(
        center + egui::vec2(2.0, 2.0),
        Align2::CENTER_CENTER,
        TITLE,
        font.clone(),
        Color32::from_black_alpha(128),
    );
    painter.text(center, Align2::CENTER_CENTER, TITLE, font, Color32::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::Rgb;
    use crate::{Class, Particle};
    use cgmath::Vector2;

    #[test]
    fn style_follows_selected_color_and_shape() {
        let controls = Controls {
            color: Rgb([12, 34, 56]),
            shape: Shape::Square,
            ..Controls::default()
        };
        let style = GlyphStyle::from_controls(&controls);
        assert_eq!(style.fill, Color32::from_rgb(12, 34, 56));
        assert_eq!(style.shape, Shape::Square);
    }

    #[test]
    fn default_style_is_white_text() {
        let style = GlyphStyle::from_controls(&Controls::default());
        assert_eq!(style.fill, Color32::WHITE);
        assert_eq!(style.shape, Shape::Text);
    }

    #[test]
    fn screen_position_is_offset_by_canvas_origin() {
        let p = Particle::from_parts(
            Class::Orderly,
            100.0,
            0.0,
            0.0,
            0.01,
            0.01,
            'Q',
            Vector2::new(200.0, 150.0),
        );
        let pos = to_screen(egui::pos2(10.0, 20.0), &p);
        assert_eq!(pos, egui::pos2(310.0, 170.0));
    }
}
