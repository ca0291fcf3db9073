//! Play Button Component
//!
//! A labelled rectangle centered on screen. It only reacts to clicks while the
//! game is inactive; the controller decides that, the button just hit-tests.

use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub width: u32,
    pub height: u32,
    pub button_color: Color,
    pub text_color: Color,
    /// Bitmap font scale for the label
    pub text_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            width: 200,
            height: 50,
            button_color: Color::RGB(0, 135, 0),
            text_color: Color::RGB(255, 255, 255),
            text_scale: 4,
        }
    }
}

/// A clickable rectangle with a text label
pub struct Button {
    label: String,
    rect: Rect,
    style: ButtonStyle,
}

impl Button {
    /// Creates a button with default styling, centered on `screen`
    pub fn new(label: &str, screen: Rect) -> Self {
        Self::with_style(label, screen, ButtonStyle::default())
    }

    pub fn with_style(label: &str, screen: Rect, style: ButtonStyle) -> Self {
        let mut rect = Rect::new(0, 0, style.width, style.height);
        rect.center_on(screen.center());
        Button {
            label: label.to_string(),
            rect,
            style,
        }
    }

    #[cfg(test)]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// True if the point lies inside the button
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point((x, y))
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(self.style.button_color);
        canvas.fill_rect(self.rect)?;

        draw_text_centered(
            canvas,
            &self.label,
            self.rect,
            self.style.text_color,
            self.style.text_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_is_centered() {
        let button = Button::new("PLAY", Rect::new(0, 0, 800, 600));

        assert_eq!(button.rect(), Rect::new(300, 275, 200, 50));
    }

    #[test]
    fn test_contains_edges() {
        let button = Button::new("PLAY", Rect::new(0, 0, 800, 600));

        assert!(button.contains(400, 300));
        assert!(button.contains(300, 275)); // top-left is inside
        assert!(!button.contains(500, 300)); // right edge is exclusive
        assert!(!button.contains(10, 10));
    }

    #[test]
    fn test_custom_style() {
        let style = ButtonStyle {
            width: 100,
            height: 20,
            ..Default::default()
        };
        let button = Button::with_style("PLAY", Rect::new(0, 0, 800, 600), style);

        assert_eq!(button.rect(), Rect::new(350, 290, 100, 20));
    }
}
