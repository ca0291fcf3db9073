//! Scoreboard HUD
//!
//! Screen-space readout of the current session:
//! - Score, top-right (rounded to the nearest 10, comma-grouped)
//! - High score, top-center
//! - Level, under the score
//! - Remaining ships as small ship icons, top-left

use crate::stats::GameStats;
use crate::text::{draw_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Configuration for scoreboard appearance
#[derive(Debug, Clone)]
pub struct ScoreboardStyle {
    pub text_color: Color,
    pub text_scale: u32,
    /// Distance from the screen edges
    pub margin: i32,
    /// Size of each remaining-ship icon
    pub ship_icon_size: (u32, u32),
}

impl Default for ScoreboardStyle {
    fn default() -> Self {
        ScoreboardStyle {
            text_color: Color::RGB(30, 30, 30),
            text_scale: 4,
            margin: 20,
            ship_icon_size: (30, 24),
        }
    }
}

/// Rounds to the nearest 10 and groups thousands with commas: 12345 -> "12,350"
pub fn format_score(score: u32) -> String {
    let rounded = score.saturating_add(5) / 10 * 10;
    let digits = rounded.to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Draws score, high score, level and ships left
pub struct Scoreboard {
    screen: Rect,
    style: ScoreboardStyle,
}

impl Scoreboard {
    pub fn new(screen: Rect) -> Self {
        Scoreboard {
            screen,
            style: ScoreboardStyle::default(),
        }
    }

    /// Top-left corner of the score text, right-aligned against the margin
    pub fn score_position(&self, score_text: &str) -> (i32, i32) {
        let width = text_width(score_text, self.style.text_scale) as i32;
        (self.screen.right() - self.style.margin - width, self.style.margin)
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        stats: &GameStats,
        ship_icon: &Texture,
    ) -> Result<(), String> {
        let scale = self.style.text_scale;
        let color = self.style.text_color;
        let line_height = (8 * scale) as i32;

        // Score (top-right)
        let score_text = format_score(stats.score);
        let (score_x, score_y) = self.score_position(&score_text);
        draw_text(canvas, &score_text, score_x, score_y, color, scale)?;

        // High score (top-center)
        let high_text = format_score(stats.high_score);
        let high_x = self.screen.center().x() - text_width(&high_text, scale) as i32 / 2;
        draw_text(canvas, &high_text, high_x, score_y, color, scale)?;

        // Level (under the score)
        let level_text = stats.level.to_string();
        let (level_x, _) = self.score_position(&level_text);
        draw_text(canvas, &level_text, level_x, score_y + line_height + 10, color, scale)?;

        // Ships left (top-left)
        let (icon_w, icon_h) = self.style.ship_icon_size;
        for i in 0..stats.ships_left {
            let icon = Rect::new(
                self.style.margin + (i * (icon_w + 6)) as i32,
                self.style.margin,
                icon_w,
                icon_h,
            );
            canvas.copy(ship_icon, None, Some(icon))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_rounds_to_ten() {
        assert_eq!(format_score(0), "0");
        assert_eq!(format_score(4), "0");
        assert_eq!(format_score(5), "10");
        assert_eq!(format_score(150), "150");
    }

    #[test]
    fn test_format_score_groups_thousands() {
        assert_eq!(format_score(1000), "1,000");
        assert_eq!(format_score(12345), "12,350");
        assert_eq!(format_score(1234567), "1,234,570");
        assert_eq!(format_score(999_995), "1,000,000");
    }

    #[test]
    fn test_score_is_right_aligned() {
        let scoreboard = Scoreboard::new(Rect::new(0, 0, 800, 600));
        // "150" at scale 4 is 72px wide
        assert_eq!(scoreboard.score_position("150"), (800 - 20 - 72, 20));
    }
}
