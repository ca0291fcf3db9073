//! Alien fleet layout and movement
//!
//! The fleet is a grid of aliens sharing one direction. Layout is a pure
//! function of screen size and alien size; movement happens once per frame:
//!
//! 1. Scan for an alien touching a side edge (stop at the first one)
//! 2. If found, drop every alien and flip the shared direction
//! 3. Drift every alien sideways

use crate::alien::Alien;
use crate::settings::Settings;
use crate::sprite::{remove_indices, Sprite, UpdateContext};
use sdl2::rect::Rect;

/// Top-left corners of a full fleet, row by row.
///
/// The grid starts one alien in from the top-left corner and leaves one alien
/// of gap between neighbours. Rows stop short of the right edge by two alien
/// widths and of the bottom by three alien heights, which keeps room for the
/// ship.
pub fn layout_fleet(
    screen_width: u32,
    screen_height: u32,
    alien_width: u32,
    alien_height: u32,
) -> Vec<(i32, i32)> {
    let mut positions = Vec::new();
    if alien_width == 0 || alien_height == 0 {
        return positions;
    }

    let (screen_w, screen_h) = (screen_width as i64, screen_height as i64);
    let (w, h) = (alien_width as i64, alien_height as i64);

    let mut y = h;
    while y < screen_h - 3 * h {
        let mut x = w;
        while x < screen_w - 2 * w {
            positions.push((x as i32, y as i32));
            x += 2 * w;
        }
        y += 2 * h;
    }

    positions
}

/// All live aliens plus their shared horizontal direction
pub struct Fleet {
    aliens: Vec<Alien>,
    direction: f32,
    alien_size: (u32, u32),
}

impl Fleet {
    /// Creates an empty fleet moving right
    pub fn new(alien_width: u32, alien_height: u32) -> Self {
        Fleet {
            aliens: Vec::new(),
            direction: 1.0,
            alien_size: (alien_width, alien_height),
        }
    }

    /// Replaces the current aliens with a freshly laid-out grid.
    ///
    /// The direction is kept: only a new game resets it.
    pub fn create(&mut self, screen: Rect) {
        let (alien_width, alien_height) = self.alien_size;
        self.aliens = layout_fleet(screen.width(), screen.height(), alien_width, alien_height)
            .into_iter()
            .map(|(x, y)| Alien::new(x, y, alien_width, alien_height))
            .collect();
    }

    pub fn reset_direction(&mut self) {
        self.direction = 1.0;
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    #[cfg(test)]
    pub fn aliens_mut(&mut self) -> &mut Vec<Alien> {
        &mut self.aliens
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    /// Removes the aliens at `indices` (any order, duplicates ignored)
    pub fn remove_indices(&mut self, indices: &[usize]) {
        remove_indices(&mut self.aliens, indices);
    }

    /// Flips direction and drops the fleet if any alien reached a side edge.
    ///
    /// Returns true when the fleet changed direction.
    pub fn check_edges(&mut self, screen: Rect, drop: i32) -> bool {
        if self.aliens.iter().any(|alien| alien.check_edges(screen)) {
            self.change_direction(drop);
            true
        } else {
            false
        }
    }

    fn change_direction(&mut self, drop: i32) {
        for alien in &mut self.aliens {
            alien.drop_by(drop);
        }
        self.direction *= -1.0;
    }

    /// One frame of fleet movement: edge check, then drift
    pub fn update(&mut self, settings: &Settings) {
        let screen = Rect::new(0, 0, settings.screen_width, settings.screen_height);
        self.check_edges(screen, settings.fleet_drop_speed);

        let ctx = UpdateContext::new(settings, self.direction);
        for alien in &mut self.aliens {
            alien.update(&ctx);
        }
    }

    /// True if any alien's bottom edge reached the bottom of the screen
    pub fn reached_bottom(&self, screen: Rect) -> bool {
        self.aliens
            .iter()
            .any(|alien| alien.rect.bottom() >= screen.bottom())
    }
}
