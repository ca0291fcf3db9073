//! Shared entity capability
//!
//! Ship, bullets and aliens are all "movable drawable rectangles": they own a
//! bounding box, advance themselves once per frame and know how to draw
//! themselves. [`Sprite`] captures that, without any shared base type.

use crate::collision::Collidable;
use crate::settings::Settings;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Everything an entity may read while updating itself
pub struct UpdateContext<'s> {
    pub settings: &'s Settings,
    /// Screen rectangle, always anchored at (0, 0)
    pub screen: Rect,
    /// +1.0 moves the fleet right, -1.0 moves it left
    pub fleet_direction: f32,
}

impl<'s> UpdateContext<'s> {
    pub fn new(settings: &'s Settings, fleet_direction: f32) -> Self {
        UpdateContext {
            settings,
            screen: Rect::new(0, 0, settings.screen_width, settings.screen_height),
            fleet_direction,
        }
    }
}

/// Textures and colors used to draw entities
///
/// Aliens fall back to a solid rectangle when no alien image was loaded.
pub struct Art<'a> {
    pub ship: &'a Texture<'a>,
    pub alien: Option<&'a Texture<'a>>,
    pub bullet_color: Color,
    pub alien_color: Color,
}

/// A movable, drawable game entity
pub trait Sprite: Collidable {
    /// Advance the entity by one frame
    fn update(&mut self, ctx: &UpdateContext);

    fn draw(&self, canvas: &mut Canvas<Window>, art: &Art) -> Result<(), String>;
}

/// Draws every sprite in a group
pub fn draw_all<S: Sprite>(
    sprites: &[S],
    canvas: &mut Canvas<Window>,
    art: &Art,
) -> Result<(), String> {
    for sprite in sprites {
        sprite.draw(canvas, art)?;
    }
    Ok(())
}

/// Removes the items at `indices` from a group (any order, duplicates ignored)
pub fn remove_indices<T>(items: &mut Vec<T>, indices: &[usize]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !indices.contains(&index);
        index += 1;
        keep
    });
}

/// Sizes of the sprite images, known once textures are loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSizes {
    pub ship: (u32, u32),
    pub alien: (u32, u32),
}
