use crate::collision::Collidable;
use crate::sprite::{Art, Sprite, UpdateContext};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// One member of the alien fleet
///
/// Horizontal position is tracked as a float for sub-pixel drift. Vertical
/// position only changes in whole `fleet_drop_speed` steps, so it lives in
/// the rectangle alone.
pub struct Alien {
    pub x: f32,
    pub rect: Rect,
}

impl Alien {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Alien {
            x: x as f32,
            rect: Rect::new(x, y, width, height),
        }
    }

    /// True if the alien touches or crosses the left or right screen edge
    pub fn check_edges(&self, screen: Rect) -> bool {
        self.rect.right() >= screen.right() || self.rect.left() <= screen.left()
    }

    pub fn drop_by(&mut self, amount: i32) {
        self.rect.set_y(self.rect.y() + amount);
    }
}

impl Collidable for Alien {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}

impl Sprite for Alien {
    fn update(&mut self, ctx: &UpdateContext) {
        self.x += ctx.settings.current_alien_speed * ctx.fleet_direction;
        self.rect.set_x(self.x as i32);
    }

    fn draw(&self, canvas: &mut Canvas<Window>, art: &Art) -> Result<(), String> {
        match art.alien {
            Some(texture) => canvas.copy(texture, None, Some(self.rect)),
            None => {
                canvas.set_draw_color(art.alien_color);
                canvas.fill_rect(self.rect)
            }
        }
    }
}
