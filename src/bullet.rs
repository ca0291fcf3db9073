use crate::collision::Collidable;
use crate::sprite::{Art, Sprite, UpdateContext};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// A projectile fired straight up from the ship
pub struct Bullet {
    pub y: f32,
    pub rect: Rect,
}

impl Bullet {
    /// Creates a bullet whose top-center sits at `midtop`
    pub fn new(midtop: (i32, i32), width: u32, height: u32) -> Self {
        let (center_x, top) = midtop;
        let rect = Rect::new(center_x - width as i32 / 2, top, width, height);
        Bullet {
            y: top as f32,
            rect,
        }
    }

    /// True once the bullet has fully left the top of the screen
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Collidable for Bullet {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}

impl Sprite for Bullet {
    fn update(&mut self, ctx: &UpdateContext) {
        self.y -= ctx.settings.current_bullet_speed;
        self.rect.set_y(self.y as i32);
    }

    fn draw(&self, canvas: &mut Canvas<Window>, art: &Art) -> Result<(), String> {
        canvas.set_draw_color(art.bullet_color);
        canvas.fill_rect(self.rect)
    }
}
