use crate::collision::Collidable;
use crate::input_system::Direction;
use crate::sprite::{Art, Sprite, UpdateContext};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// The player's ship
///
/// `x`/`y` are the authoritative position. The rectangle is a truncated view
/// of them, rebuilt after every move so fractional speeds accumulate instead
/// of being rounded away each frame.
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub rect: Rect,
    pub moving_left: bool,
    pub moving_right: bool,
    pub moving_up: bool,
    pub moving_down: bool,
}

impl Ship {
    /// Creates a ship resting at the bottom center of the screen
    pub fn new(width: u32, height: u32, screen: Rect) -> Self {
        let mut ship = Ship {
            x: 0.0,
            y: 0.0,
            rect: Rect::new(0, 0, width, height),
            moving_left: false,
            moving_right: false,
            moving_up: false,
            moving_down: false,
        };
        ship.center_ship(screen);
        ship
    }

    /// Puts the ship back at the bottom center of the screen
    pub fn center_ship(&mut self, screen: Rect) {
        let x = screen.x() + (screen.width() as i32 - self.rect.width() as i32) / 2;
        let y = screen.bottom() - self.rect.height() as i32;
        self.rect.set_x(x);
        self.rect.set_y(y);
        self.x = x as f32;
        self.y = y as f32;
    }

    /// Key-down / key-up for one direction
    pub fn set_moving(&mut self, direction: Direction, moving: bool) {
        match direction {
            Direction::Left => self.moving_left = moving,
            Direction::Right => self.moving_right = moving,
            Direction::Up => self.moving_up = moving,
            Direction::Down => self.moving_down = moving,
        }
    }

    pub fn stop(&mut self) {
        self.moving_left = false;
        self.moving_right = false;
        self.moving_up = false;
        self.moving_down = false;
    }

    /// Where new bullets spawn: (center x, top y)
    pub fn midtop(&self) -> (i32, i32) {
        (self.rect.center().x(), self.rect.top())
    }
}

impl Collidable for Ship {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}

impl Sprite for Ship {
    fn update(&mut self, ctx: &UpdateContext) {
        let speed = ctx.settings.current_ship_speed;
        let screen = ctx.screen;

        if self.moving_right && self.rect.right() < screen.right() {
            self.x += speed;
        }
        if self.moving_left && self.rect.left() > screen.left() {
            self.x -= speed;
        }
        if self.moving_up && self.rect.top() > screen.top() {
            self.y -= speed;
        }
        if self.moving_down && self.rect.bottom() < screen.bottom() {
            self.y += speed;
        }

        // Last step can overshoot the edge by a fraction of `speed`
        let max_x = (screen.right() - self.rect.width() as i32) as f32;
        let max_y = (screen.bottom() - self.rect.height() as i32) as f32;
        self.x = self.x.clamp(screen.left() as f32, max_x.max(screen.left() as f32));
        self.y = self.y.clamp(screen.top() as f32, max_y.max(screen.top() as f32));

        self.rect.set_x(self.x as i32);
        self.rect.set_y(self.y as i32);
    }

    fn draw(&self, canvas: &mut Canvas<Window>, art: &Art) -> Result<(), String> {
        canvas.copy(art.ship, None, Some(self.rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn settings_800x600() -> Settings {
        Settings {
            screen_width: 800,
            screen_height: 600,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_ship_is_bottom_center() {
        let ship = Ship::new(60, 48, Rect::new(0, 0, 800, 600));

        assert_eq!(ship.rect.x(), 370);
        assert_eq!(ship.rect.bottom(), 600);
        assert_eq!(ship.x, 370.0);
    }

    #[test]
    fn test_fractional_speed_accumulates() {
        let settings = settings_800x600();
        let ctx = UpdateContext::new(&settings, 1.0);
        let mut ship = Ship::new(60, 48, ctx.screen);
        ship.set_moving(Direction::Right, true);

        // 1.5 px per frame: the rect must move 3 px after 2 frames, not 2
        ship.update(&ctx);
        ship.update(&ctx);

        assert_eq!(ship.x, 373.0);
        assert_eq!(ship.rect.x(), 373);
    }

    #[test]
    fn test_flags_without_key_do_nothing() {
        let settings = settings_800x600();
        let ctx = UpdateContext::new(&settings, 1.0);
        let mut ship = Ship::new(60, 48, ctx.screen);
        let before = ship.rect;

        ship.update(&ctx);
        assert_eq!(ship.rect, before);

        ship.set_moving(Direction::Left, true);
        ship.set_moving(Direction::Left, false);
        ship.update(&ctx);
        assert_eq!(ship.rect, before);
    }

    #[test]
    fn test_ship_stays_on_screen() {
        let mut settings = settings_800x600();
        settings.current_ship_speed = 7.3;
        let ctx = UpdateContext::new(&settings, 1.0);
        let mut ship = Ship::new(60, 48, ctx.screen);

        for direction in [Direction::Right, Direction::Up, Direction::Left, Direction::Down] {
            ship.stop();
            ship.set_moving(direction, true);
            for _ in 0..500 {
                ship.update(&ctx);
                assert!(ship.rect.left() >= 0);
                assert!(ship.rect.top() >= 0);
                assert!(ship.rect.right() <= 800);
                assert!(ship.rect.bottom() <= 600);
            }
        }

        // Ended pinned against the bottom-left corner
        assert_eq!(ship.rect.left(), 0);
        assert_eq!(ship.rect.bottom(), 600);
    }

    #[test]
    fn test_midtop() {
        let ship = Ship::new(60, 48, Rect::new(0, 0, 800, 600));
        assert_eq!(ship.midtop(), (400, 552));
    }
}
