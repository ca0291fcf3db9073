use crate::bullet::Bullet;
use crate::collision::{collide_any, group_collide};
use crate::fleet::Fleet;
use crate::settings::Settings;
use crate::ship::Ship;
use crate::sprite::{remove_indices, Sprite, SpriteSizes, UpdateContext};
use sdl2::rect::Rect;

/// Entities on the playfield: the ship, live bullets and the alien fleet
pub struct GameWorld {
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Fleet,
    screen: Rect,
}

impl GameWorld {
    /// Creates the ship and a full fleet
    pub fn new(sizes: SpriteSizes, screen: Rect) -> Self {
        let (ship_w, ship_h) = sizes.ship;
        let (alien_w, alien_h) = sizes.alien;

        let mut fleet = Fleet::new(alien_w, alien_h);
        fleet.create(screen);

        GameWorld {
            ship: Ship::new(ship_w, ship_h, screen),
            bullets: Vec::new(),
            fleet,
            screen,
        }
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    /// Fires from the ship's nose unless the bullet cap is reached
    pub fn fire_bullet(&mut self, settings: &Settings) -> bool {
        if self.bullets.len() >= settings.bullets_allowed {
            return false;
        }
        self.bullets.push(Bullet::new(
            self.ship.midtop(),
            settings.bullet_width,
            settings.bullet_height,
        ));
        true
    }

    pub fn update_ship(&mut self, settings: &Settings) {
        let ctx = UpdateContext::new(settings, self.fleet.direction());
        self.ship.update(&ctx);
    }

    /// Moves bullets, drops those off the top and resolves bullet-alien hits.
    ///
    /// Returns the number of aliens destroyed this frame.
    pub fn update_bullets(&mut self, settings: &Settings) -> usize {
        let ctx = UpdateContext::new(settings, self.fleet.direction());
        for bullet in &mut self.bullets {
            bullet.update(&ctx);
        }
        self.bullets.retain(|bullet| !bullet.is_off_screen());

        self.check_bullet_alien_collisions()
    }

    fn check_bullet_alien_collisions(&mut self) -> usize {
        let hits = group_collide(&self.bullets, self.fleet.aliens());
        if hits.is_empty() {
            return 0;
        }

        let (spent_bullets, dead_aliens): (Vec<usize>, Vec<usize>) = hits.into_iter().unzip();
        remove_indices(&mut self.bullets, &spent_bullets);
        self.fleet.remove_indices(&dead_aliens);
        dead_aliens.len()
    }

    /// Moves the fleet (unless stationary) and checks whether the ship was hit.
    ///
    /// Touching the ship and reaching the bottom both count as a hit, once.
    pub fn update_aliens(&mut self, settings: &Settings) -> bool {
        if settings.fleet_moves() {
            self.fleet.update(settings);
        }

        collide_any(&self.ship, self.fleet.aliens()).is_some()
            || self.fleet.reached_bottom(self.screen)
    }

    /// Clears bullets, rebuilds the fleet and recenters the ship
    pub fn reset_round(&mut self) {
        self.bullets.clear();
        self.fleet.create(self.screen);
        self.ship.center_ship(self.screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alien::Alien;
    use crate::settings::FleetMotion;

    fn settings() -> Settings {
        Settings {
            screen_width: 800,
            screen_height: 600,
            ..Default::default()
        }
    }

    fn world(settings: &Settings) -> GameWorld {
        let sizes = SpriteSizes {
            ship: (60, 48),
            alien: (40, 24),
        };
        GameWorld::new(
            sizes,
            Rect::new(0, 0, settings.screen_width, settings.screen_height),
        )
    }

    #[test]
    fn test_new_world_has_full_fleet() {
        let settings = settings();
        let world = world(&settings);

        assert_eq!(world.fleet.len(), 99);
        assert!(world.bullets.is_empty());
        assert_eq!(world.ship.midtop(), (400, 552));
    }

    #[test]
    fn test_fire_respects_cap() {
        let settings = settings();
        let mut world = world(&settings);

        for _ in 0..settings.bullets_allowed {
            assert!(world.fire_bullet(&settings));
        }
        assert!(!world.fire_bullet(&settings));
        assert_eq!(world.bullets.len(), settings.bullets_allowed);
    }

    #[test]
    fn test_bullets_leaving_top_are_removed() {
        let settings = settings();
        let mut world = world(&settings);
        world.fleet.clear();

        world.bullets.push(Bullet::new((100, -14), 3, 15)); // bottom at 1
        world.bullets.push(Bullet::new((200, 300), 3, 15));
        world.update_bullets(&settings);

        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.bullets[0].rect.x(), 199);
    }

    #[test]
    fn test_one_bullet_kills_one_alien() {
        let settings = settings();
        let mut world = world(&settings);

        // Two aliens stacked on the same column, one bullet through both
        let alien = world.fleet.aliens()[0].rect;
        world.fleet.aliens_mut()[1] = Alien::new(alien.x(), alien.y(), 40, 24);
        world.bullets.push(Bullet::new(
            (alien.center().x(), alien.top() + 5),
            3,
            15,
        ));

        let killed = world.update_bullets(&settings);

        assert_eq!(killed, 1);
        assert_eq!(world.fleet.len(), 98);
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn test_stationary_fleet_does_not_move() {
        let mut settings = settings();
        settings.fleet_motion = FleetMotion::Stationary;
        let mut world = world(&settings);
        let before: Vec<Rect> = world.fleet.aliens().iter().map(|a| a.rect).collect();

        for _ in 0..10 {
            assert!(!world.update_aliens(&settings));
        }

        let after: Vec<Rect> = world.fleet.aliens().iter().map(|a| a.rect).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_alien_touching_ship_is_a_hit() {
        let settings = settings();
        let mut world = world(&settings);
        let ship = world.ship.rect;
        world.fleet.aliens_mut()[0] = Alien::new(ship.x(), ship.y(), 40, 24);

        assert!(world.update_aliens(&settings));
    }

    #[test]
    fn test_reset_round() {
        let settings = settings();
        let mut world = world(&settings);
        world.fire_bullet(&settings);
        world.fleet.clear();
        world.ship.x = 10.0;

        world.reset_round();

        assert!(world.bullets.is_empty());
        assert_eq!(world.fleet.len(), 99);
        assert_eq!(world.ship.midtop(), (400, 552));
    }
}
