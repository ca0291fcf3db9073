//! Game controller
//!
//! Owns settings, stats and the playfield, translates input actions into
//! state changes and advances everything by one frame per [`AlienInvasion::step`].
//! Rendering reads the state through accessors and never mutates it.

pub mod types;
pub mod world;

pub use types::{HitOutcome, LoopControl};
pub use world::GameWorld;

use crate::clock::Clock;
use crate::gui::Button;
use crate::input_system::GameAction;
use crate::settings::Settings;
use crate::sprite::SpriteSizes;
use crate::stats::GameStats;
use log::{debug, info};
use sdl2::rect::Rect;
use std::time::Duration;

pub struct AlienInvasion {
    pub settings: Settings,
    pub stats: GameStats,
    pub world: GameWorld,
    play_button: Button,
    game_active: bool,
    cursor_visible: bool,
    /// Freeze requested by a ship hit, served at the end of the frame
    pending_pause: Option<Duration>,
}

impl AlienInvasion {
    /// Builds an inactive game with the fleet already in place behind the play button
    pub fn new(settings: Settings, sizes: SpriteSizes) -> Self {
        let screen = Rect::new(0, 0, settings.screen_width, settings.screen_height);
        let stats = GameStats::new(settings.ship_limit);

        AlienInvasion {
            world: GameWorld::new(sizes, screen),
            play_button: Button::new("PLAY", screen),
            stats,
            settings,
            game_active: false,
            cursor_visible: true,
            pending_pause: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.game_active
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn play_button(&self) -> &Button {
        &self.play_button
    }

    pub fn handle_action(&mut self, action: GameAction) -> LoopControl {
        match action {
            GameAction::StartMoving(direction) => self.world.ship.set_moving(direction, true),
            GameAction::StopMoving(direction) => self.world.ship.set_moving(direction, false),
            GameAction::Fire => {
                if self.game_active && !self.world.fire_bullet(&self.settings) {
                    debug!("Bullet cap of {} reached", self.settings.bullets_allowed);
                }
            }
            GameAction::Click(x, y) => self.check_play_button(x, y),
            GameAction::Quit => return LoopControl::Quit,
        }
        LoopControl::Continue
    }

    /// Starts a new game when the play button is clicked while inactive
    fn check_play_button(&mut self, x: i32, y: i32) {
        if !self.game_active && self.play_button.contains(x, y) {
            self.start_game();
        }
    }

    pub fn start_game(&mut self) {
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats();
        self.game_active = true;

        self.world.fleet.reset_direction();
        self.world.reset_round();
        self.world.ship.stop();

        self.cursor_visible = false;
        info!("New game started with {} ships", self.stats.ships_left);
    }

    /// Advances one frame, then serves any pause a ship hit requested
    pub fn step(&mut self, clock: &mut impl Clock) {
        self.update();

        if let Some(pause) = self.pending_pause.take() {
            clock.sleep(pause);
        }
    }

    /// One frame of simulation; does nothing while inactive
    pub fn update(&mut self) {
        if !self.game_active {
            return;
        }

        self.world.update_ship(&self.settings);

        let destroyed = self.world.update_bullets(&self.settings);
        if destroyed > 0 {
            self.stats.award(self.settings.current_alien_points, destroyed);
        }
        if self.world.fleet.is_empty() {
            self.start_new_level();
        }

        if self.world.update_aliens(&self.settings) {
            self.ship_hit();
        }
    }

    fn start_new_level(&mut self) {
        self.world.bullets.clear();
        self.world.fleet.create(self.world.screen());
        self.settings.increase_speed();
        self.stats.level += 1;
        info!(
            "Wave cleared, level {} (alien speed {:.2}, {} points per alien)",
            self.stats.level, self.settings.current_alien_speed, self.settings.current_alien_points
        );
    }

    /// Loses a ship. Resets the round and queues a pause, or ends the game.
    pub fn ship_hit(&mut self) -> HitOutcome {
        if self.stats.lose_ship() {
            self.game_active = false;
            self.cursor_visible = true;
            info!(
                "Game over at level {} with score {}",
                self.stats.level, self.stats.score
            );
            return HitOutcome::GameOver;
        }

        self.world.reset_round();
        self.pending_pause = Some(self.settings.hit_pause());
        info!("Ship hit, {} left", self.stats.ships_left);
        HitOutcome::RoundReset
    }
}
