//! Game statistics
//!
//! Tracks lives, score, high score and level for one session. The high score
//! survives new games but is never written to disk.

/// Per-session statistics
#[derive(Debug, Clone)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    ship_limit: u32,
}

impl GameStats {
    pub fn new(ship_limit: u32) -> Self {
        let mut stats = GameStats {
            ships_left: 0,
            score: 0,
            high_score: 0,
            level: 1,
            ship_limit,
        };
        stats.reset_stats();
        stats
    }

    /// Resets everything except the high score
    pub fn reset_stats(&mut self) {
        self.ships_left = self.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Adds points for `aliens_destroyed` aliens and returns the gain
    pub fn award(&mut self, alien_points: u32, aliens_destroyed: usize) -> u32 {
        let destroyed = u32::try_from(aliens_destroyed).unwrap_or(u32::MAX);
        let gained = alien_points.saturating_mul(destroyed);
        self.score = self.score.saturating_add(gained);
        self.check_high_score();
        gained
    }

    /// Consumes one ship. Returns true if that was the last one.
    pub fn lose_ship(&mut self) -> bool {
        self.ships_left = self.ships_left.saturating_sub(1);
        self.ships_left == 0
    }

    pub fn check_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}
