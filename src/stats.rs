/// Score, level, lives and the active flag for one process run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub score: u32,
    /// Zero until the opening level-up of a game.
    pub level: u32,
    /// Spare ships; the ship in play is not counted.
    pub ships_left: u32,
    /// Survives [`GameStats::reset_stats`]; lost when the process exits.
    pub high_score: u32,
    pub game_active: bool,
    ship_limit: u32,
}

impl GameStats {
    pub fn new(ship_limit: u32) -> Self {
        GameStats {
            score: 0,
            level: 0,
            ships_left: ship_limit,
            high_score: 0,
            game_active: false,
            ship_limit,
        }
    }

    /// Reset the per-game counters. `high_score` and `game_active` are kept.
    pub fn reset_stats(&mut self) {
        self.ships_left = self.ship_limit;
        self.score = 0;
        self.level = 0;
    }

    /// Raise the high score to the current score if it has been beaten.
    /// Returns true when a new high score was set.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_high_score() {
        let mut stats = GameStats::new(2);
        stats.score = 500;
        stats.level = 3;
        stats.ships_left = 0;
        assert!(stats.check_high_score());
        stats.reset_stats();
        assert_eq!(stats.score, 0);
        assert_eq!(stats.level, 0);
        assert_eq!(stats.ships_left, 2);
        assert_eq!(stats.high_score, 500);
    }

    #[test]
    fn lower_score_does_not_replace_high_score() {
        let mut stats = GameStats::new(2);
        stats.high_score = 900;
        stats.score = 100;
        assert!(!stats.check_high_score());
        assert_eq!(stats.high_score, 900);
    }
}
