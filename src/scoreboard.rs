/// Text prepared from [`GameStats`] for the renderer.
///
/// Each `prep_*` call refreshes one field; the game calls them only when
/// the underlying stat changes, and the renderer draws whatever is cached.
use crate::stats::GameStats;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    /// Spare ships to draw in the top-left corner.
    pub ships: u32,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut sb = Scoreboard::default();
        sb.prep_all(stats);
        sb
    }

    pub fn prep_all(&mut self, stats: &GameStats) {
        self.prep_score(stats);
        self.prep_high_score(stats);
        self.prep_level(stats);
        self.prep_ships(stats);
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score_text = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level_text = stats.level.to_string();
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ships = stats.ships_left;
    }

    /// Update the high score and re-prep it if the score beat it.
    pub fn check_high_score(&mut self, stats: &mut GameStats) {
        if stats.check_high_score() {
            self.prep_high_score(stats);
        }
    }
}

/// Round to the nearest ten and group thousands with commas.
pub fn format_score(score: u32) -> String {
    let rounded = (u64::from(score) + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
