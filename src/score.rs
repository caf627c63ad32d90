/// Score and lives bookkeeping for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreKeeper {
    score: u64,
    lives: u32,
}

impl ScoreKeeper {
    pub fn new(initial_lives: u32) -> Self {
        Self {
            score: 0,
            lives: initial_lives,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn add_elapsed(&mut self, elapsed_ms: u64) {
        self.score += elapsed_ms;
    }

    pub fn add_bonus(&mut self, bonus: u64) {
        self.score += bonus;
    }

    /// Takes one life and returns how many remain.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    pub fn is_exhausted(&self) -> bool {
        self.lives == 0
    }
}
