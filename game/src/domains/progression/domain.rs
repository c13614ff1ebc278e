use serde::{Deserialize, Serialize};

/// Experience and level of a farm.
///
/// Every level takes the same `threshold` of experience, so level is
/// `experience / threshold + 1` everywhere, including progress display.
pub struct ProgressionDomain {
    pub threshold: u32,
    pub experience: u32,
    pub level: u32,
}

impl ProgressionDomain {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            experience: 0,
            level: 1,
        }
    }

    #[inline]
    pub fn level_for(&self, experience: u32) -> u32 {
        experience / self.threshold + 1
    }

    /// Experience gathered inside current level and amount the level requires.
    pub fn progress(&self) -> (u32, u32) {
        (self.experience % self.threshold, self.threshold)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progression {
    ExperienceGained { amount: u32, experience: u32 },
    LevelChanged { level: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionError {
    ExperienceOverflow { experience: u32, amount: u32 },
}
