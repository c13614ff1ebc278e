use crate::progression::Progression::{ExperienceGained, LevelChanged};
use crate::progression::ProgressionError::ExperienceOverflow;
use crate::progression::{Progression, ProgressionDomain, ProgressionError};

impl ProgressionDomain {
    pub fn grant_experience(
        &mut self,
        amount: u32,
    ) -> Result<impl FnOnce() -> Vec<Progression> + '_, ProgressionError> {
        let experience = self
            .experience
            .checked_add(amount)
            .ok_or(ExperienceOverflow {
                experience: self.experience,
                amount,
            })?;
        let level = self.level_for(experience);
        let operation = move || {
            let mut events = vec![];
            if amount == 0 {
                return events;
            }
            self.experience = experience;
            events.push(ExperienceGained { amount, experience });
            if level != self.level {
                self.level = level;
                events.push(LevelChanged { level });
            }
            events
        };
        Ok(operation)
    }
}
