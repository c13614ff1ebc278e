use crate::progression::ProgressionDomain;
use log::warn;

impl ProgressionDomain {
    /// Level is always derived, stored one is only checked.
    pub fn load_experience(&mut self, experience: u32, stored_level: u32) {
        self.experience = experience;
        self.level = self.level_for(experience);
        if stored_level != self.level {
            warn!(
                "Stored level {} disagrees with experience {}, level {} used",
                stored_level, experience, self.level
            );
        }
    }
}
