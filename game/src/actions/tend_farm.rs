use log::{info, warn};

use crate::api::Event;
use crate::planting::CropId;
use crate::raising::AnimalId;
use crate::{Game, Timestamp};

impl Game {
    /// Harvests every ripe crop, each one as separate action.
    pub(crate) fn harvest_all_ready(&mut self, now: Timestamp) -> Vec<Event> {
        let crops: Vec<CropId> = self.planting.ready_crops(now).map(|crop| crop.id).collect();
        let mut events = vec![];
        let mut harvested = 0;
        for crop in crops {
            match self.harvest_crop(crop, now) {
                Ok(harvest) => {
                    harvested += 1;
                    events.extend(harvest);
                }
                Err(error) => warn!("Unable to harvest {:?}, {:?}", crop, error),
            }
        }
        info!("Farm {:?} harvested {} crops", self.profile.id, harvested);
        events
    }

    /// Feeds every animal whose feeding interval has elapsed.
    pub(crate) fn feed_all_due(&mut self, now: Timestamp) -> Vec<Event> {
        let animals: Vec<AnimalId> = self
            .raising
            .hungry_animals(now)
            .map(|animal| animal.id)
            .collect();
        let mut events = vec![];
        let mut fed = 0;
        for animal in animals {
            match self.feed_animal(animal, now) {
                Ok(feeding) => {
                    fed += 1;
                    events.extend(feeding);
                }
                Err(error) => warn!("Unable to feed {:?}, {:?}", animal, error),
            }
        }
        info!("Farm {:?} fed {} animals", self.profile.id, fed);
        events
    }
}
