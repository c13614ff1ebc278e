use crate::api::{ActionError, Event};
use crate::economy::ResourceKey;
use crate::{Game, Timestamp};

impl Game {
    pub(crate) fn buy_resource(
        &mut self,
        kind: ResourceKey,
        amount: u32,
        now: Timestamp,
    ) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.resources.get(kind)?;
        let buy_resource = self.economy.buy_resource(&kind, amount, now)?;
        let events = occur![buy_resource(),];
        Ok(events)
    }

    pub(crate) fn sell_resource(
        &mut self,
        kind: ResourceKey,
        amount: u32,
        now: Timestamp,
    ) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.resources.get(kind)?;
        let sell_resource = self.economy.sell_resource(&kind, amount, now)?;
        let events = occur![sell_resource(),];
        Ok(events)
    }
}
