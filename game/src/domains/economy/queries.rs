use crate::economy::{EconomyDomain, Resource, ResourceKey};

impl EconomyDomain {
    #[inline]
    pub fn balance(&self) -> u32 {
        self.currency
    }

    pub fn get_resource(&self, kind: ResourceKey) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|resource| resource.kind.id == kind)
    }

    /// Absent entry means nothing stored.
    pub fn quantity(&self, kind: ResourceKey) -> u32 {
        self.get_resource(kind)
            .map(|resource| resource.quantity)
            .unwrap_or(0)
    }
}
