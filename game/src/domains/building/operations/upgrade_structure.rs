use crate::building::Building::StructureUpgraded;
use crate::building::{Building, BuildingDomain, BuildingError, StructureId};

impl BuildingDomain {
    /// Returns the price of the next level along with the operation.
    pub fn upgrade_structure(
        &mut self,
        id: StructureId,
    ) -> Result<(u32, impl FnOnce() -> Vec<Building> + '_), BuildingError> {
        let structure = self
            .structures
            .iter_mut()
            .find(|structure| structure.id == id)
            .ok_or(BuildingError::StructureNotFound { id })?;
        let cost = structure.upgrade_cost();
        let operation = move || {
            structure.level += 1;
            vec![StructureUpgraded {
                id,
                level: structure.level,
            }]
        };
        Ok((cost, operation))
    }
}
