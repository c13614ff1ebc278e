use crate::building::Building::StructurePlaced;
use crate::building::BuildingError::{CellOccupied, OutOfBounds};
use crate::building::{
    Building, BuildingDomain, BuildingError, Structure, StructureId, StructureKind,
};
use crate::collections::Shared;

impl BuildingDomain {
    pub fn place_structure<'operation>(
        &'operation mut self,
        kind: &Shared<StructureKind>,
        cell: [usize; 2],
    ) -> Result<(StructureId, impl FnOnce() -> Vec<Building> + 'operation), BuildingError> {
        if !self.contains(cell) {
            return Err(OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            });
        }
        if let Some(structure) = self.find_at(cell) {
            return Err(CellOccupied {
                cell,
                structure: structure.id,
            });
        }
        let id = self.structures_id.introduce().one(StructureId);
        let structure = Structure {
            id,
            kind: kind.clone(),
            level: 1,
            cell,
        };
        let operation = move || {
            let event = StructurePlaced {
                id,
                kind: structure.kind.id,
                level: structure.level,
                cell,
            };
            self.structures_id.register(id.0);
            self.structures.push(structure);
            vec![event]
        };
        Ok((id, operation))
    }
}
