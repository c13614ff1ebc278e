use crate::building::{BuildingDomain, BuildingError, Structure, StructureId, StructureKey};

impl BuildingDomain {
    pub fn get_structure(&self, id: StructureId) -> Result<&Structure, BuildingError> {
        self.structures
            .iter()
            .find(|structure| structure.id == id)
            .ok_or(BuildingError::StructureNotFound { id })
    }

    pub fn find_at(&self, cell: [usize; 2]) -> Option<&Structure> {
        self.structures
            .iter()
            .find(|structure| structure.cell == cell)
    }

    pub fn structures_of(&self, kind: StructureKey) -> impl Iterator<Item = &Structure> {
        self.structures
            .iter()
            .filter(move |structure| structure.kind.id == kind)
    }

    /// Not applicable (`None`) for structures without capacity.
    pub fn capacity_of(&self, id: StructureId) -> Result<Option<u32>, BuildingError> {
        Ok(self.get_structure(id)?.capacity())
    }

    #[inline]
    pub fn contains(&self, cell: [usize; 2]) -> bool {
        cell[0] < self.width && cell[1] < self.height
    }
}
