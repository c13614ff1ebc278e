pub mod building;
pub mod economy;
pub mod planting;
pub mod progression;
pub mod raising;
