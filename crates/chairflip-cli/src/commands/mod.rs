pub mod analyze;
pub mod substituents;
pub mod sugars;
