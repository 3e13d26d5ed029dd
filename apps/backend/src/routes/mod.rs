pub mod cards;
pub mod decklists;
