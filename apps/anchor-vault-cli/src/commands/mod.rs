pub mod derive;
pub mod simulate;
