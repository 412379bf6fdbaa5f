pub mod objects;
pub mod sensing;
