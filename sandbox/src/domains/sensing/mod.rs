pub use domain::*;
pub use sensor::*;
pub use sensors::*;
pub use specs::*;
pub use values::*;

mod commands;
mod domain;
mod queries;
mod sensor;
mod sensors;
mod specs;
mod update;
mod values;
