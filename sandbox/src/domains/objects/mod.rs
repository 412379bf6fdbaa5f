pub use bodies::*;
pub use domain::*;
pub use specs::*;

mod bodies;
mod commands;
mod domain;
mod queries;
mod specs;
mod update;
pub(crate) mod validation;
