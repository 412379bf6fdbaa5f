pub use contact::*;
pub use distance::*;
pub use gyro::*;

mod contact;
mod distance;
mod gyro;
