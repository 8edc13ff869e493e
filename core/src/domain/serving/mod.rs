pub mod helpers;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use helpers::*;
pub use ports::*;
pub use value_objects::*;
