pub mod entities;
pub mod ports;
pub mod query;
pub mod sequencing;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
