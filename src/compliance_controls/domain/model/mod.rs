pub mod entities;
pub mod enums;
pub mod queries;
pub mod value_objects;
