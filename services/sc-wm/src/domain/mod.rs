pub mod repositories;
pub mod services;
pub mod stock;
pub mod value_objects;
pub mod warehouse;
