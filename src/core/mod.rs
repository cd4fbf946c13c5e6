pub mod demo;
pub mod registry;
pub mod shared;
