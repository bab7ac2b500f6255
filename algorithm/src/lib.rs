extern crate fnv;

pub mod data_structure;
pub mod combination;
pub mod prelude;
