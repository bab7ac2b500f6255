pub use data_structure::*;
pub use combination::{ IterIndex, ravel_index };
