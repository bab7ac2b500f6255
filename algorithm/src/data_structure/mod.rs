pub mod unique_array;

pub use self::unique_array::UniqueArray;
