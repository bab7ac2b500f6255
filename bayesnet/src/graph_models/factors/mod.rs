mod table_factor;

pub use self::table_factor::TableFactor;
