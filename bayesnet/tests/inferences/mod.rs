pub mod alarm;
pub mod agreement;
