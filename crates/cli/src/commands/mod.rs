pub mod compile;
pub mod scan;
pub mod verify;
