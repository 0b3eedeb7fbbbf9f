//! Screen rendering modules

pub mod passcode;
pub mod summary;
