pub mod extract;
pub mod status;
pub mod sweep;
