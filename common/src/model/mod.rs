pub mod column;
pub mod upload;
