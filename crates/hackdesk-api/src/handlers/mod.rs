pub mod submissions;
pub mod upload;
