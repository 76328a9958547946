pub mod pdf;
pub mod transcript;
