pub mod storage;
pub mod youtube;
