pub mod geocode;
pub mod image_host;
pub mod storage;
