pub mod geocode;
pub mod media;
pub mod notify;
pub mod video;
