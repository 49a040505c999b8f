pub mod feed;
pub mod format;
pub mod frame;
pub mod observer;
