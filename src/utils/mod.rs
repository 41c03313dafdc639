pub mod format;
pub mod timing;
