pub mod dispatch;
pub mod format;
pub mod interactive;
pub mod recommend;
pub mod stats;
