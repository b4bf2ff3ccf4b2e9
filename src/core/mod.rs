pub mod add;
pub mod clock;
pub mod log;
pub mod logs;
pub mod store;
