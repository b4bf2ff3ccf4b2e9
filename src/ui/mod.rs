pub mod messages;
pub mod sheet;
