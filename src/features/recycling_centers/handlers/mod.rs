pub mod recycling_center_handler;

pub use recycling_center_handler::*;
