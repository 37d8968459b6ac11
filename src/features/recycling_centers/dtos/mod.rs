mod recycling_center_dto;

pub use recycling_center_dto::*;
