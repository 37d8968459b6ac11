mod recycling_center_service;

pub use recycling_center_service::RecyclingCenterService;
