use crate::features::recycling_centers::dtos::RecyclingCenterResponseDto;
use crate::features::recycling_centers::models::RECYCLING_CENTERS;

/// Service for the static recycling center directory
#[derive(Default)]
pub struct RecyclingCenterService;

impl RecyclingCenterService {
    pub fn new() -> Self {
        Self
    }

    /// All centers in directory order
    pub fn list(&self) -> Vec<RecyclingCenterResponseDto> {
        RECYCLING_CENTERS.iter().map(Into::into).collect()
    }
}
