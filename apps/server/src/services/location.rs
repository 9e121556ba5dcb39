use crate::{
    models::{LocationDto, LocationRequest, LocationSearchRequest, Page},
    Result,
};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait LocationService: Send + Sync {
    async fn count_locations(&self, crop: &str, request: &LocationSearchRequest) -> Result<u64>;

    async fn search_locations(
        &self,
        crop: &str,
        request: &LocationSearchRequest,
        page: Page,
    ) -> Result<Vec<LocationDto>>;

    /// `favorite` is resolved against `program_uuid`; without one it is false.
    async fn get_location(
        &self,
        crop: &str,
        location_id: i32,
        program_uuid: Option<Uuid>,
    ) -> Result<Option<LocationDto>>;

    /// Returns the generated location id.
    async fn create_location(&self, crop: &str, request: LocationRequest) -> Result<i32>;

    /// Fails with `NotFound` when the location does not exist in `crop`.
    async fn update_location(
        &self,
        crop: &str,
        location_id: i32,
        request: LocationRequest,
    ) -> Result<()>;

    async fn set_favorite(
        &self,
        crop: &str,
        program_uuid: Uuid,
        location_id: i32,
        favorite: bool,
    ) -> Result<()>;
}
