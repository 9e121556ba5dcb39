use super::{next_id, same_crop, InMemoryMiddleware, Tables};
use crate::{
    db::FavoriteLocation,
    models::{Location, LocationDto, LocationRequest, LocationSearchRequest, Page},
    services::LocationService,
    Error, Result,
};
use async_trait::async_trait;
use uuid::Uuid;

impl Tables {
    fn is_favorite(&self, crop: &str, program_uuid: Option<Uuid>, location_id: i32) -> bool {
        program_uuid.map_or(false, |program_uuid| {
            self.favorite_locations.contains(&FavoriteLocation {
                crop_name: crop.to_lowercase(),
                program_uuid,
                location_id,
            })
        })
    }

    fn matching_locations(
        &self,
        crop: &str,
        request: &LocationSearchRequest,
    ) -> Result<Vec<LocationDto>> {
        if request.favorites_only && request.program_uuid.is_none() {
            return Err(Error::invalid(
                "location.favorites.program.required",
                "favoritesOnly requires programUuid",
            ));
        }

        Ok(self
            .locations
            .values()
            .filter(|l| same_crop(&l.crop_name, crop) && request.matches(l))
            .map(|l| LocationDto {
                favorite: self.is_favorite(crop, request.program_uuid, l.id),
                location: l.clone(),
            })
            .filter(|dto| !request.favorites_only || dto.favorite)
            .collect())
    }

    fn ensure_unique_abbreviation(
        &self,
        crop: &str,
        abbreviation: &str,
        except: Option<i32>,
    ) -> Result<()> {
        let taken = self.locations.values().any(|l| {
            same_crop(&l.crop_name, crop)
                && Some(l.id) != except
                && l.abbreviation.eq_ignore_ascii_case(abbreviation)
        });
        if taken {
            return Err(Error::Conflict(format!(
                "Location abbreviation '{}' is already in use",
                abbreviation
            )));
        }
        Ok(())
    }
}

fn apply(location: &mut Location, request: LocationRequest) {
    location.name = request.name;
    location.abbreviation = request.abbreviation;
    location.location_type_id = request.location_type_id;
    location.country_id = request.country_id;
    location.latitude = request.latitude;
    location.longitude = request.longitude;
    location.altitude = request.altitude;
    location.program_uuid = request.program_uuid;
}

#[async_trait]
impl LocationService for InMemoryMiddleware {
    async fn count_locations(&self, crop: &str, request: &LocationSearchRequest) -> Result<u64> {
        let tables = self.read()?;
        Ok(tables.matching_locations(crop, request)?.len() as u64)
    }

    async fn search_locations(
        &self,
        crop: &str,
        request: &LocationSearchRequest,
        page: Page,
    ) -> Result<Vec<LocationDto>> {
        let tables = self.read()?;
        Ok(page.slice(tables.matching_locations(crop, request)?))
    }

    async fn get_location(
        &self,
        crop: &str,
        location_id: i32,
        program_uuid: Option<Uuid>,
    ) -> Result<Option<LocationDto>> {
        let tables = self.read()?;
        Ok(tables
            .locations
            .get(&location_id)
            .filter(|l| same_crop(&l.crop_name, crop))
            .map(|l| LocationDto {
                location: l.clone(),
                favorite: tables.is_favorite(crop, program_uuid, l.id),
            }))
    }

    async fn create_location(&self, crop: &str, request: LocationRequest) -> Result<i32> {
        let mut tables = self.write()?;
        tables.ensure_unique_abbreviation(crop, &request.abbreviation, None)?;

        let id = next_id(&tables.locations);
        let mut location = Location {
            id,
            crop_name: crop.to_lowercase(),
            name: String::new(),
            abbreviation: String::new(),
            location_type_id: 0,
            country_id: None,
            latitude: None,
            longitude: None,
            altitude: None,
            program_uuid: None,
        };
        apply(&mut location, request);
        tables.locations.insert(id, location);

        tracing::info!(crop, location_id = id, "Location created");
        Ok(id)
    }

    async fn update_location(
        &self,
        crop: &str,
        location_id: i32,
        request: LocationRequest,
    ) -> Result<()> {
        let mut tables = self.write()?;
        let exists = tables
            .locations
            .get(&location_id)
            .is_some_and(|l| same_crop(&l.crop_name, crop));
        if !exists {
            return Err(Error::NotFound(format!("Location {}", location_id)));
        }
        tables.ensure_unique_abbreviation(crop, &request.abbreviation, Some(location_id))?;

        if let Some(location) = tables.locations.get_mut(&location_id) {
            apply(location, request);
        }
        tracing::info!(crop, location_id, "Location updated");
        Ok(())
    }

    async fn set_favorite(
        &self,
        crop: &str,
        program_uuid: Uuid,
        location_id: i32,
        favorite: bool,
    ) -> Result<()> {
        let mut tables = self.write()?;
        let visible = tables.locations.get(&location_id).is_some_and(|l| {
            same_crop(&l.crop_name, crop)
                && l.program_uuid.map_or(true, |owner| owner == program_uuid)
        });
        if !visible {
            return Err(Error::NotFound(format!("Location {}", location_id)));
        }

        let key = FavoriteLocation {
            crop_name: crop.to_lowercase(),
            program_uuid,
            location_id,
        };
        if favorite {
            tables.favorite_locations.insert(key);
        } else {
            tables.favorite_locations.remove(&key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, abbreviation: &str) -> LocationRequest {
        LocationRequest {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            location_type_id: 410,
            country_id: Some(119),
            latitude: None,
            longitude: None,
            altitude: None,
            program_uuid: None,
        }
    }

    #[tokio::test]
    async fn create_update_and_search() {
        let middleware = InMemoryMiddleware::new();
        let first = middleware
            .create_location("maize", request("El Batan", "EBTN"))
            .await
            .unwrap();
        let second = middleware
            .create_location("maize", request("Toluca", "TLC"))
            .await
            .unwrap();
        assert_eq!((first, second), (1, 2));

        let err = middleware
            .create_location("maize", request("Other", "ebtn"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));

        middleware
            .update_location("maize", second, request("Toluca Station", "TLC"))
            .await
            .unwrap();

        let search = LocationSearchRequest {
            location_name: Some("station".to_string()),
            ..Default::default()
        };
        assert_eq!(middleware.count_locations("maize", &search).await.unwrap(), 1);
        assert_eq!(middleware.count_locations("wheat", &search).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_of_missing_location_fails() {
        let middleware = InMemoryMiddleware::new();
        let err = middleware
            .update_location("maize", 42, request("X", "X"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn favorites_are_per_program() {
        let middleware = InMemoryMiddleware::new();
        let id = middleware
            .create_location("maize", request("El Batan", "EBTN"))
            .await
            .unwrap();
        let program = Uuid::new_v4();
        middleware
            .set_favorite("maize", program, id, true)
            .await
            .unwrap();

        let favorites = LocationSearchRequest {
            program_uuid: Some(program),
            favorites_only: true,
            ..Default::default()
        };
        let found = middleware
            .search_locations("maize", &favorites, Page::unbounded())
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].favorite);

        let scoped = middleware.get_location("maize", id, Some(program)).await.unwrap();
        assert!(scoped.is_some_and(|dto| dto.favorite));
        let unscoped = middleware.get_location("maize", id, None).await.unwrap();
        assert!(unscoped.is_some_and(|dto| !dto.favorite));

        let other = LocationSearchRequest {
            program_uuid: Some(Uuid::new_v4()),
            favorites_only: true,
            ..Default::default()
        };
        assert_eq!(middleware.count_locations("maize", &other).await.unwrap(), 0);

        let unscoped = LocationSearchRequest {
            favorites_only: true,
            ..Default::default()
        };
        assert!(middleware.count_locations("maize", &unscoped).await.is_err());
    }
}
