use super::{next_id, same_crop, InMemoryMiddleware, Tables};
use crate::{
    models::{GermplasmList, GermplasmListRequest, GermplasmListSearchRequest, Page},
    services::GermplasmListService,
    Error, Result,
};
use async_trait::async_trait;
use chrono::Utc;

impl Tables {
    fn matching_lists(&self, crop: &str, request: &GermplasmListSearchRequest) -> Vec<GermplasmList> {
        self.germplasm_lists
            .values()
            .filter(|l| same_crop(&l.crop_name, crop) && request.matches(l))
            .cloned()
            .collect()
    }

    /// List names are unique within one program of a crop.
    fn ensure_unique_list_name(
        &self,
        crop: &str,
        request: &GermplasmListRequest,
        except: Option<i32>,
    ) -> Result<()> {
        let taken = self.germplasm_lists.values().any(|l| {
            same_crop(&l.crop_name, crop)
                && Some(l.id) != except
                && l.program_uuid == request.program_uuid
                && l.name.eq_ignore_ascii_case(&request.name)
        });
        if taken {
            return Err(Error::Conflict(format!(
                "Germplasm list '{}' already exists",
                request.name
            )));
        }
        Ok(())
    }

    fn crop_list_mut(&mut self, crop: &str, list_id: i32) -> Result<&mut GermplasmList> {
        self.germplasm_lists
            .get_mut(&list_id)
            .filter(|l| same_crop(&l.crop_name, crop))
            .ok_or_else(|| Error::NotFound(format!("Germplasm list {}", list_id)))
    }
}

#[async_trait]
impl GermplasmListService for InMemoryMiddleware {
    async fn count_lists(&self, crop: &str, request: &GermplasmListSearchRequest) -> Result<u64> {
        let tables = self.read()?;
        Ok(tables.matching_lists(crop, request).len() as u64)
    }

    async fn search_lists(
        &self,
        crop: &str,
        request: &GermplasmListSearchRequest,
        page: Page,
    ) -> Result<Vec<GermplasmList>> {
        let tables = self.read()?;
        Ok(page.slice(tables.matching_lists(crop, request)))
    }

    async fn get_list(&self, crop: &str, list_id: i32) -> Result<Option<GermplasmList>> {
        let tables = self.read()?;
        Ok(tables
            .germplasm_lists
            .get(&list_id)
            .filter(|l| same_crop(&l.crop_name, crop))
            .cloned())
    }

    async fn create_list(&self, crop: &str, request: GermplasmListRequest) -> Result<i32> {
        let mut tables = self.write()?;
        tables.ensure_unique_list_name(crop, &request, None)?;

        let id = next_id(&tables.germplasm_lists);
        tables.germplasm_lists.insert(
            id,
            GermplasmList {
                id,
                crop_name: crop.to_lowercase(),
                name: request.name,
                description: request.description,
                list_type: request.list_type,
                program_uuid: request.program_uuid,
                owner_id: request.owner_id,
                locked: false,
                creation_date: Utc::now().date_naive(),
                entry_count: 0,
            },
        );

        tracing::info!(crop, list_id = id, "Germplasm list created");
        Ok(id)
    }

    async fn update_list(
        &self,
        crop: &str,
        list_id: i32,
        request: GermplasmListRequest,
    ) -> Result<()> {
        let mut tables = self.write()?;
        if tables.crop_list_mut(crop, list_id)?.locked {
            return Err(Error::Conflict(format!(
                "Germplasm list {} is locked",
                list_id
            )));
        }
        tables.ensure_unique_list_name(crop, &request, Some(list_id))?;

        let list = tables.crop_list_mut(crop, list_id)?;
        list.name = request.name;
        list.description = request.description;
        list.list_type = request.list_type;
        list.program_uuid = request.program_uuid;
        list.owner_id = request.owner_id;
        Ok(())
    }

    async fn toggle_lock(&self, crop: &str, list_id: i32) -> Result<bool> {
        let mut tables = self.write()?;
        let list = tables.crop_list_mut(crop, list_id)?;
        list.locked = !list.locked;

        tracing::info!(crop, list_id, locked = list.locked, "Germplasm list lock toggled");
        Ok(list.locked)
    }
}
