use crate::{
    models::{Page, Role, RoleRequest, RoleSearchRequest},
    Result,
};
use async_trait::async_trait;

#[async_trait]
pub trait RoleService: Send + Sync {
    async fn count_roles(&self, request: &RoleSearchRequest) -> Result<u64>;

    async fn search_roles(&self, request: &RoleSearchRequest, page: Page) -> Result<Vec<Role>>;

    async fn get_role(&self, role_id: i32) -> Result<Option<Role>>;

    async fn create_role(&self, request: RoleRequest) -> Result<i32>;

    async fn update_role(&self, role_id: i32, request: RoleRequest) -> Result<()>;
}
