use super::{next_id, InMemoryMiddleware};
use crate::{
    models::{Page, Role, RoleRequest, RoleSearchRequest},
    services::RoleService,
    Error, Result,
};
use async_trait::async_trait;
use std::collections::BTreeMap;

fn ensure_unique_name(roles: &BTreeMap<i32, Role>, name: &str, except: Option<i32>) -> Result<()> {
    if roles
        .values()
        .any(|r| Some(r.id) != except && r.name.eq_ignore_ascii_case(name))
    {
        return Err(Error::Conflict(format!("Role '{}' already exists", name)));
    }
    Ok(())
}

#[async_trait]
impl RoleService for InMemoryMiddleware {
    async fn count_roles(&self, request: &RoleSearchRequest) -> Result<u64> {
        let tables = self.read()?;
        Ok(tables.roles.values().filter(|r| request.matches(r)).count() as u64)
    }

    async fn search_roles(&self, request: &RoleSearchRequest, page: Page) -> Result<Vec<Role>> {
        let tables = self.read()?;
        let matching = tables
            .roles
            .values()
            .filter(|r| request.matches(r))
            .cloned()
            .collect();
        Ok(page.slice(matching))
    }

    async fn get_role(&self, role_id: i32) -> Result<Option<Role>> {
        let tables = self.read()?;
        Ok(tables.roles.get(&role_id).cloned())
    }

    async fn create_role(&self, request: RoleRequest) -> Result<i32> {
        let mut tables = self.write()?;
        ensure_unique_name(&tables.roles, &request.name, None)?;

        let id = next_id(&tables.roles);
        tables.roles.insert(
            id,
            Role {
                id,
                name: request.name,
                description: request.description,
                role_type_id: request.role_type_id,
                active: request.active,
                assignable: request.assignable,
                permission_ids: request.permission_ids,
            },
        );

        tracing::info!(role_id = id, "Role created");
        Ok(id)
    }

    async fn update_role(&self, role_id: i32, request: RoleRequest) -> Result<()> {
        let mut tables = self.write()?;
        if !tables.roles.contains_key(&role_id) {
            return Err(Error::NotFound(format!("Role {}", role_id)));
        }
        ensure_unique_name(&tables.roles, &request.name, Some(role_id))?;

        let role = tables
            .roles
            .get_mut(&role_id)
            .ok_or_else(|| Error::NotFound(format!("Role {}", role_id)))?;
        role.name = request.name;
        role.description = request.description;
        role.role_type_id = request.role_type_id;
        role.active = request.active;
        role.assignable = request.assignable;
        role.permission_ids = request.permission_ids;

        tracing::info!(role_id, "Role updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> RoleRequest {
        RoleRequest {
            name: name.to_string(),
            description: None,
            role_type_id: 3,
            permission_ids: vec![1, 2],
            active: true,
            assignable: true,
        }
    }

    #[tokio::test]
    async fn names_are_unique_ignoring_case() {
        let middleware = InMemoryMiddleware::new();
        middleware.create_role(request("Breeder")).await.unwrap();
        let err = middleware.create_role(request("BREEDER")).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn update_keeps_own_name_and_rejects_missing() {
        let middleware = InMemoryMiddleware::new();
        let id = middleware.create_role(request("Breeder")).await.unwrap();

        let mut renamed = request("Breeder");
        renamed.active = false;
        middleware.update_role(id, renamed).await.unwrap();
        let role = middleware.get_role(id).await.unwrap().unwrap();
        assert!(!role.active);

        let err = middleware.update_role(99, request("Technician")).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn update_of_missing_role_is_not_found_before_name_clash() {
        let middleware = InMemoryMiddleware::new();
        let id = middleware.create_role(request("Admin")).await.unwrap();
        middleware.create_role(request("Breeder")).await.unwrap();

        let err = middleware.update_role(999, request("Breeder")).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let err = middleware.update_role(id, request("breeder")).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn search_pages_in_id_order() {
        let middleware = InMemoryMiddleware::new();
        for name in ["Admin", "Breeder", "Technician"] {
            middleware.create_role(request(name)).await.unwrap();
        }

        let all = RoleSearchRequest::default();
        assert_eq!(middleware.count_roles(&all).await.unwrap(), 3);
        let page = Page {
            page: 1,
            size: 2,
            offset: 2,
        };
        let roles = middleware.search_roles(&all, page).await.unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].name, "Technician");
    }
}
