use super::{next_id, same_crop, InMemoryMiddleware};
use crate::{
    models::{DataTypeSummary, MethodRequest, MethodSummary, PropertyRequest, PropertySummary},
    services::OntologyService,
    Error, Result,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeSet;

#[async_trait]
impl OntologyService for InMemoryMiddleware {
    async fn get_methods(&self, crop: &str) -> Result<Vec<MethodSummary>> {
        let tables = self.read()?;
        Ok(tables
            .methods
            .values()
            .filter(|m| same_crop(&m.crop_name, crop))
            .cloned()
            .collect())
    }

    async fn get_method(&self, crop: &str, method_id: i32) -> Result<Option<MethodSummary>> {
        let tables = self.read()?;
        Ok(tables
            .methods
            .get(&method_id)
            .filter(|m| same_crop(&m.crop_name, crop))
            .cloned())
    }

    async fn add_method(&self, crop: &str, request: MethodRequest) -> Result<i32> {
        let mut tables = self.write()?;
        if tables
            .methods
            .values()
            .any(|m| same_crop(&m.crop_name, crop) && m.name.eq_ignore_ascii_case(&request.name))
        {
            return Err(Error::Conflict(format!(
                "Method '{}' already exists",
                request.name
            )));
        }

        let id = next_id(&tables.methods);
        tables.methods.insert(
            id,
            MethodSummary {
                id,
                crop_name: crop.to_lowercase(),
                name: request.name,
                definition: request.definition,
                date_created: Utc::now(),
                date_last_modified: None,
            },
        );

        tracing::info!(crop, method_id = id, "Method added");
        Ok(id)
    }

    async fn update_method(
        &self,
        crop: &str,
        method_id: i32,
        request: MethodRequest,
    ) -> Result<()> {
        let mut tables = self.write()?;
        let owned = tables
            .methods
            .get(&method_id)
            .is_some_and(|m| same_crop(&m.crop_name, crop));
        if !owned {
            return Err(Error::NotFound(format!("Method {}", method_id)));
        }
        if tables.methods.values().any(|m| {
            m.id != method_id
                && same_crop(&m.crop_name, crop)
                && m.name.eq_ignore_ascii_case(&request.name)
        }) {
            return Err(Error::Conflict(format!(
                "Method '{}' already exists",
                request.name
            )));
        }

        let method = tables
            .methods
            .get_mut(&method_id)
            .filter(|m| same_crop(&m.crop_name, crop))
            .ok_or_else(|| Error::NotFound(format!("Method {}", method_id)))?;
        method.name = request.name;
        method.definition = request.definition;
        method.date_last_modified = Some(Utc::now());
        Ok(())
    }

    async fn delete_method(&self, crop: &str, method_id: i32) -> Result<()> {
        let mut tables = self.write()?;
        let owned = tables
            .methods
            .get(&method_id)
            .is_some_and(|m| same_crop(&m.crop_name, crop));
        if !owned {
            return Err(Error::NotFound(format!("Method {}", method_id)));
        }
        tables.methods.remove(&method_id);

        tracing::info!(crop, method_id, "Method deleted");
        Ok(())
    }

    async fn get_properties(
        &self,
        crop: &str,
        class_name: Option<&str>,
    ) -> Result<Vec<PropertySummary>> {
        let tables = self.read()?;
        Ok(tables
            .properties
            .values()
            .filter(|p| same_crop(&p.crop_name, crop))
            .filter(|p| {
                class_name.map_or(true, |class| {
                    p.classes.iter().any(|c| c.eq_ignore_ascii_case(class))
                })
            })
            .cloned()
            .collect())
    }

    async fn get_property(&self, crop: &str, property_id: i32) -> Result<Option<PropertySummary>> {
        let tables = self.read()?;
        Ok(tables
            .properties
            .get(&property_id)
            .filter(|p| same_crop(&p.crop_name, crop))
            .cloned())
    }

    async fn add_property(&self, crop: &str, request: PropertyRequest) -> Result<i32> {
        let mut tables = self.write()?;
        if tables
            .properties
            .values()
            .any(|p| same_crop(&p.crop_name, crop) && p.name.eq_ignore_ascii_case(&request.name))
        {
            return Err(Error::Conflict(format!(
                "Property '{}' already exists",
                request.name
            )));
        }

        let id = next_id(&tables.properties);
        tables.properties.insert(
            id,
            PropertySummary {
                id,
                crop_name: crop.to_lowercase(),
                name: request.name,
                definition: request.definition,
                crop_ontology_id: request.crop_ontology_id,
                classes: request.classes,
            },
        );

        tracing::info!(crop, property_id = id, "Property added");
        Ok(id)
    }

    async fn get_classes(&self, crop: &str) -> Result<Vec<String>> {
        let tables = self.read()?;
        let classes: BTreeSet<&String> = tables
            .properties
            .values()
            .filter(|p| same_crop(&p.crop_name, crop))
            .flat_map(|p| p.classes.iter())
            .collect();
        Ok(classes.into_iter().cloned().collect())
    }

    async fn get_data_types(&self) -> Result<Vec<DataTypeSummary>> {
        let tables = self.read()?;
        Ok(tables.data_types.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(name: &str, classes: &[&str]) -> PropertyRequest {
        PropertyRequest {
            name: name.to_string(),
            definition: String::new(),
            crop_ontology_id: None,
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn method_lifecycle() {
        let middleware = InMemoryMiddleware::new();
        let id = middleware
            .add_method(
                "maize",
                MethodRequest {
                    name: "Visual scoring".to_string(),
                    definition: "Scored by eye".to_string(),
                },
            )
            .await
            .unwrap();

        middleware
            .update_method(
                "maize",
                id,
                MethodRequest {
                    name: "Visual score".to_string(),
                    definition: String::new(),
                },
            )
            .await
            .unwrap();
        let method = middleware.get_method("maize", id).await.unwrap().unwrap();
        assert_eq!(method.name, "Visual score");
        assert!(method.date_last_modified.is_some());

        middleware.delete_method("maize", id).await.unwrap();
        let err = middleware.delete_method("maize", id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn update_of_missing_method_is_not_found_before_name_clash() {
        let middleware = InMemoryMiddleware::new();
        let method = |name: &str| MethodRequest {
            name: name.to_string(),
            definition: String::new(),
        };
        let id = middleware.add_method("maize", method("Visual")).await.unwrap();
        middleware.add_method("maize", method("Counted")).await.unwrap();

        let err = middleware
            .update_method("maize", 999, method("visual"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let err = middleware
            .update_method("wheat", id, method("Counted"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let err = middleware
            .update_method("maize", id, method("COUNTED"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn classes_are_distinct_and_sorted() {
        let middleware = InMemoryMiddleware::new();
        middleware
            .add_property("maize", property("Plant height", &["Morphological", "Agronomic"]))
            .await
            .unwrap();
        middleware
            .add_property("maize", property("Grain yield", &["Agronomic"]))
            .await
            .unwrap();

        assert_eq!(
            middleware.get_classes("maize").await.unwrap(),
            vec!["Agronomic".to_string(), "Morphological".to_string()]
        );
        let morphological = middleware
            .get_properties("maize", Some("morphological"))
            .await
            .unwrap();
        assert_eq!(morphological.len(), 1);
        assert_eq!(morphological[0].name, "Plant height");

        let err = middleware
            .add_property("maize", property("plant HEIGHT", &["Agronomic"]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }
}
