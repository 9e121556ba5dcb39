use crate::{
    models::{DataTypeSummary, MethodRequest, MethodSummary, PropertyRequest, PropertySummary},
    Result,
};
use async_trait::async_trait;

/// Crop ontology metadata: methods, properties, their classes and data types.
#[async_trait]
pub trait OntologyService: Send + Sync {
    async fn get_methods(&self, crop: &str) -> Result<Vec<MethodSummary>>;

    async fn get_method(&self, crop: &str, method_id: i32) -> Result<Option<MethodSummary>>;

    async fn add_method(&self, crop: &str, request: MethodRequest) -> Result<i32>;

    async fn update_method(&self, crop: &str, method_id: i32, request: MethodRequest)
        -> Result<()>;

    async fn delete_method(&self, crop: &str, method_id: i32) -> Result<()>;

    /// Properties of `class_name` (case-insensitive), or all when `None`.
    async fn get_properties(
        &self,
        crop: &str,
        class_name: Option<&str>,
    ) -> Result<Vec<PropertySummary>>;

    async fn get_property(&self, crop: &str, property_id: i32)
        -> Result<Option<PropertySummary>>;

    async fn add_property(&self, crop: &str, request: PropertyRequest) -> Result<i32>;

    /// Distinct class names used by the crop's properties, sorted.
    async fn get_classes(&self, crop: &str) -> Result<Vec<String>>;

    async fn get_data_types(&self) -> Result<Vec<DataTypeSummary>>;
}
