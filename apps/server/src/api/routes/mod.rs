use crate::api::handlers::{
    germplasm_list, location, observation, ontology, program, role, study_instance,
    study_transactions,
};
use crate::state::AppState;
use axum::{
    routing::{get, patch, post, put},
    Router,
};

/// Mounted at `/program`.
pub fn program_routes() -> Router<AppState> {
    Router::new()
        .route("/list", get(program::list_programs))
        .route("/:program_uuid", get(program::get_program))
}

/// Mounted at `/roles`.
pub fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(role::search_roles).post(role::create_role))
        .route("/:role_id", get(role::get_role).put(role::update_role))
}

/// Mounted at `/crops/:crop`; every handler receives the crop as its first
/// path parameter.
pub fn crop_routes() -> Router<AppState> {
    Router::new()
        // Locations
        .route("/locations", post(location::create_location))
        .route("/locations/search", post(location::search_locations))
        .route(
            "/locations/:location_id",
            get(location::get_location).put(location::update_location),
        )
        .route(
            "/programs/:program_uuid/favorites/locations/:location_id",
            put(location::set_favorite),
        )
        // Germplasm lists
        .route("/germplasm-lists", post(germplasm_list::create_list))
        .route("/germplasm-lists/search", post(germplasm_list::search_lists))
        .route(
            "/germplasm-lists/:list_id",
            get(germplasm_list::get_list).put(germplasm_list::update_list),
        )
        .route(
            "/germplasm-lists/:list_id/toggle-status",
            patch(germplasm_list::toggle_lock),
        )
        // Study instances
        .route(
            "/studies/:study_id/instances",
            get(study_instance::search_instances).delete(study_instance::delete_instances),
        )
        .route(
            "/studies/:study_id/instances/generation",
            post(study_instance::create_instances),
        )
        .route(
            "/studies/:study_id/instances/:instance_id",
            get(study_instance::get_instance),
        )
        // Study transactions
        .route(
            "/studies/:study_id/transactions/search",
            post(study_transactions::search_transactions),
        )
        .route(
            "/studies/:study_id/transactions/cancellation",
            post(study_transactions::cancel_pending_transactions),
        )
        // Observations
        .route(
            "/studies/:study_id/observations/validation",
            post(observation::validate_measurements),
        )
        // Ontology
        .route(
            "/ontology/methods",
            get(ontology::get_methods).post(ontology::add_method),
        )
        .route(
            "/ontology/methods/:method_id",
            get(ontology::get_method)
                .put(ontology::update_method)
                .delete(ontology::delete_method),
        )
        .route(
            "/ontology/properties",
            get(ontology::get_properties).post(ontology::add_property),
        )
        .route(
            "/ontology/properties/:property_id",
            get(ontology::get_property),
        )
        .route("/ontology/classes", get(ontology::get_classes))
        .route("/ontology/datatypes", get(ontology::get_data_types))
}
