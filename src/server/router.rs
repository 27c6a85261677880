use axum::{
    routing::{get, put},
    Router,
};

use crate::server::{
    controller::{boat, collection_method_not_allowed, load},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/boats",
            get(boat::list_boats)
                .post(boat::create_boat)
                .patch(collection_method_not_allowed)
                .put(collection_method_not_allowed)
                .delete(collection_method_not_allowed),
        )
        .route(
            "/boats/{boat_id}",
            get(boat::get_boat)
                .patch(boat::patch_boat)
                .put(boat::put_boat)
                .delete(boat::delete_boat),
        )
        .route("/boats/{boat_id}/loads", get(boat::get_boat_loads))
        .route(
            "/boats/{boat_id}/loads/{load_id}",
            put(boat::assign_load).delete(boat::unassign_load),
        )
        .route(
            "/loads",
            get(load::list_loads)
                .post(load::create_load)
                .patch(collection_method_not_allowed)
                .put(collection_method_not_allowed)
                .delete(collection_method_not_allowed),
        )
        .route(
            "/loads/{load_id}",
            get(load::get_load)
                .patch(load::patch_load)
                .put(load::put_load)
                .delete(load::delete_load),
        )
}
