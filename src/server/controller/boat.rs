use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::PageDto, boat::BoatDto, load::LoadDto},
    server::{
        controller::{
            has_attr, parse_body, parse_cursor, PageQuery, INVALID_ATTRIBUTE_COUNT,
            MISSING_ATTRIBUTES,
        },
        error::AppError,
        middleware::auth::AuthGuard,
        service::{
            assignment::{AssignmentService, PAIR_NOT_FOUND},
            boat::{BoatService, BOAT_NOT_FOUND},
            load::LoadService,
        },
        state::AppState,
        util::{links, negotiate},
    },
};

/// GET /boats
/// Paginated listing of the authenticated caller's boats.
pub async fn list_boats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state, &headers).require().await?;
    negotiate::require_json_content(&headers)?;
    negotiate::require_json_accept(&headers)?;

    let offset = parse_cursor(query.cursor.as_deref())?;
    let page = BoatService::new(&state.db)
        .page(&principal.sub, offset)
        .await?;

    let items = page
        .items
        .into_iter()
        .map(|b| BoatDto::from_model(b, &state.app_url))
        .collect();
    let next = page
        .next_cursor
        .map(|c| links::next_page_link(&state.app_url, "/boats", c));

    Ok(Json(PageDto {
        items,
        count: page.count,
        next,
    }))
}

/// GET /boats/{boat_id}
/// Single boat, readable only by its owner.
pub async fn get_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(boat_id): Path<i32>,
) -> Result<Json<BoatDto>, AppError> {
    let principal = AuthGuard::new(&state, &headers).require().await?;
    negotiate::require_json_accept(&headers)?;

    let boat = BoatService::new(&state.db)
        .get(boat_id)
        .await?
        .ok_or_else(|| AppError::NotFound(BOAT_NOT_FOUND.to_string()))?;

    if boat.owner != principal.sub {
        return Err(AppError::OwnershipMismatch);
    }

    Ok(Json(BoatDto::from_model(boat, &state.app_url)))
}

/// GET /boats/{boat_id}/loads
/// Full records of the loads carried by a boat. No ownership check.
pub async fn get_boat_loads(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(boat_id): Path<i32>,
) -> Result<Json<Vec<LoadDto>>, AppError> {
    negotiate::require_json_content(&headers)?;
    negotiate::require_json_accept(&headers)?;

    let service = BoatService::new(&state.db);
    let boat = service
        .get(boat_id)
        .await?
        .ok_or_else(|| AppError::NotFound(BOAT_NOT_FOUND.to_string()))?;

    let loads = service.loads_of(&boat).await?;
    if loads.is_empty() {
        return Err(AppError::NotFound(
            "No loads assigned to this boat".to_string(),
        ));
    }

    let dtos = loads
        .into_iter()
        .map(|l| LoadDto::from_model(l, Some(boat.name.clone()), &state.app_url))
        .collect();
    Ok(Json(dtos))
}

/// POST /boats
/// Creates a boat owned by the authenticated caller.
pub async fn create_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    raw: String,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state, &headers).require().await?;
    negotiate::require_json_content(&headers)?;
    negotiate::require_json_accept(&headers)?;

    let body = parse_body(&raw)?;
    if body.len() != 3 {
        return Err(AppError::BadRequest(INVALID_ATTRIBUTE_COUNT.to_string()));
    }
    if !(has_attr(&body, "name") && has_attr(&body, "type") && has_attr(&body, "length")) {
        return Err(AppError::BadRequest(MISSING_ATTRIBUTES.to_string()));
    }

    let boat = BoatService::new(&state.db)
        .create(&body, &principal.sub)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BoatDto::from_model(boat, &state.app_url)),
    ))
}

/// PATCH /boats/{boat_id}
/// Partial update of the boat's writable attributes.
pub async fn patch_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(boat_id): Path<i32>,
    raw: String,
) -> Result<Json<BoatDto>, AppError> {
    let principal = AuthGuard::new(&state, &headers).require().await?;
    negotiate::require_json_content(&headers)?;
    negotiate::require_json_accept(&headers)?;

    let body = parse_body(&raw)?;
    if body.is_empty() || body.len() > 3 {
        return Err(AppError::BadRequest(INVALID_ATTRIBUTE_COUNT.to_string()));
    }
    if !(has_attr(&body, "name") || has_attr(&body, "type") || has_attr(&body, "length")) {
        return Err(AppError::BadRequest(MISSING_ATTRIBUTES.to_string()));
    }

    let service = BoatService::new(&state.db);
    let boat = service
        .get(boat_id)
        .await?
        .ok_or_else(|| AppError::NotFound(BOAT_NOT_FOUND.to_string()))?;

    if boat.owner != principal.sub {
        return Err(AppError::OwnershipMismatch);
    }

    let updated = service.patch(boat, &body).await?;
    Ok(Json(BoatDto::from_model(updated, &state.app_url)))
}

/// PUT /boats/{boat_id}
/// Full replace of the boat's writable attributes; `owner` and `loads` are
/// preserved.
pub async fn put_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(boat_id): Path<i32>,
    raw: String,
) -> Result<Json<BoatDto>, AppError> {
    let principal = AuthGuard::new(&state, &headers).require().await?;
    negotiate::require_json_content(&headers)?;
    negotiate::require_json_accept(&headers)?;

    let body = parse_body(&raw)?;
    if body.len() != 3 {
        return Err(AppError::BadRequest(INVALID_ATTRIBUTE_COUNT.to_string()));
    }
    if !(has_attr(&body, "name") && has_attr(&body, "type") && has_attr(&body, "length")) {
        return Err(AppError::BadRequest(MISSING_ATTRIBUTES.to_string()));
    }

    let service = BoatService::new(&state.db);
    let boat = service
        .get(boat_id)
        .await?
        .ok_or_else(|| AppError::NotFound(BOAT_NOT_FOUND.to_string()))?;

    if boat.owner != principal.sub {
        return Err(AppError::OwnershipMismatch);
    }

    let replaced = service.replace(boat, &body).await?;
    Ok(Json(BoatDto::from_model(replaced, &state.app_url)))
}

/// DELETE /boats/{boat_id}
/// Deletes the boat, detaching all carried loads first.
pub async fn delete_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(boat_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let principal = AuthGuard::new(&state, &headers).require().await?;

    let service = BoatService::new(&state.db);
    let boat = service
        .get(boat_id)
        .await?
        .ok_or_else(|| AppError::NotFound(BOAT_NOT_FOUND.to_string()))?;

    if boat.owner != principal.sub {
        return Err(AppError::OwnershipMismatch);
    }

    service.delete(boat.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /boats/{boat_id}/loads/{load_id}
/// Assigns a load to the caller's boat.
pub async fn assign_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((boat_id, load_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    let principal = AuthGuard::new(&state, &headers).require().await?;

    let boat = BoatService::new(&state.db)
        .get(boat_id)
        .await?
        .ok_or_else(|| AppError::NotFound(PAIR_NOT_FOUND.to_string()))?;

    if boat.owner != principal.sub {
        return Err(AppError::OwnershipMismatch);
    }

    let load = LoadService::new(&state.db)
        .get(load_id)
        .await?
        .ok_or_else(|| AppError::NotFound(PAIR_NOT_FOUND.to_string()))?;

    if load.carrier.is_some() {
        return Err(AppError::LoadAlreadyAssigned);
    }

    AssignmentService::new(&state.db)
        .assign(boat_id, load_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /boats/{boat_id}/loads/{load_id}
/// Removes a load from the caller's boat.
pub async fn unassign_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((boat_id, load_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    let principal = AuthGuard::new(&state, &headers).require().await?;

    let boat = BoatService::new(&state.db)
        .get(boat_id)
        .await?
        .ok_or_else(|| AppError::NotFound(PAIR_NOT_FOUND.to_string()))?;

    if boat.owner != principal.sub {
        return Err(AppError::OwnershipMismatch);
    }

    let load = LoadService::new(&state.db)
        .get(load_id)
        .await?
        .ok_or_else(|| AppError::NotFound(PAIR_NOT_FOUND.to_string()))?;

    if load.carrier.as_ref().and_then(|c| c.boat_id()) != Some(boat_id) {
        return Err(AppError::LoadNotAssignedToBoat);
    }

    AssignmentService::new(&state.db)
        .unassign(boat_id, load_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
