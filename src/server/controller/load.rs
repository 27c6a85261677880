use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::PageDto, load::LoadDto},
    server::{
        controller::{
            has_attr, parse_body, parse_cursor, PageQuery, INVALID_ATTRIBUTE_COUNT,
            MISSING_ATTRIBUTES,
        },
        error::AppError,
        service::load::{LoadService, LOAD_NOT_FOUND},
        state::AppState,
        util::{links, negotiate},
    },
};

/// GET /loads
/// Paginated listing of all loads. Loads are not owner-scoped.
pub async fn list_loads(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    negotiate::require_json_content(&headers)?;
    negotiate::require_json_accept(&headers)?;

    let offset = parse_cursor(query.cursor.as_deref())?;
    let service = LoadService::new(&state.db);
    let page = service.page(offset).await?;

    let mut items = Vec::with_capacity(page.items.len());
    for load in page.items {
        let carrier_name = service.carrier_name(&load).await?;
        items.push(LoadDto::from_model(load, carrier_name, &state.app_url));
    }
    let next = page
        .next_cursor
        .map(|c| links::next_page_link(&state.app_url, "/loads", c));

    Ok(Json(PageDto {
        items,
        count: page.count,
        next,
    }))
}

/// GET /loads/{load_id}
pub async fn get_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(load_id): Path<i32>,
) -> Result<Json<LoadDto>, AppError> {
    negotiate::require_json_accept(&headers)?;

    let service = LoadService::new(&state.db);
    let load = service
        .get(load_id)
        .await?
        .ok_or_else(|| AppError::NotFound(LOAD_NOT_FOUND.to_string()))?;

    let carrier_name = service.carrier_name(&load).await?;
    Ok(Json(LoadDto::from_model(
        load,
        carrier_name,
        &state.app_url,
    )))
}

/// POST /loads
pub async fn create_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    raw: String,
) -> Result<impl IntoResponse, AppError> {
    negotiate::require_json_content(&headers)?;
    negotiate::require_json_accept(&headers)?;

    let body = parse_body(&raw)?;
    if body.len() != 3 {
        return Err(AppError::BadRequest(INVALID_ATTRIBUTE_COUNT.to_string()));
    }
    if !(has_attr(&body, "volume") && has_attr(&body, "content") && has_attr(&body, "creation_date"))
    {
        return Err(AppError::BadRequest(MISSING_ATTRIBUTES.to_string()));
    }

    let load = LoadService::new(&state.db).create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(LoadDto::from_model(load, None, &state.app_url)),
    ))
}

/// PATCH /loads/{load_id}
/// Partial update of the load's writable attributes.
pub async fn patch_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(load_id): Path<i32>,
    raw: String,
) -> Result<Json<LoadDto>, AppError> {
    negotiate::require_json_content(&headers)?;
    negotiate::require_json_accept(&headers)?;

    let body = parse_body(&raw)?;
    if body.is_empty() || body.len() > 3 {
        return Err(AppError::BadRequest(INVALID_ATTRIBUTE_COUNT.to_string()));
    }
    if !(has_attr(&body, "volume") || has_attr(&body, "content") || has_attr(&body, "creation_date"))
    {
        return Err(AppError::BadRequest(MISSING_ATTRIBUTES.to_string()));
    }

    let service = LoadService::new(&state.db);
    let load = service
        .get(load_id)
        .await?
        .ok_or_else(|| AppError::NotFound(LOAD_NOT_FOUND.to_string()))?;

    let updated = service.patch(load, &body).await?;
    let carrier_name = service.carrier_name(&updated).await?;
    Ok(Json(LoadDto::from_model(
        updated,
        carrier_name,
        &state.app_url,
    )))
}

/// PUT /loads/{load_id}
/// Full replace of the load's writable attributes; `carrier` is preserved.
pub async fn put_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(load_id): Path<i32>,
    raw: String,
) -> Result<Json<LoadDto>, AppError> {
    negotiate::require_json_content(&headers)?;
    negotiate::require_json_accept(&headers)?;

    let body = parse_body(&raw)?;
    if body.len() != 3 {
        return Err(AppError::BadRequest(INVALID_ATTRIBUTE_COUNT.to_string()));
    }
    if !(has_attr(&body, "volume") && has_attr(&body, "content") && has_attr(&body, "creation_date"))
    {
        return Err(AppError::BadRequest(MISSING_ATTRIBUTES.to_string()));
    }

    let service = LoadService::new(&state.db);
    let load = service
        .get(load_id)
        .await?
        .ok_or_else(|| AppError::NotFound(LOAD_NOT_FOUND.to_string()))?;

    let replaced = service.replace(load, &body).await?;
    let carrier_name = service.carrier_name(&replaced).await?;
    Ok(Json(LoadDto::from_model(
        replaced,
        carrier_name,
        &state.app_url,
    )))
}

/// DELETE /loads/{load_id}
/// Deletes the load, detaching it from its carrier first.
pub async fn delete_load(
    State(state): State<AppState>,
    Path(load_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let service = LoadService::new(&state.db);
    let load = service
        .get(load_id)
        .await?
        .ok_or_else(|| AppError::NotFound(LOAD_NOT_FOUND.to_string()))?;

    service.delete(load.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
