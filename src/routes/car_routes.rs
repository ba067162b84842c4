use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, patch},
    Json, Router,
};
use validator::Validate;

use crate::dto::car_dto::{CarIndexRequest, CarStoreRequest, CarUpdateRequest};
use crate::dto::response::{ApiResponse, SuccessResponse};
use crate::models::Car;
use crate::services::command::CarDelete;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/api/cars", get(index_cars).post(store_cars))
        .route("/api/cars/:id", patch(update_car).delete(delete_car))
}

async fn index_cars(
    State(state): State<AppState>,
    query: Result<Query<CarIndexRequest>, QueryRejection>,
) -> AppResult<Json<ApiResponse<Vec<Car>>>> {
    let Query(request) = query?;
    let cars = state.car_service.index(request.into()).await?;
    Ok(Json(ApiResponse::success(cars)))
}

async fn store_cars(
    State(state): State<AppState>,
    body: Result<Json<CarStoreRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Vec<Car>>>> {
    let Json(request) = body?;
    request.validate()?;

    let cars = state.car_service.store(request.into()).await?;
    Ok(Json(ApiResponse::success(cars)))
}

async fn update_car(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<CarUpdateRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Car>>> {
    let Path(id) = id?;
    let Json(request) = body?;
    request.validate()?;

    let car = state.car_service.update(request.into_command(id)).await?;
    Ok(Json(ApiResponse::success(car)))
}

async fn delete_car(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let Path(id) = id?;

    state.car_service.delete(CarDelete { id }).await?;
    Ok(Json(SuccessResponse::default()))
}
