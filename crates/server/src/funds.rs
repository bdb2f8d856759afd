//! Fund-allocation board API endpoints.

use advisor::FundBoard;
use api_types::{
    Created,
    funds::{Deposit, FundCategoryNew, FundMove, FundRemoved},
};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub async fn get_board(State(state): State<ServerState>) -> Json<FundBoard> {
    let funds = state.funds.read().await;
    Json(funds.clone())
}

/// Adjusts the available pool; the returned board reflects the new balance.
pub async fn deposit(
    State(state): State<ServerState>,
    Json(payload): Json<Deposit>,
) -> Json<FundBoard> {
    let mut funds = state.funds.write().await;
    let available = funds.deposit(payload.amount);
    tracing::debug!(available, "funds adjusted");
    Json(funds.clone())
}

pub async fn create_category(
    State(state): State<ServerState>,
    Json(payload): Json<FundCategoryNew>,
) -> Result<Json<Created>, ServerError> {
    let mut funds = state.funds.write().await;
    let id = funds.add_category(&payload.name)?;
    Ok(Json(Created { id }))
}

pub async fn remove_category(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FundRemoved>, ServerError> {
    let mut funds = state.funds.write().await;
    let released = funds.remove_category(id)?;
    Ok(Json(FundRemoved { released }))
}

pub async fn allocate(
    State(state): State<ServerState>,
    Json(payload): Json<FundMove>,
) -> Result<Json<FundBoard>, ServerError> {
    let mut funds = state.funds.write().await;
    funds.allocate(payload.category_id, payload.amount)?;
    Ok(Json(funds.clone()))
}

pub async fn withdraw(
    State(state): State<ServerState>,
    Json(payload): Json<FundMove>,
) -> Result<Json<FundBoard>, ServerError> {
    let mut funds = state.funds.write().await;
    funds.withdraw(payload.category_id, payload.amount)?;
    Ok(Json(funds.clone()))
}
