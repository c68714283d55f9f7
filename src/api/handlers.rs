use crate::application::{ServiceDependencies, catalog, rental};
use crate::domain::value_objects::{BookId, RentalId};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{BookRequest, BookResponse, RentalRequest, RentalResponse, UpdateRentalRequest},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Book handlers
// ============================================================================

/// POST /api/books - 書籍を登録
///
/// availabilityStatus を省略した場合は AVAILABLE として登録する。
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = catalog::create_book(&state.service_deps, req.to_create_command()).await?;
    Ok(Json(BookResponse::from(book)))
}

/// PUT /api/books/:id - 書籍情報を更新
///
/// タイトル・著者・ジャンルを置き換える。
/// availabilityStatus は指定された場合のみ上書きする。
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
    Json(req): Json<BookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let cmd = req.to_update_command(BookId::from_uuid(book_id));
    let book = catalog::update_book(&state.service_deps, cmd).await?;
    Ok(Json(BookResponse::from(book)))
}

/// DELETE /api/books/:id - 書籍を削除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_book(&state.service_deps, BookId::from_uuid(book_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/books/:id - 書籍をIDで取得
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = catalog::get_book(&state.service_deps, BookId::from_uuid(book_id)).await?;
    Ok(Json(BookResponse::from(book)))
}

/// GET /api/books - 全書籍を取得
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = catalog::list_books(&state.service_deps).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

// ============================================================================
// Rental handlers
// ============================================================================

/// POST /api/rentals - 書籍を貸し出す
///
/// 強制されるビジネスルール:
/// - 書籍が存在すること（404）
/// - 書籍が貸出可能であること（409）
pub async fn create_rental(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RentalRequest>,
) -> Result<Json<RentalResponse>, ApiError> {
    let view = rental::create_rental(&state.service_deps, req.to_command()).await?;
    Ok(Json(RentalResponse::from(view)))
}

/// PUT /api/rentals/:id - 貸出記録を部分更新
///
/// return_date を含む場合は書籍を AVAILABLE に戻す。
pub async fn update_rental(
    State(state): State<Arc<AppState>>,
    Path(rental_id): Path<Uuid>,
    Json(req): Json<UpdateRentalRequest>,
) -> Result<Json<RentalResponse>, ApiError> {
    let cmd = req.to_command(RentalId::from_uuid(rental_id));
    let view = rental::update_rental(&state.service_deps, cmd).await?;
    Ok(Json(RentalResponse::from(view)))
}

/// DELETE /api/rentals/:id - 貸出記録を削除
///
/// 未返却の貸出であれば書籍を AVAILABLE に戻してから削除する。
pub async fn delete_rental(
    State(state): State<Arc<AppState>>,
    Path(rental_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    rental::delete_rental(&state.service_deps, RentalId::from_uuid(rental_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/rentals/:id - 貸出をIDで取得
pub async fn get_rental(
    State(state): State<Arc<AppState>>,
    Path(rental_id): Path<Uuid>,
) -> Result<Json<RentalResponse>, ApiError> {
    let view = rental::get_rental(&state.service_deps, RentalId::from_uuid(rental_id)).await?;
    Ok(Json(RentalResponse::from(view)))
}

/// GET /api/rentals - 全貸出を取得
pub async fn list_rentals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RentalResponse>>, ApiError> {
    let views = rental::list_rentals(&state.service_deps).await?;
    Ok(Json(views.into_iter().map(RentalResponse::from).collect()))
}
