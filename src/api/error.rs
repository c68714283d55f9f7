use crate::application::{catalog::CatalogApplicationError, rental::RentalApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    Catalog(CatalogApplicationError),
    Rental(RentalApplicationError),
}

impl From<CatalogApplicationError> for ApiError {
    fn from(err: CatalogApplicationError) -> Self {
        ApiError::Catalog(err)
    }
}

impl From<RentalApplicationError> for ApiError {
    fn from(err: RentalApplicationError) -> Self {
        ApiError::Rental(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 404 Not Found - リクエストされたリソースが存在しない
            ApiError::Catalog(CatalogApplicationError::BookNotFound)
            | ApiError::Rental(RentalApplicationError::BookNotFound) => {
                (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", "Book not found")
            }
            ApiError::Rental(RentalApplicationError::RentalNotFound) => {
                (StatusCode::NOT_FOUND, "RENTAL_NOT_FOUND", "Rental not found")
            }

            // 409 Conflict - 貸出中の書籍を貸し出そうとした
            ApiError::Rental(RentalApplicationError::BookNotAvailable) => (
                StatusCode::CONFLICT,
                "BOOK_NOT_AVAILABLE",
                "Book is not available for rental",
            ),

            // 500 Internal Server Error - ストア障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Catalog(CatalogApplicationError::StoreError(ref e))
            | ApiError::Rental(RentalApplicationError::BookStoreError(ref e))
            | ApiError::Rental(RentalApplicationError::RentalStoreError(ref e)) => {
                tracing::error!(error.message = %e, error.cause_chain = ?e, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "An unexpected error occurred",
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
