use thiserror::Error;

/// 貸出管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum RentalApplicationError {
    /// 書籍が存在しない
    #[error("Book not found")]
    BookNotFound,

    /// 貸出記録が存在しない
    #[error("Rental not found")]
    RentalNotFound,

    /// 書籍が貸出中のため貸し出せない
    #[error("Book is not available for rental")]
    BookNotAvailable,

    /// BookStoreのエラー
    #[error("Book store error")]
    BookStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// RentalStoreのエラー
    #[error("Rental store error")]
    RentalStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 貸出管理の Result型
pub type Result<T> = std::result::Result<T, RentalApplicationError>;
