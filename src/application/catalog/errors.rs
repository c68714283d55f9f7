use thiserror::Error;

/// カタログ管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogApplicationError {
    /// 書籍が見つからない
    #[error("Book not found")]
    BookNotFound,

    /// BookStoreのエラー
    #[error("Book store error")]
    StoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// カタログ管理の Result型
pub type Result<T> = std::result::Result<T, CatalogApplicationError>;
