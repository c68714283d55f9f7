use crate::application::ServiceDependencies;
use crate::domain::{self, Book, BookId, CreateBook, UpdateBook};

use super::errors::{CatalogApplicationError, Result};

/// 書籍を登録する
///
/// 貸出状態が指定されなければ貸出可能として登録する。
pub async fn create_book(deps: &ServiceDependencies, cmd: CreateBook) -> Result<Book> {
    let book = domain::book::create_book(cmd);

    let saved = deps
        .book_store
        .save(book)
        .await
        .map_err(CatalogApplicationError::StoreError)?;

    tracing::info!(
        book_id = %saved.id.value(),
        status = saved.availability_status.as_str(),
        "Book created"
    );

    Ok(saved)
}

/// 書籍情報を更新する
///
/// タイトル・著者・ジャンルは置き換える。
/// 貸出状態は明示的に指定された場合のみ上書きし、省略時は現在の値を保つ。
pub async fn update_book(deps: &ServiceDependencies, cmd: UpdateBook) -> Result<Book> {
    let book = load_book(deps, cmd.book_id).await?;

    let updated = domain::book::update_book(book, cmd);

    let saved = deps
        .book_store
        .save(updated)
        .await
        .map_err(CatalogApplicationError::StoreError)?;

    tracing::info!(book_id = %saved.id.value(), "Book updated");

    Ok(saved)
}

/// 書籍を削除する
///
/// 貸出記録からの参照は確認しない（連鎖削除も削除拒否も行わない）。
pub async fn delete_book(deps: &ServiceDependencies, book_id: BookId) -> Result<()> {
    let exists = deps
        .book_store
        .exists(book_id)
        .await
        .map_err(CatalogApplicationError::StoreError)?;

    if !exists {
        return Err(CatalogApplicationError::BookNotFound);
    }

    let deleted = deps
        .book_store
        .delete(book_id)
        .await
        .map_err(CatalogApplicationError::StoreError)?;

    // exists と delete の間に他のリクエストが削除した場合
    if !deleted {
        return Err(CatalogApplicationError::BookNotFound);
    }

    tracing::info!(book_id = %book_id.value(), "Book deleted");

    Ok(())
}

/// IDで書籍を取得する
pub async fn get_book(deps: &ServiceDependencies, book_id: BookId) -> Result<Book> {
    load_book(deps, book_id).await
}

/// 全書籍を取得する
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.book_store
        .list()
        .await
        .map_err(CatalogApplicationError::StoreError)
}

async fn load_book(deps: &ServiceDependencies, book_id: BookId) -> Result<Book> {
    deps.book_store
        .get(book_id)
        .await
        .map_err(CatalogApplicationError::StoreError)?
        .ok_or(CatalogApplicationError::BookNotFound)
}
