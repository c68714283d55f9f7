use crate::domain::{self, Book, BookId, RentalTransition};
use crate::ports::BookStore;
use std::sync::Arc;

use super::errors::{RentalApplicationError, Result};

/// 貸出の遷移を書籍に適用して保存する
///
/// 書籍の貸出状態を書き換える経路はこの関数に集約する。
/// 状態は遷移から直接決める（`domain::book::availability_after`）。
/// 同じ書籍を参照する他の貸出中の記録は数えないため、
/// 返却・削除時に別の貸出が残っていても `Available` になる。
pub(super) async fn apply_transition(
    book_store: &Arc<dyn BookStore>,
    book: Book,
    transition: RentalTransition,
) -> Result<Book> {
    let previous = book.availability_status;
    let updated = domain::book::apply_rental_transition(book, transition);

    let saved = book_store
        .save(updated)
        .await
        .map_err(RentalApplicationError::BookStoreError)?;

    tracing::info!(
        book_id = %saved.id.value(),
        ?transition,
        from = previous.as_str(),
        to = saved.availability_status.as_str(),
        "Book availability changed"
    );

    Ok(saved)
}

/// 書籍をIDで読み込んでから遷移を適用する
///
/// 貸出記録の更新・削除時に、参照先の書籍を解放するために使う。
pub(super) async fn transition_book(
    book_store: &Arc<dyn BookStore>,
    book_id: BookId,
    transition: RentalTransition,
) -> Result<Book> {
    let book = book_store
        .get(book_id)
        .await
        .map_err(RentalApplicationError::BookStoreError)?
        .ok_or(RentalApplicationError::BookNotFound)?;

    apply_transition(book_store, book, transition).await
}
