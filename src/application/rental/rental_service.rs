use crate::application::ServiceDependencies;
use crate::domain::{
    self, Book, BookId, CreateRental, RentBookError, Rental, RentalId, RentalTransition,
    UpdateRental,
};
use std::collections::HashMap;

use super::availability;
use super::errors::{RentalApplicationError, Result};

/// 貸出の結果ビュー
///
/// 貸出記録と、参照先の書籍の現在の状態をまとめたもの。
/// 書籍レコードが既に存在しない場合のみ `book` は `None`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalView {
    pub rental: Rental,
    pub book: Option<Book>,
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 書籍が貸出可能であること（1冊につき貸出中の記録は1件まで）
///
/// # 一貫性保証
///
/// 書籍の状態更新と貸出記録の保存は別々のストア呼び出しで、
/// 1つのトランザクションにはまとめていない。
///
/// - 書籍の保存後に貸出記録の保存が失敗すると、書籍だけが貸出中になる
/// - 同じ書籍に対する同時リクエストが両方とも貸出可能を読んだ場合、
///   貸出中の記録が2件できる
///
/// # 戻り値
/// 作成された貸出と、貸出中になった書籍
pub async fn create_rental(deps: &ServiceDependencies, cmd: CreateRental) -> Result<RentalView> {
    // 1. 書籍の存在確認
    let book = deps
        .book_store
        .get(cmd.book_id)
        .await
        .map_err(RentalApplicationError::BookStoreError)?
        .ok_or(RentalApplicationError::BookNotFound)?;

    // 2. ドメイン層の純粋関数で貸出可否を判定し、貸出を組み立てる
    let rental = domain::rental::rent_book(&book, cmd).map_err(|e| match e {
        RentBookError::BookNotAvailable => {
            tracing::warn!(book_id = %book.id.value(), "Refused rental of unavailable book");
            RentalApplicationError::BookNotAvailable
        }
    })?;

    // 3. 書籍を貸出中にして保存
    let book =
        availability::apply_transition(&deps.book_store, book, RentalTransition::Opened).await?;

    // 4. 貸出記録を保存
    let rental = deps
        .rental_store
        .save(rental)
        .await
        .map_err(RentalApplicationError::RentalStoreError)?;

    tracing::info!(
        rental_id = %rental.id.value(),
        book_id = %rental.book_id.value(),
        "Rental created"
    );

    Ok(RentalView {
        rental,
        book: Some(book),
    })
}

/// 貸出記録を部分更新する
///
/// 指定されたフィールドのみ反映する。
/// 返却日が指定された場合は、書籍を無条件に貸出可能へ戻す
/// （既に返却済みの記録でも、同じ書籍に他の貸出が残っていても同様）。
///
/// # 一貫性保証
///
/// 書籍と貸出記録は別々に保存される。詳細は`create_rental()`を参照。
pub async fn update_rental(deps: &ServiceDependencies, cmd: UpdateRental) -> Result<RentalView> {
    // 1. 貸出記録を取得
    let rental = load_rental(deps, cmd.rental_id).await?;

    // 2. 指定されたフィールドを反映
    let (amended, transition) = domain::rental::amend_rental(rental, cmd);

    // 3. 返却日が指定されていれば書籍を解放
    let book = match transition {
        Some(transition) => Some(
            availability::transition_book(&deps.book_store, amended.book_id, transition).await?,
        ),
        None => find_book(deps, amended.book_id).await?,
    };

    // 4. 貸出記録を保存
    let rental = deps
        .rental_store
        .save(amended)
        .await
        .map_err(RentalApplicationError::RentalStoreError)?;

    tracing::info!(
        rental_id = %rental.id.value(),
        active = rental.is_active(),
        "Rental updated"
    );

    Ok(RentalView { rental, book })
}

/// IDで貸出を取得する
pub async fn get_rental(deps: &ServiceDependencies, rental_id: RentalId) -> Result<RentalView> {
    let rental = load_rental(deps, rental_id).await?;
    let book = find_book(deps, rental.book_id).await?;

    Ok(RentalView { rental, book })
}

/// 全貸出を登録順に取得する
///
/// 書籍は一覧を1回だけ取得して突き合わせる。
pub async fn list_rentals(deps: &ServiceDependencies) -> Result<Vec<RentalView>> {
    let rentals = deps
        .rental_store
        .list()
        .await
        .map_err(RentalApplicationError::RentalStoreError)?;

    let books: HashMap<BookId, Book> = deps
        .book_store
        .list()
        .await
        .map_err(RentalApplicationError::BookStoreError)?
        .into_iter()
        .map(|book| (book.id, book))
        .collect();

    tracing::debug!(count = rentals.len(), "Listing rentals");

    Ok(rentals
        .into_iter()
        .map(|rental| {
            let book = books.get(&rental.book_id).cloned();
            RentalView { rental, book }
        })
        .collect())
}

/// 貸出記録を削除する
///
/// 貸出中（返却日なし）の記録であれば、削除の前に書籍を貸出可能へ戻す。
/// 返却済みの記録は書籍に触れずに削除する。
///
/// 貸出中の記録の書籍が既に存在しない場合は `BookNotFound` を返し、
/// 記録は削除しない（参照整合性を持たないストアでのみ起こりうる）。
pub async fn delete_rental(deps: &ServiceDependencies, rental_id: RentalId) -> Result<()> {
    // 1. 貸出記録を取得
    let rental = load_rental(deps, rental_id).await?;

    // 2. 貸出中なら書籍を解放
    if let Some(transition) = domain::rental::removal_transition(&rental) {
        availability::transition_book(&deps.book_store, rental.book_id, transition).await?;
    }

    // 3. 貸出記録を削除
    let deleted = deps
        .rental_store
        .delete(rental_id)
        .await
        .map_err(RentalApplicationError::RentalStoreError)?;

    if !deleted {
        return Err(RentalApplicationError::RentalNotFound);
    }

    tracing::info!(rental_id = %rental_id.value(), "Rental deleted");

    Ok(())
}

async fn load_rental(deps: &ServiceDependencies, rental_id: RentalId) -> Result<Rental> {
    deps.rental_store
        .get(rental_id)
        .await
        .map_err(RentalApplicationError::RentalStoreError)?
        .ok_or(RentalApplicationError::RentalNotFound)
}

async fn find_book(deps: &ServiceDependencies, book_id: BookId) -> Result<Option<Book>> {
    deps.book_store
        .get(book_id)
        .await
        .map_err(RentalApplicationError::BookStoreError)
}
