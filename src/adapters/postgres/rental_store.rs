use crate::domain::{BookId, Rental, RentalId};
use crate::ports::rental_store::{RentalStore as RentalStoreTrait, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをRentalに変換する
fn map_row_to_rental(row: &PgRow) -> Rental {
    Rental {
        id: RentalId::from_uuid(row.get("id")),
        renter_name: row.get("username"),
        rental_date: row.get("rental_date"),
        return_date: row.get("return_date"),
        book_id: BookId::from_uuid(row.get("book_id")),
    }
}

/// RentalStoreのPostgreSQL実装
///
/// book_idはbooksテーブルへの外部キー。
/// 書籍の状態更新とは別の文で保存される（同一トランザクションではない）。
pub struct RentalStore {
    pool: PgPool,
}

impl RentalStore {
    /// PostgreSQLコネクションプールから新しいRentalStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RentalStoreTrait for RentalStore {
    async fn get(&self, rental_id: RentalId) -> Result<Option<Rental>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, rental_date, return_date, book_id
            FROM rentals
            WHERE id = $1
            "#,
        )
        .bind(rental_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_rental))
    }

    /// 貸出記録を保存（upsert）
    async fn save(&self, rental: Rental) -> Result<Rental> {
        let row = sqlx::query(
            r#"
            INSERT INTO rentals (id, username, rental_date, return_date, book_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id)
            DO UPDATE SET
                username = EXCLUDED.username,
                rental_date = EXCLUDED.rental_date,
                return_date = EXCLUDED.return_date,
                book_id = EXCLUDED.book_id
            RETURNING id, username, rental_date, return_date, book_id
            "#,
        )
        .bind(rental.id.value())
        .bind(&rental.renter_name)
        .bind(rental.rental_date)
        .bind(rental.return_date)
        .bind(rental.book_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(map_row_to_rental(&row))
    }

    async fn delete(&self, rental_id: RentalId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM rentals WHERE id = $1")
            .bind(rental_id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Rental>> {
        let rentals: Vec<Rental> = sqlx::query(
            r#"
            SELECT id, username, rental_date, return_date, book_id
            FROM rentals
            ORDER BY sequence_number ASC
            "#,
        )
        .fetch(&self.pool)
        .map_ok(|row| map_row_to_rental(&row))
        .try_collect()
        .await?;

        Ok(rentals)
    }
}
