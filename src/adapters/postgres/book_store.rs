use crate::domain::{AvailabilityStatus, Book, BookId};
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// PostgreSQLの行データをBookに変換する
///
/// availability_statusの文字列からの変換でエラーハンドリングを行う。
fn map_row_to_book(row: &PgRow) -> Result<Book> {
    let status_str: &str = row.get("availability_status");
    let availability_status = AvailabilityStatus::from_str(status_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Book {
        id: BookId::from_uuid(row.get("id")),
        title: row.get("title"),
        author: row.get("author"),
        genre: row.get("genre"),
        availability_status,
    })
}

/// BookStoreのPostgreSQL実装
///
/// booksテーブルに書籍を保存する。
/// 一覧の順序は挿入時に採番されるsequence_numberで保持する。
pub struct BookStore {
    pool: PgPool,
}

impl BookStore {
    /// PostgreSQLコネクションプールから新しいBookStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    async fn get(&self, book_id: BookId) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, author, genre, availability_status
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_book).transpose()
    }

    /// 書籍を保存（upsert）
    ///
    /// INSERT ... ON CONFLICT UPDATEの1文で実行するため、
    /// 1回の保存は原子的に反映される。sequence_numberは更新しない。
    async fn save(&self, book: Book) -> Result<Book> {
        let row = sqlx::query(
            r#"
            INSERT INTO books (id, title, author, genre, availability_status)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id)
            DO UPDATE SET
                title = EXCLUDED.title,
                author = EXCLUDED.author,
                genre = EXCLUDED.genre,
                availability_status = EXCLUDED.availability_status
            RETURNING id, title, author, genre, availability_status
            "#,
        )
        .bind(book.id.value())
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.availability_status.as_str())
        .fetch_one(&self.pool)
        .await?;

        map_row_to_book(&row)
    }

    /// 書籍を削除
    ///
    /// rentalsテーブルから参照されている場合は外部キー制約違反として
    /// エラーがそのまま返る。
    async fn delete(&self, book_id: BookId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(book_id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Book>> {
        sqlx::query(
            r#"
            SELECT id, title, author, genre, availability_status
            FROM books
            ORDER BY sequence_number ASC
            "#,
        )
        .fetch(&self.pool)
        .map(|row_result| -> Result<Book> {
            let row = row_result?;
            map_row_to_book(&row)
        })
        .try_collect()
        .await
    }

    async fn exists(&self, book_id: BookId) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM books WHERE id = $1)")
                .bind(book_id.value())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
