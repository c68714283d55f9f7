use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::application::rental::RentalView;
use crate::domain::{
    AvailabilityStatus, Book, BookId, CreateBook, CreateRental, RentalId, UpdateBook, UpdateRental,
};

/// 書籍の登録・更新リクエスト（POST /api/books, PUT /api/books/:id）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// 省略時: 登録ではAVAILABLE、更新では現在の値を維持
    #[serde(default)]
    pub availability_status: Option<AvailabilityStatus>,
}

impl BookRequest {
    pub fn to_create_command(self) -> CreateBook {
        CreateBook {
            title: self.title,
            author: self.author,
            genre: self.genre,
            availability_status: self.availability_status,
        }
    }

    pub fn to_update_command(self, book_id: BookId) -> UpdateBook {
        UpdateBook {
            book_id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            availability_status: self.availability_status,
        }
    }
}

/// 書籍レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub availability_status: AvailabilityStatus,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            title: book.title,
            author: book.author,
            genre: book.genre,
            availability_status: book.availability_status,
        }
    }
}

/// 貸出作成リクエスト（POST /api/rentals）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub username: String,
    pub rental_date: NaiveDate,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    pub book_id: Uuid,
}

impl RentalRequest {
    pub fn to_command(self) -> CreateRental {
        CreateRental {
            renter_name: self.username,
            rental_date: self.rental_date,
            return_date: self.return_date,
            book_id: BookId::from_uuid(self.book_id),
        }
    }
}

/// 貸出更新リクエスト（PUT /api/rentals/:id）
///
/// 省略したフィールドは変更しない。
/// `returnDate` は「省略」と「明示的な null」を区別する。
/// 書籍の付け替えは受け付けない（`bookId` が含まれていても無視する）。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRentalRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub rental_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub return_date: Option<Option<NaiveDate>>,
}

impl UpdateRentalRequest {
    pub fn to_command(self, rental_id: RentalId) -> UpdateRental {
        UpdateRental {
            rental_id,
            renter_name: self.username,
            rental_date: self.rental_date,
            return_date: self.return_date,
        }
    }
}

/// フィールドが存在すれば（null を含め）`Some` として扱う
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// 貸出レスポンス（書籍を埋め込む）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: Uuid,
    pub username: String,
    pub rental_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub book: Option<BookResponse>,
}

impl From<RentalView> for RentalResponse {
    fn from(view: RentalView) -> Self {
        Self {
            id: view.rental.id.value(),
            username: view.rental.renter_name,
            rental_date: view.rental.rental_date,
            return_date: view.rental.return_date,
            book: view.book.map(BookResponse::from),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
