use serde::{Deserialize, Serialize};

use super::{BookId, CreateBook, UpdateBook};

/// 書籍の貸出状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    /// 貸出可能
    #[default]
    Available,
    /// 貸出中
    Unavailable,
}

impl AvailabilityStatus {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "AVAILABLE",
            AvailabilityStatus::Unavailable => "UNAVAILABLE",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, AvailabilityStatus::Available)
    }
}

impl std::str::FromStr for AvailabilityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(AvailabilityStatus::Available),
            "UNAVAILABLE" => Ok(AvailabilityStatus::Unavailable),
            _ => Err(format!("Invalid availability status: {}", s)),
        }
    }
}

/// Book集約 - カタログに登録された1冊の書籍
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub availability_status: AvailabilityStatus,
}

/// 貸出のライフサイクルで書籍の状態に影響する遷移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalTransition {
    /// 貸出が開始された
    Opened,
    /// 貸出が終了した（返却日の設定、または貸出中の記録の削除）
    Closed,
}

/// 純粋関数：遷移後の貸出状態を決める
///
/// 書籍の状態を書き換える規則はこの関数だけが持つ。
/// 現状は遷移から直接決めており、同じ書籍を参照する他の貸出中の記録は数えない。
pub fn availability_after(transition: RentalTransition) -> AvailabilityStatus {
    match transition {
        RentalTransition::Opened => AvailabilityStatus::Unavailable,
        RentalTransition::Closed => AvailabilityStatus::Available,
    }
}

/// 純粋関数：貸出の遷移を書籍に適用する
pub fn apply_rental_transition(book: Book, transition: RentalTransition) -> Book {
    Book {
        availability_status: availability_after(transition),
        ..book
    }
}

/// 純粋関数：書籍を登録する
///
/// 貸出状態の指定がなければ `Available`。
pub fn create_book(cmd: CreateBook) -> Book {
    Book {
        id: BookId::new(),
        title: cmd.title,
        author: cmd.author,
        genre: cmd.genre,
        availability_status: cmd.availability_status.unwrap_or_default(),
    }
}

/// 純粋関数：書籍情報を更新する
///
/// タイトル・著者・ジャンルは置き換え、貸出状態は指定時のみ上書きする。
pub fn update_book(book: Book, cmd: UpdateBook) -> Book {
    Book {
        id: book.id,
        title: cmd.title,
        author: cmd.author,
        genre: cmd.genre,
        availability_status: cmd
            .availability_status
            .unwrap_or(book.availability_status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_book(status: AvailabilityStatus) -> Book {
        Book {
            id: BookId::new(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: "Sci-Fi".to_string(),
            availability_status: status,
        }
    }

    #[test]
    fn test_create_book_defaults_to_available() {
        let book = create_book(CreateBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: "Sci-Fi".to_string(),
            availability_status: None,
        });

        assert_eq!(book.availability_status, AvailabilityStatus::Available);
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn test_create_book_keeps_explicit_status() {
        let book = create_book(CreateBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: "Sci-Fi".to_string(),
            availability_status: Some(AvailabilityStatus::Unavailable),
        });

        assert_eq!(book.availability_status, AvailabilityStatus::Unavailable);
    }

    #[test]
    fn test_update_book_leaves_status_when_omitted() {
        let book = sample_book(AvailabilityStatus::Unavailable);
        let id = book.id;

        let updated = update_book(
            book,
            UpdateBook {
                book_id: id,
                title: "Children of Dune".to_string(),
                author: "Frank Herbert".to_string(),
                genre: "Science Fiction".to_string(),
                availability_status: None,
            },
        );

        assert_eq!(updated.id, id);
        assert_eq!(updated.title, "Children of Dune");
        assert_eq!(updated.genre, "Science Fiction");
        assert_eq!(updated.availability_status, AvailabilityStatus::Unavailable);
    }

    #[test]
    fn test_update_book_overwrites_status_when_given() {
        let book = sample_book(AvailabilityStatus::Unavailable);
        let id = book.id;

        let updated = update_book(
            book,
            UpdateBook {
                book_id: id,
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                genre: "Sci-Fi".to_string(),
                availability_status: Some(AvailabilityStatus::Available),
            },
        );

        assert_eq!(updated.availability_status, AvailabilityStatus::Available);
    }

    #[test]
    fn test_transition_opened_marks_unavailable() {
        let book = apply_rental_transition(
            sample_book(AvailabilityStatus::Available),
            RentalTransition::Opened,
        );
        assert_eq!(book.availability_status, AvailabilityStatus::Unavailable);
    }

    #[test]
    fn test_transition_closed_marks_available_regardless_of_prior_status() {
        for status in [AvailabilityStatus::Available, AvailabilityStatus::Unavailable] {
            let book = apply_rental_transition(sample_book(status), RentalTransition::Closed);
            assert_eq!(book.availability_status, AvailabilityStatus::Available);
        }
    }

    #[test]
    fn test_availability_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&AvailabilityStatus::Unavailable).unwrap(),
            "\"UNAVAILABLE\""
        );
        assert_eq!(
            AvailabilityStatus::from_str("AVAILABLE"),
            Ok(AvailabilityStatus::Available)
        );
        assert!(AvailabilityStatus::from_str("available").is_err());
    }
}
