use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Book, BookId, CreateRental, RentBookError, RentalId, RentalTransition, UpdateRental};

/// Rental集約 - 1冊の書籍の1回の貸出
///
/// `return_date` が `None` の間は貸出中（アクティブ）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    pub renter_name: String,
    pub rental_date: NaiveDate,
    pub return_date: Option<NaiveDate>,

    // 書籍への参照（IDのみ）
    pub book_id: BookId,
}

impl Rental {
    /// 貸出中（未返却）か
    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出中の書籍は貸し出せない
/// - 返却日付きの貸出も受け付ける（返却日と書籍状態の突き合わせはしない）
///
/// 書籍の状態変更は呼び出し側が `RentalTransition::Opened` として適用する。
pub fn rent_book(book: &Book, cmd: CreateRental) -> Result<Rental, RentBookError> {
    if !book.availability_status.is_available() {
        return Err(RentBookError::BookNotAvailable);
    }

    Ok(Rental {
        id: RentalId::new(),
        renter_name: cmd.renter_name,
        rental_date: cmd.rental_date,
        return_date: cmd.return_date,
        book_id: book.id,
    })
}

/// 純粋関数：貸出記録を部分更新する
///
/// 指定されたフィールドのみ反映する。
/// 返却日が指定された場合は、値や既存の返却日に関係なく `Closed` 遷移を返す。
pub fn amend_rental(rental: Rental, cmd: UpdateRental) -> (Rental, Option<RentalTransition>) {
    let transition = cmd
        .touches_return_date()
        .then_some(RentalTransition::Closed);

    let amended = Rental {
        id: rental.id,
        renter_name: cmd.renter_name.unwrap_or(rental.renter_name),
        rental_date: cmd.rental_date.unwrap_or(rental.rental_date),
        return_date: cmd.return_date.unwrap_or(rental.return_date),
        book_id: rental.book_id,
    };

    (amended, transition)
}

/// 純粋関数：貸出記録の削除に伴う遷移
///
/// 貸出中の記録を削除する場合のみ書籍を解放する。
pub fn removal_transition(rental: &Rental) -> Option<RentalTransition> {
    rental.is_active().then_some(RentalTransition::Closed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AvailabilityStatus;

    fn book(status: AvailabilityStatus) -> Book {
        Book {
            id: BookId::new(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: "Sci-Fi".to_string(),
            availability_status: status,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn active_rental(book_id: BookId) -> Rental {
        Rental {
            id: RentalId::new(),
            renter_name: "alice".to_string(),
            rental_date: date(2025, 3, 1),
            return_date: None,
            book_id,
        }
    }

    #[test]
    fn test_rent_book_success() {
        let book = book(AvailabilityStatus::Available);
        let cmd = CreateRental {
            renter_name: "alice".to_string(),
            rental_date: date(2025, 3, 1),
            return_date: None,
            book_id: book.id,
        };

        let rental = rent_book(&book, cmd).unwrap();

        assert_eq!(rental.book_id, book.id);
        assert_eq!(rental.renter_name, "alice");
        assert!(rental.is_active());
    }

    #[test]
    fn test_rent_book_fails_when_unavailable() {
        let book = book(AvailabilityStatus::Unavailable);
        let cmd = CreateRental {
            renter_name: "bob".to_string(),
            rental_date: date(2025, 3, 1),
            return_date: None,
            book_id: book.id,
        };

        assert_eq!(rent_book(&book, cmd), Err(RentBookError::BookNotAvailable));
    }

    #[test]
    fn test_rent_book_accepts_return_date_at_creation() {
        let book = book(AvailabilityStatus::Available);
        let cmd = CreateRental {
            renter_name: "carol".to_string(),
            rental_date: date(2024, 1, 10),
            return_date: Some(date(2024, 1, 20)),
            book_id: book.id,
        };

        let rental = rent_book(&book, cmd).unwrap();
        assert_eq!(rental.return_date, Some(date(2024, 1, 20)));
        assert!(!rental.is_active());
    }

    #[test]
    fn test_amend_rental_applies_only_present_fields() {
        let rental = active_rental(BookId::new());
        let original = rental.clone();

        let (amended, transition) = amend_rental(
            rental,
            UpdateRental {
                rental_id: original.id,
                renter_name: Some("alice smith".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(amended.renter_name, "alice smith");
        assert_eq!(amended.rental_date, original.rental_date);
        assert_eq!(amended.return_date, None);
        assert_eq!(amended.book_id, original.book_id);
        assert_eq!(transition, None);
    }

    #[test]
    fn test_amend_rental_with_return_date_closes() {
        let rental = active_rental(BookId::new());
        let id = rental.id;

        let (amended, transition) = amend_rental(
            rental,
            UpdateRental {
                rental_id: id,
                return_date: Some(Some(date(2025, 3, 15))),
                ..Default::default()
            },
        );

        assert_eq!(amended.return_date, Some(date(2025, 3, 15)));
        assert_eq!(transition, Some(RentalTransition::Closed));
    }

    #[test]
    fn test_amend_rental_with_return_date_closes_even_if_already_returned() {
        let mut rental = active_rental(BookId::new());
        rental.return_date = Some(date(2025, 3, 10));
        let id = rental.id;

        let (amended, transition) = amend_rental(
            rental,
            UpdateRental {
                rental_id: id,
                return_date: Some(Some(date(2025, 3, 12))),
                ..Default::default()
            },
        );

        assert_eq!(amended.return_date, Some(date(2025, 3, 12)));
        assert_eq!(transition, Some(RentalTransition::Closed));
    }

    #[test]
    fn test_amend_rental_explicit_null_clears_return_date() {
        let mut rental = active_rental(BookId::new());
        rental.return_date = Some(date(2025, 3, 10));
        let id = rental.id;

        let (amended, transition) = amend_rental(
            rental,
            UpdateRental {
                rental_id: id,
                return_date: Some(None),
                ..Default::default()
            },
        );

        assert_eq!(amended.return_date, None);
        assert_eq!(transition, Some(RentalTransition::Closed));
    }

    #[test]
    fn test_removal_transition() {
        let mut rental = active_rental(BookId::new());
        assert_eq!(removal_transition(&rental), Some(RentalTransition::Closed));

        rental.return_date = Some(date(2025, 3, 10));
        assert_eq!(removal_transition(&rental), None);
    }
}
