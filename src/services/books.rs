//! Business logic for listing books on behalf of sellers.
use core::fmt;

use serde::Deserialize;

use crate::{
    constants::books::BOOK_MIN_YEAR,
    db::{
        self,
        models::{
            book::{Book, BookInsert},
            seller::Seller,
        },
    },
};

/// The book fields a client submits, on creation and on update alike.
#[derive(Deserialize)]
pub struct BookDetails {
    title: String,
    author: String,
    year: u32,
    count_pages: u32,
    seller_id: i64,
}

impl fmt::Display for BookDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "title={:?} author={:?} year={} count_pages={} seller_id={}",
            self.title, self.author, self.year, self.count_pages, self.seller_id
        )
    }
}

/// Shared checks for creation and update: a plausible year and an existing owner.
async fn validate_details(
    data: &BookDetails,
    db_conn: &db::ConnectionPool,
) -> Result<(), errors::BookValidationError> {
    if i64::from(data.year) < BOOK_MIN_YEAR {
        return Err(errors::BookValidationError::YearTooEarly(data.year));
    }
    if Seller::select_one(data.seller_id, db_conn).await?.is_none() {
        return Err(errors::BookValidationError::SellerNonExistent(
            data.seller_id,
        ));
    }
    Ok(())
}

pub async fn create_book(
    data: BookDetails,
    db_conn: &db::ConnectionPool,
) -> Result<Book, errors::BookCreationError> {
    validate_details(&data, db_conn).await?;
    let insert = BookInsert::new(
        &data.title,
        &data.author,
        data.year,
        data.count_pages,
        data.seller_id,
    );
    Ok(insert.store(db_conn).await?)
}

pub async fn list_books(db_conn: &db::ConnectionPool) -> Result<Vec<Book>, db::errors::DatabaseError> {
    Book::select_all(db_conn).await
}

pub async fn retrieve_book(
    book_id: i64,
    db_conn: &db::ConnectionPool,
) -> Result<Option<Book>, db::errors::DatabaseError> {
    Book::select_one(book_id, db_conn).await
}

pub async fn update_book(
    book_id: i64,
    data: BookDetails,
    db_conn: &db::ConnectionPool,
) -> Result<Book, errors::BookUpdateError> {
    let mut book = Book::select_one(book_id, db_conn)
        .await?
        .ok_or(errors::BookUpdateError::NonExistent(book_id))?;
    validate_details(&data, db_conn).await?;
    book.title = data.title;
    book.author = data.author;
    book.set_year(data.year);
    book.set_count_pages(data.count_pages);
    book.set_seller_id(data.seller_id);
    book.update(db_conn).await?;
    Ok(book)
}

pub async fn delete_book(
    book_id: i64,
    db_conn: &db::ConnectionPool,
) -> Result<(), errors::BookDeletionError> {
    Ok(Book::select_one(book_id, db_conn)
        .await?
        .ok_or(errors::BookDeletionError::NonExistent(book_id))?
        .delete(db_conn)
        .await?)
}

pub mod errors {
    use thiserror::Error;

    use crate::{constants::books::BOOK_MIN_YEAR, db::errors::DatabaseError};

    #[derive(Debug, Error)]
    pub enum BookValidationError {
        #[error(transparent)]
        DatabaseError(#[from] DatabaseError),
        #[error("Year {0} is earlier than {min}", min = BOOK_MIN_YEAR)]
        YearTooEarly(u32),
        #[error("Seller {0} does not exist")]
        SellerNonExistent(i64),
    }
    #[derive(Debug, Error)]
    pub enum BookCreationError {
        #[error(transparent)]
        DatabaseError(#[from] DatabaseError),
        #[error(transparent)]
        Invalid(#[from] BookValidationError),
    }
    #[derive(Debug, Error)]
    pub enum BookUpdateError {
        #[error(transparent)]
        DatabaseError(#[from] DatabaseError),
        #[error(transparent)]
        Invalid(#[from] BookValidationError),
        #[error("The book being updated does not exist")]
        NonExistent(i64),
    }
    #[derive(Debug, Error)]
    pub enum BookDeletionError {
        #[error(transparent)]
        DatabaseError(#[from] DatabaseError),
        #[error("The book being deleted does not exist")]
        NonExistent(i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{insert_book, insert_seller, test_pool};

    fn details(year: u32, seller_id: i64) -> BookDetails {
        BookDetails {
            title: "Eugeny Onegin".to_owned(),
            author: "Pushkin".to_owned(),
            year,
            count_pages: 104,
            seller_id,
        }
    }

    #[tokio::test]
    async fn create_rejects_early_year() {
        let pool = test_pool().await;
        let seller = insert_seller("Evpatiy", "Kolovratiy", "biba@edu.boba.ru", &pool).await;
        let result = create_book(details(2001, seller.id()), &pool).await;
        assert!(matches!(
            result,
            Err(errors::BookCreationError::Invalid(
                errors::BookValidationError::YearTooEarly(2001)
            ))
        ));
        let accepted = create_book(details(2020, seller.id()), &pool)
            .await
            .expect("Boundary year rejected");
        assert_eq!(accepted.year(), 2020);
        assert_eq!(accepted.seller_id(), seller.id());
    }

    #[tokio::test]
    async fn create_requires_existing_seller() {
        let pool = test_pool().await;
        let result = create_book(details(2024, 99), &pool).await;
        assert!(matches!(
            result,
            Err(errors::BookCreationError::Invalid(
                errors::BookValidationError::SellerNonExistent(99)
            ))
        ));
        assert!(list_books(&pool).await.expect("List failed").is_empty());
    }

    #[tokio::test]
    async fn update_moves_book_between_sellers() {
        let pool = test_pool().await;
        let first = insert_seller("Evpatiy", "Kolovratiy", "biba@edu.boba.ru", &pool).await;
        let second = insert_seller("Bella", "Petrovna", "sobachka@sobachka.ru", &pool).await;
        let book = insert_book("Mziri", "Lermontov", 2021, first.id(), &pool).await;

        let updated = update_book(book.id(), details(2023, second.id()), &pool)
            .await
            .expect("Update failed");
        assert_eq!(updated.id(), book.id());
        assert_eq!(updated.title, "Eugeny Onegin");
        assert_eq!(updated.seller_id(), second.id());

        let reloaded = retrieve_book(book.id(), &pool)
            .await
            .expect("Retrieve failed")
            .expect("Book vanished");
        assert_eq!(reloaded.year(), 2023);
        assert_eq!(reloaded.author, "Pushkin");
    }

    #[tokio::test]
    async fn update_and_delete_missing_book() {
        let pool = test_pool().await;
        let seller = insert_seller("Evpatiy", "Kolovratiy", "biba@edu.boba.ru", &pool).await;
        assert!(matches!(
            update_book(5, details(2024, seller.id()), &pool).await,
            Err(errors::BookUpdateError::NonExistent(5))
        ));
        assert!(matches!(
            delete_book(5, &pool).await,
            Err(errors::BookDeletionError::NonExistent(5))
        ));
    }

    #[tokio::test]
    async fn update_applies_create_validation() {
        let pool = test_pool().await;
        let seller = insert_seller("Evpatiy", "Kolovratiy", "biba@edu.boba.ru", &pool).await;
        let book = insert_book("Mziri", "Lermontov", 2021, seller.id(), &pool).await;

        assert!(matches!(
            update_book(book.id(), details(2019, seller.id()), &pool).await,
            Err(errors::BookUpdateError::Invalid(
                errors::BookValidationError::YearTooEarly(2019)
            ))
        ));
        assert!(matches!(
            update_book(book.id(), details(2024, 77), &pool).await,
            Err(errors::BookUpdateError::Invalid(
                errors::BookValidationError::SellerNonExistent(77)
            ))
        ));

        let stored = retrieve_book(book.id(), &pool)
            .await
            .expect("Retrieve failed")
            .expect("Book vanished");
        assert_eq!(stored.title, "Mziri");
        assert_eq!(stored.year(), 2021);
        assert_eq!(stored.seller_id(), seller.id());
    }
}
