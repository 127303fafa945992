//! Models mapping to the book database table. Each book is listed by exactly
//! one seller.
use serde::Serialize;
use sqlx::{query, query_as, FromRow};

use crate::db::{errors::DatabaseError, ConnectionPool};

/// INSERT model for a `Book`. Used ONLY when listing a new book.
pub struct BookInsert {
    /// The book's title.
    pub title: String,
    /// The book's author.
    pub author: String,
    /// The year the book was published.
    year: i64, // i64s are used internally to match BIGINT columns
    /// The number of pages in the book.
    count_pages: i64,
    /// The ID of the seller listing the book.
    seller_id: i64,
}

/// A `Book` which is stored in the database. Can only be constructed by
/// reading it from the database.
#[derive(FromRow, Serialize, Debug)]
pub struct Book {
    /// The book's ID primary key.
    id: i64,
    /// The book's title.
    pub title: String,
    /// The book's author.
    pub author: String,
    /// The year the book was published.
    year: i64,
    /// The number of pages in the book.
    count_pages: i64,
    /// The ID of the seller listing the book.
    seller_id: i64,
}

impl BookInsert {
    /// Construct a new book INSERT model.
    pub fn new(title: &str, author: &str, year: u32, count_pages: u32, seller_id: i64) -> Self {
        Self {
            title: title.to_owned(),
            author: author.to_owned(),
            year: i64::from(year),
            count_pages: i64::from(count_pages),
            seller_id,
        }
    }
    /// Store this INSERT model in the database and return a complete `Book` model.
    pub async fn store(self, db_client: &ConnectionPool) -> Result<Book, DatabaseError> {
        Ok(query_as::<_, Book>(
            "INSERT INTO book (title, author, year, count_pages, seller_id) VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, year, count_pages, seller_id",
        )
        .bind(self.title)
        .bind(self.author)
        .bind(self.year)
        .bind(self.count_pages)
        .bind(self.seller_id)
        .fetch_one(db_client)
        .await?)
    }
}

impl Book {
    /// Get this book's ID primary key.
    pub const fn id(&self) -> i64 {
        self.id
    }
    /// Get the year the book was published.
    #[cfg(test)]
    pub const fn year(&self) -> i64 {
        self.year
    }
    /// Get the number of pages in the book.
    #[cfg(test)]
    pub const fn count_pages(&self) -> i64 {
        self.count_pages
    }
    /// Get the ID of the seller listing this book.
    pub const fn seller_id(&self) -> i64 {
        self.seller_id
    }
    pub fn set_year(&mut self, year: u32) {
        self.year = i64::from(year);
    }
    pub fn set_count_pages(&mut self, count_pages: u32) {
        self.count_pages = i64::from(count_pages);
    }
    pub fn set_seller_id(&mut self, seller_id: i64) {
        self.seller_id = seller_id;
    }
    /// Select a `Book` from the database by its ID.
    pub async fn select_one(
        id: i64,
        db_client: &ConnectionPool,
    ) -> Result<Option<Self>, DatabaseError> {
        Ok(query_as::<_, Self>(
            "SELECT id, title, author, year, count_pages, seller_id FROM book WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db_client)
        .await?)
    }
    /// Retrieve all `Book`s stored in the database, oldest first.
    pub async fn select_all(db_client: &ConnectionPool) -> Result<Vec<Self>, DatabaseError> {
        Ok(query_as::<_, Self>(
            "SELECT id, title, author, year, count_pages, seller_id FROM book ORDER BY id",
        )
        .fetch_all(db_client)
        .await?)
    }
    /// Retrieve every `Book` listed by a given seller, oldest first.
    pub async fn select_by_seller(
        seller_id: i64,
        db_client: &ConnectionPool,
    ) -> Result<Vec<Self>, DatabaseError> {
        Ok(query_as::<_, Self>(
            "SELECT id, title, author, year, count_pages, seller_id FROM book
            WHERE seller_id = $1 ORDER BY id",
        )
        .bind(seller_id)
        .fetch_all(db_client)
        .await?)
    }
    /// Update the corresponding database record to match this model's state.
    pub async fn update(&self, db_client: &ConnectionPool) -> Result<(), DatabaseError> {
        query(
            "UPDATE book SET title = $1, author = $2, year = $3, count_pages = $4, seller_id = $5
            WHERE id = $6",
        )
        .bind(&self.title)
        .bind(&self.author)
        .bind(self.year)
        .bind(self.count_pages)
        .bind(self.seller_id)
        .bind(self.id)
        .execute(db_client)
        .await?;
        Ok(())
    }
    /// Delete the corresponding record from the database. Also consumes the
    /// model for the sake of consistency.
    pub async fn delete(self, db_client: &ConnectionPool) -> Result<(), DatabaseError> {
        query("DELETE FROM book WHERE id = $1")
            .bind(self.id)
            .execute(db_client)
            .await?;
        Ok(())
    }
}
