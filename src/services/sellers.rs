//! Business logic for registering and managing sellers.
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::passwords::{PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH},
    db::{
        self,
        models::{
            book::Book,
            seller::{Seller, SellerInsert},
        },
    },
    utils::email::EmailAddress,
};

/// Data submitted when registering a new seller. The only model which
/// carries a password.
#[derive(Deserialize)]
pub struct SellerCreate {
    first_name: String,
    last_name: String,
    e_mail: String,
    password: String,
}

/// Data submitted when updating a seller. Unknown keys such as `id` or
/// `password` are ignored, so neither can be changed through an update.
#[derive(Deserialize)]
pub struct SellerUpdate {
    first_name: String,
    last_name: String,
    e_mail: String,
}

impl fmt::Display for SellerUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e_mail={} first_name=[REDACTED] last_name=[REDACTED]", self.e_mail)
    }
}

/// A seller along with every book they list.
#[derive(Serialize)]
pub struct SellerWithBooks {
    #[serde(flatten)]
    pub seller: Seller,
    pub books: Vec<Book>,
}

pub async fn create_seller(
    data: SellerCreate,
    db_conn: &db::ConnectionPool,
) -> Result<Seller, errors::SellerCreationError> {
    let e_mail = EmailAddress::try_from(data.e_mail)?;
    let password_length = data.password.chars().count();
    if password_length < PASSWORD_MIN_LENGTH {
        return Err(errors::SellerCreationError::PasswordTooShort);
    }
    if password_length > PASSWORD_MAX_LENGTH {
        return Err(errors::SellerCreationError::PasswordTooLong);
    }
    let insert = SellerInsert::new(&data.first_name, &data.last_name, e_mail, &data.password);
    Ok(insert.store(db_conn).await?)
}

pub async fn list_sellers(
    db_conn: &db::ConnectionPool,
) -> Result<Vec<Seller>, db::errors::DatabaseError> {
    Seller::select_all(db_conn).await
}

pub async fn retrieve_seller_with_books(
    seller_id: i64,
    db_conn: &db::ConnectionPool,
) -> Result<Option<SellerWithBooks>, db::errors::DatabaseError> {
    let Some(seller) = Seller::select_one(seller_id, db_conn).await? else {
        return Ok(None);
    };
    let books = Book::select_by_seller(seller_id, db_conn).await?;
    Ok(Some(SellerWithBooks { seller, books }))
}

pub async fn update_seller(
    seller_id: i64,
    data: SellerUpdate,
    db_conn: &db::ConnectionPool,
) -> Result<Seller, errors::SellerUpdateError> {
    let e_mail = EmailAddress::try_from(data.e_mail)?;
    let mut seller = Seller::select_one(seller_id, db_conn)
        .await?
        .ok_or(errors::SellerUpdateError::NonExistent(seller_id))?;
    seller.first_name = data.first_name;
    seller.last_name = data.last_name;
    seller.e_mail = e_mail.into();
    seller.update(db_conn).await?;
    Ok(seller)
}

pub async fn delete_seller(
    seller_id: i64,
    db_conn: &db::ConnectionPool,
) -> Result<(), errors::SellerDeletionError> {
    Ok(Seller::select_one(seller_id, db_conn)
        .await?
        .ok_or(errors::SellerDeletionError::NonExistent(seller_id))?
        .delete(db_conn)
        .await?)
}

pub mod errors {
    use thiserror::Error;

    use crate::{db::errors::DatabaseError, utils::email::InvalidEmailAddress};

    #[derive(Debug, Error)]
    pub enum SellerCreationError {
        #[error(transparent)]
        DatabaseError(#[from] DatabaseError),
        #[error(transparent)]
        InvalidEmail(#[from] InvalidEmailAddress),
        #[error("Password is too short")]
        PasswordTooShort,
        #[error("Password is too long")]
        PasswordTooLong,
    }
    #[derive(Debug, Error)]
    pub enum SellerUpdateError {
        #[error(transparent)]
        DatabaseError(#[from] DatabaseError),
        #[error(transparent)]
        InvalidEmail(#[from] InvalidEmailAddress),
        #[error("The seller being updated does not exist")]
        NonExistent(i64),
    }
    #[derive(Debug, Error)]
    pub enum SellerDeletionError {
        #[error(transparent)]
        DatabaseError(#[from] DatabaseError),
        #[error("The seller being deleted does not exist")]
        NonExistent(i64),
    }
}
