//! Models mapping to the seller database table. Represents a vendor who lists
//! books in the store.
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher as _, SaltString},
    Algorithm, Argon2, Params, Version,
};
use serde::Serialize;
use sqlx::{query, query_as, FromRow};

use crate::{
    db::{errors::DatabaseError, ConnectionPool},
    utils::email::EmailAddress,
};

/// Instantiate an Argon2 context with the standard parameters.
fn create_argon2<'a>() -> Argon2<'a> {
    Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(12288, 3, 1, None).expect("Invalid Argon2id parameters"),
    )
}

/// Convert a raw password string into a hashed representation.
fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    create_argon2()
        .hash_password(password.as_bytes(), &salt)
        .expect("Argon2id error while hashing password")
        .to_string()
}

/// INSERT model for a `Seller`. Used ONLY when registering a new seller.
pub struct SellerInsert {
    /// The seller's first name.
    pub first_name: String,
    /// The seller's last name.
    pub last_name: String,
    /// The seller's contact email address.
    pub e_mail: String,
    /// The Argon2id hash of the seller's password.
    password: String,
}

/// A `Seller` which is stored in the database. Can only be constructed by
/// reading it from the database. The password hash is never read back.
#[derive(FromRow, Serialize, Debug)]
pub struct Seller {
    /// The seller's ID primary key.
    id: i64,
    /// The seller's first name.
    pub first_name: String,
    /// The seller's last name.
    pub last_name: String,
    /// The seller's contact email address.
    pub e_mail: String,
}

impl SellerInsert {
    /// Construct a new seller INSERT model, hashing the plaintext password.
    pub fn new(first_name: &str, last_name: &str, e_mail: EmailAddress, password: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            e_mail: e_mail.into(),
            password: hash_password(password),
        }
    }
    /// Store this INSERT model in the database and return a complete `Seller` model.
    pub async fn store(self, db_client: &ConnectionPool) -> Result<Seller, DatabaseError> {
        Ok(query_as::<_, Seller>(
            "INSERT INTO seller (first_name, last_name, e_mail, password) VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, e_mail",
        )
        .bind(self.first_name)
        .bind(self.last_name)
        .bind(self.e_mail)
        .bind(self.password)
        .fetch_one(db_client)
        .await?)
    }
}

impl Seller {
    /// Get this seller's ID primary key.
    pub const fn id(&self) -> i64 {
        self.id
    }
    /// Select a `Seller` from the database by ID.
    pub async fn select_one(
        id: i64,
        db_client: &ConnectionPool,
    ) -> Result<Option<Self>, DatabaseError> {
        Ok(query_as::<_, Self>(
            "SELECT id, first_name, last_name, e_mail FROM seller WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db_client)
        .await?)
    }
    /// Retrieve all `Seller` records in the database, oldest first.
    pub async fn select_all(db_client: &ConnectionPool) -> Result<Vec<Self>, DatabaseError> {
        Ok(query_as::<_, Self>(
            "SELECT id, first_name, last_name, e_mail FROM seller ORDER BY id",
        )
        .fetch_all(db_client)
        .await?)
    }
    /// Update the database record to match the model's current state. The
    /// password hash is not touched.
    pub async fn update(&self, db_client: &ConnectionPool) -> Result<(), DatabaseError> {
        query("UPDATE seller SET first_name = $1, last_name = $2, e_mail = $3 WHERE id = $4")
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(&self.e_mail)
            .bind(self.id)
            .execute(db_client)
            .await?;
        Ok(())
    }
    /// Delete the seller and every book they own, in a single transaction.
    /// Also consumes the model for the sake of consistency.
    pub async fn delete(self, db_client: &ConnectionPool) -> Result<(), DatabaseError> {
        let mut transaction = db_client.begin().await?;
        query("DELETE FROM book WHERE seller_id = $1")
            .bind(self.id)
            .execute(&mut *transaction)
            .await?;
        query("DELETE FROM seller WHERE id = $1")
            .bind(self.id)
            .execute(&mut *transaction)
            .await?;
        transaction.commit().await?;
        Ok(())
    }
}
