//! Database connection related constants.
use super::secrets::read_secret;
use std::{env::var, sync::LazyLock};

pub static DB_HOST: LazyLock<String> = LazyLock::new(|| {
    var("DB_HOST").expect("Neither DATABASE_URL nor DB_HOST provided in environment variables")
});

pub static DB_USERNAME: LazyLock<String> = LazyLock::new(|| {
    var("DB_USERNAME").expect("DB_USERNAME not provided in environment variables")
});

pub static DB_DATABASE: LazyLock<String> = LazyLock::new(|| {
    var("DB_DATABASE").expect("DB_DATABASE not provided in environment variables")
});

pub static DB_PASSWORD: LazyLock<String> = LazyLock::new(|| {
    var("DB_PASSWORD").unwrap_or_else(|_| {
        let secret_path = var("DB_PASSWORD_DOCKER_SECRET").expect(
            "Neither DB_PASSWORD nor DB_PASSWORD_DOCKER_SECRET provided in environment variables",
        );
        read_secret(&secret_path)
            .expect("Failed to read DB_PASSWORD docker secret")
            .trim_end()
            .to_owned()
    })
});

/// The full connection URL. `DATABASE_URL` wins when set, otherwise a Postgres
/// URL is assembled from the individual `DB_*` variables.
pub static DB_URL: LazyLock<String> = LazyLock::new(|| {
    var("DATABASE_URL").unwrap_or_else(|_| {
        format!(
            "postgres://{}:{}@{}/{}",
            *DB_USERNAME, *DB_PASSWORD, *DB_HOST, *DB_DATABASE
        )
    })
});
