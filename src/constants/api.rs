//! Constants related to the general configuration of the entire API and its deployment.

use std::{env::var, sync::LazyLock};

/// A prefix to prepend to any API paths to make them externally accessible.
pub static API_URI_PREFIX: LazyLock<String> =
    LazyLock::new(|| var("API_URI_PREFIX").unwrap_or_else(|_| String::from("/api/v1")));

/// The socket address the HTTP listener binds to.
pub static API_BIND_ADDRESS: LazyLock<String> =
    LazyLock::new(|| var("API_BIND_ADDRESS").unwrap_or_else(|_| String::from("0.0.0.0:8080")));
