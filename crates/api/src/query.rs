//! Query parameter types shared across handler modules.

use serde::Deserialize;
use schoolhouse_core::types::DbId;

/// Optional `?session_id=` scope.
#[derive(Debug, Default, Deserialize)]
pub struct SessionScope {
    pub session_id: Option<DbId>,
}

/// Optional `?category=` filter for gallery listings.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}

/// `?upcoming=true` restricts a date listing to today and later.
#[derive(Debug, Default, Deserialize)]
pub struct UpcomingParams {
    #[serde(default)]
    pub upcoming: bool,
}
