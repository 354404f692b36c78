//! Diesel row models for todo persistence.

use super::schema::todos;
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Trimmed todo name.
    pub name: String,
}

/// Insert model for todo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Trimmed todo name.
    pub name: String,
}
