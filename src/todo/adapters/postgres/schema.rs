//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records.
    todos (id) {
        /// Storage-assigned identifier.
        id -> Int4,
        /// Trimmed todo name.
        #[max_length = 100]
        name -> Varchar,
    }
}

/// Creates the todo table when it does not exist yet.
pub(super) const CREATE_TODOS_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos (\
    id SERIAL PRIMARY KEY, \
    name VARCHAR(100) NOT NULL\
)";
