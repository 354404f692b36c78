//! Todo aggregate and its unpersisted draft form.

use super::{TodoDomainError, TodoId, TodoName};
use serde::{Deserialize, Serialize};

/// A todo that has been validated but not yet stored.
///
/// Storage assigns the identifier when the draft is added, turning it into a
/// [`Todo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    name: TodoName,
}

impl NewTodo {
    /// Returns the validated name.
    #[must_use]
    pub const fn name(&self) -> &TodoName {
        &self.name
    }

    /// Attaches a storage-assigned identifier.
    #[must_use]
    pub fn into_persisted(self, id: TodoId) -> Todo {
        Todo { id, name: self.name }
    }
}

/// Persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    name: TodoName,
}

impl Todo {
    /// Validates `name` and returns a draft ready to be stored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError`] when the name is blank or too long.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_grpc::todo::domain::Todo;
    ///
    /// let draft = Todo::create("  Buy milk  ").expect("valid name");
    /// assert_eq!(draft.name().as_str(), "Buy milk");
    /// assert!(Todo::create("   ").is_err());
    /// ```
    pub fn create(name: impl Into<String>) -> Result<NewTodo, TodoDomainError> {
        Ok(NewTodo {
            name: TodoName::new(name)?,
        })
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: TodoId, name: TodoName) -> Self {
        Self { id, name }
    }

    /// Renames the todo, keeping its identity.
    ///
    /// The todo is consumed so the caller must own it exclusively; on
    /// failure the original value is dropped and nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError`] when the name is blank or too long.
    pub fn update(mut self, name: impl Into<String>) -> Result<Self, TodoDomainError> {
        self.name = TodoName::new(name)?;
        Ok(self)
    }

    /// Returns the storage-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the validated name.
    #[must_use]
    pub const fn name(&self) -> &TodoName {
        &self.name
    }
}
