//! Department and student directory model.
//!
//! Identifiers cross the API boundary as strings: departments carry opaque
//! text keys and student identifiers are assigned by storage and rendered with
//! `to_string`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name emitted when a student references a department that is not
/// present in storage.
pub const UNKNOWN_DEPARTMENT_NAME: &str = "Unknown Department";

/// Address emitted alongside [`UNKNOWN_DEPARTMENT_NAME`].
pub const UNKNOWN_DEPARTMENT_ADDRESS: &str = "Unknown Address";

/// Validation errors raised while building directory commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryValidationError {
    #[error("department id must not be empty")]
    EmptyDepartmentId,
    #[error("missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },
}

/// Opaque department identifier.
///
/// ## Invariants
/// - Never blank once trimmed of whitespace; the raw value is kept as given.
///
/// # Examples
/// ```
/// use directory::domain::DepartmentId;
///
/// let id = DepartmentId::new("CS").expect("non-empty id");
/// assert_eq!(id.as_ref(), "CS");
/// assert!(DepartmentId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentId(String);

impl DepartmentId {
    /// Validate and construct a [`DepartmentId`].
    pub fn new(id: impl Into<String>) -> Result<Self, DirectoryValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DirectoryValidationError::EmptyDepartmentId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for DepartmentId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DepartmentId> for String {
    fn from(value: DepartmentId) -> Self {
        value.0
    }
}

impl TryFrom<String> for DepartmentId {
    type Error = DirectoryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Department as listed by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// Department attached to a student.
///
/// Name and address are absent when only the identifier is known, as in the
/// response to a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDepartment {
    pub id: String,
    pub name: Option<String>,
    pub address: Option<String>,
}

impl StudentDepartment {
    /// Department reference carrying only its identifier.
    pub fn id_only(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            address: None,
        }
    }
}

impl From<Department> for StudentDepartment {
    fn from(value: Department) -> Self {
        Self {
            id: value.id,
            name: Some(value.name),
            address: Some(value.address),
        }
    }
}

/// Student record returned by directory queries and registration.
///
/// `student_id` is the caller-supplied external code; `id` is the identifier
/// assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub student_id: String,
    pub address: String,
    pub department: Option<StudentDepartment>,
}

/// Validated registration command.
///
/// ## Invariants
/// - Every field is non-blank. Values are otherwise stored and echoed exactly
///   as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    first_name: String,
    last_name: String,
    student_id: String,
    address: String,
    department_id: DepartmentId,
}

impl NewStudent {
    /// Validate the five registration fields.
    ///
    /// Every blank field is reported, in declaration order.
    ///
    /// # Examples
    /// ```
    /// use directory::domain::{DirectoryValidationError, NewStudent};
    ///
    /// let err = NewStudent::try_new("Ada", "", "S-1", "Bldg A", " ").unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     DirectoryValidationError::MissingFields {
    ///         fields: vec!["last_name", "department_id"],
    ///     }
    /// );
    /// ```
    pub fn try_new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        student_id: impl Into<String>,
        address: impl Into<String>,
        department_id: impl Into<String>,
    ) -> Result<Self, DirectoryValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let student_id = student_id.into();
        let address = address.into();
        let department_id = department_id.into();

        let fields: Vec<&'static str> = [
            ("first_name", &first_name),
            ("last_name", &last_name),
            ("student_id", &student_id),
            ("address", &address),
            ("department_id", &department_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !fields.is_empty() {
            return Err(DirectoryValidationError::MissingFields { fields });
        }

        Ok(Self {
            first_name,
            last_name,
            student_id,
            address,
            department_id: DepartmentId::new(department_id)?,
        })
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn student_id(&self) -> &str {
        self.student_id.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn department_id(&self) -> &DepartmentId {
        &self.department_id
    }
}
