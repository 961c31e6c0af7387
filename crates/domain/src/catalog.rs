use derive_more::{AsRef, Display};

use crate::{ExerciseEntry, ReadError};

#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    async fn read_categories(&self) -> Result<Vec<Category>, ReadError>;
    async fn read_templates(
        &self,
        category_id: &CategoryID,
    ) -> Result<Vec<ExerciseTemplate>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryID,
    pub name: String,
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryID(String);

impl From<&str> for CategoryID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CategoryID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Default configuration of an exercise as provided by the catalog.
///
/// The defaults are taken as delivered and may be negative. They are clamped when the template
/// is turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub id: TemplateID,
    pub name: String,
    pub default_sets: i64,
    pub default_reps: i64,
    pub default_hold_time: i64,
}

impl ExerciseTemplate {
    #[must_use]
    pub fn to_entry(&self) -> ExerciseEntry {
        ExerciseEntry::from_template(self)
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateID(String);

impl From<&str> for TemplateID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TemplateID {
    fn from(value: String) -> Self {
        Self(value)
    }
}
