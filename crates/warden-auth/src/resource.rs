use serde::{Deserialize, Deserializer, Serialize};

/// Anything whose project affiliation can be checked.
///
/// An empty slice means the resource lives in the default scope.
pub trait ProjectScoped {
    fn projects(&self) -> &[String];
}

impl ProjectScoped for [String] {
    fn projects(&self) -> &[String] {
        self
    }
}

impl ProjectScoped for Vec<String> {
    fn projects(&self) -> &[String] {
        self
    }
}

/// What an update does to a resource's project affiliation.
///
/// `Set(&[])` is an explicit move into the default scope and is checked
/// like any other destination; only `Unchanged` skips the destination check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectsUpdate<'a> {
    Unchanged,
    Set(&'a [String]),
}

impl<'a> ProjectsUpdate<'a> {
    pub fn from_option(projects: Option<&'a [String]>) -> Self {
        match projects {
            Some(projects) => ProjectsUpdate::Set(projects),
            None => ProjectsUpdate::Unchanged,
        }
    }
}

pub trait ProjectScopedUpdate {
    fn projects_update(&self) -> ProjectsUpdate<'_>;
}

impl ProjectScopedUpdate for ProjectsUpdate<'_> {
    fn projects_update(&self) -> ProjectsUpdate<'_> {
        *self
    }
}

/// Project affiliation of a metric definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl ProjectScoped for Metric {
    fn projects(&self) -> &[String] {
        &self.projects
    }
}

/// Partial metric update.
///
/// `projects` keeps absent and `null` apart: an absent field leaves the
/// affiliation alone, while `null` clears it and is checked like `[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MetricUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub projects: Option<Option<Vec<String>>>,
}

impl ProjectScopedUpdate for MetricUpdate {
    fn projects_update(&self) -> ProjectsUpdate<'_> {
        match &self.projects {
            None => ProjectsUpdate::Unchanged,
            Some(None) => ProjectsUpdate::Set(&[]),
            Some(Some(projects)) => ProjectsUpdate::Set(projects.as_slice()),
        }
    }
}

/// Marks a field as present, so `null` becomes `Some(None)` instead of `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
