use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::AuthError;
use crate::evaluator::PermissionEvaluator;

/// Enabled permissions plus environment restriction for one scope
/// (the global default or a single project).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    #[serde(default)]
    pub limit_access_by_environment: bool,
    /// Allowed environments; only consulted when `limit_access_by_environment` is set.
    #[serde(default)]
    pub environments: BTreeSet<String>,
    /// Permission name -> enabled. Absent or `false` means not granted.
    #[serde(default)]
    pub permissions: BTreeMap<String, bool>,
}

impl Grant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow(mut self, permission: impl AsRef<str>) -> Self {
        self.permissions.insert(permission.as_ref().to_string(), true);
        self
    }

    pub fn limit_to_environments<I, S>(mut self, environments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.limit_access_by_environment = true;
        self.environments = environments.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_enabled(&self, permission: &str) -> bool {
        self.permissions.get(permission).copied().unwrap_or(false)
    }

    /// Subset check: every required environment must be allowed.
    pub fn covers_environments(&self, required: &[String]) -> bool {
        required.iter().all(|env| self.environments.contains(env))
    }
}

/// Resolved permissions of one actor.
///
/// Built once per request or session and read-only afterwards; share it
/// behind an `Arc` and swap the `Arc` to pick up changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionScope {
    #[serde(default)]
    pub super_admin: bool,
    pub global: Grant,
    /// Project id -> grant that replaces `global` for that project.
    #[serde(default)]
    pub projects: BTreeMap<String, Grant>,
}

impl PermissionScope {
    pub fn new(global: Grant) -> Self {
        Self {
            super_admin: false,
            global,
            projects: BTreeMap::new(),
        }
    }

    pub fn with_project(
        mut self,
        project: impl Into<String>,
        grant: Grant,
    ) -> Result<Self, AuthError> {
        let project = project.into();
        if project.is_empty() {
            return Err(AuthError::InvalidInput(
                "project override requires a non-empty project id".into(),
            ));
        }
        self.projects.insert(project, grant);
        Ok(self)
    }

    pub fn with_super_admin(mut self, super_admin: bool) -> Self {
        self.super_admin = super_admin;
        self
    }

    /// The single grant that governs `project`. Overrides replace the
    /// global grant outright; the empty (default) project always gets `global`.
    pub fn grant_for(&self, project: &str) -> &Grant {
        if project.is_empty() {
            return &self.global;
        }
        self.projects.get(project).unwrap_or(&self.global)
    }

    pub fn evaluator(&self) -> PermissionEvaluator<'_> {
        PermissionEvaluator::new(self)
    }
}
