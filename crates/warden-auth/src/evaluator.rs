use crate::error::AuthError;
use crate::permissions::Permission;
use crate::resource::{Metric, MetricUpdate, ProjectScoped, ProjectScopedUpdate, ProjectsUpdate};
use crate::scope::PermissionScope;

/// Project key used for resources without any project affiliation.
pub const DEFAULT_PROJECT: &str = "";

/// Allow/deny decisions over a resolved [`PermissionScope`].
///
/// Holds nothing but the borrowed scope, so any number of evaluators may
/// read the same scope concurrently.
#[derive(Debug, Clone, Copy)]
pub struct PermissionEvaluator<'a> {
    scope: &'a PermissionScope,
}

impl<'a> PermissionEvaluator<'a> {
    pub fn new(scope: &'a PermissionScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &'a PermissionScope {
        self.scope
    }

    /// Single-project check. `required_envs` only matters when the
    /// resolved grant limits access by environment.
    pub fn has_permission(
        &self,
        permission: &str,
        project: &str,
        required_envs: Option<&[String]>,
    ) -> bool {
        if self.scope.super_admin {
            return true;
        }

        let grant = self.scope.grant_for(project);

        if !grant.is_enabled(permission) {
            tracing::debug!(permission, project, "permission not granted");
            return false;
        }

        let Some(envs) = required_envs else {
            return true;
        };
        if !grant.limit_access_by_environment {
            return true;
        }

        let allowed = grant.covers_environments(envs);
        if !allowed {
            tracing::debug!(permission, project, envs = ?envs, "environment not granted");
        }
        allowed
    }

    /// True only if the permission holds in every project the resource
    /// belongs to; a resource with no projects is checked against the
    /// default scope.
    pub fn check_resource_permission<R>(&self, resource: &R, permission: &str) -> bool
    where
        R: ProjectScoped + ?Sized,
    {
        self.check_projects(resource.projects(), permission, None)
    }

    pub fn check_resource_env_permission<R>(
        &self,
        resource: &R,
        permission: &str,
        required_envs: &[String],
    ) -> bool
    where
        R: ProjectScoped + ?Sized,
    {
        self.check_projects(resource.projects(), permission, Some(required_envs))
    }

    fn check_projects(
        &self,
        projects: &[String],
        permission: &str,
        required_envs: Option<&[String]>,
    ) -> bool {
        if projects.is_empty() {
            return self.has_permission(permission, DEFAULT_PROJECT, required_envs);
        }
        projects
            .iter()
            .all(|project| self.has_permission(permission, project, required_envs))
    }

    pub fn can_create<R>(&self, resource: &R, permission: &str) -> bool
    where
        R: ProjectScoped + ?Sized,
    {
        self.check_resource_permission(resource, permission)
    }

    pub fn can_delete<R>(&self, resource: &R, permission: &str) -> bool
    where
        R: ProjectScoped + ?Sized,
    {
        self.check_resource_permission(resource, permission)
    }

    /// The actor must be able to act on the resource where it is now and,
    /// if the update reassigns projects, where it is going.
    pub fn can_update<R, U>(&self, existing: &R, update: &U, permission: &str) -> bool
    where
        R: ProjectScoped + ?Sized,
        U: ProjectScopedUpdate + ?Sized,
    {
        if !self.check_resource_permission(existing, permission) {
            return false;
        }

        match update.projects_update() {
            ProjectsUpdate::Unchanged => true,
            ProjectsUpdate::Set(projects) => self.check_resource_permission(projects, permission),
        }
    }

    pub fn can_create_metric(&self, metric: &Metric) -> bool {
        self.can_create(metric, Permission::CreateMetrics.as_str())
    }

    pub fn can_update_metric(&self, existing: &Metric, update: &MetricUpdate) -> bool {
        self.can_update(existing, update, Permission::CreateMetrics.as_str())
    }

    pub fn can_delete_metric(&self, metric: &Metric) -> bool {
        self.can_delete(metric, Permission::CreateMetrics.as_str())
    }

    /// Publishing must be allowed in every listed environment of every project.
    pub fn can_publish<R>(&self, resource: &R, environments: &[String]) -> bool
    where
        R: ProjectScoped + ?Sized,
    {
        self.check_resource_env_permission(
            resource,
            Permission::PublishFeatures.as_str(),
            environments,
        )
    }

    /// Unconditional denial for callers that already decided against the actor.
    pub fn deny() -> Result<(), AuthError> {
        Err(AuthError::permission_denied())
    }

    /// Fail-fast form of a boolean decision.
    pub fn ensure(allowed: bool) -> Result<(), AuthError> {
        if allowed { Ok(()) } else { Self::deny() }
    }
}
