use anyhow::Result;
use std::path::Path;

use warden_auth::{PermissionEvaluator, PolicyFile, ProjectsUpdate};

use crate::ResourceAction;

pub fn single(base_dir: &Path, permission: &str, project: &str, envs: &[String]) -> Result<()> {
    let scope = PolicyFile::load(&PolicyFile::default_path(base_dir))?;
    let required_envs = if envs.is_empty() { None } else { Some(envs) };
    let allowed = scope
        .evaluator()
        .has_permission(permission, project, required_envs);
    tracing::info!(permission, project, envs = ?envs, allowed, "single-project check");
    report(allowed)
}

pub fn resource(
    base_dir: &Path,
    action: ResourceAction,
    permission: &str,
    projects: &[String],
) -> Result<()> {
    let scope = PolicyFile::load(&PolicyFile::default_path(base_dir))?;
    let eval = scope.evaluator();
    let allowed = match action {
        ResourceAction::Create => eval.can_create(projects, permission),
        ResourceAction::Delete => eval.can_delete(projects, permission),
    };
    tracing::info!(permission, projects = ?projects, allowed, "resource check");
    report(allowed)
}

pub fn update(
    base_dir: &Path,
    permission: &str,
    projects: &[String],
    destination: Option<&[String]>,
) -> Result<()> {
    let scope = PolicyFile::load(&PolicyFile::default_path(base_dir))?;
    let change = ProjectsUpdate::from_option(destination);
    let allowed = scope.evaluator().can_update(projects, &change, permission);
    tracing::info!(
        permission,
        projects = ?projects,
        destination = ?destination,
        allowed,
        "update check"
    );
    report(allowed)
}

fn report(allowed: bool) -> Result<()> {
    println!("{}", if allowed { "allowed" } else { "denied" });
    PermissionEvaluator::ensure(allowed)?;
    Ok(())
}
