use anyhow::Result;
use std::path::Path;

use warden_auth::{Grant, PolicyFile};

pub fn run(base_dir: &Path) -> Result<()> {
    let policy_path = PolicyFile::default_path(base_dir);
    let scope = PolicyFile::load(&policy_path)?;

    println!("Policy: {}", policy_path.display());
    println!();
    println!("  Super admin:    {}", scope.super_admin);
    println!();
    println!("  Global:");
    print_grant(&scope.global);

    if scope.projects.is_empty() {
        println!();
        println!("  No project overrides.");
    } else {
        for (project, grant) in &scope.projects {
            println!();
            println!("  Project {project}:");
            print_grant(grant);
        }
    }

    Ok(())
}

fn print_grant(grant: &Grant) {
    let enabled: Vec<&str> = grant
        .permissions
        .iter()
        .filter(|(_, on)| **on)
        .map(|(name, _)| name.as_str())
        .collect();
    if enabled.is_empty() {
        println!("    Permissions:  (none)");
    } else {
        println!("    Permissions:  {}", enabled.join(", "));
    }
    if grant.limit_access_by_environment {
        let envs: Vec<&str> = grant.environments.iter().map(String::as_str).collect();
        println!("    Environments: {}", envs.join(", "));
    } else {
        println!("    Environments: all");
    }
}
