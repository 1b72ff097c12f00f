use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::permissions::Permission;
use crate::scope::{Grant, PermissionScope};

/// Static policy stored as TOML, for tooling and local testing.
///
/// ```toml
/// superAdmin = false
///
/// [global]
/// limitAccessByEnvironment = false
/// environments = []
///
/// [global.permissions]
/// readData = true
///
/// [projects.prj_growth.permissions]
/// createMetrics = true
/// ```
pub struct PolicyFile;

impl PolicyFile {
    /// Load and validate a policy file.
    pub fn load(path: &Path) -> Result<PermissionScope, AuthError> {
        if !path.exists() {
            return Err(AuthError::ConfigNotFound(path.display().to_string()));
        }
        tracing::debug!(path = %path.display(), "loading policy file");
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<PermissionScope, AuthError> {
        let scope: PermissionScope =
            toml::from_str(content).map_err(|e| AuthError::TomlDe(e.to_string()))?;
        Self::validate(&scope)?;
        Ok(scope)
    }

    /// Overrides must be keyed by a non-empty project id.
    pub fn validate(scope: &PermissionScope) -> Result<(), AuthError> {
        if scope.projects.keys().any(|p| p.is_empty()) {
            return Err(AuthError::Config(
                "project override with an empty project id".to_string(),
            ));
        }
        Ok(())
    }

    /// Save a policy to a TOML file.
    pub fn save(scope: &PermissionScope, path: &Path) -> Result<(), AuthError> {
        let content =
            toml::to_string_pretty(scope).map_err(|e| AuthError::TomlSer(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the policy file path: `<base_dir>/policy.toml`
    pub fn default_path(base_dir: &Path) -> PathBuf {
        base_dir.join("policy.toml")
    }

    /// Resolve the default warden home directory: `~/.warden`
    pub fn default_base_dir() -> Result<PathBuf, AuthError> {
        dirs::home_dir()
            .map(|h| h.join(".warden"))
            .ok_or_else(|| AuthError::Config("Cannot determine home directory".to_string()))
    }

    /// Example policy written by `warden init`: read access everywhere,
    /// metric editing in one project, publishing limited to dev/staging.
    pub fn sample() -> PermissionScope {
        let global = Grant::new()
            .allow(Permission::ReadData)
            .allow(Permission::AddComments);
        let growth = Grant::new()
            .allow(Permission::ReadData)
            .allow(Permission::CreateMetrics)
            .allow(Permission::CreateFeatures)
            .allow(Permission::PublishFeatures)
            .limit_to_environments(["dev", "staging"]);

        let mut scope = PermissionScope::new(global);
        scope.projects.insert("prj_growth".to_string(), growth);
        scope
    }
}
