pub mod config;
pub mod error;
pub mod evaluator;
pub mod permissions;
pub mod resource;
pub mod scope;

pub use config::PolicyFile;
pub use error::{AuthError, PERMISSION_DENIED_MESSAGE};
pub use evaluator::{DEFAULT_PROJECT, PermissionEvaluator};
pub use permissions::{PERMISSIONS, Permission};
pub use resource::{Metric, MetricUpdate, ProjectScoped, ProjectScopedUpdate, ProjectsUpdate};
pub use scope::{Grant, PermissionScope};
