use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AuthError;

pub const PERMISSIONS: &[(&str, &str)] = &[
    ("readData", "View experiments, features, and metrics"),
    ("addComments", "Comment on experiments and features"),
    ("createIdeas", "Create and edit ideas"),
    ("createPresentations", "Create and edit presentations"),
    ("createAnalyses", "Create and edit experiment analyses"),
    ("createDimensions", "Create and edit dimensions"),
    ("createSegments", "Create and edit segments"),
    ("createMetrics", "Create, edit, and delete metrics"),
    ("createFeatures", "Create and edit features"),
    ("createFeatureDrafts", "Create draft revisions of features"),
    ("publishFeatures", "Publish feature changes to an environment"),
    ("runQueries", "Run queries against data sources"),
    ("manageEnvironments", "Create and edit environments"),
    ("manageProjects", "Create and edit projects"),
    ("manageTeam", "Invite members and assign roles"),
    ("manageApiKeys", "Create and revoke API keys"),
    ("organizationSettings", "Edit organization settings"),
    ("superDelete", "Delete experiments and features with history"),
];

/// Permission names known to the application.
///
/// The evaluator works on plain names, so data that mentions a name outside
/// this enum is still accepted and simply never grants anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    ReadData,
    AddComments,
    CreateIdeas,
    CreatePresentations,
    CreateAnalyses,
    CreateDimensions,
    CreateSegments,
    CreateMetrics,
    CreateFeatures,
    CreateFeatureDrafts,
    PublishFeatures,
    RunQueries,
    ManageEnvironments,
    ManageProjects,
    ManageTeam,
    ManageApiKeys,
    OrganizationSettings,
    SuperDelete,
}

impl Permission {
    pub const ALL: &'static [Permission] = &[
        Permission::ReadData,
        Permission::AddComments,
        Permission::CreateIdeas,
        Permission::CreatePresentations,
        Permission::CreateAnalyses,
        Permission::CreateDimensions,
        Permission::CreateSegments,
        Permission::CreateMetrics,
        Permission::CreateFeatures,
        Permission::CreateFeatureDrafts,
        Permission::PublishFeatures,
        Permission::RunQueries,
        Permission::ManageEnvironments,
        Permission::ManageProjects,
        Permission::ManageTeam,
        Permission::ManageApiKeys,
        Permission::OrganizationSettings,
        Permission::SuperDelete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ReadData => "readData",
            Permission::AddComments => "addComments",
            Permission::CreateIdeas => "createIdeas",
            Permission::CreatePresentations => "createPresentations",
            Permission::CreateAnalyses => "createAnalyses",
            Permission::CreateDimensions => "createDimensions",
            Permission::CreateSegments => "createSegments",
            Permission::CreateMetrics => "createMetrics",
            Permission::CreateFeatures => "createFeatures",
            Permission::CreateFeatureDrafts => "createFeatureDrafts",
            Permission::PublishFeatures => "publishFeatures",
            Permission::RunQueries => "runQueries",
            Permission::ManageEnvironments => "manageEnvironments",
            Permission::ManageProjects => "manageProjects",
            Permission::ManageTeam => "manageTeam",
            Permission::ManageApiKeys => "manageApiKeys",
            Permission::OrganizationSettings => "organizationSettings",
            Permission::SuperDelete => "superDelete",
        }
    }

    /// Human-readable description from the catalog.
    pub fn description(&self) -> &'static str {
        PERMISSIONS
            .iter()
            .find(|(name, _)| *name == self.as_str())
            .map(|(_, desc)| *desc)
            .unwrap_or("")
    }
}

impl AsRef<str> for Permission {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AuthError::InvalidInput(format!("unknown permission: {s}")))
    }
}
