use std::collections::HashMap;
use strum::{AsRefStr, EnumIter};

use crate::view::RenderError;

/// Admin pages linked from the sidebar, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum AdminRoute {
    AdminCategories,
    AdminChallenges,
    AdminChallengeBackup,
    AdminChallengeRestore,
    AdminUsers,
    AdminTeams,
}

impl AdminRoute {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AdminCategories => "Categories",
            Self::AdminChallenges => "Challenges",
            Self::AdminChallengeBackup => "Backup Challenges",
            Self::AdminChallengeRestore => "Restore Challenges",
            Self::AdminUsers => "Users",
            Self::AdminTeams => "Teams",
        }
    }

    pub fn requires_teams(&self) -> bool {
        matches!(self, Self::AdminTeams)
    }

    fn default_path(&self) -> &'static str {
        match self {
            Self::AdminCategories => "/admin/categories",
            Self::AdminChallenges => "/admin/challenges",
            Self::AdminChallengeBackup => "/admin/challenges/backup",
            Self::AdminChallengeRestore => "/admin/challenges/restore",
            Self::AdminUsers => "/admin/users",
            Self::AdminTeams => "/admin/teams",
        }
    }
}

/// Resolves logical route names to paths.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: HashMap<String, String>,
    static_prefix: String,
}

impl RouteTable {
    /// A table with no named routes.
    pub fn empty(static_prefix: impl Into<String>) -> Self {
        Self {
            routes: HashMap::new(),
            static_prefix: static_prefix.into(),
        }
    }

    pub fn with_route(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.routes.insert(name.into(), path.into());
        self
    }

    pub fn url_for(&self, name: &str) -> Result<&str, RenderError> {
        self.routes
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RenderError::UnknownRoute(name.to_string()))
    }

    pub fn static_url(&self, filename: &str) -> String {
        format!(
            "{}/{}",
            self.static_prefix.trim_end_matches('/'),
            filename.trim_start_matches('/')
        )
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        use strum::IntoEnumIterator as _;

        AdminRoute::iter().fold(Self::empty("/static"), |table, route| {
            table.with_route(route.as_ref(), route.default_path())
        })
    }
}
