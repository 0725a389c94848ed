use axum_messages::{Level, Message};
use std::sync::Arc;

use crate::{config::Config, routes::RouteTable};

/// Session key holding the signed-in user's identity token.
pub const SESSION_USER_KEY: &str = "user";

pub const DEFAULT_TITLE: &str = "Scoreboard";

/// Application-wide state shared by every request.
pub trait Context: Clone + Send + Sync + 'static {
    fn site(&self) -> &SiteConfig;
    fn routes(&self) -> &RouteTable;
}

#[derive(Clone, Debug)]
pub struct ScoreboardContext {
    pub site: Arc<SiteConfig>,
    pub routes: Arc<RouteTable>,
}

impl ScoreboardContext {
    pub fn new(site: SiteConfig, routes: RouteTable) -> Self {
        Self {
            site: Arc::new(site),
            routes: Arc::new(routes),
        }
    }
}

impl Context for ScoreboardContext {
    fn site(&self) -> &SiteConfig {
        &self.site
    }

    fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

/// The configuration keys the layout reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: Option<String>,
    pub teams: bool,
}

impl SiteConfig {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

impl From<&Config> for SiteConfig {
    fn from(config: &Config) -> Self {
        Self {
            title: config.title.clone(),
            teams: config.teams,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<String>,
}

impl SessionState {
    pub fn signed_in(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }
}

/// Inserted into request extensions by whatever authenticates the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub nick: String,
    pub admin: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub category: String,
    pub message: String,
}

impl Flash {
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }
}

impl From<Message> for Flash {
    fn from(message: Message) -> Self {
        Self::new(category(message.level), message.message)
    }
}

/// Bootstrap alert category for a message level.
pub fn category(level: Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

/// Everything one render of the layout depends on.
#[derive(Clone, Debug, Default)]
pub struct LayoutContext {
    pub session: SessionState,
    pub current_user: Option<CurrentUser>,
    pub config: SiteConfig,
    pub flashes: Vec<Flash>,
}

impl LayoutContext {
    pub fn signed_in(&self) -> bool {
        self.session.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user.as_ref().is_some_and(|user| user.admin)
    }
}
