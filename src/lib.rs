use anyhow::Result;
use axum::{middleware, routing::get, Router};
use axum_messages::MessagesManagerLayer;
use base64::prelude::*;
use std::path::Path;
use tokio::signal;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{
    cookie::{self, Key},
    Expiry, MemoryStore, SessionManagerLayer,
};
use tracing::{info, warn};

pub mod cli;
pub mod config;
pub mod context;
mod controller;
pub mod error;
pub mod routes;
pub mod view;

pub use {
    config::Config,
    context::{Context, CurrentUser, LayoutContext, ScoreboardContext, SiteConfig},
    error::ScoreboardError,
    routes::RouteTable,
    view::{Blocks, Fragment, View},
};

pub struct Scoreboard {
    config: Config,
}

impl Scoreboard {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn serve(self) -> Result<()> {
        let session = SessionSettings::new(session_key(self.config.session_key.as_deref())?)
            .secure(self.config.secure_cookies);
        let context =
            ScoreboardContext::new(SiteConfig::from(&self.config), RouteTable::default());

        let router = router(context, Router::new(), session, &self.config.static_dir);

        // Enable livereload for debug builds.
        #[cfg(debug_assertions)]
        let (router, _watcher) = livereload(router, &self.config.static_dir)?;

        let listener = tokio::net::TcpListener::bind(&self.config.bind_address).await?;
        info!("listening on {}", listener.local_addr()?);

        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// How the session cookie is signed and sent.
#[derive(Clone)]
pub struct SessionSettings {
    key: Key,
    secure: bool,
}

impl SessionSettings {
    pub fn new(key: Key) -> Self {
        Self { key, secure: false }
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}

/// Builds the site: the home page, the given pages and static files, with
/// every [`View`] wrapped in the layout.
pub fn router<T: Context>(
    context: T,
    pages: Router<T>,
    session: SessionSettings,
    static_dir: &Path,
) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(session.secure)
        .with_expiry(Expiry::OnInactivity(cookie::time::Duration::days(1)))
        .with_signed(session.key);

    Router::new()
        .route("/", get(controller::home::<T>))
        .merge(pages)
        // Static assets.
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(middleware::map_response_with_state(
            context.clone(),
            view::render_view::<T>,
        ))
        .layer(MessagesManagerLayer)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}

fn session_key(encoded: Option<&str>) -> Result<Key> {
    match encoded {
        Some(encoded) => {
            let bytes = BASE64_STANDARD.decode(encoded)?;
            Ok(Key::try_from(bytes.as_slice())?)
        }
        None => {
            warn!("No session_key configured. Falling back to generated key. This will invalidate any sessions when the server is stopped.");
            Ok(Key::generate())
        }
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(debug_assertions)]
fn livereload(router: Router, static_dir: &Path) -> Result<(Router, notify::RecommendedWatcher)> {
    use notify::Watcher;

    let livereload = tower_livereload::LiveReloadLayer::new();
    let reloader = livereload.reloader();

    let router = router.layer(livereload);

    let mut watcher =
        notify::recommended_watcher(move |_: notify::Result<notify::Event>| reloader.reload())?;
    watcher.watch(static_dir, notify::RecursiveMode::Recursive)?;

    Ok((router, watcher))
}
