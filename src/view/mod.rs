mod home;
mod layout;

pub(crate) use home::*;
pub use layout::{render, Layout, Link};

use axum::{
    body::Body,
    extract::State,
    response::{Html, IntoResponse, Response},
    Extension,
};
use axum_messages::Messages;
use rinja::Template;
use tower_sessions::Session;

use crate::{
    context::{Context, CurrentUser, Flash, LayoutContext, SessionState, SESSION_USER_KEY},
    error::ScoreboardError,
};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("could not resolve route `{0}`")]
    UnknownRoute(String),

    #[error(transparent)]
    Template(#[from] rinja::Error),
}

/// Markup that is inserted into the layout as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment(String);

#[derive(Template)]
#[template(source = "{{ text }}", ext = "html")]
struct Text<'a> {
    text: &'a str,
}

impl Fragment {
    pub fn html(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Escapes plain text.
    pub fn text(text: &str) -> Result<Self, RenderError> {
        Self::render(&Text { text })
    }

    pub fn render(template: &impl Template) -> Result<Self, RenderError> {
        Ok(Self(template.render()?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The regions a page fills in the layout.
#[derive(Clone, Debug, Default)]
pub struct Blocks {
    pub sidebar: Fragment,
    pub title: Fragment,
    pub body: Fragment,
}

impl Blocks {
    pub fn new(body: Fragment) -> Self {
        Self {
            body,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: Fragment) -> Self {
        self.title = title;
        self
    }

    pub fn with_sidebar(mut self, sidebar: Fragment) -> Self {
        self.sidebar = sidebar;
        self
    }
}

/// A page response. The blocks are wrapped in the layout by [`render_view`].
#[derive(Clone, Debug)]
pub struct View(pub Blocks);

impl View {
    pub fn new(blocks: Blocks) -> Self {
        Self(blocks)
    }
}

#[derive(Clone)]
struct RenderedBlocks(Blocks);

impl IntoResponse for View {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::empty());
        response.extensions_mut().insert(RenderedBlocks(self.0));
        response
    }
}

/// Wraps [`View`] responses in the layout. Other responses pass through, and
/// leave pending flash messages for the next page.
pub async fn render_view<T: Context>(
    State(context): State<T>,
    session: Session,
    messages: Messages,
    current_user: Option<Extension<CurrentUser>>,
    response: Response,
) -> Response {
    let Some(RenderedBlocks(blocks)) = response.extensions().get::<RenderedBlocks>().cloned()
    else {
        return response;
    };
    let status = response.status();

    let layout_context = match layout_context(&context, &session, messages, current_user).await {
        Ok(layout_context) => layout_context,
        Err(error) => return error.into_response(),
    };

    match render(&layout_context, context.routes(), &blocks) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(error) => ScoreboardError::from(error).into_response(),
    }
}

async fn layout_context<T: Context>(
    context: &T,
    session: &Session,
    messages: Messages,
    current_user: Option<Extension<CurrentUser>>,
) -> Result<LayoutContext, ScoreboardError> {
    let user = session
        .get::<String>(SESSION_USER_KEY)
        .await
        .map_err(anyhow::Error::from)?;

    Ok(LayoutContext {
        session: SessionState { user },
        current_user: current_user.map(|Extension(user)| user),
        config: context.site().clone(),
        flashes: messages.into_iter().map(Flash::from).collect(),
    })
}
