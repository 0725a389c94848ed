use axum::extract::State;
use tower_sessions::Session;

use crate::{
    context::{Context, SESSION_USER_KEY},
    error::ScoreboardError,
    view::{self, Blocks, Fragment, View},
};

pub async fn home<T: Context>(
    State(context): State<T>,
    session: Session,
) -> Result<View, ScoreboardError> {
    let signed_in = session
        .get::<String>(SESSION_USER_KEY)
        .await
        .map_err(anyhow::Error::from)?
        .is_some();
    let title = context.site().title();

    let body = Fragment::render(&view::Home { title, signed_in })?;

    Ok(View::new(Blocks::new(body).with_title(Fragment::text(title)?)))
}
