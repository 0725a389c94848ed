use rinja::Template;
use strum::IntoEnumIterator as _;
use tracing::debug;

use super::{Blocks, RenderError};
use crate::{
    context::{Flash, LayoutContext},
    routes::{AdminRoute, RouteTable},
};

const SIGNED_IN_NAV: [(&str, &str); 4] = [
    ("Challenges", "/challenges"),
    ("Scoreboard", "/scoreboard"),
    ("Profile", "/profile"),
    ("Logout", "/logout"),
];

const SIGNED_OUT_NAV: [(&str, &str); 2] = [("Login", "/login"), ("Register", "/register")];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: String,
}

impl Link {
    fn new(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
        }
    }
}

#[derive(Template)]
#[template(path = "layout.html")]
pub struct Layout<'a> {
    pub title: &'a str,
    pub scoreboard_js: String,
    pub nav: Vec<Link>,
    pub nick: Option<&'a str>,
    pub admin_links: Vec<Link>,
    pub flashes: &'a [Flash],
    pub blocks: &'a Blocks,
    pub version_string: &'static str,
}

impl<'a> Layout<'a> {
    pub fn new(
        context: &'a LayoutContext,
        routes: &RouteTable,
        blocks: &'a Blocks,
    ) -> Result<Self, RenderError> {
        let nav = if context.signed_in() {
            &SIGNED_IN_NAV[..]
        } else {
            &SIGNED_OUT_NAV[..]
        };

        Ok(Self {
            title: context.config.title(),
            scoreboard_js: routes.static_url("js/scoreboard.js"),
            nav: nav
                .iter()
                .map(|&(label, href)| Link::new(label, href))
                .collect(),
            nick: context.current_user.as_ref().map(|user| user.nick.as_str()),
            admin_links: admin_links(context, routes)?,
            flashes: &context.flashes,
            blocks,
            version_string: env!("CARGO_PKG_VERSION"),
        })
    }
}

fn admin_links(context: &LayoutContext, routes: &RouteTable) -> Result<Vec<Link>, RenderError> {
    if !context.is_admin() {
        return Ok(Vec::new());
    }

    AdminRoute::iter()
        .filter(|route| context.config.teams || !route.requires_teams())
        .map(|route| Ok(Link::new(route.label(), routes.url_for(route.as_ref())?)))
        .collect()
}

/// Renders a complete page: the layout around the given blocks.
pub fn render(
    context: &LayoutContext,
    routes: &RouteTable,
    blocks: &Blocks,
) -> Result<String, RenderError> {
    let layout = Layout::new(context, routes, blocks)?;
    debug!(
        signed_in = context.signed_in(),
        admin_links = layout.admin_links.len(),
        flashes = layout.flashes.len(),
        "rendering layout"
    );

    Ok(layout.render()?)
}
