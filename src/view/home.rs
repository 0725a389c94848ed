use rinja::Template;

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct Home<'a> {
    pub title: &'a str,
    pub signed_in: bool,
}
