use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::db::models::User;

pub const INDEX: &str = "index.html";
pub const SEARCH_USERS: &str = "search_users.html";
pub const SEARCH_RESULTS: &str = "search_results.html";

/// Which search handler produced a page. Rendered into headings and links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Vulnerable,
    Protected,
}

/// Templates are compiled into the binary; `.html` names get Tera's autoescaping.
#[derive(Debug, Clone)]
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html")),
            (INDEX, include_str!("../../templates/index.html")),
            (SEARCH_USERS, include_str!("../../templates/search_users.html")),
            (SEARCH_RESULTS, include_str!("../../templates/search_results.html")),
        ])?;

        Ok(Self { tera })
    }

    pub fn index(&self, users: &[User]) -> Result<Html<String>, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("users", users);
        self.render(INDEX, &ctx)
    }

    pub fn search_form(&self, mode: SearchMode) -> Result<Html<String>, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("mode", &mode);
        self.render(SEARCH_USERS, &ctx)
    }

    pub fn search_results(
        &self,
        mode: SearchMode,
        search_query: &str,
        users: &[User],
    ) -> Result<Html<String>, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("mode", &mode);
        ctx.insert("search_query", search_query);
        ctx.insert("users", users);
        self.render(SEARCH_RESULTS, &ctx)
    }

    fn render(&self, name: &str, ctx: &Context) -> Result<Html<String>, tera::Error> {
        self.tera.render(name, ctx).map(Html)
    }
}
