//! `robots.txt` and `sitemap.xml`.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Public page paths listed in the sitemap.
pub const PAGE_PATHS: &[&str] = &["/", "/about", "/projects", "/contact"];

/// Serve crawler rules: everything allowed, sitemap advertised.
pub async fn robots(State(state): State<AppState>) -> Response {
    let sitemap = state.config().absolute_url("/sitemap.xml");
    let body = format!("User-agent: *\nAllow: /\n\nSitemap: {sitemap}\n");

    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

/// Serve the sitemap listing every page.
pub async fn sitemap(State(state): State<AppState>) -> Response {
    let urls: String = PAGE_PATHS
        .iter()
        .map(|path| {
            format!(
                "  <url><loc>{}</loc></url>\n",
                state.config().absolute_url(path)
            )
        })
        .collect();

    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
         {urls}</urlset>\n"
    );

    ([(header::CONTENT_TYPE, "application/xml")], body).into_response()
}
