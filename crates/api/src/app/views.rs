//! Server-rendered pages.
//!
//! Templates are compiled into the binary; the pages themselves are thin
//! shells that talk to `/api/products` from the browser (`public/app.js`).

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tera::{Context, Tera};
use tracing::error;

const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("product-grid.html", include_str!("../../templates/product-grid.html")),
    ("add-product.html", include_str!("../../templates/add-product.html")),
    ("edit-product.html", include_str!("../../templates/edit-product.html")),
    ("404.html", include_str!("../../templates/404.html")),
];

#[derive(Clone)]
pub struct Views {
    tera: Arc<Tera>,
}

impl Views {
    pub fn new() -> Self {
        let mut tera = Tera::default();
        if let Err(e) = tera.add_raw_templates(TEMPLATES) {
            error!(error = %e, "failed to compile page templates");
        }
        Self { tera: Arc::new(tera) }
    }

    /// Product listing, optionally narrowed to one category.
    pub fn product_grid(&self, category: Option<&str>) -> Response {
        let mut ctx = Context::new();
        ctx.insert("category", &category);
        self.render(StatusCode::OK, "product-grid.html", &ctx)
    }

    pub fn add_product(&self) -> Response {
        self.render(StatusCode::OK, "add-product.html", &Context::new())
    }

    pub fn edit_product(&self, id: &str) -> Response {
        let mut ctx = Context::new();
        ctx.insert("id", id);
        self.render(StatusCode::OK, "edit-product.html", &ctx)
    }

    pub fn not_found(&self) -> Response {
        self.render(StatusCode::NOT_FOUND, "404.html", &Context::new())
    }

    fn render(&self, status: StatusCode, template: &str, ctx: &Context) -> Response {
        match self.tera.render(template, ctx) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!(template, error = ?e, "page render failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

impl Default for Views {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(res: Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn embedded_templates_compile() {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES).unwrap();
        let mut names: Vec<_> = tera.get_template_names().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            ["404.html", "add-product.html", "base.html", "edit-product.html", "product-grid.html"]
        );
    }

    #[tokio::test]
    async fn every_page_renders() {
        let views = Views::new();
        for res in [
            views.product_grid(None),
            views.product_grid(Some("Work")),
            views.add_product(),
            views.edit_product("1"),
        ] {
            assert_eq!(res.status(), StatusCode::OK);
        }
        let html = body_text(views.not_found()).await;
        assert!(html.contains("Page not found"));
    }

    #[tokio::test]
    async fn category_is_escaped_into_the_grid() {
        let res = Views::new().product_grid(Some("<b>Tools</b>"));
        assert_eq!(res.status(), StatusCode::OK);
        let html = body_text(res).await;
        assert!(html.contains("&lt;b&gt;Tools"));
        assert!(!html.contains("<b>Tools</b>"));
    }

    #[tokio::test]
    async fn edit_page_carries_the_id() {
        let html = body_text(Views::new().edit_product("abc123")).await;
        assert!(html.contains(r#"data-product-id="abc123""#));
    }

    #[tokio::test]
    async fn not_found_page_has_404_status() {
        assert_eq!(Views::new().not_found().status(), StatusCode::NOT_FOUND);
    }
}
