//! HTML rendering of matched routes.

use serde::Serialize;
use tera::{Context, Tera};

use crate::routing::{RouteMatch, RouteParams, RouterConfig};
use crate::stocks::StockBook;
use crate::views::templates;
use crate::views::{View, ViewError};

#[derive(Serialize)]
struct TickerLink<'a> {
    symbol: &'a str,
    href: String,
}

/// Renders views with a fixed set of compiled templates.
pub struct ViewRenderer {
    tera: Tera,
}

impl ViewRenderer {
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("home.html", templates::HOME),
            ("stock.html", templates::STOCK),
            ("not_found.html", templates::NOT_FOUND),
        ])?;
        Ok(Self { tera })
    }

    /// Render the view a route resolved to.
    pub fn render(
        &self,
        router: &RouterConfig,
        matched: &RouteMatch,
        book: &StockBook,
    ) -> Result<String, ViewError> {
        let mut context = Context::new();
        match matched.view {
            View::Home => {
                let mut tickers = Vec::new();
                for symbol in book.tickers() {
                    let params = RouteParams::from([("ticker".to_string(), symbol.to_string())]);
                    tickers.push(TickerLink {
                        symbol,
                        href: router.location("stock", &params)?,
                    });
                }
                context.insert("tickers", &tickers);
                context.insert("records", book.records());
                Ok(self.tera.render("home.html", &context)?)
            }
            View::Stock => {
                let ticker = matched.param("ticker").ok_or(ViewError::MissingParam {
                    view: View::Stock,
                    param: "ticker",
                })?;
                context.insert("ticker", &ticker.to_uppercase());
                context.insert("quote", &book.quote(ticker));
                context.insert("home_href", &home_location(router)?);
                Ok(self.tera.render("stock.html", &context)?)
            }
        }
    }

    /// Page shown when no route matches.
    pub fn render_not_found(&self, router: &RouterConfig, path: &str) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("path", path);
        context.insert("home_href", &home_location(router)?);
        Ok(self.tera.render("not_found.html", &context)?)
    }
}

fn home_location(router: &RouterConfig) -> Result<String, ViewError> {
    Ok(router.location("home", &RouteParams::new())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route_table;

    #[test]
    fn test_render_home() {
        let router = route_table();
        let renderer = ViewRenderer::new().unwrap();
        let matched = router.resolve("/").unwrap();

        let html = renderer.render(&router, &matched, &StockBook::demo()).unwrap();
        assert!(html.contains("<h1>Stocks</h1>"));
        assert!(html.contains("MSFT"));
        assert!(html.contains("Second record"));
    }

    #[test]
    fn test_render_known_stock() {
        let router = route_table();
        let renderer = ViewRenderer::new().unwrap();
        let matched = router.resolve("/stock/aapl").unwrap();

        let html = renderer.render(&router, &matched, &StockBook::demo()).unwrap();
        assert!(html.contains("<h1 class=\"ticker\">AAPL</h1>"));
        assert!(html.contains("Price: 150"));
        assert!(html.contains("+1.5%"));
    }

    #[test]
    fn test_render_unknown_stock() {
        let router = route_table();
        let renderer = ViewRenderer::new().unwrap();
        let matched = router.resolve("/stock/ZZZZ").unwrap();

        let html = renderer.render(&router, &matched, &StockBook::demo()).unwrap();
        assert!(html.contains("Ticker not found"));
    }

    #[test]
    fn test_params_are_escaped() {
        let router = route_table();
        let renderer = ViewRenderer::new().unwrap();
        let matched = router.resolve("/stock/%3Cscript%3E").unwrap();

        let html = renderer.render(&router, &matched, &StockBook::demo()).unwrap();
        assert!(!html.contains("<SCRIPT>"));
        assert!(html.contains("&lt;SCRIPT&gt;"));
    }

    #[test]
    fn test_render_not_found() {
        let router = route_table();
        let renderer = ViewRenderer::new().unwrap();
        let html = renderer.render_not_found(&router, "/about").unwrap();
        assert!(html.contains("Page not found"));
        assert!(html.contains("about"));
    }
}
