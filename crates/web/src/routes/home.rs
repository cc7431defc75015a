//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use pocket_shop_core::{Cart, Catalog};

use crate::db::LikeRepository;
use crate::error::Result;
use crate::routes::cart::load_cart;
use crate::routes::content::status_parts;
use crate::state::AppState;

/// Product display data for the catalog list.
pub struct ProductLine {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub qty: u32,
}

/// Annotate the catalog with per-product cart quantities, in catalog order.
fn product_lines(catalog: &Catalog, cart: &Cart) -> Vec<ProductLine> {
    catalog
        .products()
        .iter()
        .map(|p| ProductLine {
            id: p.id.as_i32(),
            name: p.name.clone(),
            price: p.price.display(),
            qty: cart.quantity(p.id),
        })
        .collect()
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub like_count: i64,
    pub is_online: bool,
    pub status_text: &'static str,
    pub status_color: &'static str,
    pub status_icon: &'static str,
    pub quote: &'static str,
    pub color: &'static str,
    pub timestamp: String,
    pub products: Vec<ProductLine>,
    pub cart_count: u32,
}

/// Display the home page.
///
/// The status region always starts as the offline placeholder; the real
/// status arrives with the first `/online-status/` fragment request
/// (two-phase load).
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let like_count = LikeRepository::new(state.pool()).count().await?;
    let cart = load_cart(&session).await?;
    let offline = status_parts(false);

    Ok(HomeTemplate {
        like_count,
        is_online: false,
        status_text: offline.text,
        status_color: offline.color,
        status_icon: offline.icon,
        quote: "",
        color: "bg-blue-100",
        timestamp: String::new(),
        products: product_lines(state.catalog(), &cart),
        cart_count: cart.total_count(),
    })
}

#[cfg(test)]
mod tests {
    use pocket_shop_core::ProductId;

    use super::*;

    #[test]
    fn test_product_lines_annotate_cart_quantities() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(ProductId::new(2));
        cart.add(ProductId::new(2));

        let lines = product_lines(&catalog, &cart);
        assert_eq!(lines.len(), 4);

        let quantities: Vec<u32> = lines.iter().map(|l| l.qty).collect();
        assert_eq!(quantities, vec![0, 2, 0, 0]);
    }

    #[test]
    fn test_product_lines_keep_catalog_order_and_prices() {
        let catalog = Catalog::demo();
        let lines = product_lines(&catalog, &Cart::new());

        let ids: Vec<i32> = lines.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(
            lines.first().map(|l| l.price.as_str()),
            Some("$19.90")
        );
    }
}
