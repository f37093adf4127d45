//! Index and shop page rendering.
//!
//! Turns shop records into template contexts, applying the `[render]`
//! fallbacks for empty fields. All links are relative so the site works
//! from any base path on the static host.

use super::{SHOPS_DIR, Templates, template::{Context, TemplateError}};
use crate::{config::SiteConfig, data::Shop, utils::html};

/// Separator between service labels
const SERVICE_SEPARATOR: &str = "、";

/// Relative link from the index page to a shop page.
pub fn shop_link(shop: &Shop) -> String {
    format!("{SHOPS_DIR}/{}/", shop.id)
}

/// Render the index page with one card per shop, in data order.
pub fn render_index(
    templates: &Templates,
    config: &SiteConfig,
    shops: &[Shop],
) -> Result<String, TemplateError> {
    let cards = shops
        .iter()
        .map(|shop| templates.card.render(&card_context(shop, config)))
        .collect::<Result<Vec<_>, _>>()?
        .join("\n");

    let context = Context::new()
        .text("language", &config.base.language)
        .text("title", &config.base.title)
        .text("description", &config.base.description)
        .text("footer", config.footer())
        .html("cards", cards);

    templates.index.render(&context)
}

/// Render the page of a single shop.
pub fn render_shop(
    templates: &Templates,
    config: &SiteConfig,
    shop: &Shop,
) -> Result<String, TemplateError> {
    let render = &config.render;
    let services = if shop.services.is_empty() {
        render.services_placeholder.clone()
    } else {
        shop.services.join(SERVICE_SEPARATOR)
    };

    let context = Context::new()
        .text("language", &config.base.language)
        .text("footer", config.footer())
        .text("name", &shop.name)
        .text("category", category(shop, config))
        .text("rating", &shop.rating)
        .text("reviews", &shop.reviews)
        .text("price", &shop.price)
        .text("address", &shop.address)
        .text("status", &shop.status)
        .text("hours", &shop.hours)
        .text("services", services)
        .text("image", or_fallback(&shop.image, &render.hero_placeholder))
        .text("map_link", &shop.map_link)
        .html("order_button", order_button(shop));

    templates.shop.render(&context)
}

fn card_context(shop: &Shop, config: &SiteConfig) -> Context {
    Context::new()
        .text("name", &shop.name)
        .text("category", category(shop, config))
        .text("rating", &shop.rating)
        .text("reviews", &shop.reviews)
        .text("price", &shop.price)
        .text("address", &shop.address)
        .text("image", or_fallback(&shop.image, &config.render.card_placeholder))
        .text("detail_link", shop_link(shop))
        .text("map_link", &shop.map_link)
}

fn category<'a>(shop: &'a Shop, config: &'a SiteConfig) -> &'a str {
    or_fallback(&shop.category, &config.render.default_category)
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Online ordering button, empty when the shop has no order link.
fn order_button(shop: &Shop) -> String {
    shop.order_link
        .as_deref()
        .map(|link| {
            format!(
                r#"<a class="button secondary" href="{}" target="_blank" rel="noreferrer">線上點餐</a>"#,
                html::escape(link)
            )
        })
        .unwrap_or_default()
}
