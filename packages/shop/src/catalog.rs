//! # Client-side catalog views
//!
//! Pure transforms over collections the pages already fetched. Nothing here mutates
//! the input or keeps state between calls.
//!
//! | Function | Used by |
//! |----------|---------|
//! | [`best_sellers`] | product detail "best seller" rail |
//! | [`special_offer`] | home page special-offer block (25% display discount) |
//! | [`CatalogFilter`] / [`SortOrder`] | product list filters |
//! | [`facet_values`] | filter dropdown options |
//! | [`filter_articles`] / [`related_articles`] | article list and detail |
//! | [`format_rupiah`] | every price label |

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Article, Product};

/// Display-only discount applied to special offers.
pub const SPECIAL_OFFER_DISCOUNT: f64 = 0.25;
/// Number of products shown in the special-offer block.
pub const SPECIAL_OFFER_SIZE: usize = 2;

/// Products flagged as best sellers, without the one currently viewed.
pub fn best_sellers<'a>(products: &'a [Product], exclude_id: Option<&str>) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.best_seller)
        .filter(|p| Some(p.id.as_str()) != exclude_id)
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiscountedProduct {
    pub product: Product,
    pub original_price: f64,
    pub discounted_price: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SpecialOffer {
    Ready(Vec<DiscountedProduct>),
    NotEnoughProducts,
}

/// Random sample of [`SPECIAL_OFFER_SIZE`] flagged products with the display
/// discount. Unflagged products are never offered.
pub fn special_offer<R: Rng + ?Sized>(products: &[Product], rng: &mut R) -> SpecialOffer {
    let candidates: Vec<&Product> = products.iter().filter(|p| p.special_offer).collect();
    if candidates.len() < SPECIAL_OFFER_SIZE {
        return SpecialOffer::NotEnoughProducts;
    }
    let picked = candidates
        .choose_multiple(rng, SPECIAL_OFFER_SIZE)
        .map(|p| DiscountedProduct {
            product: (*p).clone(),
            original_price: p.price,
            discounted_price: (p.price * (1.0 - SPECIAL_OFFER_DISCOUNT)).round(),
        })
        .collect();
    SpecialOffer::Ready(picked)
}

/// Filters from the product list sidebar. Empty fields match everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogFilter {
    pub search: String,
    pub category: Option<String>,
    pub material: Option<String>,
    pub physical_form: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

fn same_tag(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted.as_deref().map(str::trim).filter(|w| !w.is_empty()) {
        None => true,
        Some(w) => actual
            .as_deref()
            .is_some_and(|a| a.trim().eq_ignore_ascii_case(w)),
    }
}

impl CatalogFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle);

        text_ok
            && same_tag(&self.category, &product.category)
            && same_tag(&self.material, &product.material)
            && same_tag(&self.physical_form, &product.physical_form)
            && self.min_price.map_or(true, |min| product.price >= min)
            && self.max_price.map_or(true, |max| product.price <= max)
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == CatalogFilter::default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Backend order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    NameAsc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Default,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::RatingDesc,
        SortOrder::NameAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::RatingDesc => "rating",
            SortOrder::NameAsc => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Default => "Terbaru",
            SortOrder::PriceAsc => "Harga terendah",
            SortOrder::PriceDesc => "Harga tertinggi",
            SortOrder::RatingDesc => "Rating tertinggi",
            SortOrder::NameAsc => "Nama A-Z",
        }
    }

    /// Stable sort, so ties keep backend order.
    pub fn sort(&self, products: &mut [&Product]) {
        match self {
            SortOrder::Default => {}
            SortOrder::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOrder::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortOrder::NameAsc => {
                products.sort_by_key(|p| p.name.to_lowercase());
            }
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| format!("unknown sort order: {s}"))
    }
}

/// Filter then sort in one go.
pub fn browse<'a>(products: &'a [Product], filter: &CatalogFilter, order: SortOrder) -> Vec<&'a Product> {
    let mut view = filter.apply(products);
    order.sort(&mut view);
    view
}

/// Distinct non-empty tag values, sorted, for filter dropdowns.
pub fn facet_values<F>(products: &[Product], tag: F) -> Vec<String>
where
    F: Fn(&Product) -> Option<&String>,
{
    let mut values: Vec<String> = products
        .iter()
        .filter_map(|p| tag(p))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    values.sort_by_key(|v| v.to_lowercase());
    values.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    values
}

pub fn filter_articles<'a>(
    articles: &'a [Article],
    category: Option<&str>,
    search: &str,
) -> Vec<&'a Article> {
    let needle = search.trim().to_lowercase();
    articles
        .iter()
        .filter(|a| match category.map(str::trim).filter(|c| !c.is_empty()) {
            None => true,
            Some(c) => a
                .category
                .as_deref()
                .is_some_and(|ac| ac.eq_ignore_ascii_case(c)),
        })
        .filter(|a| {
            needle.is_empty()
                || a.title.to_lowercase().contains(&needle)
                || a.content.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Same-category articles first, then the most viewed; never the current one.
pub fn related_articles<'a>(articles: &'a [Article], current: &Article, limit: usize) -> Vec<&'a Article> {
    let mut others: Vec<&Article> = articles.iter().filter(|a| a.id != current.id).collect();
    others.sort_by(|a, b| {
        let same_a = a.category.is_some() && a.category == current.category;
        let same_b = b.category.is_some() && b.category == current.category;
        same_b.cmp(&same_a).then(b.views.cmp(&a.views))
    });
    others.truncate(limit);
    others
}

/// `Rp 1.250.000` (Indonesian thousands separator, no decimals).
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if negative {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            store_id: None,
            name: format!("Pakan {id}"),
            description: String::new(),
            category: None,
            material: None,
            physical_form: None,
            price,
            best_seller: false,
            special_offer: false,
            image_url: None,
            rating: 4.0,
            stock: 10,
            weights: Vec::new(),
        }
    }

    fn article(id: &str, category: Option<&str>, views: u64) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Artikel {id}"),
            content: String::new(),
            published_at: None,
            authors: Vec::new(),
            cover_image: None,
            views,
            category: category.map(str::to_string),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_best_sellers_excludes_current() {
        let mut products = vec![product("a", 1.0), product("b", 2.0), product("c", 3.0)];
        products[0].best_seller = true;
        products[1].best_seller = true;

        let ids: Vec<&str> = best_sellers(&products, Some("a"))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b"]);
        assert_eq!(best_sellers(&products, None).len(), 2);
    }

    #[test]
    fn test_special_offer_needs_two_products() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(special_offer(&[], &mut rng), SpecialOffer::NotEnoughProducts);
        assert_eq!(
            special_offer(&[product("a", 100_000.0)], &mut rng),
            SpecialOffer::NotEnoughProducts
        );
    }

    #[test]
    fn test_special_offer_applies_display_discount() {
        let mut products = vec![product("a", 100_000.0), product("b", 200_000.0), product("c", 300_000.0)];
        for p in &mut products {
            p.special_offer = true;
        }
        let mut rng = StdRng::seed_from_u64(7);

        let SpecialOffer::Ready(picked) = special_offer(&products, &mut rng) else {
            panic!("expected two products");
        };
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0].product.id, picked[1].product.id);
        for offer in &picked {
            assert_eq!(offer.original_price, offer.product.price);
            assert_eq!(offer.discounted_price, offer.product.price * 0.75);
        }
        // the source collection is untouched
        assert_eq!(products[0].price, 100_000.0);
    }

    #[test]
    fn test_special_offer_only_uses_flagged_products() {
        let mut products = vec![product("a", 1.0), product("b", 2.0), product("c", 3.0)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(special_offer(&products, &mut rng), SpecialOffer::NotEnoughProducts);

        products[1].special_offer = true;
        assert_eq!(special_offer(&products, &mut rng), SpecialOffer::NotEnoughProducts);

        products[2].special_offer = true;
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let SpecialOffer::Ready(picked) = special_offer(&products, &mut rng) else {
                panic!("expected two products");
            };
            let mut ids: Vec<&str> = picked.iter().map(|o| o.product.id.as_str()).collect();
            ids.sort();
            assert_eq!(ids, vec!["b", "c"]);
        }
    }

    #[test]
    fn test_filter_and_sort() {
        let mut products = vec![product("a", 300.0), product("b", 100.0), product("c", 200.0)];
        products[0].category = Some("Unggas".into());
        products[1].category = Some("unggas".into());
        products[2].category = Some("Ruminansia".into());

        let filter = CatalogFilter {
            category: Some("UNGGAS".into()),
            ..Default::default()
        };
        let ids: Vec<&str> = browse(&products, &filter, SortOrder::PriceAsc)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);

        let ranged = CatalogFilter {
            min_price: Some(150.0),
            max_price: Some(250.0),
            ..Default::default()
        };
        assert_eq!(ranged.apply(&products).len(), 1);

        let search = CatalogFilter {
            search: " pakan C ".into(),
            ..Default::default()
        };
        assert_eq!(search.apply(&products)[0].id, "c");
        assert!(CatalogFilter::default().is_empty());
    }

    #[test]
    fn test_sort_order_parse() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>().unwrap(), order);
        }
        assert!("cheapest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_facet_values_dedup_case_insensitive() {
        let mut products = vec![product("a", 1.0), product("b", 2.0), product("c", 3.0)];
        products[0].material = Some("Jagung".into());
        products[1].material = Some("jagung ".into());
        products[2].material = Some("Dedak".into());
        assert_eq!(
            facet_values(&products, |p| p.material.as_ref()),
            vec!["Dedak".to_string(), "Jagung".to_string()]
        );
    }

    #[test]
    fn test_articles_filter_and_related() {
        let articles = vec![
            article("1", Some("Nutrisi"), 10),
            article("2", Some("Nutrisi"), 5),
            article("3", Some("Kesehatan"), 100),
            article("4", None, 50),
        ];
        assert_eq!(filter_articles(&articles, Some("nutrisi"), "").len(), 2);
        assert_eq!(filter_articles(&articles, None, "artikel 3")[0].id, "3");

        let related: Vec<&str> = related_articles(&articles, &articles[0], 2)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(related, vec!["2", "3"]);
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(950.0), "Rp 950");
        assert_eq!(format_rupiah(1_250_000.0), "Rp 1.250.000");
        assert_eq!(format_rupiah(112_500.4), "Rp 112.500");
        assert_eq!(format_rupiah(-5000.0), "-Rp 5.000");
    }
}
