mod article_card;
mod product_card;
mod states;
mod status_panel;

pub use article_card::ArticleCard;
pub use product_card::{PriceTag, ProductCard};
pub use states::{EmptyState, ErrorState, SkeletonGrid};
pub use status_panel::StatusPanel;
