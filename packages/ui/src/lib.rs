//! Shared UI for the storefront: session context, layout and the building blocks
//! every page renders.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const STOREFRONT_CSS: Asset = asset!("/assets/storefront.css");

mod navbar;
pub use navbar::{Navbar, UserMenu};

mod session;
pub use session::{
    hard_navigate, use_api, use_session, LogoutButton, SessionContext, SessionProvider,
};
