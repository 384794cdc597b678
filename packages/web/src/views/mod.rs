mod shell;
pub use shell::{NotFound, Shell};

mod home;
pub use home::Home;

mod products;
pub use products::Products;

mod product_detail;
pub use product_detail::ProductDetail;

mod articles;
pub use articles::{ArticleDetail, Articles};

mod konsultan;
pub use konsultan::{KonsultanDetail, KonsultanList};

mod cart;
pub use cart::{Cart, Wishlist};

mod orders;
pub use orders::Orders;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod status;
pub use status::{AppointmentError, PaymentError, PaymentPending, PaymentSuccess};

use dioxus::prelude::*;
use shop::SessionState;

/// Session for pages that need a signed-in user. Sends anonymous visitors to the
/// login page once the session has loaded.
pub(crate) fn use_signed_in() -> SessionState {
    let session = ui::use_session();
    let nav = use_navigator();
    let state = session.get();

    use_effect(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            nav.replace(crate::Route::Login {});
        }
    });

    state
}

/// For the login and register pages: a visitor who is already signed in goes back
/// to the shop.
pub(crate) fn use_redirect_signed_in() {
    let session = ui::use_session();
    let nav = use_navigator();

    use_effect(move || {
        let state = session.get();
        if !state.loading && state.user.is_some() {
            nav.replace(crate::Route::Home {});
        }
    });
}
