//! Site pages

mod home;
mod how_it_works;
mod not_found;
mod redeem;
mod refer;

pub use home::HomePage;
pub use how_it_works::HowItWorksPage;
pub use not_found::NotFoundPage;
pub use redeem::RedeemPage;
pub use refer::ReferPage;
