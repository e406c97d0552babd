//! Shared site components

mod cards;
mod fields;
mod nav;
mod toast;

pub use cards::*;
pub use fields::FormField;
pub use nav::SiteNav;
pub use toast::ToastHost;
