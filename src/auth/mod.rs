//! Player authentication against the game server
//!
//! The login endpoint reuses one XML schema for several unrelated
//! situations (success record, ban record, descriptive error, raw HTML
//! page), so the interesting work lives in [`classifier`], which resolves
//! the reply by structural presence rather than content sniffing.
//! [`service`] drives the network call and feeds the classifier.

mod classifier;
mod service;

pub use classifier::classify_login_response;
pub use service::AuthService;
