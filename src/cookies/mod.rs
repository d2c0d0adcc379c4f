pub mod store;

pub use store::{Cookie, CookieStore};
