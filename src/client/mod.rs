pub mod fetch;
pub mod options;

pub use fetch::ApiClient;
pub use options::FetchOptions;
