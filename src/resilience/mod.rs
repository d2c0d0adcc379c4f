pub mod retry;

pub use retry::RetrySettings;
