pub mod banner;
pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod host;
pub mod shell;
#[doc(hidden)]
pub mod test_support;
pub mod view;
