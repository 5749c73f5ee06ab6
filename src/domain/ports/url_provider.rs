//! URL provider port
//!
//! External menu items link to a URL computed by the application. The
//! provider is asked on every render, so it may build request-specific URLs.

use std::fmt::Debug;

use url::Url;

pub trait HasSimpleUrl: Debug + Send + Sync {
    fn simple_url(&self) -> Url;
}

impl HasSimpleUrl for Url {
    fn simple_url(&self) -> Url {
        self.clone()
    }
}
