pub mod config;
pub mod error;
pub mod net;
pub mod content;
pub mod pages;
pub mod view;
pub mod scene;
pub mod router;

pub use config::AppConfig;
pub use error::{FetchError, NavError};
pub use pages::{PageDescriptor, PageId, PageRegistry};
pub use router::{NavEvent, NavigationState, Router};
