//! Estate Market Common Library
//!
//! CLIとWeb(WASM)で共有される型と一覧ロジック

pub mod types;
pub mod error;
pub mod category;
pub mod filter;
pub mod pagination;
pub mod card;
pub mod draft;
pub mod listing;
pub mod notification;
pub mod lifetime;
pub mod platform;
pub mod api;

pub use types::{Agent, AgentAuthStatus, AgentStatus, Banner, BannerKind, Price, PropertyRecord};
pub use error::{Error, Result};
pub use category::{classify, CardField, Category, Presentation, ALL_CATEGORIES, FILTER_TABS};
pub use filter::{apply_filters, filter_by_category, SearchQuery};
pub use pagination::{IncrementalPager, IndexedPager};
pub use card::{CardAction, CardActions, CardBlock, PropertyCard};
pub use draft::{BannerDraft, PropertyDraft};
pub use listing::{ListingPhase, ListingState};
pub use notification::{Notification, NotificationLabel};
pub use lifetime::{Lifetime, LifetimeGuard};
pub use platform::Platform;
pub use api::{ApiConfig, Endpoint, Method};
