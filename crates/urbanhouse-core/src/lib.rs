//! UrbanHouse core library: UI-agnostic logic for the real-estate site.
//!
//! `urbanhouse-core` holds the listing data model, the property search engine
//! and the featured-listings carousel. It has no dependency on any web
//! framework, so the HTTP server (`urbanhouse-web`) and its tests drive the
//! same logic.
//!
//! # Modules
//!
//! - [`listing`]: the [`Property`] record and the read-only [`ListingStore`].
//! - [`search`]: text normalisation, filter criteria, matching and selector options.
//! - [`carousel`]: the index state machine, breakpoints, gestures, autoplay and sessions.
//! - [`config`]: TOML-based site settings.
//! - [`event`]: command types sent from the front end to the engines.
//! - [`error`]: unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod carousel;
pub mod config;
pub mod error;
pub mod event;
pub mod listing;
pub mod search;

pub use carousel::autoplay::{AutoplayTimer, DEFAULT_AUTOPLAY_PERIOD};
pub use carousel::gesture::{GestureSession, Swipe, DEFAULT_SWIPE_THRESHOLD};
pub use carousel::session::{CarouselHandle, CarouselSession};
pub use carousel::state::{Carousel, CarouselView};
pub use carousel::viewport::{classify, Breakpoints};
pub use config::settings::Config;
pub use error::{CoreError, CoreResult};
pub use event::{CarouselCommand, FilterCommand};
pub use listing::property::Property;
pub use listing::store::{ListingStore, DEFAULT_FEATURED_LIMIT};
pub use search::criteria::{Bounds, FilterCriteria};
pub use search::filter::filter_listings;
pub use search::options::FilterOptions;
pub use search::text::normalize;
pub use search::ListingSearch;
