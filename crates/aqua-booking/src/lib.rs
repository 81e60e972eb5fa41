// Aqua Booking - experience and equipment reservations
// Pricing and request assembly, independent of any view or HTTP layer

pub mod catalog;
pub mod config;
pub mod form;
pub mod item;
pub mod pricing;
pub mod request;
pub mod schema;

pub use catalog::{Catalog, PriceRange, SearchFilters, SearchQuery};
pub use config::Config;
pub use form::{BookingForm, BookingSubmitter};
pub use item::{BookableItem, BookingKind, Equipment, Experience};
pub use pricing::{compute_total, PriceBreakdown, PriceCalculator, TimeSpan};
pub use request::{BookingRequest, BookingRequestBuilder, PaymentMethod};
