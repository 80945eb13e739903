//! Resource clients for the Schlep-engine API.
//!
//! Each client is a lightweight view over the transport owned by
//! [`SchlepClient`](crate::SchlepClient), bound to one path prefix:
//!
//! | Client | Prefix |
//! |---|---|
//! | [`DataClient`] | `/data` |
//! | [`MlClient`] | `/ml` |
//! | [`AnalyticsClient`] | `/analytics` |
//! | [`DocumentClient`] | `/extract` |
//! | [`QualityClient`] | `/quality` |
//! | [`StorageClient`] | `/storage` |
//! | [`MonitoringClient`] | `/monitoring` |
//! | [`UsersClient`] | `/users` |
//! | [`AdminClient`] | `/admin` |
//!
//! Every typed result is decoded through the `data` envelope, so endpoints
//! that wrap their payload and endpoints that return it bare decode alike.

mod admin;
mod analytics;
mod data;
mod document;
mod ml;
mod monitoring;
mod quality;
mod storage;
mod users;

pub use admin::AdminClient;
pub use analytics::AnalyticsClient;
pub use data::DataClient;
pub use document::DocumentClient;
pub use ml::MlClient;
pub use monitoring::MonitoringClient;
pub use quality::QualityClient;
pub use storage::StorageClient;
pub use users::UsersClient;

/// Query parameters shared by every paginated list endpoint.
fn page_params(page: u32, page_size: u32) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("page", Some(page.to_string())),
        ("page_size", Some(page_size.to_string())),
    ]
}
