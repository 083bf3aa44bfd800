pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod render;
pub mod widget;

pub use config::{ServerConfig, WidgetConfig};
pub use error::{Result, SearchError};
pub use model::{
    SearchRequest, SearchResponse, SearchResult, ServerStatus, ServerUrlResponse, StatusResponse,
    SIZE_TAGS,
};
pub use query::Query;
pub use render::{results_html, ResultItem};
pub use widget::{InputAction, RequestTicket, SearchWidget};
