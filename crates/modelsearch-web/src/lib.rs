pub mod api;
pub mod app;
pub mod components;

pub use app::App;
pub use components::model_search::ModelSearch;
