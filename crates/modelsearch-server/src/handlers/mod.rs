pub mod search;
pub mod server;

pub async fn health() -> &'static str {
    "ok"
}
