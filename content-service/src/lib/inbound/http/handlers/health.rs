/// Liveness probe. Does not touch the record store.
pub async fn health() -> &'static str {
    "ok"
}
