pub mod posts;

/// GET / -> static greeting, used to check the process is reachable.
pub async fn root_handler() -> &'static str {
    "Hello World!"
}
