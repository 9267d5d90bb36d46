pub const GREETING: &str = "Hello, Serverless with Database! 🚀\n";

/// Plain-text greeting. Does not touch the database.
pub async fn hello() -> &'static str {
    GREETING
}
