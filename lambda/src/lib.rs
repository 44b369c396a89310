/// Briefly - a one-endpoint text summarization gateway backed by Google Gemini.
///
/// The API Lambda accepts `POST /api/summarize` with `{ "text": "..." }`, builds
/// a fixed formatting prompt, and tries an ordered list of Gemini models until
/// one answers. Failures are classified into a small set of caller-facing
/// errors; full provider detail only goes to the logs.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (API Gateway or Function URL) for serverless execution
/// - reqwest for the Gemini `generateContent` REST call
/// - tracing with a JSON subscriber for `CloudWatch` logs
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use briefly::ai::GeminiClient;
/// use briefly::core::config::AppConfig;
/// use briefly::core::features::summarize;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     briefly::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let provider = GeminiClient::new(config.gemini_api_base.clone(), config.request_timeout);
///
///     let response = summarize(
///         &config,
///         &provider,
///         r#"{"text": "Parcel 02167500003781 was delivered to the locker this morning."}"#,
///     )
///     .await;
///
///     println!("{} {:?}", response.status, response.body);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling it again
/// after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// briefly::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
