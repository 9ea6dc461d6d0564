use lambda_http::Error;
use bookshelf::catalog::server::serve;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::utils::logging::setup_tracing;

// Set BOOKSHELF_SERVE_MODE=lambda to run behind the AWS Lambda runtime, see
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env();
    setup_tracing(config.log_level.as_str());

    let state = AppState::new(config);
    serve(state).await
}
