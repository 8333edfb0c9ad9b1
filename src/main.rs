use investment_api::api::server;

#[cfg(not(feature = "lambda"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    server::run_server().await
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    dotenv::dotenv().ok();
    server::init_tracing();

    // Build the router once at cold start, then hand it to the Lambda adapter
    // instead of binding a local listener.
    let app = server::create_app()
        .await
        .map_err(|e| lambda_runtime::Error::from(e.to_string()))?;

    lambda_web::run(app).await
}
