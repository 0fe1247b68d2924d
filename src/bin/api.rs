use std::sync::Arc;

use kudos::api::handler::function_handler;
use kudos::core::config::AppConfig;
use kudos::core::store::PraiseStore;
use kudos::store::PgPraiseStore;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    kudos::setup_logging();

    // The pool outlives individual invocations; handlers re-read the rest of
    // the config per call.
    let config = AppConfig::from_env().map_err(lambda_runtime::Error::from)?;
    let store: Arc<dyn PraiseStore> = Arc::new(PgPraiseStore::connect(&config).await?);

    lambda_runtime::run(lambda_runtime::service_fn(move |event| {
        let store = Arc::clone(&store);
        async move { function_handler(event, store.as_ref()).await }
    }))
    .await
}
