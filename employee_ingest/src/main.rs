use std::time::Instant;

use async_once::AsyncOnce;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use lazy_static::lazy_static;
use log::{debug, error, info};
use serde_json::json;

use employee_ingest::store::{DynamoDbEmployeeTable, S3ObjectStore};
use employee_ingest::{ingest, Config, IngestError};
use shared::{load_aws_config, load_aws_config_in_region, service_log, setup_logging};

lazy_static! {
    static ref CONFIG: Config = Config::default();
    static ref AWS_CONFIG: AsyncOnce<aws_config::SdkConfig> =
        AsyncOnce::new(async { load_aws_config().await });
    static ref TABLE_AWS_CONFIG: AsyncOnce<aws_config::SdkConfig> =
        AsyncOnce::new(async { load_aws_config_in_region(&CONFIG.table_region).await });
    static ref S3_CLIENT: AsyncOnce<aws_sdk_s3::Client> =
        AsyncOnce::new(async { aws_sdk_s3::Client::new(AWS_CONFIG.get().await) });
    static ref DYNAMODB_CLIENT: AsyncOnce<aws_sdk_dynamodb::Client> =
        AsyncOnce::new(async { aws_sdk_dynamodb::Client::new(TABLE_AWS_CONFIG.get().await) });
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    setup_logging();
    info!(
        "Writing employees to table {} in {}",
        CONFIG.table_name, CONFIG.table_region
    );

    let func = service_fn(handler);
    run(func).await?;

    Ok(())
}

/// Returns the uploaded object's declared content type.
async fn handler(event: LambdaEvent<S3Event>) -> Result<Option<String>, IngestError> {
    let start = Instant::now();
    debug!("Received event: {:?}", event.payload);

    let objects = S3ObjectStore::new(S3_CLIENT.get().await.clone());
    let table = DynamoDbEmployeeTable::new(DYNAMODB_CLIENT.get().await.clone(), &CONFIG.table_name);

    let summary = match ingest(&event.payload, &objects, &table).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Request {} failed: {}", event.context.request_id, e);
            if let Some(code) = e.exit_code() {
                std::process::exit(code);
            }
            return Err(e);
        }
    };

    service_log(
        "employee_ingest",
        start.elapsed(),
        json!({
            "bucket": &summary.location.bucket,
            "key": &summary.location.key,
            "content_type": &summary.content_type,
            "table": table.table_name(),
            "rows_written": summary.rows_written,
        }),
    );

    Ok(summary.content_type)
}
