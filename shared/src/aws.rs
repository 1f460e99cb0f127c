//! AWS SDK configuration shared by the functions.
//!
use aws_config::meta::region::RegionProviderChain;
use aws_config::SdkConfig;
use aws_types::region::Region;

/// Loads the SDK config from the Lambda environment (credentials, region).
pub async fn load_aws_config() -> SdkConfig {
    aws_config::load_from_env().await
}

/// Loads the SDK config pinned to `region`, for clients that must talk to a
/// resource outside the function's own region.
pub async fn load_aws_config_in_region(region: &str) -> SdkConfig {
    let region_provider =
        RegionProviderChain::first_try(Region::new(region.to_owned())).or_default_provider();
    aws_config::from_env().region(region_provider).load().await
}
