//! Fixed deployment settings. The table and its region are compiled in;
//! credentials and the function's own region come from the Lambda
//! environment.
//!
pub const TABLE_NAME: &str = "employee";
pub const TABLE_REGION: &str = "eu-west-3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    pub table_region: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            table_name: TABLE_NAME.to_string(),
            table_region: TABLE_REGION.to_string(),
        }
    }
}
