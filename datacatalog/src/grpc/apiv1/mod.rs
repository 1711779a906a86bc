pub mod conn_pool;
pub mod datacatalog_client;

pub const AUDIENCE: &str = "https://datacatalog.googleapis.com/";
pub const DATACATALOG: &str = "datacatalog.googleapis.com";
pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/cloud-platform"];
