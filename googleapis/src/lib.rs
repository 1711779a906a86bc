#[cfg(feature = "datacatalog")]
#[path = ""]
pub mod cloud {
    #[path = ""]
    pub mod datacatalog {
        #[path = "google.cloud.datacatalog.v1.rs"]
        pub mod v1;
    }
}
