//! # google-cloud-datacatalog
//!
//! Google Cloud Platform Data Catalog Client library.
//!
//! ## Quickstart
//!
//! ### Authentication
//! There are two ways to create a client that is authenticated against the google cloud.
//!
//! #### Automatically
//!
//! The function `with_auth()` will try and read the credentials from a file specified in the environment variable `GOOGLE_APPLICATION_CREDENTIALS`, `GOOGLE_APPLICATION_CREDENTIALS_JSON` or
//! from a metadata server.
//!
//! This is also described in [google-cloud-auth](https://github.com/yoshidan/google-cloud-rust/blob/main/foundation/auth/README.md)
//!
//! ```rust
//! use google_cloud_datacatalog::client::{Client, ClientConfig};
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config).await.unwrap();
//! }
//! ```
//!
//! #### Manually
//!
//! ```rust
//! use google_cloud_auth::credentials::CredentialsFile;
//! // or google_cloud_datacatalog::client::google_cloud_auth::credentials::CredentialsFile
//! use google_cloud_datacatalog::client::{Client, ClientConfig};
//!
//! async fn run(cred: CredentialsFile) {
//!    let config = ClientConfig::default().with_credentials(cred).await.unwrap();
//!    let client = Client::new(config).await.unwrap();
//! }
//! ```
//!
//! ### Usage
//!
//! #### Fileset entry
//!
//! [`provision::create_fileset_entry`] removes a previous entry and entry group with the same ids,
//! then creates an entry group and a Cloud Storage fileset entry with a nested schema.
//!
//! ```
//! use google_cloud_datacatalog::client::{Client, ClientConfig};
//! use google_cloud_datacatalog::provision::create_fileset_entry;
//!
//! async fn run(config: ClientConfig) {
//!     let client = Client::new(config).await.unwrap();
//!     match create_fileset_entry(&client, "my-project-id", "fileset_entry_group", "fileset_entry_id").await {
//!         Ok(Some(created)) => println!("Entry created with name: {}", created.entry.name),
//!         Ok(None) => println!("nothing created"),
//!         Err(err) => panic!("err: {:?}", err),
//!     }
//! }
//! ```
//!
//! #### Entry group operations
//!
//! ```
//! use google_cloud_googleapis::cloud::datacatalog::v1::{CreateEntryGroupRequest, DeleteEntryGroupRequest};
//! use google_cloud_datacatalog::client::{Client, ClientConfig};
//! use google_cloud_datacatalog::fileset::fileset_entry_group;
//! use google_cloud_datacatalog::resource::{LocationName, DEFAULT_LOCATION};
//!
//! async fn run(config: ClientConfig) {
//!     let client = Client::new(config).await.unwrap();
//!     let parent = LocationName::new("my-project-id", DEFAULT_LOCATION);
//!     let created = client
//!         .create_entry_group(
//!             CreateEntryGroupRequest {
//!                 parent: parent.to_string(),
//!                 entry_group_id: "my_group".to_string(),
//!                 entry_group: Some(fileset_entry_group()),
//!             },
//!             None,
//!         )
//!         .await
//!         .unwrap();
//!     client
//!         .delete_entry_group(DeleteEntryGroupRequest { name: created.name, force: true }, None)
//!         .await
//!         .unwrap();
//! }
//! ```
pub mod client;
pub mod fileset;
pub mod grpc;
pub mod provision;
pub mod resource;
