use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "auth")]
pub use google_cloud_auth;
use google_cloud_gax::conn::{ConnectionOptions, Environment, Error};
use google_cloud_token::{NopeTokenSourceProvider, TokenSourceProvider};

use crate::grpc::apiv1::conn_pool::ConnectionManager;
use crate::grpc::apiv1::datacatalog_client::Client as DataCatalogGrpcClient;
use crate::grpc::apiv1::{DATACATALOG, SCOPES};

#[derive(Debug)]
pub struct ClientConfig {
    pub datacatalog_endpoint: String,
    pub token_source_provider: Box<dyn TokenSourceProvider>,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

#[cfg(feature = "auth")]
impl ClientConfig {
    pub async fn with_auth(self) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new(Self::auth_config()).await?;
        Ok(self.with_token_source(ts).await)
    }

    pub async fn with_credentials(
        self,
        credentials: google_cloud_auth::credentials::CredentialsFile,
    ) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new_with_credentials(
            Self::auth_config(),
            Box::new(credentials),
        )
        .await?;
        Ok(self.with_token_source(ts).await)
    }

    async fn with_token_source(mut self, ts: google_cloud_auth::token::DefaultTokenSourceProvider) -> Self {
        self.token_source_provider = Box::new(ts);
        self
    }

    fn auth_config() -> google_cloud_auth::project::Config<'static> {
        google_cloud_auth::project::Config {
            audience: None,
            scopes: Some(&SCOPES),
            sub: None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            datacatalog_endpoint: DATACATALOG.to_string(),
            token_source_provider: Box::new(NopeTokenSourceProvider {}),
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Data Catalog client. The underlying channel is closed when the last clone is dropped.
#[derive(Clone)]
pub struct Client {
    datacatalog_client: DataCatalogGrpcClient,
}

impl Client {
    pub async fn new(config: ClientConfig) -> Result<Self, Error> {
        let conn_options = ConnectionOptions {
            timeout: config.timeout,
            connect_timeout: config.connect_timeout,
        };
        let conn_pool = ConnectionManager::new(
            1,
            &config.datacatalog_endpoint,
            &Environment::GoogleCloud(config.token_source_provider),
            &conn_options,
        )
        .await?;

        Ok(Self {
            datacatalog_client: DataCatalogGrpcClient::new(Arc::new(conn_pool)),
        })
    }
}

impl Deref for Client {
    type Target = DataCatalogGrpcClient;

    fn deref(&self) -> &Self::Target {
        &self.datacatalog_client
    }
}

impl DerefMut for Client {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.datacatalog_client
    }
}

#[cfg(all(test, feature = "auth"))]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use serial_test::serial;

    use google_cloud_googleapis::cloud::datacatalog::v1::{
        CreateEntryGroupRequest, DeleteEntryGroupRequest, EntryGroup, GetEntryGroupRequest,
    };

    use crate::client::{Client, ClientConfig};
    use crate::resource::{LocationName, DEFAULT_LOCATION};

    async fn new_client() -> (Client, String) {
        let cred = google_cloud_auth::credentials::CredentialsFile::new().await.unwrap();
        let project = cred.project_id.clone().unwrap();
        let config = ClientConfig::default().with_credentials(cred).await.unwrap();
        (Client::new(config).await.unwrap(), project)
    }

    #[ctor::ctor]
    fn init() {
        let _ = tracing_subscriber::fmt().try_init();
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!("datacatalog.googleapis.com", config.datacatalog_endpoint);
        assert_eq!(Some(std::time::Duration::from_secs(30)), config.timeout);
        assert_eq!(Some(std::time::Duration::from_secs(30)), config.connect_timeout);
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires Google Cloud credentials"]
    async fn test_entry_group() {
        let (client, project) = new_client().await;
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        let entry_group_id = format!("gcpdcgrp{now:}");
        let parent = LocationName::new(&project, DEFAULT_LOCATION);

        // create
        let create_request = CreateEntryGroupRequest {
            parent: parent.to_string(),
            entry_group_id: entry_group_id.clone(),
            entry_group: Some(EntryGroup {
                display_name: "test entry group".to_string(),
                ..Default::default()
            }),
        };
        let created = client.create_entry_group(create_request.clone(), None).await.unwrap();
        assert_eq!(parent.entry_group(&entry_group_id).to_string(), created.name);

        // get
        let got = client
            .get_entry_group(
                GetEntryGroupRequest {
                    name: created.name.clone(),
                    read_mask: None,
                },
                None,
            )
            .await
            .unwrap();
        assert_eq!("test entry group", got.display_name);

        // delete
        client
            .delete_entry_group(
                DeleteEntryGroupRequest {
                    name: created.name,
                    force: true,
                },
                None,
            )
            .await
            .unwrap();
    }
}
