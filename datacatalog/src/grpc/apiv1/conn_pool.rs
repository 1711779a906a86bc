use google_cloud_gax::conn::{Channel, Environment};
use google_cloud_gax::conn::{ConnectionManager as GRPCConnectionManager, ConnectionOptions, Error};
use google_cloud_googleapis::cloud::datacatalog::v1::data_catalog_client::DataCatalogClient;

use crate::grpc::apiv1::AUDIENCE;

/// Pool of authenticated channels to the Data Catalog endpoint.
#[derive(Debug)]
pub struct ConnectionManager {
    inner: GRPCConnectionManager,
}

impl ConnectionManager {
    pub async fn new(
        pool_size: usize,
        domain: &str,
        environment: &Environment,
        conn_options: &ConnectionOptions,
    ) -> Result<Self, Error> {
        Ok(ConnectionManager {
            inner: GRPCConnectionManager::new(pool_size, domain, AUDIENCE, environment, conn_options).await?,
        })
    }

    pub fn num(&self) -> usize {
        self.inner.num()
    }

    pub fn conn(&self) -> DataCatalogClient<Channel> {
        DataCatalogClient::new(self.inner.conn()).max_decoding_message_size(i32::MAX as usize)
    }
}
