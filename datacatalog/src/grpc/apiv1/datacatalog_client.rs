use std::sync::Arc;
use std::time::Duration;

use google_cloud_gax::create_request;
use google_cloud_gax::grpc::{Code, Status};
use google_cloud_gax::retry::{invoke, RetrySetting};
use google_cloud_googleapis::cloud::datacatalog::v1::{
    CreateEntryGroupRequest, CreateEntryRequest, DeleteEntryGroupRequest, DeleteEntryRequest, Entry, EntryGroup,
    GetEntryGroupRequest, GetEntryRequest,
};

use crate::grpc::apiv1::conn_pool::ConnectionManager;

fn default_setting() -> RetrySetting {
    RetrySetting {
        from_millis: 50,
        max_delay: Some(Duration::from_secs(60)),
        factor: 1u64,
        take: 20,
        codes: vec![Code::Unavailable, Code::Unknown],
    }
}

#[derive(Clone)]
pub struct Client {
    cm: Arc<ConnectionManager>,
}

impl Client {
    pub fn new(cm: Arc<ConnectionManager>) -> Self {
        Self { cm }
    }

    /// Create entry group
    ///
    /// https://cloud.google.com/data-catalog/docs/reference/rpc/google.cloud.datacatalog.v1#google.cloud.datacatalog.v1.DataCatalog.CreateEntryGroup
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_entry_group(
        &self,
        req: CreateEntryGroupRequest,
        retry: Option<RetrySetting>,
    ) -> Result<EntryGroup, Status> {
        let action = || async {
            let request = create_request(format!("parent={}", req.parent), req.clone());
            self.cm.conn().create_entry_group(request).await
        };
        invoke(Some(retry.unwrap_or_else(default_setting)), action)
            .await
            .map(|r| r.into_inner())
    }

    /// Get entry group
    ///
    /// https://cloud.google.com/data-catalog/docs/reference/rpc/google.cloud.datacatalog.v1#google.cloud.datacatalog.v1.DataCatalog.GetEntryGroup
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_entry_group(
        &self,
        req: GetEntryGroupRequest,
        retry: Option<RetrySetting>,
    ) -> Result<EntryGroup, Status> {
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            self.cm.conn().get_entry_group(request).await
        };
        invoke(Some(retry.unwrap_or_else(default_setting)), action)
            .await
            .map(|r| r.into_inner())
    }

    /// Delete entry group
    ///
    /// https://cloud.google.com/data-catalog/docs/reference/rpc/google.cloud.datacatalog.v1#google.cloud.datacatalog.v1.DataCatalog.DeleteEntryGroup
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete_entry_group(
        &self,
        req: DeleteEntryGroupRequest,
        retry: Option<RetrySetting>,
    ) -> Result<(), Status> {
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            self.cm.conn().delete_entry_group(request).await
        };
        invoke(Some(retry.unwrap_or_else(default_setting)), action)
            .await
            .map(|r| r.into_inner())
    }

    /// Create entry
    ///
    /// https://cloud.google.com/data-catalog/docs/reference/rpc/google.cloud.datacatalog.v1#google.cloud.datacatalog.v1.DataCatalog.CreateEntry
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_entry(&self, req: CreateEntryRequest, retry: Option<RetrySetting>) -> Result<Entry, Status> {
        let action = || async {
            let request = create_request(format!("parent={}", req.parent), req.clone());
            self.cm.conn().create_entry(request).await
        };
        invoke(Some(retry.unwrap_or_else(default_setting)), action)
            .await
            .map(|r| r.into_inner())
    }

    /// Get entry
    ///
    /// https://cloud.google.com/data-catalog/docs/reference/rpc/google.cloud.datacatalog.v1#google.cloud.datacatalog.v1.DataCatalog.GetEntry
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_entry(&self, req: GetEntryRequest, retry: Option<RetrySetting>) -> Result<Entry, Status> {
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            self.cm.conn().get_entry(request).await
        };
        invoke(Some(retry.unwrap_or_else(default_setting)), action)
            .await
            .map(|r| r.into_inner())
    }

    /// Delete entry
    ///
    /// https://cloud.google.com/data-catalog/docs/reference/rpc/google.cloud.datacatalog.v1#google.cloud.datacatalog.v1.DataCatalog.DeleteEntry
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete_entry(&self, req: DeleteEntryRequest, retry: Option<RetrySetting>) -> Result<(), Status> {
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            self.cm.conn().delete_entry(request).await
        };
        invoke(Some(retry.unwrap_or_else(default_setting)), action)
            .await
            .map(|r| r.into_inner())
    }
}
