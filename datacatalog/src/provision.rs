//! Provisioning of a Cloud Storage fileset entry.
//!
//! The workflow removes any entry and entry group left over from a previous run,
//! creates the entry group and then creates the fileset entry under the name
//! returned by the service.
use async_trait::async_trait;
use google_cloud_gax::grpc::{Code, Status};
use google_cloud_googleapis::cloud::datacatalog::v1::{
    CreateEntryGroupRequest, CreateEntryRequest, DeleteEntryGroupRequest, DeleteEntryRequest, Entry, EntryGroup,
};

use crate::client::{Client, ClientConfig};
use crate::fileset;
use crate::resource::{LocationName, DEFAULT_LOCATION};

pub const PLACEHOLDER_PROJECT_ID: &str = "my-project-id";
pub const PLACEHOLDER_ENTRY_GROUP_ID: &str = "fileset_entry_group";
pub const PLACEHOLDER_ENTRY_ID: &str = "fileset_entry_id";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("connection error: {0}")]
    Connection(#[from] google_cloud_gax::conn::Error),
    #[cfg(feature = "auth")]
    #[error("auth error: {0}")]
    Auth(#[from] google_cloud_auth::error::Error),
    #[error("{resource} already exists: {status}")]
    AlreadyExists { resource: &'static str, status: Status },
    #[error("grpc error: {0}")]
    Grpc(#[from] Status),
    #[error(transparent)]
    Schema(#[from] fileset::Error),
}

impl Error {
    /// Failures that end the workflow with a log line instead of an error.
    pub fn is_handled(&self) -> bool {
        match self {
            Error::Connection(_) | Error::AlreadyExists { .. } => true,
            #[cfg(feature = "auth")]
            Error::Auth(_) => true,
            Error::Grpc(_) | Error::Schema(_) => false,
        }
    }
}

/// The remote operations the workflow depends on.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn delete_entry(&self, req: DeleteEntryRequest) -> Result<(), Status>;
    async fn delete_entry_group(&self, req: DeleteEntryGroupRequest) -> Result<(), Status>;
    async fn create_entry_group(&self, req: CreateEntryGroupRequest) -> Result<EntryGroup, Status>;
    async fn create_entry(&self, req: CreateEntryRequest) -> Result<Entry, Status>;
}

#[async_trait]
impl CatalogService for Client {
    async fn delete_entry(&self, req: DeleteEntryRequest) -> Result<(), Status> {
        (**self).delete_entry(req, None).await
    }

    async fn delete_entry_group(&self, req: DeleteEntryGroupRequest) -> Result<(), Status> {
        (**self).delete_entry_group(req, None).await
    }

    async fn create_entry_group(&self, req: CreateEntryGroupRequest) -> Result<EntryGroup, Status> {
        (**self).create_entry_group(req, None).await
    }

    async fn create_entry(&self, req: CreateEntryRequest) -> Result<Entry, Status> {
        (**self).create_entry(req, None).await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProvisionedFileset {
    pub entry_group: EntryGroup,
    pub entry: Entry,
}

/// NotFound and PermissionDenied both mean the resource is absent for cleanup purposes.
/// PermissionDenied is also what the service answers for a project the caller cannot see,
/// so a genuine authorization problem surfaces only later, on create.
fn is_absent(status: &Status) -> bool {
    matches!(status.code(), Code::NotFound | Code::PermissionDenied)
}

fn tolerate_absent(result: Result<(), Status>, resource: &str, name: &str) -> Result<(), Error> {
    match result {
        Ok(()) => {
            tracing::info!("{resource} deleted: {name}");
            Ok(())
        }
        Err(status) if is_absent(&status) => {
            tracing::info!("{resource} does not exist: {name}");
            Ok(())
        }
        Err(status) => Err(status.into()),
    }
}

fn creation_error(resource: &'static str, status: Status) -> Error {
    if status.code() == Code::AlreadyExists {
        Error::AlreadyExists { resource, status }
    } else {
        Error::Grpc(status)
    }
}

fn handle(result: Result<ProvisionedFileset, Error>) -> Result<Option<ProvisionedFileset>, Error> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_handled() => {
            tracing::error!("Error in create entry process: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Deletes leftovers, then creates the entry group and the fileset entry.
/// Stops at the first failure without rolling back what was already created.
pub async fn provision_fileset_entry<S>(
    service: &S,
    project_id: &str,
    entry_group_id: &str,
    entry_id: &str,
) -> Result<ProvisionedFileset, Error>
where
    S: CatalogService + ?Sized,
{
    let location = LocationName::new(project_id, DEFAULT_LOCATION);
    let entry_group_name = location.entry_group(entry_group_id).to_string();
    let entry_name = location.entry_group(entry_group_id).entry(entry_id).to_string();

    tracing::debug!("deleting entry {entry_name}");
    let result = service
        .delete_entry(DeleteEntryRequest {
            name: entry_name.clone(),
        })
        .await;
    tolerate_absent(result, "Entry", &entry_name)?;

    tracing::debug!("deleting entry group {entry_group_name}");
    let result = service
        .delete_entry_group(DeleteEntryGroupRequest {
            name: entry_group_name.clone(),
            force: false,
        })
        .await;
    tolerate_absent(result, "Entry Group", &entry_group_name)?;

    let entry_group = service
        .create_entry_group(CreateEntryGroupRequest {
            parent: location.to_string(),
            entry_group_id: entry_group_id.to_string(),
            entry_group: Some(fileset::fileset_entry_group()),
        })
        .await
        .map_err(|s| creation_error("entry group", s))?;
    tracing::info!("Entry Group created with name: {}", entry_group.name);

    let entry = service
        .create_entry(CreateEntryRequest {
            parent: entry_group.name.clone(),
            entry_id: entry_id.to_string(),
            entry: Some(fileset::fileset_entry()?),
        })
        .await
        .map_err(|s| creation_error("entry", s))?;
    tracing::info!("Entry created with name: {}", entry.name);

    Ok(ProvisionedFileset { entry_group, entry })
}

/// Runs [`provision_fileset_entry`]. Collisions on create are logged and yield `Ok(None)`.
pub async fn create_fileset_entry<S>(
    service: &S,
    project_id: &str,
    entry_group_id: &str,
    entry_id: &str,
) -> Result<Option<ProvisionedFileset>, Error>
where
    S: CatalogService + ?Sized,
{
    handle(provision_fileset_entry(service, project_id, entry_group_id, entry_id).await)
}

/// Connects with `config` and runs [`create_fileset_entry`]. The client is dropped before returning.
///
/// `config` must carry a token source from [`ClientConfig::with_auth`] or
/// [`ClientConfig::with_credentials`]. The token source of `ClientConfig::default()` panics
/// when the connection is built instead of returning a handled error.
pub async fn run(
    config: ClientConfig,
    project_id: &str,
    entry_group_id: &str,
    entry_id: &str,
) -> Result<Option<ProvisionedFileset>, Error> {
    let client = match Client::new(config).await {
        Ok(client) => client,
        Err(e) => return handle(Err(e.into())),
    };
    create_fileset_entry(&client, project_id, entry_group_id, entry_id).await
}

/// Same as [`run`] with Application Default Credentials.
#[cfg(feature = "auth")]
pub async fn run_with_auth(
    project_id: &str,
    entry_group_id: &str,
    entry_id: &str,
) -> Result<Option<ProvisionedFileset>, Error> {
    let config = match ClientConfig::default().with_auth().await {
        Ok(config) => config,
        Err(e) => return handle(Err(e.into())),
    };
    run(config, project_id, entry_group_id, entry_id).await
}

/// Replace the placeholder ids before running against a real project.
#[cfg(feature = "auth")]
pub async fn quickstart() -> Result<Option<ProvisionedFileset>, Error> {
    run_with_auth(PLACEHOLDER_PROJECT_ID, PLACEHOLDER_ENTRY_GROUP_ID, PLACEHOLDER_ENTRY_ID).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use google_cloud_gax::grpc::{Code, Status};
    use google_cloud_googleapis::cloud::datacatalog::v1::entry::TypeSpec;
    use google_cloud_googleapis::cloud::datacatalog::v1::{
        CreateEntryGroupRequest, CreateEntryRequest, DeleteEntryGroupRequest, DeleteEntryRequest, Entry, EntryGroup,
    };

    use crate::provision::{create_fileset_entry, handle, provision_fileset_entry, CatalogService, Error};

    #[ctor::ctor]
    fn init() {
        let _ = tracing_subscriber::fmt().try_init();
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        DeleteEntry(String),
        DeleteEntryGroup(String),
        CreateEntryGroup(CreateEntryGroupRequest),
        CreateEntry(CreateEntryRequest),
    }

    /// In-memory catalog. Deletes fail with NotFound unless told otherwise.
    struct FakeCatalog {
        calls: Mutex<Vec<Call>>,
        delete_entry_error: Option<Code>,
        delete_entry_group_error: Option<Code>,
        create_entry_group_error: Option<Code>,
        create_entry_error: Option<Code>,
        entry_group_name: Option<String>,
    }

    impl FakeCatalog {
        fn empty() -> Self {
            Self {
                calls: Mutex::new(vec![]),
                delete_entry_error: Some(Code::NotFound),
                delete_entry_group_error: Some(Code::NotFound),
                create_entry_group_error: None,
                create_entry_error: None,
                entry_group_name: None,
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    fn fail(code: Option<Code>) -> Result<(), Status> {
        match code {
            Some(code) => Err(Status::new(code, "fake failure")),
            None => Ok(()),
        }
    }

    #[async_trait]
    impl CatalogService for FakeCatalog {
        async fn delete_entry(&self, req: DeleteEntryRequest) -> Result<(), Status> {
            self.record(Call::DeleteEntry(req.name));
            fail(self.delete_entry_error)
        }

        async fn delete_entry_group(&self, req: DeleteEntryGroupRequest) -> Result<(), Status> {
            self.record(Call::DeleteEntryGroup(req.name));
            fail(self.delete_entry_group_error)
        }

        async fn create_entry_group(&self, req: CreateEntryGroupRequest) -> Result<EntryGroup, Status> {
            self.record(Call::CreateEntryGroup(req.clone()));
            fail(self.create_entry_group_error)?;
            let name = self
                .entry_group_name
                .clone()
                .unwrap_or_else(|| format!("{}/entryGroups/{}", req.parent, req.entry_group_id));
            Ok(EntryGroup {
                name,
                ..req.entry_group.unwrap_or_default()
            })
        }

        async fn create_entry(&self, req: CreateEntryRequest) -> Result<Entry, Status> {
            self.record(Call::CreateEntry(req.clone()));
            fail(self.create_entry_error)?;
            Ok(Entry {
                name: format!("{}/entries/{}", req.parent, req.entry_id),
                ..req.entry.unwrap_or_default()
            })
        }
    }

    fn is_create(call: &Call) -> bool {
        matches!(call, Call::CreateEntryGroup(_) | Call::CreateEntry(_))
    }

    #[tokio::test]
    async fn test_scenario() {
        let catalog = FakeCatalog::empty();
        let result = create_fileset_entry(&catalog, "proj1", "grp1", "e1").await.unwrap().unwrap();

        assert_eq!(
            "projects/proj1/locations/us-central1/entryGroups/grp1",
            result.entry_group.name
        );
        assert_eq!(
            "projects/proj1/locations/us-central1/entryGroups/grp1/entries/e1",
            result.entry.name
        );

        let calls = catalog.calls();
        assert_eq!(4, calls.len());
        assert_eq!(
            Call::DeleteEntry("projects/proj1/locations/us-central1/entryGroups/grp1/entries/e1".to_string()),
            calls[0]
        );
        assert_eq!(
            Call::DeleteEntryGroup("projects/proj1/locations/us-central1/entryGroups/grp1".to_string()),
            calls[1]
        );
        assert!(matches!(calls[2], Call::CreateEntryGroup(_)));
        assert!(matches!(calls[3], Call::CreateEntry(_)));
    }

    #[tokio::test]
    async fn test_cleanup_precedes_create() {
        for (project, group, entry) in [("a", "b", "c"), ("my-project-id", "fileset_entry_group", "fileset_entry_id")] {
            let catalog = FakeCatalog::empty();
            provision_fileset_entry(&catalog, project, group, entry).await.unwrap();
            let calls = catalog.calls();
            assert!(matches!(calls[0], Call::DeleteEntry(_)));
            assert!(matches!(calls[1], Call::DeleteEntryGroup(_)));
            assert!(calls[2..].iter().all(is_create));
        }
    }

    #[tokio::test]
    async fn test_cleanup_tolerates_absent() {
        for code in [Code::NotFound, Code::PermissionDenied] {
            let mut catalog = FakeCatalog::empty();
            catalog.delete_entry_error = Some(code);
            catalog.delete_entry_group_error = Some(code);
            let result = provision_fileset_entry(&catalog, "p", "g", "e").await;
            assert!(result.is_ok(), "{code:?}");
            assert_eq!(4, catalog.calls().len());
        }
    }

    #[tokio::test]
    async fn test_cleanup_of_existing_resources() {
        let mut catalog = FakeCatalog::empty();
        catalog.delete_entry_error = None;
        catalog.delete_entry_group_error = None;
        let result = create_fileset_entry(&catalog, "p", "g", "e").await.unwrap();
        assert!(result.is_some());
        assert_eq!(4, catalog.calls().len());
    }

    #[tokio::test]
    async fn test_cleanup_unexpected_error() {
        let mut catalog = FakeCatalog::empty();
        catalog.delete_entry_group_error = Some(Code::Internal);
        let err = create_fileset_entry(&catalog, "p", "g", "e").await.unwrap_err();
        assert!(matches!(&err, Error::Grpc(s) if s.code() == Code::Internal));
        assert!(!catalog.calls().iter().any(is_create));
    }

    #[tokio::test]
    async fn test_entry_group_request() {
        let catalog = FakeCatalog::empty();
        provision_fileset_entry(&catalog, "proj1", "grp1", "e1").await.unwrap();
        let req = match &catalog.calls()[2] {
            Call::CreateEntryGroup(req) => req.clone(),
            other => panic!("unexpected call {other:?}"),
        };
        assert_eq!("projects/proj1/locations/us-central1", req.parent);
        assert_eq!("grp1", req.entry_group_id);
        let group = req.entry_group.unwrap();
        assert_eq!("My Fileset Entry Group", group.display_name);
        assert_eq!("This Entry Group consists of ....", group.description);
    }

    #[tokio::test]
    async fn test_entry_parent_is_returned_name() {
        let returned = "projects/1234/locations/us-central1/entryGroups/grp1";
        let mut catalog = FakeCatalog::empty();
        catalog.entry_group_name = Some(returned.to_string());
        let result = provision_fileset_entry(&catalog, "proj1", "grp1", "e1").await.unwrap();

        let req = match &catalog.calls()[3] {
            Call::CreateEntry(req) => req.clone(),
            other => panic!("unexpected call {other:?}"),
        };
        assert_eq!(returned, req.parent);
        assert_eq!("e1", req.entry_id);
        assert_eq!(format!("{returned}/entries/e1"), result.entry.name);

        let entry = req.entry.unwrap();
        let schema = entry.schema.unwrap();
        assert_eq!(3, schema.columns.len());
        assert_eq!(2, schema.columns[2].subcolumns.len());
        assert!(matches!(entry.type_spec, Some(TypeSpec::GcsFilesetSpec(_))));
    }

    #[tokio::test]
    async fn test_entry_group_already_exists() {
        let mut catalog = FakeCatalog::empty();
        catalog.create_entry_group_error = Some(Code::AlreadyExists);

        let err = provision_fileset_entry(&catalog, "p", "g", "e").await.unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { resource: "entry group", .. }));
        assert!(err.is_handled());

        let result = create_fileset_entry(&catalog, "p", "g", "e").await.unwrap();
        assert!(result.is_none());
        assert!(!catalog.calls().iter().any(|c| matches!(c, Call::CreateEntry(_))));
    }

    #[tokio::test]
    async fn test_entry_already_exists() {
        let mut catalog = FakeCatalog::empty();
        catalog.create_entry_error = Some(Code::AlreadyExists);
        let result = create_fileset_entry(&catalog, "p", "g", "e").await.unwrap();
        assert!(result.is_none());
        assert_eq!(4, catalog.calls().len());
    }

    #[tokio::test]
    async fn test_create_unexpected_error() {
        let mut catalog = FakeCatalog::empty();
        catalog.create_entry_error = Some(Code::InvalidArgument);
        let err = create_fileset_entry(&catalog, "p", "g", "e").await.unwrap_err();
        assert!(!err.is_handled());
        assert!(matches!(err, Error::Grpc(s) if s.code() == Code::InvalidArgument));
    }

    #[test]
    fn test_connection_error_is_handled() {
        let err: Error = google_cloud_gax::conn::Error::InvalidEmulatorHOST("bad host".to_string()).into();
        assert!(matches!(err, Error::Connection(_)));
        assert!(err.is_handled());
        assert!(handle(Err(err)).unwrap().is_none());
    }

    #[cfg(feature = "auth")]
    #[test]
    fn test_auth_error_is_handled() {
        let err: Error = google_cloud_auth::error::Error::ScopeOrAudienceRequired.into();
        assert!(matches!(err, Error::Auth(_)));
        assert!(err.is_handled());
        assert!(handle(Err(err)).unwrap().is_none());
    }

    #[test]
    fn test_unhandled_error_is_returned() {
        let err = handle(Err(Status::new(Code::Internal, "fake failure").into())).unwrap_err();
        assert!(matches!(err, Error::Grpc(s) if s.code() == Code::Internal));
    }

    #[tokio::test]
    #[should_panic]
    async fn test_run_requires_token_source() {
        let _ = crate::provision::run(crate::client::ClientConfig::default(), "p", "g", "e").await;
    }
}
