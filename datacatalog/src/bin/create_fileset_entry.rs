use google_cloud_datacatalog::provision::{quickstart, run_with_auth, Error};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: create_fileset_entry [PROJECT_ID ENTRY_GROUP_ID ENTRY_ID]";

#[derive(Debug, PartialEq)]
enum Invocation<'a> {
    Quickstart,
    Ids {
        project_id: &'a str,
        entry_group_id: &'a str,
        entry_id: &'a str,
    },
}

/// Either no arguments or all three ids.
fn parse_args(args: &[String]) -> Option<Invocation<'_>> {
    match args {
        [] => Some(Invocation::Quickstart),
        [project_id, entry_group_id, entry_id] => Some(Invocation::Ids {
            project_id,
            entry_group_id,
            entry_id,
        }),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(invocation) = parse_args(&args) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // created names are reported by the provisioning log lines
    match invocation {
        Invocation::Ids {
            project_id,
            entry_group_id,
            entry_id,
        } => run_with_auth(project_id, entry_group_id, entry_id).await?,
        Invocation::Quickstart => quickstart().await?,
    };
    Ok(())
}
