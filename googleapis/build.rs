#[cfg(feature = "generate")]
fn main() {
    tonic_build::configure()
        .build_server(false)
        .out_dir("src") // you can change the generated code's location
        .compile(
            &["googleapis/google/cloud/datacatalog/v1/datacatalog.proto"],
            &["googleapis"], // specify the root location to search proto dependencies
        )
        .unwrap();
}

#[cfg(not(feature = "generate"))]
fn main() {}
