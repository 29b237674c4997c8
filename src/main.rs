use std::process::ExitCode;

// One command per process; a single-threaded runtime keeps execution sequential.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    todo::cli::run().await
}
