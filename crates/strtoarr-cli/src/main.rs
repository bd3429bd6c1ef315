use std::process::ExitCode;

fn main() -> ExitCode {
    // RUST_LOG=debug pour tracer les choix d'encodage.
    env_logger::init();
    match strtoarr_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("strtoarr: {e:#}");
            ExitCode::FAILURE
        }
    }
}
