//! Binary entrypoint for amalg-cli

fn main() {
    if let Err(err) = amalg_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
