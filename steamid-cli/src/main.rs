//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = steamid_cli::run() {
        eprintln!("steamid: {err}");
        std::process::exit(1);
    }
}
