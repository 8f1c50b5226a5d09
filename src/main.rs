use std::process;

fn main() {
    if let Err(e) = preseed::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
