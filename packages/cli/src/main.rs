fn main() {
    if let Err(error) = rowcap_cli::run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
