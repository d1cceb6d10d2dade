fn main() {
    if let Err(e) = landroute_cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
