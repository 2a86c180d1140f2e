mod cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("{}", cli::error_report(&err));
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
