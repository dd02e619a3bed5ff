use finboard_core::cli;

fn main() {
    finboard_core::init();
    if let Err(err) = cli::run() {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
