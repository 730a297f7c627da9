fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = segset::run() {
        eprintln!("[ERROR] {}", err);
        std::process::exit(-1);
    }
}
