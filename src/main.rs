use frustum_cull::app;
use frustum_cull::config::Config;
use log::error;

fn main() {
    app::init_logging();

    // optional first argument: path to a TOML config
    let cfg = match std::env::args().nth(1) {
        Some(path) => match Config::load(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("failed to load config {path}: {e}");
                std::process::exit(2);
            }
        },
        None => Config::default(),
    };

    if let Err(e) = app::run(&cfg) {
        error!("demo failed: {e}");
        std::process::exit(1);
    }
}
