//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting HuePick");

    if let Err(err) = huepick_app::App::run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
