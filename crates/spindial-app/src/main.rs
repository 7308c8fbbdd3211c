//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting Spindial");

    spindial_app::App::run();
}
