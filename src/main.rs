mod app;
mod color;
mod config;
mod data;
mod histogram;
mod pipeline;
mod sink;
mod state;
mod ui;

use config::Settings;
use sink::WindowSink;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::default();
    let mut window = WindowSink::new(&settings);

    pipeline::run(&settings.data_path, settings.binning, &mut window)
}
