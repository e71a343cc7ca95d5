mod app;
mod logging;

use std::io;

fn main() -> anyhow::Result<()> {
    logging::initialize();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&app::RunConfig::default(), &mut out)
}
