#![forbid(unsafe_code)]

//! Folio binary entry point.

use folio_app::app::AppModel;
use folio_app::cli;
use folio_app::logging;
use folio_runtime::{Program, ProgramConfig};

fn main() {
    let opts = cli::Opts::parse();

    if let Some(path) = &opts.log_file
        && let Err(e) = logging::init_file_logging(path)
    {
        eprintln!("Logging disabled: {e}");
    }
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        section = opts.section.anchor(),
        cell_width = opts.cell_width,
        mouse = opts.mouse,
        "starting folio"
    );

    let model = AppModel::new(&opts);
    let config = ProgramConfig::default().with_mouse(opts.mouse);
    if let Err(e) = Program::new(model, config).run() {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
