mod app;
mod catalog;
mod cli;
mod config;
mod consts;
mod error;
mod interactive;
mod locale;
mod output;
mod surface;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();

    // Config diagnostics only show up when --debug is passed on the command line
    let config = if cli.debug {
        Config::load()
    } else {
        Config::load_quiet()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
