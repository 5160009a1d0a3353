use crate::catalog::{catalog, find_entry};
use crate::cli::{Cli, Commands};
use crate::consts::COPIED;
use crate::error::AppError;
use crate::interactive::run_session;
use crate::locale::{ChronoFormatter, SUPPORTED_LOCALES};
use crate::output::{SheetOptions, locales_json, print_locales, print_sheet, sheet_json};
use crate::surface::{Surface, SystemClipboard};
use crate::utils::{Timezone, filter_json, loaded_at, parse_instant};

/// Print JSON output, optionally filtering through jq
fn print_json(json: &str, jq_filter: Option<&str>) -> Result<(), AppError> {
    match jq_filter {
        Some(filter) => print!("{}", filter_json(json, filter)?),
        None => println!("{json}"),
    }
    Ok(())
}

pub(crate) fn sheet_options(cli: &Cli) -> SheetOptions {
    SheetOptions {
        use_color: cli.use_color(),
        show_json: !cli.no_json,
    }
}

fn handle_sheet(surface: &Surface<'_>, cli: &Cli) -> Result<(), AppError> {
    let view = surface.render();
    if cli.wants_json() {
        print_json(&sheet_json(&view), cli.jq.as_deref())
    } else {
        print_sheet(&view, sheet_options(cli));
        Ok(())
    }
}

fn handle_locales(cli: &Cli) -> Result<(), AppError> {
    if cli.wants_json() {
        print_json(&locales_json(SUPPORTED_LOCALES, cli.locale()), cli.jq.as_deref())
    } else {
        print_locales(SUPPORTED_LOCALES, cli.locale(), cli.use_color());
        Ok(())
    }
}

fn handle_copy(surface: &mut Surface<'_>, entry: &str, cli: &Cli) -> Result<(), AppError> {
    let position = find_entry(surface.entries(), entry)?;
    surface.copy(position)?;
    let option = surface.entries()[position];
    if cli.wants_json() {
        print_json(&option.to_json(), cli.jq.as_deref())
    } else {
        println!("{COPIED}: \"{}\" {}", surface.state().copied, option.to_json());
        Ok(())
    }
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let instant = match cli.at.as_deref() {
        Some(raw) => parse_instant(raw)?,
        None => loaded_at(),
    };

    let formatter = ChronoFormatter::new(timezone);
    let clipboard = SystemClipboard::default();
    let mut surface = Surface::new(
        catalog(cli.catalog_variant()),
        instant,
        cli.locale(),
        &formatter,
        &clipboard,
    );

    let result = match &cli.command {
        None | Some(Commands::Sheet) => handle_sheet(&surface, cli),
        Some(Commands::Locales) => handle_locales(cli),
        Some(Commands::Copy { entry }) => handle_copy(&mut surface, entry, cli),
        Some(Commands::Interactive) => {
            let stdin = std::io::stdin();
            run_session(
                &mut surface,
                stdin.lock(),
                std::io::stdout(),
                sheet_options(cli),
            )
        }
    };

    clipboard.flush();
    result
}
