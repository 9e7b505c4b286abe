use super::args::{Cli, Commands, OutputFormat, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use super::logging;
use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;
use loma_catalog::{Config, open_source};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    let catalog = config.resolve_catalog(cli.catalog.as_deref(), &config_path);

    let enable_color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && config.color.unwrap_or(true)
        && cli.format == OutputFormat::Plain
        && std::io::stdout().is_terminal();

    tracing::debug!(
        config = %config_path.display(),
        catalog = ?catalog,
        enable_color,
        "resolved settings"
    );

    let context = |view_mode: &ViewModeArgs| HandlerContext::new(cli.format, view_mode, enable_color);

    let Some(command) = cli.command else {
        let source = open_source(catalog.as_deref())?;
        return handlers::guidance::handle(
            source.as_ref(),
            config.default_listing,
            &context(&ViewModeArgs::default()),
        );
    };

    match command {
        Commands::Show {
            id,
            photo,
            view_mode,
        } => {
            let source = open_source(catalog.as_deref())?;
            handlers::show::handle(source.as_ref(), id, photo, &context(&view_mode))
        }

        Commands::List { view_mode } => {
            let source = open_source(catalog.as_deref())?;
            handlers::list::handle(source.as_ref(), &context(&view_mode))
        }

        Commands::Demo {
            hotel,
            photo,
            view_mode,
        } => handlers::demo::handle(hotel, photo, &context(&view_mode)),

        Commands::Browse { hotel } => handlers::browse::handle(hotel),

        Commands::Check { path } => {
            let Some(path) = path.or(catalog) else {
                bail!(
                    "no catalog to check; pass a path or set `catalog` in {}",
                    config_path.display()
                );
            };
            handlers::check::handle(&path, &context(&ViewModeArgs::default()))
        }
    }
}
