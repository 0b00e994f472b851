//! # CLI Layer
//!
//! This module is **one possible UI client** for statuary; it is not the
//! storefront itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Build `AppContext` with the API, output format and color choice
//! 3. **API Dispatch**: Call the matching `StorefrontApi` method
//! 4. **Output Formatting**: Render the returned page as text or JSON
//! 5. **Logging**: Route `log` records to stderr through `env_logger`
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` from the global flags and config
//! - `handle_*()`: Per-command handlers that call the API and emit output

use super::render::{print_messages, render_config, render_json, render_page};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, BrowseCommands, Cli,
    Commands, MiscCommands, OutputFormat, SceneCommands, ShopCommands,
};
use clap::Parser;
use console::Term;
use env_logger::{Builder, Target};
use log::LevelFilter;
use serde::Serialize;
use statuary::api::{CartArgs, GalleryArgs, StorefrontApi};
use statuary::commands::config::ConfigAction;
use statuary::commands::{CmdMessage, CmdResult, Page};
use statuary::config::StoreConfig;
use statuary::error::Result;
use statuary::init::{initialize, StoreSource};

struct AppContext {
    api: StorefrontApi<StoreSource>,
    output: OutputFormat,
    use_color: bool,
}

/// Shape of `--output json`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Page>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a StoreConfig>,
    messages: &'a [CmdMessage],
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        print_subcommand_help(&cli.command);
        return Ok(());
    }

    init_logging(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Browse(cmd)) => match cmd {
            BrowseCommands::Gallery {
                search,
                material,
                category,
                min,
                max,
                view,
                featured,
            } => handle_gallery(
                &ctx,
                GalleryArgs {
                    term: search,
                    material,
                    category,
                    min_price: min,
                    max_price: max,
                    view,
                    featured,
                },
            ),
            BrowseCommands::Artists { search, specialty } => {
                emit(&ctx, ctx.api.artists(search, specialty)?)
            }
            BrowseCommands::Collections { search, theme } => {
                emit(&ctx, ctx.api.collections(search, theme)?)
            }
            BrowseCommands::Facets { page } => emit(&ctx, ctx.api.facets(&page)?),
            BrowseCommands::Statue {
                id,
                tab,
                quantity,
                hover,
            } => handle_statue(&ctx, id, tab, quantity, hover),
        },
        Some(Commands::Shop(cmd)) => match cmd {
            ShopCommands::Cart {
                add,
                set,
                inc,
                dec,
                remove,
            } => handle_cart(
                &ctx,
                CartArgs {
                    add,
                    set,
                    inc,
                    dec,
                    remove,
                },
            ),
            ShopCommands::Profile { tab, edit } => {
                emit(&ctx, ctx.api.profile(tab.as_deref(), &edit)?)
            }
        },
        Some(Commands::Scene(cmd)) => match cmd {
            SceneCommands::Showcase { slide, frames } => {
                emit(&ctx, ctx.api.showcase(slide, frames)?)
            }
            SceneCommands::Viewer {
                kind,
                color,
                scale,
                frames,
            } => handle_viewer(&ctx, &kind, color, scale, frames),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::About => emit(&ctx, ctx.api.about()?),
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Help { command } => {
                handle_help(command.as_deref());
                Ok(())
            }
        },
        None => handle_gallery(&ctx, GalleryArgs::default()),
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = env_logger::try_init();
        return;
    }
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = Builder::new()
        .target(Target::Stderr)
        .filter_level(level)
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.config_dir.as_deref(), cli.catalog.as_deref())?;

    let use_color = match (cli.output, ctx.config.use_color) {
        (OutputFormat::Json, _) => false,
        (_, Some(forced)) => forced,
        (_, None) => Term::stdout().features().colors_supported(),
    };
    colored::control::set_override(use_color);
    log::debug!(
        "output {:?}, color {}, config dir {}",
        cli.output,
        use_color,
        ctx.config_dir.display()
    );

    Ok(AppContext {
        api: ctx.api,
        output: cli.output,
        use_color,
    })
}

fn emit(ctx: &AppContext, result: CmdResult) -> Result<()> {
    match ctx.output {
        OutputFormat::Json => {
            let out = JsonOutput {
                data: result.page.as_ref(),
                config: result.config.as_ref(),
                messages: &result.messages,
            };
            println!("{}", render_json(&out)?);
        }
        OutputFormat::Text => {
            if let Some(page) = &result.page {
                println!("{}", render_page(page, ctx.use_color)?);
            }
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_gallery(ctx: &AppContext, args: GalleryArgs) -> Result<()> {
    let result = ctx.api.gallery(args)?;
    emit(ctx, result)
}

fn handle_statue(
    ctx: &AppContext,
    id: u32,
    tab: Option<String>,
    quantity: Option<String>,
    hover: bool,
) -> Result<()> {
    let result = ctx
        .api
        .statue(id, tab.as_deref(), quantity.as_deref(), hover)?;
    emit(ctx, result)
}

fn handle_cart(ctx: &AppContext, args: CartArgs) -> Result<()> {
    let result = ctx.api.cart(&args)?;
    emit(ctx, result)
}

fn handle_viewer(
    ctx: &AppContext,
    kind: &str,
    color: Option<String>,
    scale: f64,
    frames: u32,
) -> Result<()> {
    let result = ctx.api.viewer(kind, color.as_deref(), scale, frames)?;
    emit(ctx, result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.configure(action)?;
    if ctx.output == OutputFormat::Json {
        return emit(ctx, result);
    }

    if show_all {
        if let Some(config) = &result.config {
            println!("{}", render_config(config, ctx.use_color)?);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<&str>) {
    match command {
        Some(cmd) => print_help_for_command(cmd),
        None => print_grouped_help(),
    }
}
