use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// How pages are written to stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "statuary",
    bin_name = "statuary",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Browse and buy sculpture from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Browse a JSON catalog instead of the built-in one
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help_heading = "Options"
    )]
    pub output: OutputFormat,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Shop,
    Scene,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browse:",
            CommandGroup::Shop => "Shop:",
            CommandGroup::Scene => "3D Scenes:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "gallery" | "artists" | "collections" | "facets" | "statue" => {
                Some(CommandGroup::Browse)
            }
            "cart" | "profile" => Some(CommandGroup::Shop),
            "showcase" | "viewer" => Some(CommandGroup::Scene),
            "about" | "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Browse,
            CommandGroup::Shop,
            CommandGroup::Scene,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("statuary {version}\n"));
    output.push_str("Browse and buy sculpture from the terminal\n");
    output.push('\n');
    output.push_str("Usage: statuary [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose            Verbose output\n");
    output.push_str("      --config-dir <DIR>   Directory holding config.json\n");
    output.push_str("      --catalog <FILE>     Browse a JSON catalog instead of the built-in one\n");
    output.push_str("      --output <FORMAT>    Output format [text, json]\n");
    output.push_str("  -h, --help               Print help\n");
    output.push_str("  -V, --version            Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for the parsed subcommand, or the grouped help without one
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Browse(c)) => match c {
            BrowseCommands::Gallery { .. } => "gallery",
            BrowseCommands::Artists { .. } => "artists",
            BrowseCommands::Collections { .. } => "collections",
            BrowseCommands::Facets { .. } => "facets",
            BrowseCommands::Statue { .. } => "statue",
        },
        Some(Commands::Shop(c)) => match c {
            ShopCommands::Cart { .. } => "cart",
            ShopCommands::Profile { .. } => "profile",
        },
        Some(Commands::Scene(c)) => match c {
            SceneCommands::Showcase { .. } => "showcase",
            SceneCommands::Viewer { .. } => "viewer",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::About => "about",
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(name);
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Browse(BrowseCommands),

    #[command(flatten)]
    Shop(ShopCommands),

    #[command(flatten)]
    Scene(SceneCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum BrowseCommands {
    /// Browse statues (the default command)
    #[command(alias = "ls", display_order = 1)]
    Gallery {
        /// Match title or artist
        #[arg(short, long)]
        search: Option<String>,

        /// Only this material (e.g. Bronze)
        #[arg(long)]
        material: Option<String>,

        /// Only this category (e.g. Classical)
        #[arg(long)]
        category: Option<String>,

        /// Lowest price in dollars
        #[arg(long, value_name = "N")]
        min: Option<u32>,

        /// Highest price in dollars
        #[arg(long, value_name = "N")]
        max: Option<u32>,

        /// Layout: grid or list
        #[arg(long)]
        view: Option<String>,

        /// Only featured statues
        #[arg(long)]
        featured: bool,
    },

    /// Browse artists
    #[command(display_order = 2)]
    Artists {
        /// Match name or bio
        #[arg(short, long)]
        search: Option<String>,

        /// Only artists with this specialty
        #[arg(long)]
        specialty: Option<String>,
    },

    /// Browse curated collections
    #[command(display_order = 3)]
    Collections {
        /// Match name, description or tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only this theme
        #[arg(long)]
        theme: Option<String>,
    },

    /// List the filter options of a page
    #[command(display_order = 4)]
    Facets {
        /// gallery, artists or collections
        #[arg(default_value = "gallery")]
        page: String,
    },

    /// Show a statue's product page
    #[command(alias = "show", display_order = 5)]
    Statue {
        /// Statue id
        id: u32,

        /// description, specifications or reviews
        #[arg(long)]
        tab: Option<String>,

        /// Quantity to preview in the cart (defaults to 1)
        #[arg(long, short, allow_hyphen_values = true)]
        quantity: Option<String>,

        /// Show the 3D preview in its hovered state
        #[arg(long)]
        hover: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ShopCommands {
    /// Show the cart, optionally editing it first
    #[command(display_order = 10)]
    Cart {
        /// Add a statue: ID or ID=QTY
        #[arg(long, value_name = "ID[=QTY]")]
        add: Vec<String>,

        /// Set a line's quantity (0 removes it)
        #[arg(long, value_name = "LINE=QTY", allow_hyphen_values = true)]
        set: Vec<String>,

        /// Increase a line's quantity by one
        #[arg(long, value_name = "LINE")]
        inc: Vec<String>,

        /// Decrease a line's quantity by one
        #[arg(long, value_name = "LINE")]
        dec: Vec<String>,

        /// Remove a line
        #[arg(long, value_name = "LINE")]
        remove: Vec<String>,
    },

    /// Show the shopper's profile
    #[command(display_order = 11)]
    Profile {
        /// profile, orders, wishlist or settings
        #[arg(long)]
        tab: Option<String>,

        /// Preview an edit: FIELD=VALUE
        #[arg(long, value_name = "FIELD=VALUE")]
        edit: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SceneCommands {
    /// Show a slide of the 3D hero carousel
    #[command(display_order = 20)]
    Showcase {
        /// Slide number, starting at 0 (wraps around)
        #[arg(long, default_value_t = 0)]
        slide: usize,

        /// Animation frames to advance
        #[arg(long, default_value_t = 0)]
        frames: u32,
    },

    /// Assemble a single 3D statue
    #[command(display_order = 21)]
    Viewer {
        /// horse, lion or woman
        kind: String,

        /// Material color as #RRGGBB
        #[arg(long)]
        color: Option<String>,

        /// Uniform scale
        #[arg(long, default_value_t = 1.0)]
        scale: f64,

        /// Animation frames to advance
        #[arg(long, default_value_t = 0)]
        frames: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// About the gallery
    #[command(display_order = 30)]
    About,

    /// Get or set configuration
    #[command(display_order = 31)]
    Config {
        /// Configuration key (catalog_path, default_view, price_ceiling, use_color)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for statuary or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_gallery_filters() {
        let cli = Cli::parse_from([
            "statuary", "gallery", "-s", "venus", "--material", "Marble", "--max", "3000",
        ]);
        match cli.command {
            Some(Commands::Browse(BrowseCommands::Gallery {
                search,
                material,
                max,
                ..
            })) => {
                assert_eq!(search.as_deref(), Some("venus"));
                assert_eq!(material.as_deref(), Some("Marble"));
                assert_eq!(max, Some(3000));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let cli = Cli::parse_from(["statuary", "viewer", "lion", "--output", "json", "-v"]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn negative_quantities_reach_the_api() {
        let cli = Cli::parse_from(["statuary", "statue", "1", "--quantity", "-3"]);
        match cli.command {
            Some(Commands::Browse(BrowseCommands::Statue { quantity, .. })) => {
                assert_eq!(quantity.as_deref(), Some("-3"))
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn every_command_has_a_group() {
        for sc in Cli::command().get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no help group",
                sc.get_name()
            );
        }
    }
}
