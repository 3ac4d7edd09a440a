//! Clothing Co CLI - catalogue browsing and local cart tools.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalogue
//! cc-cli catalogue
//! cc-cli search -q jean -c bottoms
//! cc-cli show tshirt
//!
//! # Drive a cart persisted to a JSON file
//! cc-cli cart add tshirt
//! cc-cli cart qty tshirt -1
//! cc-cli --storage /tmp/cart.json cart show
//!
//! # Dark-mode preference
//! cc-cli theme toggle
//!
//! # Effect calculators
//! cc-cli effects tilt --x 40 --y 10 --width 200 --height 300
//! cc-cli effects parallax --scroll 480
//! ```
//!
//! # Environment Variables
//!
//! - `CC_STORAGE` - Storage file path (default: `.clothing-co/storage.json`)
//! - `RUST_LOG` - Log filter (default: `warn`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clothing_co_core::{ALL_CATEGORIES, Catalogue};
use tracing_subscriber::EnvFilter;

use crate::commands::cart::Mutation;
use crate::error::CliError;
use crate::file_store::FileStore;

mod commands;
mod error;
mod file_store;

const DEFAULT_STORAGE: &str = ".clothing-co/storage.json";

#[derive(Parser)]
#[command(name = "cc-cli")]
#[command(author, version, about = "Clothing Co CLI tools")]
struct Cli {
    /// JSON file holding the cart and preferences
    #[arg(long, global = true, env = "CC_STORAGE", default_value = DEFAULT_STORAGE)]
    storage: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every product
    Catalogue,
    /// Search products by name, description and category
    Search {
        /// Search term (case-insensitive)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category (`all`, `tops`, `bottoms`, `outerwear`)
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,
    },
    /// Show a product's details
    Show {
        /// Product id
        id: String,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the dark-mode preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Compute card tilt and hero parallax values
    Effects {
        #[command(subcommand)]
        effect: EffectsAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: String,
    },
    /// Remove a product entirely
    Remove {
        /// Product id
        id: String,
    },
    /// Change a product's quantity by a delta
    Qty {
        /// Product id
        id: String,

        /// Quantity change; the product is removed at zero or below
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show whether dark mode is on
    Show,
    /// Flip dark mode
    Toggle,
}

#[derive(Subcommand)]
enum EffectsAction {
    /// Tilt for a pointer position over a card
    Tilt {
        /// Pointer x, relative to the card's left edge
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Pointer y, relative to the card's top edge
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Card width
        #[arg(long)]
        width: f64,

        /// Card height
        #[arg(long)]
        height: f64,
    },
    /// Hero background offset for a scroll position
    Parallax {
        /// Vertical scroll offset in pixels
        #[arg(long)]
        scroll: f64,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut stdout = io::stdout().lock();
    if let Err(e) = run(cli, &mut stdout) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let catalogue = Catalogue::builtin();

    match cli.command {
        Commands::Catalogue => commands::catalogue::list(catalogue, out),
        Commands::Search { query, category } => {
            commands::catalogue::search(catalogue, &query, &category, out)
        }
        Commands::Show { id } => commands::catalogue::show(catalogue, &id, out),
        Commands::Cart { action } => {
            let storage = FileStore::open(cli.storage)?;
            tracing::debug!(path = %storage.path().display(), "Opened storage");
            match action {
                CartAction::Show => commands::cart::show(storage, catalogue, out),
                CartAction::Add { id } => {
                    commands::cart::mutate(storage, catalogue, Mutation::Add(&id), out)
                }
                CartAction::Remove { id } => {
                    commands::cart::mutate(storage, catalogue, Mutation::Remove(&id), out)
                }
                CartAction::Qty { id, delta } => commands::cart::mutate(
                    storage,
                    catalogue,
                    Mutation::ChangeQuantity(&id, delta),
                    out,
                ),
            }
        }
        Commands::Theme { action } => {
            let storage = FileStore::open(cli.storage)?;
            match action {
                ThemeAction::Show => commands::theme::show(storage, out),
                ThemeAction::Toggle => commands::theme::toggle(storage, out),
            }
        }
        Commands::Effects { effect } => match effect {
            EffectsAction::Tilt {
                x,
                y,
                width,
                height,
            } => commands::effects::tilt(x, y, width, height, out),
            EffectsAction::Parallax { scroll } => commands::effects::parallax(scroll, out),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("cc-cli").chain(args.iter().copied())).unwrap();
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_delta_parses() {
        let cli = Cli::try_parse_from(["cc-cli", "cart", "qty", "tshirt", "-2"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Cart {
                action: CartAction::Qty { delta: -2, .. }
            }
        ));
    }

    #[test]
    fn test_cart_session_against_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = path.to_str().unwrap();

        run_args(&["--storage", storage, "cart", "add", "tshirt"]).unwrap();
        run_args(&["--storage", storage, "cart", "add", "tshirt"]).unwrap();
        let text = run_args(&["--storage", storage, "cart", "add", "jeans"]).unwrap();
        assert!(text.contains("Total: $99.97"));

        let text = run_args(&["--storage", storage, "cart", "qty", "tshirt", "-2"]).unwrap();
        assert!(text.contains("Items: 1"));

        let text = run_args(&["cart", "show", "--storage", storage]).unwrap();
        assert!(text.contains("Denim Jeans"));
        assert!(text.contains("Total: $49.99"));
    }

    #[test]
    fn test_theme_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = path.to_str().unwrap();

        run_args(&["--storage", storage, "theme", "toggle"]).unwrap();
        let text = run_args(&["--storage", storage, "theme", "show"]).unwrap();
        assert!(text.starts_with("Dark mode: on"));
    }

    #[test]
    fn test_unknown_category_fails() {
        let err = run_args(&["search", "-c", "hats"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownCategory(_)));
    }

    #[test]
    fn test_effects() {
        let text = run_args(&["effects", "parallax", "--scroll", "480"]).unwrap();
        assert_eq!(text, "background-position-y: 240px\n");

        let text = run_args(&[
            "effects", "tilt", "--x", "100", "--y", "0", "--width", "200", "--height", "300",
        ])
        .unwrap();
        assert_eq!(text, "transform: rotateX(7.5deg) rotateY(0deg)\n");
    }
}
