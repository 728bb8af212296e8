//! # serendib-shop
//!
//! Storefront CLI for Serendib Shop.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Invocation Lifecycle                              │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: WARN (quiet CLI), override with RUST_LOG                 │
//! │                                                                         │
//! │  2. Open Storage ─────────────────────────────────────────────────────► │
//! │     • SERENDIB_STORE_PATH override, else the platform data dir          │
//! │     • Shared between the cart store and theme store                     │
//! │                                                                         │
//! │  3. Wire Surfaces ────────────────────────────────────────────────────► │
//! │     • Terminal badge registered as a cart observer                      │
//! │     • Badge projects the persisted count once (view-load analog)        │
//! │                                                                         │
//! │  4. Run the Command ──────────────────────────────────────────────────► │
//! │     • Mutations persist and re-project through the observer             │
//! │     • Checkout prints the wa.me link (the navigator)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use serendib_core::checkout::{self, OrderContact};
use serendib_core::{Catalog, CheckoutError, Theme};
use serendib_store::{
    BadgeSurface, CartBadge, CartStore, FileStorage, StoreResult, ThemeStore, ThemeSurface,
};

// =============================================================================
// CLI Definition
// =============================================================================

#[derive(Parser)]
#[command(name = "serendib-shop", version, about = "Serendib Shop storefront")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the product catalog
    Products,
    /// Show the current cart and total
    Cart,
    /// Add a product to the cart
    Add {
        /// Product id (e.g. netflix, linkedin, ai)
        product_id: String,
        /// Quantity to add
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a product from the cart
    Remove { product_id: String },
    /// Set the quantity of a cart line
    SetQty {
        product_id: String,
        /// New quantity; values below 1 become 1
        qty: i64,
    },
    /// Empty the cart
    Clear,
    /// Compose the WhatsApp order link from the current cart
    Checkout {
        /// Customer name for the order message
        #[arg(long)]
        name: Option<String>,
        /// Customer email for the order message
        #[arg(long)]
        email: Option<String>,
    },
    /// Show the active theme, or flip it with --toggle
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

// =============================================================================
// Display Surfaces
// =============================================================================

/// The terminal's cart-count badge.
struct TerminalBadge;

impl BadgeSurface for TerminalBadge {
    fn set_count_text(&self, text: &str) {
        println!("🛒 cart items: {text}");
    }
}

/// The terminal's theme root (the `data-theme` attribute analog).
struct TerminalRoot;

impl ThemeSurface for TerminalRoot {
    fn apply_theme(&self, theme: Theme) {
        println!("theme: {theme}");
    }
}

/// Performs the single outward navigation of the whole system.
trait Navigator {
    fn navigate(&self, url: &str);
}

/// A terminal cannot redirect a browser view, so the navigator hands the
/// link to the user instead.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, url: &str) {
        println!("Open this link to send your order:\n{url}");
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    init_tracing();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> StoreResult<()> {
    // One storage file shared by the cart and theme stores
    let storage = Rc::new(RefCell::new(FileStorage::open_default()?));
    debug!(path = %storage.borrow().path().display(), "storage opened");

    let mut cart_store = CartStore::new(Rc::clone(&storage), Catalog::builtin());
    let mut badge = CartBadge::new();
    badge.register_surface(Box::new(TerminalBadge));
    cart_store.register_observer(Box::new(badge));

    let mut theme_store = ThemeStore::new(Rc::clone(&storage));
    theme_store.register_surface(Box::new(TerminalRoot));

    // View-load projection: show the persisted count before the command runs
    cart_store.refresh_badges();

    match cli.command {
        Command::Products => {
            for product in cart_store.catalog().products() {
                println!(
                    "[{:<2}] {:<18} {:>10}  {}",
                    product.logo_text,
                    product.name,
                    product.price().format_lkr(),
                    product.tagline
                );
            }
        }
        Command::Cart => print_cart(&cart_store),
        Command::Add { product_id, qty } => {
            cart_store.add_to_cart(&product_id, qty)?;
        }
        Command::Remove { product_id } => {
            cart_store.remove_from_cart(&product_id)?;
        }
        Command::SetQty { product_id, qty } => {
            // Non-positive input silently becomes 1, like the store itself
            let qty = qty.clamp(1, u32::MAX as i64) as u32;
            cart_store.set_qty(&product_id, qty)?;
        }
        Command::Clear => {
            cart_store.clear_cart()?;
        }
        Command::Checkout { name, email } => {
            let contact = OrderContact::new(name, email);
            match checkout::checkout_url(&cart_store.summary(), &contact) {
                Ok(url) => TerminalNavigator.navigate(&url),
                // The one user-visible notice; deliberately not a navigation
                Err(err @ CheckoutError::EmptyCart) => println!("{err}"),
            }
        }
        Command::Theme { toggle } => {
            // No OS light/dark signal reaches a terminal; dark is the
            // documented fallback when nothing is saved
            if toggle {
                theme_store.toggle(None)?;
            } else {
                theme_store.init(None);
            }
        }
    }

    Ok(())
}

fn print_cart<S: serendib_store::KeyValueStorage>(store: &CartStore<S>) {
    let snapshot = store.summary();
    if snapshot.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for (idx, line) in snapshot.lines.iter().enumerate() {
        println!(
            "{}) {} x{} = {}",
            idx + 1,
            line.product.name,
            line.qty,
            line.line_total.format_lkr()
        );
    }
    println!("Total: {}", snapshot.total.format_lkr());
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show store operation logs
/// - `RUST_LOG=serendib_store=trace` - store crate only
/// - Default: WARN, so recovery warnings surface without drowning the CLI
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
