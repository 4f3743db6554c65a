//! `boutique` command line.
//!
//! Browses the storefront from a terminal: the shop grid with filters, product pages, the
//! drop countdown, the lookbook, and a checkout link for a list of product ids.

use crate::catalog::{FilterCriteria, PriceBand, ProductLookup, StatusFilter};
use crate::checkout::Inr;
use crate::config::StoreConfig;
use crate::lifecycle::Storefront;
use crate::model::Product;
use crate::release_gate::{Clock, FixedClock, SystemClock};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "boutique", version, about = "Browse the Thrift by Musk shop")]
pub struct Cli {
    /// JSON config file (defaults apply to anything it omits)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Preview the shop as of this RFC 3339 instant instead of now
    #[arg(long, global = true, value_parser = parse_instant)]
    pub at: Option<DateTime<Utc>>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List products matching the filters
    Shop {
        /// Matched against name and brand, ignoring case
        #[arg(long, short)]
        query: Option<String>,

        /// All, Available or Sold Out
        #[arg(long, default_value = "Available")]
        status: String,

        /// Repeat to allow several brands
        #[arg(long = "brand")]
        brands: Vec<String>,

        #[arg(long = "size")]
        sizes: Vec<String>,

        #[arg(long = "condition")]
        conditions: Vec<String>,

        /// all, under-1000, 1000-1500 or over-1500
        #[arg(long, default_value = "all")]
        price: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one product page
    Product {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Time left until the next drop
    Countdown,

    /// List lookbook photos
    Gallery,

    /// Put products in the bag and print the WhatsApp checkout link
    Checkout {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 instant: {e}"))
}

impl Command {
    fn criteria(
        query: Option<String>,
        status: &str,
        brands: Vec<String>,
        sizes: Vec<String>,
        conditions: Vec<String>,
        price: &str,
    ) -> FilterCriteria {
        FilterCriteria {
            query: query.unwrap_or_default(),
            status: StatusFilter::from_label_lossy(status),
            brands: brands.into_iter().collect(),
            sizes: sizes.into_iter().collect(),
            conditions: conditions.into_iter().collect(),
            price: PriceBand::from_label_lossy(price),
        }
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("Loading config from {}", path.display()))?,
        None => StoreConfig::default(),
    };

    let clock: Arc<dyn Clock> = match cli.at {
        Some(at) => {
            info!(%at, "Previewing at fixed instant");
            Arc::new(FixedClock::new(at))
        }
        None => Arc::new(SystemClock),
    };

    let store = Storefront::start_with_clock(config, clock).context("Starting storefront")?;

    match cli.command {
        Command::Shop {
            query,
            status,
            brands,
            sizes,
            conditions,
            price,
            json,
        } => {
            let criteria = Command::criteria(query, &status, brands, sizes, conditions, &price);
            let view = store.shop(&criteria);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!(
                    "{} of {} pieces ({} filters active)",
                    view.products.len(),
                    view.visible_count,
                    view.active_filter_count
                );
                for product in &view.products {
                    println!("{}", product_line(product));
                }
                println!();
                println!("Brands:     {}", view.facets.brands.join(", "));
                println!("Sizes:      {}", view.facets.sizes.join(", "));
                println!("Conditions: {}", view.facets.conditions.join(", "));
            }
        }
        Command::Product { id, json } => match store.product(&id) {
            ProductLookup::Found(product) if json => {
                println!("{}", serde_json::to_string_pretty(product)?);
            }
            ProductLookup::Found(product) => print_product(product),
            ProductLookup::Upcoming(_) => {
                println!("Coming soon. Drops in {}", store.countdown());
            }
            ProductLookup::NotFound => {
                warn!(%id, "Unknown product");
                println!("Product not found: {id}");
            }
        },
        Command::Countdown => {
            let status = store.gate.status();
            if status.live {
                println!("The drop is live (since {})", status.launch.to_rfc3339());
            } else {
                println!("Next drop in {}", store.countdown());
            }
        }
        Command::Gallery => {
            for item in store.gallery() {
                match &item.caption {
                    Some(caption) => println!("{}  {}", item.image_url(), caption),
                    None => println!("{}", item.image_url()),
                }
            }
        }
        Command::Checkout { ids } => {
            for id in &ids {
                if !store.add_to_cart(id).await? {
                    warn!(%id, "Not added to bag");
                    eprintln!("Skipped {id}: sold, unreleased, unknown or in the bag");
                }
            }
            let bag = store.cart.items();
            if bag.is_empty() {
                println!("Your bag is empty.");
            } else {
                let total: Inr = bag.iter().map(|item| Inr(item.price())).sum();
                println!("{} item(s), total {total}", bag.len());
                println!("{}", store.checkout_link());
            }
        }
    }

    store.shutdown().await?;
    Ok(())
}

fn product_line(product: &Product) -> String {
    let sold = if product.sold { "  [sold]" } else { "" };
    format!(
        "{:<28} {:<14} {:<4} {:>8}{sold}",
        product.id.as_str(),
        product.brand,
        product.size,
        Inr(product.price).to_string()
    )
}

fn print_product(product: &Product) {
    println!("{} ({})", product.name, product.brand);
    println!("{}", Inr(product.price));
    if product.sold {
        println!("Sold out");
    }
    println!(
        "Size {} | Bust {} | Length {} | {}",
        product.size, product.measurements.bust, product.measurements.length, product.condition
    );
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }
    for url in product.gallery_images() {
        println!("  {url}");
    }
    if let Some(video) = product.video_embed() {
        println!("  video: {video}");
    }
}
