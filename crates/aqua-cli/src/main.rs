mod commands;

use anyhow::Result;
use aqua_booking::{Catalog, Config};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "aqua")]
#[command(version, about = "Aquaxperience booking tools", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "aqua.toml")]
    config: PathBuf,

    /// Catalog file (overrides the configured path)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an item for a time span or party size
    Quote {
        /// Item id from the catalog
        #[arg(long)]
        item: String,

        /// Start time (HH:MM)
        #[arg(long)]
        start: Option<String>,

        /// End time (HH:MM), equipment only
        #[arg(long)]
        end: Option<String>,

        /// Number of participants, experiences only
        #[arg(long)]
        participants: Option<u32>,
    },

    /// Validate a booking and print the resulting request
    Book {
        #[arg(long)]
        item: String,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        #[arg(long)]
        start: String,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        participants: Option<u32>,

        /// card, paypal or transfer (defaults to the configured method)
        #[arg(long)]
        payment: Option<String>,

        /// Special requests
        #[arg(long)]
        requests: Option<String>,
    },

    /// Search the catalog
    Search {
        #[arg(short, long)]
        query: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        min_price: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        #[arg(long)]
        difficulty: Option<String>,

        #[arg(long)]
        min_rating: Option<f32>,

        #[arg(long)]
        participants: Option<u32>,
    },

    /// Validate registration input
    #[command(name = "check-signup")]
    CheckSignup {
        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, default_value = "")]
        confirm_password: String,

        #[arg(long, default_value = "client")]
        role: String,

        #[arg(long)]
        accept_terms: bool,
    },
}

/// Loaded configuration plus the catalog it points at
pub struct Context {
    pub config: Config,
    catalog_path: PathBuf,
}

impl Context {
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::load(&self.catalog_path)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns false when the input was rejected by validation
fn run(cli: Cli) -> Result<bool> {
    let config = Config::load(&cli.config)?;
    let catalog_path = cli
        .catalog
        .unwrap_or_else(|| PathBuf::from(&config.catalog.path));
    let ctx = Context { config, catalog_path };

    match cli.command {
        Commands::Quote {
            item,
            start,
            end,
            participants,
        } => commands::quote::execute(&ctx, &item, start.as_deref(), end.as_deref(), participants),
        Commands::Book {
            item,
            date,
            start,
            end,
            participants,
            payment,
            requests,
        } => commands::book::execute(
            &ctx,
            commands::book::BookArgs {
                item,
                date,
                start,
                end,
                participants,
                payment,
                requests,
            },
        ),
        Commands::Search {
            query,
            category,
            location,
            min_price,
            max_price,
            difficulty,
            min_rating,
            participants,
        } => {
            let filters = commands::search::filters(
                query,
                category,
                location,
                min_price,
                max_price,
                difficulty,
                min_rating,
                participants,
            );
            commands::search::execute(&ctx, &filters)
        }
        Commands::CheckSignup {
            first_name,
            last_name,
            email,
            phone,
            password,
            confirm_password,
            role,
            accept_terms,
        } => {
            use aqua_forms::auth::fields;
            use aqua_forms::FormValues;

            let values = FormValues::new()
                .with(fields::FIRST_NAME, first_name)
                .with(fields::LAST_NAME, last_name)
                .with(fields::EMAIL, email)
                .with(fields::PHONE, phone)
                .with(fields::PASSWORD, password)
                .with(fields::CONFIRM_PASSWORD, confirm_password)
                .with(fields::ROLE, role)
                .with(fields::ACCEPT_TERMS, accept_terms);
            commands::signup::execute(&values)
        }
    }
}
