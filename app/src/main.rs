#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use command::{
    AnnotateInput, AnnotateStrategy, CommandStrategy, Context, EquivalentInput,
    EquivalentStrategy, InitStrategy, SchemaInput, SchemaStrategy, StandardizeInput,
    StandardizeStrategy, StatsStrategy, SynonymsStrategy, TermInput, VersionStrategy,
};
use medterm_config::Config;
use medterm_core::Locale;
use medterm_schema::SchemaOptions;
use std::path::PathBuf;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "medterm")]
#[command(about = "Medical term standardization and annotation", long_about = None)]
struct Cli {
    /// Log at debug level regardless of the config file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a term to its canonical form
    Standardize {
        term: String,

        /// Output language (en, zh, zh-CN, ...)
        #[arg(short, long, default_value = "en")]
        locale: Locale,

        /// Print the resolved concept as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the standard term and synonyms of a term
    Synonyms {
        term: String,

        #[arg(short, long, default_value = "en")]
        locale: Locale,
    },
    /// Check whether two terms name the same concept
    Equivalent { term_a: String, term_b: String },
    /// Wrap recognized terms in metadata markup
    Annotate {
        /// Text to annotate; read from --file or stdin when omitted
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        #[arg(short, long, default_value = "en")]
        locale: Locale,

        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print a page's JSON-LD description
    Schema {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Entity key, e.g. DYSMENORRHEA
        #[arg(long)]
        condition: String,

        /// Citation key, e.g. nhs-period-pain (repeatable)
        #[arg(long = "citation")]
        citations: Vec<String>,

        #[arg(short, long, default_value = "en")]
        locale: Locale,

        #[arg(long)]
        url: Option<String>,

        /// Review date as YYYY-MM-DD
        #[arg(long)]
        last_reviewed: Option<NaiveDate>,

        #[arg(long)]
        reviewed_by: Option<String>,
    },
    /// Show dictionary sizes and cache settings
    Stats,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.logging.level()
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    debug!("Log level {}", level);

    let ctx = Context::new(config);
    match cli.command {
        Commands::Standardize { term, locale, json } => {
            StandardizeStrategy.execute(StandardizeInput {
                term,
                locale,
                json,
                ctx,
            })
        }
        Commands::Synonyms { term, locale } => {
            SynonymsStrategy.execute(TermInput { term, locale, ctx })
        }
        Commands::Equivalent { term_a, term_b } => EquivalentStrategy.execute(EquivalentInput {
            term_a,
            term_b,
            ctx,
        }),
        Commands::Annotate { text, locale, file } => AnnotateStrategy.execute(AnnotateInput {
            text,
            file,
            locale,
            ctx,
        }),
        Commands::Schema {
            title,
            description,
            condition,
            citations,
            locale,
            url,
            last_reviewed,
            reviewed_by,
        } => SchemaStrategy.execute(SchemaInput {
            options: SchemaOptions {
                title,
                description,
                condition,
                citations,
                locale,
                url,
                last_reviewed,
                reviewed_by,
            },
            ctx,
        }),
        Commands::Stats => StatsStrategy.execute(ctx),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
