//! Command-line interface for the converter.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{parse_credentials, Credentials};
use crate::error::{ConverterError, Result};
use crate::extractor::{extract_pois, ExtractOptions};
use crate::mapfan::{publish_bookmarks, MapfanClient, MapfanConfig, PublishEvent};
use crate::render::{write_csv, write_zip_file, UrlStyle};
use crate::types::PoiCollection;

/// Convert a GPS POI XML export to CSV, a NaviCon ZIP bundle or MapFan bookmarks.
#[derive(Parser, Debug)]
#[command(name = "gpoi-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// POI XML export (default: standard input)
    pub file: Option<PathBuf>,

    /// Only convert this category (numeric prefix already stripped)
    #[arg(long)]
    pub category: Option<String>,

    /// Maximum number of records per category (-1 = unlimited)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub max: i64,

    /// Write CSV to standard output
    #[arg(long)]
    pub csv: bool,

    /// Write a NaviCon ZIP bundle to this path
    #[arg(long, value_name = "PATH")]
    pub zipfile: Option<PathBuf>,

    /// Register MapFan bookmarks with the given account
    #[arg(long, value_name = "LOGINID,PASSWORD")]
    pub mapfan: Option<String>,

    /// Map link format used in the ZIP bundle
    #[arg(long, value_enum, default_value_t = UrlStyle::Search)]
    pub url_style: UrlStyle,
}

impl Cli {
    fn has_output(&self) -> bool {
        self.csv || self.zipfile.is_some() || self.mapfan.is_some()
    }

    fn extract_options(&self) -> ExtractOptions {
        let options = ExtractOptions::new().with_signed_max(self.max);
        match &self.category {
            Some(category) => options.with_category(category.as_str()),
            None => options,
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(&Cli::parse())
}

/// Execute a parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    // Validate options before touching the input
    if !cli.has_output() {
        return Err(ConverterError::NoOutputMode);
    }
    let credentials = cli.mapfan.as_deref().map(parse_credentials).transpose()?;

    let xml = read_input(cli.file.as_deref())?;
    let pois = extract_pois(&xml, &cli.extract_options())?;
    tracing::info!(
        categories = pois.len(),
        records = pois.record_count(),
        "Loaded point records"
    );

    if let Some(credentials) = credentials {
        mapfan_command(&credentials, &pois)?;
    }

    if let Some(path) = &cli.zipfile {
        write_zip_file(path, &pois, cli.url_style)?;
        eprintln!(
            "{} {}",
            style("Saved to:").for_stderr().green().bold(),
            path.display()
        );
    }

    if cli.csv {
        write_csv(&pois, io::stdout().lock())?;
    }

    Ok(())
}

/// Read the whole input document from a file or standard input.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut xml = String::new();
            io::stdin().read_to_string(&mut xml)?;
            Ok(xml)
        }
    }
}

/// Publish every record as a MapFan bookmark.
fn mapfan_command(credentials: &Credentials, pois: &PoiCollection) -> Result<()> {
    let mut client = MapfanClient::new(MapfanConfig::from_env())?;

    let pb = ProgressBar::new(pois.record_count() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:30.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let result = publish_bookmarks(&mut client, credentials, pois, |event| match event {
        PublishEvent::Authorizing => {
            pb.suspend(|| eprintln!("{} authorizing MapFan...", status_label()));
        }
        PublishEvent::Posted { category, name } => {
            pb.inc(1);
            pb.set_message(category.to_string());
            pb.suspend(|| eprintln!("{} posted {name}", status_label()));
        }
    });
    pb.finish_and_clear();

    let posted = result?;
    eprintln!(
        "{} {} bookmarks",
        style("Registered").for_stderr().green().bold(),
        posted
    );
    Ok(())
}

fn status_label() -> console::StyledObject<&'static str> {
    style("Status:").for_stderr().bold()
}
