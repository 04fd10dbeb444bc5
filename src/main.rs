//! Command-line interface for dbgen
//!
//! ```bash
//! # ten rows of name, phone and e-mail
//! dbgen
//!
//! # Russian people with a third of the phones missing, saved as CSV
//! dbgen -n name gender phone -t name_full gender phone_7_r -l ru -k 30 -b 0 0 33 -s people.csv
//!
//! # settings from a JSON file, reproducible
//! dbgen --config table.json --seed 42 -s table.json
//! ```

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use dbgen::{
    core::{
        config::GenerationConfig,
        family::Family,
        item::ItemWriter,
        locale::Locale,
        job::{GenerationJobBuilder, Job},
        value::{Row, Table},
    },
    item::{csv::CsvItemWriterBuilder, json::JsonItemWriterBuilder},
    provider::fake::FakeProvider,
};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "dbgen", version, about = "Generates tables of test data")]
struct Args {
    /// Column names
    #[arg(short = 'n', long = "names", num_args = 1..)]
    names: Option<Vec<String>>,

    /// Column specifiers, one per name; see --families
    #[arg(short = 't', long = "types", num_args = 1..)]
    types: Option<Vec<String>>,

    /// Locale code, e.g. en or ru
    #[arg(short = 'l', long = "language")]
    language: Option<String>,

    /// Number of rows
    #[arg(short = 'k', long = "number", allow_negative_numbers = true)]
    number: Option<i64>,

    /// Percentage of blank values, one for all columns or one per column
    #[arg(short = 'b', long = "blank", num_args = 1.., allow_negative_numbers = true)]
    blank: Option<Vec<i64>>,

    /// Save the table to a .csv or .json file
    #[arg(short = 's', long = "save")]
    save: Option<PathBuf>,

    /// Read settings from a JSON file; command-line values take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// List the attribute families and exit
    #[arg(long)]
    families: bool,

    /// List the locale codes and exit
    #[arg(long)]
    locales: bool,
}

impl Args {
    fn generation_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open {}", path.display()))?;
                GenerationConfig::from_reader(file)?
            }
            None => GenerationConfig::default(),
        };

        if self.names.is_some() {
            config.column_names = self.names.clone();
        }
        if self.types.is_some() {
            config.specifiers = self.types.clone();
        }
        if self.language.is_some() {
            config.locale = self.language.clone();
        }
        if self.number.is_some() {
            config.row_count = self.number;
        }
        if self.blank.is_some() {
            config.blank_percentages = self.blank.clone();
        }
        Ok(config)
    }
}

fn print_families() {
    for family in Family::ALL {
        println!("{:<12}{}", family.token(), family.usage());
    }
}

fn locale_lines() -> Vec<String> {
    Locale::all()
        .map(|locale| format!("{:<8}{}", locale.code(), locale.language()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveFormat {
    Csv,
    Json,
}

impl SaveFormat {
    fn of(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => bail!("cannot save {}: use a .csv or .json file", path.display()),
        }
    }
}

/// Writes `table` to `path`; the file is only created here, once the table exists.
fn save_table(path: &Path, format: SaveFormat, table: &Table) -> Result<()> {
    let writer: Box<dyn ItemWriter<Row>> = match format {
        SaveFormat::Csv => Box::new(
            CsvItemWriterBuilder::new()
                .column_names(&table.column_names)
                .from_path(path)?,
        ),
        SaveFormat::Json => Box::new(
            JsonItemWriterBuilder::new()
                .column_names(&table.column_names)
                .pretty_formatter(true)
                .from_path(path)?,
        ),
    };
    writer.open()?;
    writer.write(&table.rows)?;
    writer.flush()?;
    writer.close()?;
    Ok(())
}

/// Generates the table described by `args` and saves it when asked to.
fn generate(args: &Args) -> Result<Table> {
    let config = args.generation_config()?;
    let format = args.save.as_deref().map(SaveFormat::of).transpose()?;

    let provider = FakeProvider::new();
    let mut builder = GenerationJobBuilder::new()
        .name("dbgen".to_string())
        .config(config)
        .provider(&provider);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let execution = builder.build()?.run()?;
    info!("Generated in {:?}", execution.duration);

    if let (Some(path), Some(format)) = (&args.save, format) {
        save_table(path, format, &execution.table)
            .with_context(|| format!("cannot save {}", path.display()))?;
    }
    Ok(execution.table)
}

fn print_table(table: &Table) {
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|value| value.as_ref().map(ToString::to_string).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = table
        .column_names
        .iter()
        .enumerate()
        .map(|(position, name)| {
            cells
                .iter()
                .map(|row| row[position].chars().count())
                .chain([name.chars().count()])
                .max()
                .unwrap_or_default()
        })
        .collect();

    let line = |values: &[String]| {
        values
            .iter()
            .zip(&widths)
            .map(|(value, &width)| format!("{value:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(&table.column_names));
    for row in &cells {
        println!("{}", line(row));
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.families {
        print_families();
        return Ok(());
    }
    if args.locales {
        locale_lines().iter().for_each(|line| println!("{line}"));
        return Ok(());
    }

    let table = generate(&args)?;

    print_table(&table);

    if let Some(path) = &args.save {
        println!("Table saved to {}", path.display());
    }

    Ok(())
}
