// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flate2::read::GzDecoder;
use log::info;
use mpcorb_search::{Config, Query, Searcher};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mpcorb")]
#[command(about = "Search the MPCORB orbit catalogue")]
struct Cli {
    /// JSON configuration file
    #[arg(long, env = "MPCORB_CONFIG")]
    config: Option<PathBuf>,

    /// Catalogue file, optionally gzip compressed (overrides the configuration)
    #[arg(long, global = true)]
    path: Option<PathBuf>,

    /// Header lines before the first record (overrides the configuration)
    #[arg(long, global = true)]
    header_lines: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the objects matching a query
    Find {
        /// Query terms, e.g. -q Aphelion_dist:3.1948214 Num_opps:38
        #[arg(short, long, num_args = 1.., required = true)]
        query: Vec<String>,
        /// Stop at the first match
        #[arg(long)]
        first: bool,
        /// Pretty print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Convert the catalogue to a JSON array of records
    Convert {
        /// Output file (standard output if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(path) = cli.path {
        config.dat_file = path;
    }
    if let Some(header_lines) = cli.header_lines {
        config.header_lines = header_lines;
    }

    match cli.command {
        Commands::Find {
            query,
            first,
            pretty,
        } => {
            let query = Query::parse(&query)?;
            let searcher = config.searcher().first(first);
            let result = searcher.find(open(&config.dat_file)?, &query)?;

            let stdout = io::stdout().lock();
            if pretty {
                serde_json::to_writer_pretty(stdout, &result)?;
            } else {
                serde_json::to_writer(stdout, &result)?;
            }
            println!();
        }

        Commands::Convert { out } => {
            let writer: Box<dyn Write> = match &out {
                Some(path) => Box::new(
                    File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?,
                ),
                None => Box::new(io::stdout().lock()),
            };

            let count = convert(&config.searcher(), open(&config.dat_file)?, writer)?;
            info!("converted {count} record(s)");
        }
    }

    Ok(())
}

/// Opens the catalogue, decompressing it if the path ends in `.gz`.
fn open(path: &Path) -> anyhow::Result<Box<dyn BufRead>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(BufReader::new(file)))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Writes every record as an element of a JSON array.
fn convert<R: BufRead, W: Write>(
    searcher: &Searcher,
    reader: R,
    writer: W,
) -> anyhow::Result<usize> {
    let mut writer = BufWriter::new(writer);
    let everything = Query::new();
    let mut count = 0;

    writer.write_all(b"[")?;
    for record in searcher.search(reader, &everything) {
        if count > 0 {
            writer.write_all(b",\n")?;
        }
        serde_json::to_writer(&mut writer, &record?)?;
        count += 1;
    }
    writer.write_all(b"]\n")?;
    writer.flush()?;

    Ok(count)
}
