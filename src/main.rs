// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Strata CLI entrypoint.
//!
//! Reads a matrix document, then lays it out, validates it, searches it or prints the document
//! schema. Results go to stdout; diagnostics (`STRATA_LOG`) go to stderr.

use std::error::Error;
use std::io::Write;

use strata::config::Config;
use strata::layout::compute_layout;
use strata::ops::{apply_ops, layout_ops};
use strata::query::{search_units, UnitSearchMode};
use strata::store::{document_schema, DocumentStore, WriteDurability};
use strata::validate::{render_report, validate_stratigraphy};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "STRATA_LOG";
const DEFAULT_LOG_FILTER: &str = "strata=warn";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} layout <file> [--config <path>] [--write] [--durable-writes]\n  {program} validate <file> [--json]\n  {program} search <file> <needle> [--regex] [--case-sensitive]\n  {program} schema\n\nlayout prints unit positions as JSON, or stores them in the document with --write.\n--durable-writes fsyncs the document on save (also settable in the config file).\n\nSet {LOG_ENV} (e.g. {LOG_ENV}=strata=debug) for diagnostics on stderr."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Layout { file: String, config: Option<String>, write: bool, durable_writes: bool },
    Validate { file: String, json: bool },
    Search { file: String, needle: String, regex: bool, case_sensitive: bool },
    Schema,
}

fn set_flag(flag: &mut bool) -> Result<(), ()> {
    if *flag {
        return Err(());
    }
    *flag = true;
    Ok(())
}

fn set_positional(slot: &mut Option<String>, value: String) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<Command, ()> {
    let subcommand = args.next().ok_or(())?;

    match subcommand.as_str() {
        "layout" => {
            let mut file = None;
            let mut config = None;
            let mut write = false;
            let mut durable_writes = false;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--config" => {
                        let path = args.next().ok_or(())?;
                        set_positional(&mut config, path)?;
                    }
                    "--write" => set_flag(&mut write)?,
                    "--durable-writes" => set_flag(&mut durable_writes)?,
                    _ if arg.starts_with('-') => return Err(()),
                    _ => set_positional(&mut file, arg)?,
                }
            }
            if durable_writes && !write {
                return Err(());
            }
            Ok(Command::Layout { file: file.ok_or(())?, config, write, durable_writes })
        }
        "validate" => {
            let mut file = None;
            let mut json = false;
            for arg in args {
                match arg.as_str() {
                    "--json" => set_flag(&mut json)?,
                    _ if arg.starts_with('-') => return Err(()),
                    _ => set_positional(&mut file, arg)?,
                }
            }
            Ok(Command::Validate { file: file.ok_or(())?, json })
        }
        "search" => {
            let mut file = None;
            let mut needle = None;
            let mut regex = false;
            let mut case_sensitive = false;
            for arg in args {
                match arg.as_str() {
                    "--regex" => set_flag(&mut regex)?,
                    "--case-sensitive" => set_flag(&mut case_sensitive)?,
                    _ if arg.starts_with("--") => return Err(()),
                    _ if file.is_none() => file = Some(arg),
                    _ => set_positional(&mut needle, arg)?,
                }
            }
            Ok(Command::Search {
                file: file.ok_or(())?,
                needle: needle.ok_or(())?,
                regex,
                case_sensitive,
            })
        }
        "schema" => match args.next() {
            None => Ok(Command::Schema),
            Some(_) => Err(()),
        },
        _ => Err(()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Layout { file, config, write, durable_writes } => {
            let config = match config {
                Some(path) => Config::load(path)?,
                None => Config::default(),
            };
            let durability = if durable_writes {
                WriteDurability::Durable
            } else {
                config.write_durability()
            };
            let store = DocumentStore::new(file).with_durability(durability);
            let mut matrix = store.load()?;
            let layout = compute_layout(matrix.graph(), &config.layout);

            if write {
                let ops = layout_ops(matrix.graph(), &layout);
                let base_rev = matrix.rev();
                let result = apply_ops(&mut matrix, base_rev, &ops)?;
                store.save(&matrix)?;
                writeln!(out, "moved {} unit(s)", result.applied)?;
            } else {
                serde_json::to_writer_pretty(&mut out, layout.positions())?;
                writeln!(out)?;
            }
        }
        Command::Validate { file, json } => {
            let matrix = DocumentStore::new(file).load()?;
            let report = validate_stratigraphy(matrix.graph());
            if json {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                out.write_all(render_report(&report).as_bytes())?;
            }
        }
        Command::Search { file, needle, regex, case_sensitive } => {
            let matrix = DocumentStore::new(file).load()?;
            let mode = if regex { UnitSearchMode::Regex } else { UnitSearchMode::Substring };
            for unit in search_units(matrix.graph(), &needle, mode, !case_sensitive)? {
                writeln!(out, "{}\t{}", unit.unit_id(), unit.label())?;
            }
        }
        Command::Schema => {
            let schema = document_schema()?;
            serde_json::to_writer_pretty(&mut out, &schema)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "strata".to_owned());

    let command = match parse_options(args) {
        Ok(command) => command,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    init_tracing();

    if let Err(err) = run(command) {
        eprintln!("strata: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, Command};

    fn parse(args: &[&str]) -> Result<Command, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn rejects_missing_or_unknown_subcommand() {
        parse(&[]).unwrap_err();
        parse(&["render", "site.json"]).unwrap_err();
    }

    #[test]
    fn parses_layout_with_options() {
        let command = parse(&["layout", "site.json", "--config", "strata.json", "--write"])
            .expect("parse options");
        assert_eq!(
            command,
            Command::Layout {
                file: "site.json".to_owned(),
                config: Some("strata.json".to_owned()),
                write: true,
                durable_writes: false,
            }
        );
    }

    #[test]
    fn layout_requires_a_file_and_rejects_repeats() {
        parse(&["layout"]).unwrap_err();
        parse(&["layout", "a.json", "b.json"]).unwrap_err();
        parse(&["layout", "a.json", "--write", "--write"]).unwrap_err();
        parse(&["layout", "a.json", "--config"]).unwrap_err();
    }

    #[test]
    fn durable_writes_only_make_sense_when_writing() {
        parse(&["layout", "a.json", "--durable-writes"]).unwrap_err();
        let command =
            parse(&["layout", "a.json", "--write", "--durable-writes"]).expect("parse options");
        assert!(matches!(command, Command::Layout { durable_writes: true, .. }));
    }

    #[test]
    fn parses_validate_json_flag() {
        let command = parse(&["validate", "site.json", "--json"]).expect("parse options");
        assert_eq!(command, Command::Validate { file: "site.json".to_owned(), json: true });
        parse(&["validate", "site.json", "--verbose"]).unwrap_err();
    }

    #[test]
    fn parses_search_needle_and_modes() {
        let command =
            parse(&["search", "site.json", "^SU 0", "--regex"]).expect("parse options");
        assert_eq!(
            command,
            Command::Search {
                file: "site.json".to_owned(),
                needle: "^SU 0".to_owned(),
                regex: true,
                case_sensitive: false,
            }
        );
        parse(&["search", "site.json"]).unwrap_err();
    }

    #[test]
    fn search_needle_may_start_with_a_dash() {
        let command = parse(&["search", "site.json", "-1"]).expect("parse options");
        assert!(matches!(command, Command::Search { ref needle, .. } if needle == "-1"));
    }

    #[test]
    fn schema_takes_no_arguments() {
        assert_eq!(parse(&["schema"]), Ok(Command::Schema));
        parse(&["schema", "extra"]).unwrap_err();
    }
}
