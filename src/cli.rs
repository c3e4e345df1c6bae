// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::ExportOptions;
use crate::file;
use crate::lexicon::{classify, DictClient, SolverSource, WordSource};

pub struct Params {
    pub letters: Option<String>,     // positional puzzle letter set
    pub from_file: Option<PathBuf>,  // classify an existing TXT list instead
    pub out_dir: String,             // where the reports land
    pub words_only: bool,            // fetch + words.txt, skip classification
}

impl Params {
    pub fn new() -> Self {
        Self {
            letters: None,
            from_file: None,
            out_dir: s!("."),
            words_only: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;

    // Word list: solver fetch, or a reviewed TXT list
    let words = if let Some(path) = &params.from_file {
        let words = file::load_word_list(path)?;
        println!("Loaded {} words from {}.", words.len(), path.display());
        words
    } else {
        let letters = params
            .letters
            .as_deref()
            .ok_or("Missing letters argument (see --help)")?;
        let source = SolverSource::new()?;
        let words = source.fetch(letters)?;
        println!("Fetched {} words from SB Solver.", words.len());
        words
    };

    let mut export = ExportOptions::default();
    export.set_dir(&params.out_dir);
    // The HTML pair is the CLI deliverable; the TXT list only via --words-only
    export.include_words_txt = false;

    if params.words_only {
        let path = export.words_path();
        file::write_word_list(&path, &words)?;
        println!("Word list written: {}", path.display());
        return Ok(());
    }

    let dict = DictClient::new()?;
    let partition = classify(&words, &dict, None);
    println!(
        "{} common words, {} rare/variant words.",
        partition.common.len(),
        partition.rare.len()
    );

    let written = file::write_reports(&export, &partition, &words)?;
    let names: Vec<String> = written
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    println!("Output generated: {}", names.join(", "));
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::new();
    let mut args = env::args().skip(1);

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => {
                params.out_dir = args.next().ok_or("Missing output directory")?;
            }
            "--from-file" => {
                let v = args.next().ok_or("Missing value for --from-file")?;
                params.from_file = Some(PathBuf::from(file::normalize_separators(&v)));
            }
            "--words-only" => params.words_only = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if !other.starts_with('-') => {
                if params.letters.is_some() {
                    return Err(format!("Unexpected extra argument: {}", other).into());
                }
                params.letters = Some(s!(other));
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.letters.is_none() && params.from_file.is_none() {
        return Err("Nothing to do: pass letters or --from-file (see --help)".into());
    }

    Ok(params)
}
