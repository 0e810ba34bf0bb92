use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use smartcap::{Config, ExtensionSet, transform};

#[derive(Parser)]
#[command(version, about = "Capitalize and punctuate outgoing messages")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    /// JSON settings file; keys left out keep their defaults
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,
    /// Extension list to use instead of the bundled one
    #[arg(long = "extensions", value_name = "PATH")]
    extensions: Option<PathBuf>,
    #[command(flatten)]
    rules: RuleOpts,
    /// Files to rewrite, each treated as one message
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI exposes four independent flags"
)]
struct RuleOpts {
    /// Characters after which the next letter is capitalized
    #[arg(long = "delimiters", value_name = "CHARS")]
    delimiters: Option<String>,
    /// Characters after which no period is added
    #[arg(long = "exclude-end-symbols", value_name = "CHARS")]
    exclude_end_symbols: Option<String>,
    /// Leave the first letter of each new line alone
    #[arg(long = "no-each-line")]
    no_each_line: bool,
    /// Leave the first letter of the message alone
    #[arg(long = "no-first-letter")]
    no_first_letter: bool,
    /// Add a period at the end of the message
    #[arg(long = "dot-at-end")]
    dot_at_end: bool,
    /// Add a period at the end of each line
    #[arg(long = "dot-at-each-line")]
    dot_at_each_line: bool,
}

impl RuleOpts {
    /// Layer command-line flags over `config`.
    fn apply_to(&self, config: &mut Config) {
        if let Some(delimiters) = &self.delimiters {
            config.delimiters.clone_from(delimiters);
        }
        if let Some(symbols) = &self.exclude_end_symbols {
            config.exclude_end_symbols.clone_from(symbols);
        }
        if self.no_each_line {
            config.each_line = false;
        }
        if self.no_first_letter {
            config.first_letter = false;
        }
        if self.dot_at_end {
            config.dot_at_end = true;
        }
        if self.dot_at_each_line {
            config.dot_at_each_line = true;
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Config::default(),
    };
    cli.rules.apply_to(&mut config);
    Ok(config)
}

/// Transform one message, keeping a single trailing newline out of it.
///
/// The newline ending a file or piped input terminates the stream rather than
/// the message, so it must not count as an empty last line.
fn process_message(input: &str, config: &Config, extensions: &ExtensionSet) -> String {
    match input.strip_suffix('\n') {
        Some(body) => transform(body, config, extensions) + "\n",
        None => transform(input, config, extensions),
    }
}

fn process_path(
    path: &Path,
    in_place: bool,
    config: &Config,
    extensions: &ExtensionSet,
) -> anyhow::Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let fixed = process_message(&content, config, extensions);
    if in_place {
        if fixed != content {
            fs::write(path, &fixed)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Rewrote {}", path.display());
        }
        return Ok(String::new());
    }
    Ok(fixed)
}

/// Entry point for the command-line message rewriter.
///
/// With no file arguments the whole of standard input is one message and the
/// result goes to standard output. Otherwise each file is one message; files
/// are processed in parallel and printed in argument order, or rewritten in
/// place with `--in-place`.
///
/// # Examples
///
/// ```sh
/// echo "hello. how are you" | smartcap
/// smartcap --dot-at-end --in-place draft.txt
/// smartcap --config settings.json notes.txt
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let loaded;
    let extensions = match &cli.extensions {
        Some(path) => {
            loaded = ExtensionSet::load(path)
                .with_context(|| format!("failed to load extensions from {}", path.display()))?;
            &loaded
        }
        None => ExtensionSet::bundled(),
    };

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print!("{}", process_message(&input, &config, extensions));
        return Ok(());
    }

    let outputs = cli
        .files
        .par_iter()
        .map(|path| process_path(path, cli.in_place, &config, extensions))
        .collect::<anyhow::Result<Vec<_>>>()?;
    for out in outputs {
        print!("{out}");
    }

    Ok(())
}
