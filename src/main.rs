//! Vigenère Cracker - CLI
//!
//! Encrypt, decrypt, analyze and crack Vigenère ciphertext, with a TUI for
//! stepping through a crack column by column.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use vigenere_cracker::{
    analysis::{ReferenceDistribution, ReferenceKind},
    cipher::encrypt_sequence,
    commands::{
        BenchmarkConfig, CrackConfig, Mode, analyze_text, run_benchmark, run_crack, run_transform,
    },
    core::{Alphabet, Ciphertext, Key, LATIN, Plaintext},
    crack::Cracker,
    output::{
        print_analysis_result, print_benchmark_result, print_crack_outcome, print_transform_result,
    },
    sources::{InlineSource, SAMPLE_TEXT, TextSource, source_from_spec},
};

/// Key the default TUI session encrypts the sample with
const DEMO_KEY: &str = "LOCK";

#[derive(Parser)]
#[command(
    name = "vigenere_cracker",
    about = "Vigenère cipher with chi-squared frequency cryptanalysis",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Cipher alphabet, in ordinal order
    #[arg(short, long, global = true, default_value = LATIN)]
    alphabet: String,

    /// Reference distribution: text (default) or dictionary
    #[arg(short, long, global = true, default_value = "text")]
    reference: String,
}

#[derive(Args)]
struct InputArgs {
    /// Text source: 'sample' (default), a file path, or an http(s) URL
    #[arg(short, long, default_value = "sample")]
    input: String,

    /// Literal text (overrides --input)
    #[arg(short, long)]
    text: Option<String>,
}

impl InputArgs {
    fn sample() -> Self {
        Self {
            input: "sample".to_string(),
            text: None,
        }
    }

    fn source(&self) -> Result<Box<dyn TextSource>> {
        match &self.text {
            Some(text) => Ok(Box::new(InlineSource(text.clone()))),
            None => Ok(source_from_spec(&self.input)?),
        }
    }

    /// Fetch the text along with a description of where it came from
    fn load(&self) -> Result<(String, String)> {
        let source = self.source()?;
        let text = source
            .fetch()
            .with_context(|| format!("Failed to read {}", source.describe()))?;
        Ok((text, source.describe()))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        #[command(flatten)]
        input: InputArgs,

        /// Encrypt the input with this key before cracking it
        #[arg(short, long)]
        key: Option<String>,

        /// Longest key length to consider
        #[arg(short = 'm', long, default_value = "12")]
        max_length: usize,
    },

    /// Encrypt text with a key
    Encrypt {
        #[command(flatten)]
        input: InputArgs,

        #[arg(short, long)]
        key: String,
    },

    /// Decrypt text with a known key
    Decrypt {
        #[command(flatten)]
        input: InputArgs,

        #[arg(short, long)]
        key: String,
    },

    /// Print the letter frequency table of a text
    Analyze {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Recover the key from ciphertext alone
    Crack {
        #[command(flatten)]
        input: InputArgs,

        /// Fixed key length (skips the length search)
        #[arg(short, long)]
        length: Option<usize>,

        /// Longest key length to search
        #[arg(short = 'm', long, default_value = "12")]
        max_length: usize,

        /// Show per-column statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Crack the sample under random keys and report accuracy
    Benchmark {
        /// Number of random keys to try
        #[arg(short = 'n', long, default_value = "50")]
        trials: usize,

        #[arg(long, default_value = "3")]
        min_length: usize,

        #[arg(long, default_value = "10")]
        max_length: usize,

        /// Seed for reproducible keys
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let alphabet = Alphabet::new(&cli.alphabet)?;
    let reference = ReferenceKind::from_name(&cli.reference).distribution();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or_else(|| Commands::Play {
        input: InputArgs::sample(),
        key: Some(DEMO_KEY.to_string()),
        max_length: 12,
    });

    match command {
        Commands::Play {
            input,
            key,
            max_length,
        } => run_play_command(&input, key.as_deref(), max_length, &alphabet, reference),
        Commands::Encrypt { input, key } => {
            run_transform_command(Mode::Encrypt, &input, &key, &alphabet)
        }
        Commands::Decrypt { input, key } => {
            run_transform_command(Mode::Decrypt, &input, &key, &alphabet)
        }
        Commands::Analyze { input } => run_analyze_command(&input, &alphabet, reference),
        Commands::Crack {
            input,
            length,
            max_length,
            verbose,
        } => {
            let mut config = CrackConfig::new().with_max_key_length(max_length);
            if let Some(length) = length {
                config = config.with_key_length(length);
            }
            run_crack_command(&input, config, verbose, &alphabet, reference)
        }
        Commands::Benchmark {
            trials,
            min_length,
            max_length,
            seed,
        } => {
            let config = BenchmarkConfig {
                trials,
                min_key_length: min_length,
                max_key_length: max_length,
                search_limit: max_length.max(BenchmarkConfig::new().search_limit),
                seed,
            };
            run_benchmark_command(&config, &alphabet, reference)
        }
    }
}

fn run_transform_command(
    mode: Mode,
    input: &InputArgs,
    key: &str,
    alphabet: &Alphabet,
) -> Result<()> {
    let (text, _) = input.load()?;
    let result = run_transform(mode, &text, key, alphabet)?;
    print_transform_result(&result);
    Ok(())
}

fn run_analyze_command(
    input: &InputArgs,
    alphabet: &Alphabet,
    reference: &ReferenceDistribution,
) -> Result<()> {
    let (text, source) = input.load()?;
    let result = analyze_text(&text, &source, alphabet, reference)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_crack_command(
    input: &InputArgs,
    config: CrackConfig,
    verbose: bool,
    alphabet: &Alphabet,
    reference: &ReferenceDistribution,
) -> Result<()> {
    let (text, source) = input.load()?;
    let cracker = Cracker::new(alphabet, reference)?;
    let ciphertext = Ciphertext::from_text(&text, alphabet);

    println!("Cracking {source} against {}...", reference.name());
    let outcome = run_crack(&cracker, &ciphertext, config)?;
    print_crack_outcome(&outcome, verbose);
    Ok(())
}

fn run_benchmark_command(
    config: &BenchmarkConfig,
    alphabet: &Alphabet,
    reference: &ReferenceDistribution,
) -> Result<()> {
    let cracker = Cracker::new(alphabet, reference)?;
    let plaintext = Plaintext::from_text(SAMPLE_TEXT, alphabet);

    println!(
        "Running benchmark on {} random keys of length {}-{}...",
        config.trials, config.min_key_length, config.max_key_length
    );
    let result = run_benchmark(&cracker, &plaintext, config)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(
    input: &InputArgs,
    key: Option<&str>,
    max_length: usize,
    alphabet: &Alphabet,
    reference: &ReferenceDistribution,
) -> Result<()> {
    use vigenere_cracker::interactive::{App, run_tui};

    let (text, source) = input.load()?;
    let cracker = Cracker::new(alphabet, reference)?;

    let ciphertext = match key {
        Some(key) => {
            let key = Key::new(key, alphabet)?;
            let plain = Plaintext::from_text(&text, alphabet);
            encrypt_sequence(&plain, &key, alphabet)?
        }
        None => Ciphertext::from_text(&text, alphabet),
    };

    let app = App::new(cracker, ciphertext, source, max_length);
    run_tui(app)
}
