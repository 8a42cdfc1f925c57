use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{warn, Level};
use typewise::cli::output::{self, OutputFormat, Report};
use typewise::{check_grammar, transform_tone, Category, Config, Dictionary};

#[derive(Parser, Debug)]
#[command(name = "typewise")]
#[command(version, about = "Spelling, grammar and tone checks for short texts", long_about = None)]
struct Cli {
    /// Files to check (reads stdin when neither files nor --text are given)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Check this text instead of files
    #[arg(short, long, conflicts_with = "files")]
    text: Option<String>,

    /// Run the spelling checker
    #[arg(long)]
    spelling: bool,

    /// Run the grammar and style checker
    #[arg(long)]
    grammar: bool,

    /// Rewrite the text in this tone (see `typewise tones`)
    #[arg(short = 'T', long, value_name = "TONE")]
    tone: Option<String>,

    /// Language code; only "en" enables English-specific rules
    #[arg(short, long)]
    language: Option<String>,

    /// Writing context (general, email, casual, formal, ...)
    #[arg(short, long)]
    category: Option<String>,

    /// Print the corrected text instead of a report
    #[arg(short, long)]
    fix: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if issues are found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Treat these words as correctly spelled
    #[arg(long)]
    add_to_dict: Vec<String>,

    /// Personal dictionary file (one word per line)
    #[arg(long)]
    personal_dict: Option<PathBuf>,

    /// Prebuilt dictionary file (see `typewise build-dict`)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// List available tones
    Tones,
    /// Build a dictionary file from a plain word list
    BuildDict {
        /// Word list, one word per line
        words: PathBuf,
        /// Where to write the dictionary
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "typewise", &mut io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose);

    // Handle subcommands
    if let Some(command) = &cli.command {
        return handle_command(command, !cli.no_color);
    }

    let config = load_config(&cli)?;
    let checker = config.build_checker().context("Failed to build dictionary")?;
    for word in &cli.add_to_dict {
        checker.add_to_dictionary(word);
    }

    // Without an explicit selection run spelling and grammar, plus the configured tone
    let tone = cli.tone.clone().or_else(|| config.tone.clone());
    let any_selected = cli.spelling || cli.grammar || cli.tone.is_some();
    let run_spelling = cli.spelling || !any_selected;
    let run_grammar = cli.grammar || !any_selected;

    let mut total_issues = 0;
    let inputs = read_inputs(&cli)?;

    for (source, text) in &inputs {
        let report = Report {
            source: source.clone(),
            spelling: run_spelling.then(|| checker.check(text)),
            grammar: run_grammar.then(|| check_grammar(text, &config.language, config.category)),
            tone: None,
        };

        // Tone runs on the grammar-corrected text when both are requested
        let tone_result = tone.as_deref().map(|id| {
            let base = report.final_text(text).to_string();
            transform_tone(&base, id, &config.language)
        });
        if let Some(result) = &tone_result {
            if !result.is_recognized() {
                warn!(tone = %result.tone.id, "unknown tone, text left unchanged");
            }
        }
        let report = Report {
            tone: tone_result,
            ..report
        };

        total_issues += report.issue_count();

        if cli.fix {
            println!("{}", report.final_text(text));
        } else {
            output::print_report(&report, !cli.no_color, cli.format)?;
        }
    }

    if !cli.fix && cli.format == OutputFormat::Text {
        output::print_check_summary(total_issues, inputs.len(), !cli.no_color);
    }

    // Exit with appropriate code
    if total_issues > 0 && !cli.no_fail && !cli.fix {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load().context("Failed to load configuration")?;

    // Apply CLI overrides
    if let Some(language) = &cli.language {
        config.language = language.clone();
    }
    if let Some(category) = &cli.category {
        config.category = category.parse::<Category>()?;
    }
    if let Some(dict) = &cli.personal_dict {
        config.personal_dictionary = Some(dict.clone());
    }
    if let Some(dict) = &cli.dictionary {
        config.dictionary = Some(dict.clone());
    }

    Ok(config)
}

fn read_inputs(cli: &Cli) -> Result<Vec<(String, String)>> {
    if let Some(text) = &cli.text {
        return Ok(vec![("<text>".to_string(), text.clone())]);
    }

    if cli.files.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(vec![("<stdin>".to_string(), text)]);
    }

    cli.files
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            Ok((path.display().to_string(), text))
        })
        .collect()
}

fn handle_command(command: &Commands, colored: bool) -> Result<()> {
    match command {
        Commands::Tones => output::print_tones(colored),
        Commands::BuildDict { words, output: dest } => {
            let content = fs::read_to_string(words)
                .with_context(|| format!("Failed to read word list: {}", words.display()))?;
            let list: Vec<String> = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from)
                .collect();

            Dictionary::build_from_words(&list, dest)?;

            let dictionary = Dictionary::load_from_path(dest)?;
            println!(
                "✓ Dictionary with {} words written to {}",
                dictionary.len(),
                dest.display()
            );
        }
    }

    Ok(())
}
