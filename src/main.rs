//! Sentiscore CLI
//!
//! Usage:
//!   sentiscore --text "your feedback here"      # Single evaluation
//!   sentiscore --file feedback.txt              # Evaluate a file
//!   sentiscore --interactive                    # One evaluation per line
//!   sentiscore --serve                          # HTTP API server
//!   sentiscore --text "text" --remote --json    # LLM scoring with local fallback

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use sentiscore::config::RemoteConfig;
use sentiscore::core::{run_server, LlmAnalyzer, SentimentAnalyzer};
use sentiscore::logging::init_logging;
use sentiscore::types::{AnalysisOutcome, SentimentLabel};
use sentiscore::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "sentiscore",
    version = VERSION,
    about = "Score the sentiment of interview and recruitment feedback",
    long_about = "Sentiscore rates free-form feedback on a -100..100 scale using a\n\
                  lexicon of words and hiring phrases, with negation and intensifiers.\n\n\
                  Modes:\n  \
                  --text / --file  Single evaluation\n  \
                  --interactive    One evaluation per input line\n  \
                  --serve          HTTP API server mode\n\n\
                  With --remote, an OpenAI-compatible LLM endpoint scores the text\n\
                  (key from GROQ_API_KEY); any failure falls back to the local scorer."
)]
struct Args {
    /// Text to evaluate (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Read the text to evaluate from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show word and phrase breakdown
    #[arg(long)]
    verbose: bool,

    /// Score with the remote LLM, falling back to the local scorer
    #[arg(short, long)]
    remote: bool,

    /// Chat completions URL (overrides SENTISCORE_LLM_URL)
    #[arg(long)]
    llm_url: Option<String>,

    /// Model name (overrides SENTISCORE_LLM_MODEL)
    #[arg(long)]
    llm_model: Option<String>,

    /// Remote request timeout in seconds (overrides SENTISCORE_LLM_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    // The server only enables remote mode when a key is available
    let config = remote_config(&args);
    let remote = if args.remote || (args.serve && config.has_api_key()) {
        Some(LlmAnalyzer::new(config))
    } else {
        None
    };

    if args.serve {
        run_serve(&args, remote).await
    } else if args.interactive {
        run_interactive(&args, remote.as_ref()).await
    } else if let Some(ref path) = args.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path))?;
        run_single(&text, &args, remote.as_ref()).await
    } else if let Some(ref text) = args.text {
        run_single(text, &args, remote.as_ref()).await
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args, remote.as_ref()).await
    }
}

/// Environment config with command-line overrides applied
fn remote_config(args: &Args) -> RemoteConfig {
    let mut config = RemoteConfig::from_env();
    if let Some(ref url) = args.llm_url {
        config = config.with_endpoint(url);
    }
    if let Some(ref model) = args.llm_model {
        config = config.with_model(model);
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

/// Analyze with the remote analyzer when one is configured
async fn evaluate(text: &str, remote: Option<&LlmAnalyzer>) -> AnalysisOutcome {
    match remote {
        Some(remote) => remote.analyze_with_fallback(text).await,
        None => AnalysisOutcome::local(SentimentAnalyzer::new().analyze(text)),
    }
}

/// Run single text evaluation
async fn run_single(text: &str, args: &Args, remote: Option<&LlmAnalyzer>) -> Result<()> {
    let outcome = evaluate(text, remote).await;
    print_outcome(&outcome, args, true)
}

/// Run interactive mode
async fn run_interactive(args: &Args, remote: Option<&LlmAnalyzer>) -> Result<()> {
    print_header(args.no_color);
    println!("Type feedback and press Enter to score it. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut count = 0usize;

    loop {
        print!("{}", if args.no_color { "> " } else { "\x1b[1m>\x1b[0m " });
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Evaluations: {}", count);
            break;
        }
        if line.is_empty() {
            continue;
        }

        let outcome = evaluate(line, remote).await;
        print_outcome(&outcome, args, false)?;
        count += 1;
    }

    Ok(())
}

/// Print one outcome in the format the flags ask for
fn print_outcome(outcome: &AnalysisOutcome, args: &Args, pretty_json: bool) -> Result<()> {
    if args.json {
        let json = if pretty_json {
            serde_json::to_string_pretty(outcome)?
        } else {
            serde_json::to_string(outcome)?
        };
        println!("{}", json);
        return Ok(());
    }

    if let Some(ref warning) = outcome.warning {
        if args.no_color {
            println!("warning: {}", warning);
        } else {
            println!("\x1b[33m⚠ {}\x1b[0m", warning);
        }
    }

    if args.verbose {
        print_verbose(outcome, args.no_color);
    } else if args.no_color {
        println!("{}", outcome.result.to_parseable_string());
    } else {
        println!("{}", outcome.result.to_terminal_string());
    }
    Ok(())
}

/// Print header
fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Sentiscore v{}", VERSION);
        println!("========================================");
    } else {
        println!("\x1b[1m╔════════════════════════════════════════╗\x1b[0m");
        println!("\x1b[1m║  Sentiscore v{:<26}║\x1b[0m", VERSION);
        println!("\x1b[1m╚════════════════════════════════════════╝\x1b[0m");
    }
    println!();
}

/// Print verbose breakdown
fn print_verbose(outcome: &AnalysisOutcome, no_color: bool) {
    let result = &outcome.result;
    let color = if no_color { "" } else { result.label.color_code() };
    let reset = if no_color { "" } else { SentimentLabel::color_reset() };

    println!("{}┌──────────────────────────────────────┐{}", color, reset);
    println!("{}│ {} ({:.2})  [{}]{}", color, result.label, result.normalized_score, outcome.source, reset);
    println!("{}│ score={:.2}  comparative={:.3}{}", color, result.raw_score, result.comparative, reset);
    println!(
        "{}│ words={}  analyzed={}  +{:.2} / -{:.2}{}",
        color,
        result.token_count,
        result.analyzed_token_count,
        result.positive_score_sum,
        result.negative_score_sum,
        reset
    );
    println!("{}├──────────────────────────────────────┤{}", color, reset);
    if !result.phrase_hits.is_empty() {
        println!("{}│ Phrases:{}", color, reset);
        for hit in &result.phrase_hits {
            println!("{}│   {:<24} {:>+7.2}{}", color, hit.phrase, hit.score, reset);
        }
    }
    if !result.positive_words.is_empty() {
        println!("{}│ Positive:{}", color, reset);
        for word in &result.positive_words {
            println!("{}│   {:<24} {:>+7.2}{}", color, word.word, word.score, reset);
        }
    }
    if !result.negative_words.is_empty() {
        println!("{}│ Negative:{}", color, reset);
        for word in &result.negative_words {
            println!("{}│   {:<24} {:>+7.2}{}", color, word.word, word.score, reset);
        }
    }
    println!("{}└──────────────────────────────────────┘{}", color, reset);
}

/// Run HTTP API server
async fn run_serve(args: &Args, remote: Option<LlmAnalyzer>) -> Result<()> {
    print_header(args.no_color);
    println!(
        "Listening on {} (remote scoring: {})",
        args.addr,
        if remote.is_some() { "on" } else { "off" }
    );
    run_server(&args.addr, remote)
        .await
        .context("Server error")
}
