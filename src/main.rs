//! # LexClaw — lexical retrieval with extractive answers
//!
//! A teaching-sized RAG pipeline with no ML in it: term-overlap retrieval
//! over an in-memory knowledge base, answers stitched from source sentences.
//!
//! Usage:
//!   lexclaw demo                       # Seeded corpus, sample questions, interactive loop
//!   lexclaw ask "how do plants eat?"   # One-shot answer
//!   lexclaw search "climate" -l 5      # Ranked hits only
//!   lexclaw export index.json          # Dump the index as JSON

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use lexclaw_core::LexClawConfig;
use lexclaw_knowledge::{RagEngine, SearchResult};

#[derive(Parser)]
#[command(
    name = "lexclaw",
    version,
    about = "📚 LexClaw — lexical retrieval with extractive answers"
)]
struct Cli {
    /// Config file path (defaults to ~/.lexclaw/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed the sample corpus, answer the demo questions, then go interactive
    Demo,
    /// Answer a single question against the sample corpus
    Ask {
        question: String,
    },
    /// Show ranked hits without synthesizing an answer
    Search {
        query: String,
        /// Maximum number of hits
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
    /// Export the sample index plus stats to a JSON file
    Export {
        /// Output path (defaults to the configured export path)
        path: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "lexclaw=debug,lexclaw_knowledge=debug,lexclaw_core=debug"
    } else {
        "lexclaw=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => LexClawConfig::load_from(Path::new(path))?,
        None => LexClawConfig::load()?,
    };

    let mut engine = RagEngine::new(&config);
    seed_sample_corpus(&mut engine);
    tracing::debug!(
        "Seeded {} sample document(s)",
        engine.knowledge_base().len()
    );

    match cli.command {
        Command::Demo => run_demo(&engine)?,
        Command::Ask { question } => {
            let response = engine.ask(&question);
            println!("{}", response.answer);
        }
        Command::Search { query, limit } => {
            let results = engine.search(&query, limit);
            print_results(&results);
        }
        Command::Export { path } => {
            let path = path.unwrap_or_else(|| config.export.path.clone());
            engine.knowledge_base().export_index(Path::new(&path))?;
            println!("💾 Index exported to {path}");
        }
    }

    Ok(())
}

/// Sample documents in the spirit of a student Q&A corpus.
fn seed_sample_corpus(engine: &mut RagEngine) {
    let documents = [
        (
            "What is Python?",
            "Python is a programming language that is easy to learn and powerful to use. \
             It was created by Guido van Rossum in 1991. Python is great for beginners because \
             its syntax is simple and readable. You can use Python for web development, data \
             science, artificial intelligence, and automation.",
            "programming",
        ),
        (
            "How Machine Learning Works",
            "Machine learning is a way to teach computers to learn patterns from data without \
             explicitly programming every rule. Instead of writing specific instructions, we show \
             the computer lots of examples and let it figure out the patterns.",
            "ai",
        ),
        (
            "What are Vector Embeddings?",
            "Vector embeddings are a way to convert words, sentences, or any text into numbers \
             that computers can understand. Similar words get similar numbers. This helps \
             computers understand meaning and relationships between words.",
            "ai",
        ),
        (
            "Climate Change Basics",
            "Climate change refers to long-term changes in Earth's weather patterns and \
             temperatures. The main cause is human activities that release greenhouse gases like \
             carbon dioxide into the atmosphere. These gases trap heat from the sun, making Earth \
             warmer.",
            "science",
        ),
        (
            "How the Internet Works",
            "The internet is a global network of connected computers that can share information. \
             When you visit a website, your computer sends a request through your internet \
             provider to servers around the world.",
            "technology",
        ),
        (
            "Photosynthesis Explained",
            "Photosynthesis is how plants make their own food using sunlight, water, and carbon \
             dioxide from the air. The plant combines the sunlight energy with water from roots \
             and carbon dioxide from air to create glucose for energy and oxygen as a byproduct.",
            "biology",
        ),
        (
            "Study Tips for Students",
            "Effective studying involves several strategies. First, create a quiet study space \
             free from distractions. Take regular breaks using the Pomodoro technique. Practice \
             spaced repetition by reviewing material multiple times over several days.",
            "education",
        ),
    ];

    for (title, content, category) in documents {
        engine.add_document(title, content, category);
    }
}

/// Seeded walkthrough followed by an interactive question loop.
fn run_demo(engine: &RagEngine) -> Result<()> {
    let stats = engine.knowledge_base().stats();
    println!("📚 LexClaw v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "   {} documents, {} words indexed",
        stats.total_documents, stats.total_words
    );
    println!();

    let sample_questions = [
        "What is Python programming?",
        "How does machine learning work?",
        "What causes climate change?",
        "How do plants make food?",
    ];

    for question in sample_questions {
        println!("❓ {question}");
        let response = engine.ask(question);
        println!("{}\n", response.answer);
    }

    run_interactive(engine)
}

/// Line-based question loop. Terminates on quit/exit/q or EOF.
fn run_interactive(engine: &RagEngine) -> Result<()> {
    println!("🎮 Interactive mode — ask your own questions (quit/exit/q to stop)");

    let stdin = std::io::stdin();
    loop {
        print!("\n🤔 Your question: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if matches!(question.to_lowercase().as_str(), "quit" | "exit" | "q") {
            break;
        }

        let response = engine.ask(question);
        println!("\n{}", response.answer);
    }

    println!("\n👋 Bye!");
    Ok(())
}

/// Pretty-print ranked hits: rank, score, title, matched terms, preview.
fn print_results(results: &[SearchResult]) {
    if results.is_empty() {
        println!("❌ No results found");
        return;
    }

    println!("📊 {} result(s):", results.len());
    for (rank, result) in results.iter().enumerate() {
        let doc = &result.document;
        let preview: String = doc.content.chars().take(100).collect();
        println!(
            "  {}. '{}' (score {:.2}, category: {})",
            rank + 1,
            doc.title,
            result.score,
            doc.category
        );
        println!("     Matched: {}", result.matched_terms.join(", "));
        println!("     {preview}...");
    }
}
