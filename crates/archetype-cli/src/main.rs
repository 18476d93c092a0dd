use anyhow::Result;
use archetype_core::{
    assess_with, catalog, is_valid_option, question_bank, AnswerSet, AssessmentOptions,
    QuestionId,
};
use atty::Stream;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use tracing::warn;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(
    name = "archetype",
    version,
    author,
    about = "Archetype CLI - healthcare archetype classification and catalog",
    long_about = "Classify an organization into one of nine healthcare archetypes from its \
                  survey answers, and inspect the archetype catalog and question bank."
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Classify an organization from its survey answers")]
    Classify {
        #[arg(long, help = "Industry option id (see 'archetype questions')")]
        industry: Option<String>,

        #[arg(long, help = "Geography option id")]
        geography: Option<String>,

        #[arg(long, help = "Size option id")]
        size: Option<String>,

        #[arg(long, help = "Workforce gender mix option id")]
        gender: Option<String>,

        #[arg(
            long,
            help = "Priority option ids (comma-separated)",
            value_delimiter = ','
        )]
        priorities: Option<Vec<String>>,

        #[arg(long, help = "Pin the percentage match (clamped to 75-85)")]
        pin_match: Option<u8>,

        #[arg(short, long, help = "Output format", default_value = "human")]
        format: OutputFormat,
    },

    #[command(about = "List the nine archetypes")]
    Archetypes {
        #[arg(short, long, help = "Output format", default_value = "human")]
        format: OutputFormat,
    },

    #[command(about = "List the three archetype families")]
    Families {
        #[arg(short, long, help = "Output format", default_value = "human")]
        format: OutputFormat,
    },

    #[command(about = "Show the survey question bank")]
    Questions {
        #[arg(short, long, help = "Output format", default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if !atty::is(Stream::Stdout) {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Classify {
            industry,
            geography,
            size,
            gender,
            priorities,
            pin_match,
            format,
        } => {
            let mut answers = AnswerSet::new();
            set_answer(&mut answers, QuestionId::Industry, industry);
            set_answer(&mut answers, QuestionId::Geography, geography);
            set_answer(&mut answers, QuestionId::Size, size);
            set_answer(&mut answers, QuestionId::Gender, gender);
            set_answer(
                &mut answers,
                QuestionId::Priorities,
                priorities.map(|p| p.join(",")),
            );

            let options = AssessmentOptions {
                pinned_match: pin_match,
            };
            let outcome = assess_with(&answers, &options);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
                OutputFormat::Human => print_assessment(&outcome),
            }
        }

        Commands::Archetypes { format } => match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(catalog::all_archetypes())?)
            }
            OutputFormat::Human => {
                for profile in catalog::all_archetypes() {
                    let tag = color_code(profile.color, &profile.id.code().to_uppercase());
                    println!("{}  {}", tag, profile.name.bold());
                    println!("    {}", profile.summary);
                    for line in profile.characteristics {
                        println!("      - {}", line.dimmed());
                    }
                }
            }
        },

        Commands::Families { format } => match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(catalog::all_families())?)
            }
            OutputFormat::Human => {
                for profile in catalog::all_families() {
                    let tag = color_code(profile.color, &profile.id.code().to_uppercase());
                    println!("{}  {}", tag, profile.name.bold());
                    println!("    {}", profile.summary);
                    let codes: Vec<&str> =
                        profile.id.members().iter().map(|m| m.code()).collect();
                    println!("    members: {}", codes.join(", ").dimmed());
                }
            }
        },

        Commands::Questions { format } => match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(question_bank())?)
            }
            OutputFormat::Human => {
                for q in question_bank() {
                    let kind = if q.multi_select {
                        "multi-select"
                    } else {
                        "single-select"
                    };
                    println!("{} ({})", q.prompt.bold(), kind.dimmed());
                    for opt in q.options {
                        println!("    {:<24} {}", opt.id.cyan(), opt.label);
                    }
                }
            }
        },
    }

    Ok(())
}

fn set_answer(answers: &mut AnswerSet, question: QuestionId, value: Option<String>) {
    if let Some(value) = value {
        // Unknown option ids are kept: classification handles them by
        // defaulting, the warning is just operator feedback.
        if !is_valid_option(question, &value) {
            warn!(%question, value = %value, "unrecognized option id");
        }
        answers.set(question, value);
    }
}

fn print_assessment(outcome: &archetype_core::Assessment) {
    let primary = catalog::archetype(outcome.primary);
    let family = catalog::family(outcome.primary.family());

    println!(
        "{}  {} ({})",
        color_code(primary.color, &outcome.primary.code().to_uppercase()),
        primary.name.bold(),
        family.name
    );
    println!("    {}", primary.summary);
    println!(
        "    match: {}%   tier: {}",
        outcome.percentage_match, outcome.tier
    );
    if outcome.fallback {
        println!("    {}", "no rule matched; default archetype applied".yellow());
    }

    for (label, id) in [
        ("secondary", outcome.secondary),
        ("tertiary", outcome.tertiary),
    ] {
        let profile = catalog::archetype(id);
        println!(
            "    {}: {} {}",
            label,
            color_code(profile.color, &id.code().to_uppercase()),
            profile.name
        );
    }
}

/// Render a short code tag in the catalog's display color when possible.
fn color_code(hex: &str, text: &str) -> ColoredString {
    match parse_hex(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b).bold(),
        None => text.bold(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
