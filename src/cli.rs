//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use conjuga::core::models::{ConjugationClass, Person, Tense};
use conjuga::output::OutputMode;

use crate::commands::{self, Context};

/// conjuga - Spanish verb conjugation practice
#[derive(Parser, Debug)]
#[command(
    name = "conjuga",
    version,
    about = "Spanish verb conjugation practice",
    long_about = "Drill Spanish verb conjugations and track progress.\n\n\
                  Teachers keep a verb bank with custom forms for irregular verbs.\n\
                  Students log in, practice, and export their results."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the verb bank, roster and attempt log
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is saved
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Practice conjugations interactively (type :q to stop)
    Practice {
        /// Tense to practice (repeatable)
        #[arg(short, long = "tense")]
        tenses: Vec<Tense>,

        /// Only draw verbs carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Stop after this many questions
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Log in as this student first
        #[arg(short, long)]
        student: Option<String>,
    },

    /// Check one answer (recorded when a student is logged in)
    Check {
        /// Infinitive
        verb: String,

        /// Tense (present, preterite, imperfect, future, conditional)
        tense: Tense,

        /// Person (0-5 or a pronoun: yo, tu, el, nosotros, vosotros, ellos)
        person: Person,

        /// The answer to check
        answer: String,
    },

    /// Print the resolved forms of a verb
    Conjugate {
        /// Infinitive
        verb: String,

        /// Only these tenses (repeatable)
        #[arg(short, long = "tense")]
        tenses: Vec<Tense>,
    },

    /// Manage the verb bank
    Verbs {
        #[command(subcommand)]
        action: VerbsAction,
    },

    /// Log in, log out, list students
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Show a student's progress (or the whole class with --class)
    Progress {
        /// Student name (defaults to the logged-in student)
        #[arg(short, long)]
        student: Option<String>,

        /// Number of recent attempts in the per-tense breakdown
        #[arg(short, long)]
        window: Option<usize>,

        /// Summarize every student instead
        #[arg(long, conflicts_with = "student")]
        class: bool,
    },

    /// Delete a student's practice history
    ResetProgress {
        /// Student name (defaults to the logged-in student)
        #[arg(short, long)]
        student: Option<String>,
    },

    /// Export results, class summary or the verb bank
    Export {
        #[command(subcommand)]
        what: ExportTarget,
    },

    /// Merge verbs from a JSON or CSV file into the bank
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Show or edit configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum VerbsAction {
    /// List verbs
    List {
        /// Filter by tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show one verb with its conjugation table
    Show {
        /// Infinitive
        verb: String,
    },

    /// Add a verb
    Add {
        /// Infinitive
        infinitive: String,

        /// Conjugation class: ar, er, ir, irregular (inferred when omitted)
        #[arg(long = "type", allow_hyphen_values = true)]
        class: Option<ConjugationClass>,

        /// English gloss
        #[arg(short, long, default_value = "")]
        meaning: String,

        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Change a verb's meaning, class or tags
    Edit {
        /// Infinitive
        infinitive: String,

        /// New conjugation class
        #[arg(long = "type", allow_hyphen_values = true)]
        class: Option<ConjugationClass>,

        /// New English gloss
        #[arg(short, long)]
        meaning: Option<String>,

        /// Replace the tags (repeatable)
        #[arg(long = "tag")]
        tags: Option<Vec<String>>,
    },

    /// Remove a verb
    Remove {
        /// Infinitive
        infinitive: String,
    },

    /// Set a custom form for one tense/person
    Override {
        /// Infinitive
        infinitive: String,

        /// Tense
        tense: Tense,

        /// Person
        person: Person,

        /// The form to use
        form: String,
    },

    /// Remove a custom form
    ClearOverride {
        /// Infinitive
        infinitive: String,

        /// Tense
        tense: Tense,

        /// Person
        person: Person,
    },
}

#[derive(Subcommand, Debug)]
pub enum StudentAction {
    /// Log in (creates the student on first use)
    Login {
        /// Display name
        name: String,
    },

    /// Log out
    Logout,

    /// List students with their totals
    List,

    /// Show the logged-in student
    Whoami,
}

#[derive(Subcommand, Debug)]
pub enum ExportTarget {
    /// A student's attempts as CSV
    Results {
        /// Student name (defaults to the logged-in student)
        #[arg(short, long)]
        student: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Per-student totals as CSV
    Class {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// The verb bank as JSON
    Verbs {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let result = dispatch(cli, output_mode);
    if let Err(e) = &result
        && output_mode == OutputMode::Json
    {
        println!(
            "{}",
            serde_json::json!({
                "success": false,
                "error": format!("{e:#}")
            })
        );
    }
    result
}

fn dispatch(cli: Cli, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = Context::new(cli.data_dir, cli.ephemeral, mode);

    match cli.command {
        Some(Command::Practice {
            tenses,
            tag,
            count,
            student,
        }) => commands::practice(&ctx, tenses, tag.as_deref(), count, student.as_deref()),
        Some(Command::Check {
            verb,
            tense,
            person,
            answer,
        }) => commands::check(&ctx, &verb, tense, person, &answer),
        Some(Command::Conjugate { verb, tenses }) => commands::conjugate(&ctx, &verb, &tenses),
        Some(Command::Verbs { action }) => commands::verbs(&ctx, action),
        Some(Command::Student { action }) => commands::student(&ctx, action),
        Some(Command::Progress {
            student,
            window,
            class,
        }) => commands::progress(&ctx, student.as_deref(), window, class),
        Some(Command::ResetProgress { student }) => commands::reset_progress(&ctx, student),
        Some(Command::Export { what }) => commands::export(&ctx, what),
        Some(Command::Import { file }) => commands::import(&ctx, &file),
        Some(Command::Config { action }) => commands::config(&ctx, action),
        Some(Command::Version) => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("conjuga v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("conjuga v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'conjuga --help' for usage");
                println!("Run 'conjuga student login <name>' to get started");
            }
            Ok(())
        },
    }
}
