//! termfolio CLI: drive the palette, focus navigation and spam filter from a shell.

use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use termfolio::config::{self, Config};
use termfolio::focus::{FocusContext, FocusTarget};
use termfolio::keymap::{KeyDispatcher, KeyEvent};
use termfolio::logging;
use termfolio::palette::{
    default_commands, CommandAction, CommandPalette, QueryStore, HELP_TEXT,
};
use termfolio::spam::{form_started_at, ContactForm, SpamFilter};
use termfolio::theme::ThemeState;

#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(version)]
#[command(
    about = "Keyboard interaction core of a terminal-styled portfolio site",
    long_about = None
)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file (default: ~/.termfolio/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank palette commands against a query
    Palette {
        /// Query text; omitted means the remembered query
        query: Option<String>,

        /// Execute the top result
        #[arg(long)]
        run: bool,
    },

    /// Replay keys over one focus group, e.g. `jj<Enter>`
    Keys {
        /// Comma-separated item ids of the group
        #[arg(long, value_delimiter = ',', required = true)]
        items: Vec<String>,

        /// Item focused before the first key
        #[arg(long)]
        focus: Option<String>,

        /// Key script: characters plus <Left>, <Enter>, <Esc>, ...
        keys: String,
    },

    /// Run the contact form spam checks
    SpamCheck {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        /// Honeypot field
        #[arg(long, default_value = "")]
        website: String,
        /// Seconds spent filling in the form
        #[arg(long, default_value_t = 30)]
        elapsed_secs: i64,
        /// Count a clean submission against the rate limit
        #[arg(long)]
        record: bool,
    },
}

/// Stand-in for an on-screen control: reports focus and clicks.
struct PrintedControl {
    id: String,
}

impl FocusTarget for PrintedControl {
    fn focus(&self) {
        println!("  focus    {}", self.id);
    }

    fn activate(&self) {
        println!("  activate {}", self.id);
    }
}

fn run_palette(config: &Config, query: Option<String>, run: bool) -> Result<()> {
    let mut theme = ThemeState::default();
    let commands = default_commands(&theme);
    let mut palette = if config.palette.remember_query {
        CommandPalette::with_store(commands, QueryStore::with_path(config.query_path()))
    } else {
        CommandPalette::new(commands)
    };
    palette.open();
    if let Some(query) = query {
        palette.set_query(query);
    }

    println!("query: {:?}", palette.query());
    let matches = palette.matches();
    if matches.is_empty() {
        println!("No commands found");
    }
    for (index, m) in matches.iter().enumerate() {
        let marker = if index == palette.selected_index() { '▸' } else { ' ' };
        println!(
            "{} {:<20} {:>3}  {}",
            marker, m.command.title, m.score, m.command.description
        );
    }

    if run {
        let mut handler = |action: CommandAction| match action {
            CommandAction::Navigate(route) => println!("navigate {}", route.path()),
            CommandAction::ToggleThemeMode => {
                theme.toggle_mode();
                println!("theme {}", theme.name());
            }
            CommandAction::CycleThemeVariant => {
                theme.cycle_variant();
                println!("theme {}", theme.name());
            }
            CommandAction::SearchProjects => println!("navigate /projects, focus search"),
            CommandAction::ShowHelp => println!("{}", HELP_TEXT),
        };
        if palette.execute_selected(&mut handler).is_none() {
            println!("nothing to run");
        }
    }
    Ok(())
}

fn run_keys(config: &Config, items: Vec<String>, focus: Option<String>, keys: &str) -> Result<()> {
    const GROUP: &str = "cli";

    let ctx = FocusContext::new();
    ctx.register_group(GROUP, items.iter().cloned());
    let _guards: Vec<_> = items
        .iter()
        .map(|id| ctx.bind(id.clone(), Rc::new(PrintedControl { id: id.clone() })))
        .collect();
    ctx.set_focus(GROUP, focus.as_deref());

    let mut dispatcher = KeyDispatcher::with_config(&config.keymap);
    for event in KeyEvent::parse_sequence(keys) {
        let intent = dispatcher.dispatch(&event, Instant::now());
        let unhandled = KeyDispatcher::apply(intent, &ctx);
        match unhandled {
            Some(intent) => println!("{:?} -> {:?} (for the page)", event.key, intent),
            None => println!("{:?} -> {}", event.key, ctx.cursor()),
        }
    }
    Ok(())
}

fn run_spam_check(
    config: &Config,
    form: ContactForm,
    elapsed_secs: i64,
    record: bool,
) -> Result<()> {
    let filter = SpamFilter::from_config(&config.spam, config.submissions_path());
    let now = chrono::Utc::now();
    let started_at = form_started_at(now, elapsed_secs)
        .with_context(|| format!("--elapsed-secs {} is out of range", elapsed_secs))?;

    let verdict = filter.check(&form, started_at, now);
    if verdict.is_spam() {
        for error in verdict.errors() {
            println!("rejected: {}", error);
        }
    } else {
        println!("ok");
        if record {
            filter.record_submission(now);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // An explicitly named config must load; the default one may be absent.
    // Load failures are reported once logging is running.
    let (config, load_error) = match &args.config {
        Some(path) => (
            config::read_config(path).map_err(|e| {
                let message = e.user_message();
                anyhow::Error::new(e).context(message)
            })?,
            None,
        ),
        None => config::load_config_deferred(&config::default_config_path()),
    };

    let _guard = logging::init(&config.data_dir());
    if let Some(e) = &load_error {
        config::warn_load_failed(e);
    }
    info!(command = ?args.command, "termfolio starting");

    match args.command {
        Commands::Palette { query, run } => run_palette(&config, query, run),
        Commands::Keys { items, focus, keys } => run_keys(&config, items, focus, &keys),
        Commands::SpamCheck {
            name,
            email,
            message,
            website,
            elapsed_secs,
            record,
        } => run_spam_check(
            &config,
            ContactForm {
                name,
                email,
                message,
                website,
            },
            elapsed_secs,
            record,
        ),
    }
}
