use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use plugkit::application::errors::{CommandError, ConfigError};
use plugkit::application::messaging::MessageRenderer;
use plugkit::application::services::{CommandService, MessageService};
use plugkit::domain::entities::{CommandNode, LocaleCode, NamedColor, Segment, StyledText};
use plugkit::domain::traits::Sender;
use plugkit::infrastructure::adapters::ConsoleSender;
use plugkit::infrastructure::config::Config;
use plugkit::infrastructure::resources;

#[derive(Parser)]
#[command(name = "plugkit")]
#[command(about = "Localized messages and command trees for server plugins", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a message key
    Render {
        key: String,
        args: Vec<String>,
        /// Requested locale (e.g. en_US)
        #[arg(short, long)]
        locale: Option<String>,
        /// Print segments as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load all resources and report missing keys
    Check,
    /// Interactive shell dispatching to the `messages` command
    Console {
        /// Act as a player instead of the server console
        #[arg(long)]
        player: bool,
        /// Permission granted to the player (repeatable)
        #[arg(short, long = "permission")]
        permissions: Vec<String>,
        /// Requested locale of the sender
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Generate default config
    InitConfig,
    /// Show version
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        Config::load_env()
    };

    // Initialize logging
    let directive: tracing_subscriber::filter::Directive = config
        .logging
        .level
        .parse()
        .unwrap_or_else(|_| tracing::Level::INFO.into());
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .init();

    let result = match cli.command {
        Commands::Render { key, args, locale, json } => render(&config, &key, &args, locale.as_deref(), json),
        Commands::Check => check(&config),
        Commands::Console { player, permissions, locale } => console(&config, player, permissions, locale),
        Commands::InitConfig => init_config(),
        Commands::Version => {
            println!("plugkit v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_renderer(config: &Config) -> Result<MessageRenderer, ConfigError> {
    let localization = &config.localization;
    let store = resources::load_directory(&localization.resources, localization.content_type.as_deref())?;
    MessageRenderer::new(store, config.default_locale()?)
}

fn render(config: &Config, key: &str, args: &[String], locale: Option<&str>, json: bool) -> Result<(), ConfigError> {
    let renderer = load_renderer(config)?;
    let text = renderer.render(key, locale, args);
    if json {
        let out = serde_json::to_string_pretty(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        println!("{}", out);
    } else if config.console.color {
        println!("{}", text.to_ansi());
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn check(config: &Config) -> Result<(), ConfigError> {
    let renderer = load_renderer(config)?;
    let store = renderer.store();
    let default = renderer.default_locale();

    for locale in store.locales() {
        let count = store.bundle(locale).map_or(0, |b| b.len());
        let missing = store.missing_keys(locale, default);
        println!("{}: {} keys", locale, count);
        for key in &missing {
            tracing::warn!("Locale '{}' is missing '{}'", locale, key);
        }
    }
    println!("Default locale: {}", default);
    Ok(())
}

fn console(config: &Config, player: bool, permissions: Vec<String>, locale: Option<String>) -> Result<(), ConfigError> {
    let renderer = Arc::new(load_renderer(config)?);

    let mut commands = CommandService::new(MessageService::new(Arc::clone(&renderer)));
    register_messages_command(&mut commands, &renderer)?;

    let mut sender = ConsoleSender::new()
        .with_locale(locale.or_else(|| config.console.locale.clone()))
        .with_color(config.console.color);
    if player {
        sender = sender.as_player("player", permissions);
    }

    let names: Vec<&str> = commands.commands().map(|c| c.name.as_str()).collect();
    tracing::info!("Commands: {}", names.join(", "));
    tracing::info!("Console started as {} (type 'exit' to quit, '?<line>' for completions)", sender.name());
    run_console(&commands, &sender);
    Ok(())
}

fn run_console(commands: &CommandService, sender: &ConsoleSender) {
    while let Some(input) = sender.read_line("> ") {
        let input = input.trim_start().trim_start_matches('/');
        if input.trim().is_empty() {
            continue;
        }
        if input.trim() == "exit" || input.trim() == "quit" {
            break;
        }

        let (complete, line) = match input.strip_prefix('?') {
            Some(line) => (true, line),
            None => (false, input),
        };
        let mut parts: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if line.ends_with(' ') {
            parts.push(String::new());
        }
        if parts.is_empty() {
            continue;
        }
        let name = parts.remove(0);

        if complete {
            let suggestions = commands.complete(&name, sender, &parts);
            println!("{}", suggestions.join("  "));
        } else {
            commands.dispatch(&name, sender, &parts);
        }
    }
}

fn register_messages_command(commands: &mut CommandService, renderer: &Arc<MessageRenderer>) -> Result<(), ConfigError> {
    let r = Arc::clone(renderer);
    let locales = CommandNode::new("locales", move |sender, _| {
        let loaded: Vec<&str> = r.store().locales().iter().map(|l| l.as_str()).collect();
        let joined = loaded.join(", ");
        let default = r.default_locale().to_string();
        sender.deliver(r.render("messages.locales", sender.locale(), &[joined, default]));
        Ok(())
    })
    .with_description("List loaded locales")
    .allow_console();

    let r = Arc::clone(renderer);
    let keys = CommandNode::new("keys", move |sender, args| {
        let requested = args.first().map(String::as_str).or(sender.locale());
        let locale = r.resolve(requested);
        let Some(bundle) = r.store().bundle(locale) else {
            return Err(CommandError::failed("messages.unknown_locale", vec![locale.to_string()]));
        };
        for (key, template) in bundle {
            sender.deliver(
                StyledText::empty()
                    .with_segment(Segment::colored(NamedColor::Aqua, key.as_str()))
                    .with_segment(Segment::plain(format!(" = {}", template))),
            );
        }
        sender.deliver(r.render("messages.keys", sender.locale(), &[bundle.len().to_string(), locale.to_string()]));
        Ok(())
    })
    .with_description("List message keys of a locale")
    .with_usage("/messages keys [locale]")
    .allow_console();

    let r = Arc::clone(renderer);
    let show = CommandNode::new("show", move |sender, args| {
        let Some((key, rest)) = args.split_first() else {
            return Err(CommandError::Usage);
        };
        let text = r.render(key, sender.locale(), rest);
        if text.is_empty() {
            let locale = r.resolve(sender.locale()).to_string();
            return Err(CommandError::failed("messages.unknown_key", vec![key.clone(), locale]));
        }
        sender.deliver(text);
        Ok(())
    })
    .with_description("Render a message in your locale")
    .with_usage("/messages show <key> [args...]")
    .allow_console();

    let r = Arc::clone(renderer);
    let missing = CommandNode::new("missing", move |sender, args| {
        let Some(tag) = args.first() else {
            return Err(CommandError::Usage);
        };
        let locale = r.resolve(Some(tag.as_str()));
        if LocaleCode::parse(tag).as_ref() != Some(locale) {
            return Err(CommandError::failed("messages.unknown_locale", vec![tag.clone()]));
        }
        let missing = r.store().missing_keys(locale, r.default_locale());
        if missing.is_empty() {
            sender.deliver(r.render("messages.complete", sender.locale(), &[locale.as_str()]));
            return Ok(());
        }
        for key in &missing {
            sender.deliver(StyledText::colored(NamedColor::Yellow, *key));
        }
        sender.deliver(r.render(
            "messages.missing",
            sender.locale(),
            &[locale.to_string(), missing.len().to_string()],
        ));
        Ok(())
    })
    .with_description("List keys a locale lacks compared to the default")
    .with_usage("/messages missing <locale>")
    .allow_console();

    let root = CommandNode::new("messages", |_, _| Err(CommandError::Usage))
        .with_description("Inspect loaded message templates")
        .with_usage("/messages <locales|keys|show|missing>")
        .with_permission("plugkit.messages")
        .allow_console()
        .with_child(locales)
        .with_child(keys)
        .with_child(show)
        .with_child(missing);

    commands.register_root(root)
}

fn init_config() -> Result<(), ConfigError> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).map_err(|e| ConfigError::Parse(e.to_string()))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
