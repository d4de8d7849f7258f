use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use gullhacks_helper::application::errors::ConfigError;
use gullhacks_helper::application::messaging::{CommandDispatcher, DispatchOutcome};
use gullhacks_helper::application::services::{find_answer, WelcomeService};
use gullhacks_helper::domain::entities::{ResponseTable, User};
use gullhacks_helper::domain::traits::{Platform, ResponseSource};
use gullhacks_helper::infrastructure::adapters::console::ConsoleAdapter;
use gullhacks_helper::infrastructure::adapters::discord::{self, Handler};
use gullhacks_helper::infrastructure::config::Config;
use gullhacks_helper::infrastructure::storage::JsonResponseStore;

#[derive(Parser)]
#[command(name = "gullhacks-helper")]
#[command(about = "Discord helper bot for the Gullhacks hackathon", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config and DISCORD_TOKEN)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to Discord and start the bot
    Run,
    /// Run the command dispatcher against the terminal
    Console {
        /// Display name of the simulated user
        #[arg(long, default_value = "console")]
        user: String,

        /// Channel the simulated user types in (defaults to the help channel)
        #[arg(long)]
        channel: Option<String>,

        /// Treat the simulated user as an administrator
        #[arg(long)]
        admin: bool,
    },
    /// Validate the responses file
    CheckResponses {
        /// Also show which answer this question gets
        #[arg(short, long)]
        question: Option<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => match load_config(&cli.config, cli.token) {
            Some(config) => run_bot(config),
            None => ExitCode::FAILURE,
        },
        Commands::Console { user, channel, admin } => match load_config(&cli.config, cli.token) {
            Some(config) => run_console(config, user, channel, admin),
            None => ExitCode::FAILURE,
        },
        Commands::CheckResponses { question } => match load_config(&cli.config, cli.token) {
            Some(config) => check_responses(config, question),
            None => ExitCode::FAILURE,
        },
        Commands::Version => {
            println!("gullhacks-helper v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::InitConfig => init_config(),
    }
}

fn load_config(config_path: &str, token_override: Option<String>) -> Option<Config> {
    match Config::resolve(config_path, token_override) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::error!("{}", e);
            None
        }
    }
}

fn load_responses(config: &Config) -> Result<Arc<ResponseTable>, ConfigError> {
    let store = JsonResponseStore::new(&config.responses.path);
    let table = store.load()?;
    tracing::info!("Loaded {} responses from {}", table.len(), store.path().display());
    Ok(Arc::new(table))
}

fn run_bot(config: Config) -> ExitCode {
    let token = match config.token() {
        Ok(token) => token.to_string(),
        Err(e) => {
            tracing::error!("{}", e);
            tracing::error!("Create a .env file with DISCORD_TOKEN=<your bot token>, or pass --token.");
            return ExitCode::FAILURE;
        }
    };

    let responses = match load_responses(&config) {
        Ok(responses) => responses,
        Err(e) => {
            tracing::error!("Failed to load responses: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting {}", config.bot.name);

    let dispatcher = Arc::new(CommandDispatcher::new(config.dispatcher(), Arc::clone(&responses)));
    let welcome = WelcomeService::new(&config.channels.welcome, responses);
    let handler = Handler::new(dispatcher, welcome, &config.bot.presence, config.discord.admin_role.clone());

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(discord::start_bot(&token, handler)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Bot stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_console(config: Config, user: String, channel: Option<String>, admin: bool) -> ExitCode {
    let responses = match load_responses(&config) {
        Ok(responses) => responses,
        Err(e) => {
            tracing::error!("Failed to load responses: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let channel = channel.unwrap_or_else(|| config.channels.help.clone());
    let dispatcher = CommandDispatcher::new(config.dispatcher(), Arc::clone(&responses));
    let welcome = WelcomeService::new(&config.channels.welcome, responses);
    let author = User::new(user.clone()).with_username(user).with_admin(admin);

    let mut channels = vec![config.channels.help.clone(), config.channels.welcome.clone()];
    if !channels.contains(&channel) {
        channels.push(channel.clone());
    }
    let adapter = ConsoleAdapter::new(channels);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    rt.block_on(async {
        adapter.set_presence(&config.bot.presence).await;
        println!(
            "Typing as {} in #{}. Try {}help; /join <name> simulates a member join; Ctrl-D exits.",
            author.display_name(),
            channel,
            dispatcher.prefix()
        );

        while let Some(input) = adapter.read_line("> ").await {
            if input.is_empty() {
                continue;
            }

            if let Some(name) = input.strip_prefix("/join ") {
                let member = User::new(name.trim()).with_username(name.trim());
                if let Err(e) = welcome.greet(&adapter, Some("console"), &member).await {
                    tracing::error!("Failed to welcome {}: {}", member.id, e);
                }
                continue;
            }

            let outcome = dispatcher
                .dispatch_text(&adapter, &input, author.clone(), Some("console".to_string()), adapter.channel(&channel))
                .await;
            match outcome {
                Ok(DispatchOutcome::Ignored) => println!("(not a command)"),
                Ok(_) => {}
                Err(e) => tracing::error!("Command failed: {}", e),
            }
        }
    });

    ExitCode::SUCCESS
}

fn check_responses(config: Config, question: Option<String>) -> ExitCode {
    let responses = match load_responses(&config) {
        Ok(responses) => responses,
        Err(e) => {
            eprintln!("{}: {}", config.responses.path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}: OK", config.responses.path.display());
    println!("  entries:  {}", responses.len());
    println!("  keywords: {}", responses.entries.iter().map(|e| e.keywords.len()).sum::<usize>());
    println!("  default:  {}", responses.default_answer);
    println!("  welcome:  {}", responses.welcome_message);

    if let Some(question) = question.filter(|q| !q.trim().is_empty()) {
        println!("\nQ: {}\nA: {}", question, find_answer(&question, &responses));
    }

    ExitCode::SUCCESS
}

fn init_config() -> ExitCode {
    match serde_yaml::to_string(&Config::default()) {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("# Save this to config.yaml and adjust as needed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to render config: {}", e);
            ExitCode::FAILURE
        }
    }
}
