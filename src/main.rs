use std::path::PathBuf;
use tracing::{error, info};
use website_dashboard::config::{Config, API_ENDPOINT_ENV};
use website_dashboard::context::AppContext;
use website_dashboard::render::{render, render_modal, render_websites};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// CLI command structure
#[derive(Debug, PartialEq)]
enum Command {
    List,
    Logs { namespace: String, name: String },
    Watch,
    Help,
    Version,
}

#[derive(Debug, PartialEq)]
struct Cli {
    config_path: Option<PathBuf>,
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr, rendered output to stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("website_dashboard=info".parse().expect("valid log directive")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args);

    match cli.command {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Version => {
            println!("{} {}", PKG_NAME, VERSION);
            return Ok(());
        }
        _ => {}
    }

    let config = Config::discover(cli.config_path.as_deref()).map_err(|e| {
        error!(path = ?cli.config_path, error = %e, "Failed to load configuration");
        e
    })?;

    let ctx = AppContext::new(config)?;
    run(&ctx, cli.command).await
}

async fn run(ctx: &AppContext, command: Command) -> anyhow::Result<()> {
    let store = &ctx.store;

    match command {
        Command::List => {
            store.init().await?;
            print!("{}", render_websites(&store.snapshot().websites));
        }
        Command::Logs { namespace, name } => {
            let fetch = store.get_log(&namespace, &name);
            info!(title = %store.snapshot().modal_title, "Log modal opened");
            fetch.await?;
            if let Some(modal) = render_modal(&store.snapshot()) {
                print!("{}", modal);
            }
        }
        Command::Watch => {
            let mut rx = store.subscribe();
            let mut load = store.init();
            print!("{}", render(&rx.borrow_and_update()));

            loop {
                tokio::select! {
                    changed = rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        println!();
                        print!("{}", render(&rx.borrow_and_update()));
                    }
                    _ = &mut load => break,
                }
            }

            if rx.has_changed().unwrap_or(false) {
                println!();
                print!("{}", render(&rx.borrow_and_update()));
            }
        }
        Command::Help | Command::Version => {}
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Cli {
    let mut config_path = None;
    let mut rest = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => match iter.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => {
                    return Cli {
                        config_path: None,
                        command: Command::Help,
                    }
                }
            },
            _ => rest.push(arg.as_str()),
        }
    }

    let command = match rest.as_slice() {
        [] | ["list"] | ["ls"] => Command::List,
        ["logs" | "log", namespace, name] => Command::Logs {
            namespace: namespace.to_string(),
            name: name.to_string(),
        },
        ["watch"] => Command::Watch,
        ["version" | "--version" | "-v"] => Command::Version,
        _ => Command::Help,
    };

    Cli {
        config_path,
        command,
    }
}

fn print_help() {
    println!(
        r#"
{name} - terminal dashboard for WebSite Operator

USAGE:
    {name} [--config <path>] <command>

COMMANDS:
    list                     List websites (default)
    logs <namespace> <name>  Show the build log of a website
    watch                    Re-render the dashboard as data arrives
    version                  Show version
    help                     Show this help

CONFIGURATION:
    --config <path>          TOML config file
                             (default: ~/.config/website-dashboard/config.toml)
    {env}     Override api.base_url (default: /api/v1)
    RUST_LOG                 Log filter for diagnostics on stderr
"#,
        name = PKG_NAME,
        env = API_ENDPOINT_ENV,
    );
}
