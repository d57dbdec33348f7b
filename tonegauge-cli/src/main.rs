mod export;
mod screens;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tokio::io::AsyncBufReadExt;
use tonegauge_appcore::service::AppService;
use tonegauge_core::{AppConfig, ProviderConfig, ProviderKind, Route};
use tonegauge_engine::controller::SubmitOutcome;
use tonegauge_runtime::config_store::{CONFIG_FILE_NAME, ConfigStore};
use tonegauge_runtime::defaults::{default_app_config, demo_provider_config};
use tonegauge_runtime::env::ConfigOverrides;

#[derive(Parser)]
#[command(name = "tonegauge")]
#[command(
    about = "Score text for direct and indirect tone and show the result as two gauges",
    long_about = None
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (defaults to ./tonegauge.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Analysis provider: remote or random
    #[arg(long, global = true, value_parser = parse_provider)]
    provider: Option<ProviderKind>,

    /// Analysis endpoint URL (remote provider only)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Request timeout in seconds (remote provider only)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Login and home screens in the terminal (default)
    Interactive,
    /// Analyze one text and print the home screen
    Analyze {
        text: String,

        /// Open the detail panel in the output
        #[arg(long)]
        detail: bool,

        /// Print the screen as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write direct.svg and indirect.svg into this directory
        #[arg(long)]
        svg_dir: Option<PathBuf>,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Use the offline random provider
        #[arg(long)]
        demo: bool,
    },
    /// Print the effective config (file, environment and flags combined)
    Show,
}

fn parse_provider(s: &str) -> Result<ProviderKind, String> {
    ProviderKind::parse(s)
        .ok_or_else(|| format!("unknown provider: {s} (expected remote or random)"))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let store = ConfigStore::at_path(
        cli.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
    );
    let flags = ConfigOverrides {
        provider: cli.provider,
        endpoint: cli.endpoint.clone(),
        api_key: None,
        timeout_secs: cli.timeout_secs,
    };
    let overrides = ConfigOverrides::from_env()?.merged_with(flags);

    match cli.command {
        None | Some(Command::Interactive) => {
            let svc = AppService::from_store(&store, &overrides)?;
            run_interactive(&svc).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Analyze {
            text,
            detail,
            json,
            svg_dir,
        }) => {
            let svc = AppService::from_store(&store, &overrides)?;
            run_analyze(&svc, &text, detail, json, svg_dir).await
        }
        Some(Command::Config { action }) => {
            match action {
                ConfigAction::Init { force, demo } => config_init(&store, force, demo)?,
                ConfigAction::Show => config_show(&store, &overrides)?,
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_analyze(
    svc: &AppService,
    text: &str,
    detail: bool,
    json: bool,
    svg_dir: Option<PathBuf>,
) -> anyhow::Result<ExitCode> {
    svc.login().await;
    let outcome = svc.analyze_text(text).await?;
    if detail {
        svc.toggle_detail().await?;
    }

    let view = svc.home_view().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", screens::render_home(&view));
    }

    if let (Some(dir), Some(result)) = (svg_dir, &view.result) {
        for path in export::write_gauge_svgs(&dir, result)? {
            eprintln!("wrote {}", path.display());
        }
    }

    Ok(match outcome {
        SubmitOutcome::Completed(snap) if snap.result().is_some() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

/// What the interactive loop does after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineAction {
    Render,
    Skip,
    Quit,
}

async fn run_interactive(svc: &AppService) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("provider: {}  (:help for commands)", svc.provider_name()).dimmed()
    );
    print!("{}", screens::render(&svc.screen().await));

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("read stdin")? {
        match handle_line(svc, &line).await {
            LineAction::Quit => break,
            LineAction::Skip => continue,
            LineAction::Render => {}
        }

        print!("{}", screens::render(&svc.screen().await));
        // Notices are modal; once printed they count as acknowledged.
        if svc.current_route().await == Route::Home {
            if let Err(e) = svc.dismiss_notice().await {
                log::warn!("dismiss notice: {e:#}");
            }
        }
    }
    Ok(())
}

/// Runs one input line. Errors are printed and the session carries on.
async fn handle_line(svc: &AppService, line: &str) -> LineAction {
    match dispatch_line(svc, line).await {
        Ok(action) => action,
        Err(e) => {
            println!("{} {e:#}", "error:".red().bold());
            LineAction::Skip
        }
    }
}

async fn dispatch_line(svc: &AppService, line: &str) -> anyhow::Result<LineAction> {
    let line = line.trim_end_matches(['\r', '\n']);

    match svc.current_route().await {
        Route::Login => match line.trim() {
            "" | ":login" => {
                svc.login().await;
            }
            ":quit" | ":q" => return Ok(LineAction::Quit),
            ":help" => print_help(),
            other => println!("{} {other}", "unknown command on login screen:".red()),
        },
        Route::Home => match line.trim() {
            ":quit" | ":q" => return Ok(LineAction::Quit),
            ":help" => {
                print_help();
                return Ok(LineAction::Skip);
            }
            ":detail" => {
                svc.toggle_detail().await?;
            }
            ":clear" => svc.clear().await?,
            ":logout" => {
                svc.logout().await;
            }
            ":back" => {
                svc.back().await;
            }
            cmd if cmd.starts_with(":svg") => {
                let dir = cmd.trim_start_matches(":svg").trim();
                let dir = if dir.is_empty() { "." } else { dir };
                match svc.home_view().await.result {
                    Some(result) => {
                        for path in export::write_gauge_svgs(Path::new(dir), &result)? {
                            println!("wrote {}", path.display());
                        }
                    }
                    None => println!("{}", "nothing to export yet".yellow()),
                }
                return Ok(LineAction::Skip);
            }
            cmd if cmd.starts_with(':') => {
                println!("{} {cmd}", "unknown command:".red());
                return Ok(LineAction::Skip);
            }
            _ => {
                println!("{}", "Analyzing...".yellow());
                svc.analyze_text(line).await?;
            }
        },
    }
    Ok(LineAction::Render)
}

fn print_help() {
    println!("  <text>        analyze the text");
    println!("  :detail       show or hide the detail text");
    println!("  :clear        clear input and result");
    println!("  :svg [DIR]    write the gauges as SVG files");
    println!("  :logout       back to the login screen");
    println!("  :quit         exit");
}

fn config_init(store: &ConfigStore, force: bool, demo: bool) -> anyhow::Result<()> {
    if store.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            store.path().display()
        );
    }
    let mut cfg = default_app_config();
    if demo {
        cfg.provider = demo_provider_config();
    }
    store.save(&cfg)?;
    println!("wrote {}", store.path().display());
    Ok(())
}

fn config_show(store: &ConfigStore, overrides: &ConfigOverrides) -> anyhow::Result<()> {
    let cfg = redacted(overrides.apply(store.load_or_default()?));
    println!("# {}", store.path().display());
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}

fn redacted(mut cfg: AppConfig) -> AppConfig {
    if let ProviderConfig::Remote(remote) = &mut cfg.provider {
        if remote.api_key.is_some() {
            remote.api_key = Some("[REDACTED]".into());
        }
    }
    cfg
}
