mod cli;

use mediascope::{app, browse::Browser, config, display::Display};
use mediascope_core::{navigator, render, Direction, Field, Session};
use mediascope_engine::check_tools;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediascope=debug,mediascope_core=debug,mediascope_engine=debug".to_string()
        } else {
            "mediascope=warn,mediascope_core=warn,mediascope_engine=warn".to_string()
        }
    });

    // stdout carries the views; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings_path = cli.settings.as_deref();
    match cli.command {
        Commands::Show {
            file,
            tab,
            search,
            json,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(show_file(settings_path, &file, tab, search, json))
        }
        Commands::Tabs { file } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(list_tabs(settings_path, &file))
        }
        Commands::Browse { file } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(browse_file(cli.settings.clone(), file))
        }
        Commands::Sibling { file, previous } => {
            let direction = if previous {
                Direction::Previous
            } else {
                Direction::Next
            };
            println!("{}", navigator::step(&file, direction).display());
            Ok(())
        }
        Commands::CheckTools => check_tools_cmd(settings_path),
        Commands::Settings { json, reset } => show_settings(settings_path, json, reset),
    }
}

async fn open_session(settings_path: Option<&Path>, file: &Path) -> Result<(Session, Display)> {
    let (_, settings) = config::load_settings_or_init(settings_path)?;
    let session = app::load_session(&settings, file).await?;
    Ok((session, Display::from_settings(&settings)))
}

async fn show_file(
    settings_path: Option<&Path>,
    file: &Path,
    tab: Option<String>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let (mut session, display) = open_session(settings_path, file).await?;

    if let Some(term) = search {
        session.set_search(term);
    }
    if let Some(tab) = tab {
        let found = match tab.parse::<usize>() {
            Ok(i) => session.select_index(i),
            Err(_) => session.select(&tab),
        };
        if !found {
            let keys: Vec<&str> = session.categories().iter().map(|c| c.key.as_str()).collect();
            anyhow::bail!("Unknown tab {:?}; available: {}", tab, keys.join(", "));
        }
    }

    if json {
        let selected = render::filter(
            render::select(session.fields(), session.active_category()),
            session.search(),
        );
        let fields: Vec<&Field> = selected.iter().map(|f| &**f).collect();
        let out = serde_json::json!({
            "path": file,
            "categories": session.categories(),
            "active": session.active_category(),
            "search": session.search(),
            "fields": fields,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", display.format(&session.render()));
    }

    Ok(())
}

async fn list_tabs(settings_path: Option<&Path>, file: &Path) -> Result<()> {
    let (session, _) = open_session(settings_path, file).await?;
    for (i, category) in session.categories().iter().enumerate() {
        println!("{:>3}  {:<20} {}", i, category.key, category.caption);
    }
    Ok(())
}

async fn browse_file(settings_path: Option<PathBuf>, file: PathBuf) -> Result<()> {
    let mut browser = Browser::new(Box::new(move || app::reload(settings_path.as_deref())))?;
    browser.open(file).await?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    browser.run(stdin, &mut stdout).await
}

fn check_tools_cmd(settings_path: Option<&Path>) -> Result<()> {
    println!("Checking external tools...\n");

    let (_, settings) = config::load_settings_or_init(settings_path)?;
    let tools = check_tools(settings.mediainfo.as_deref());
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("mediainfo is missing. Install it or set `mediainfo = <path>` in the settings.");
    }

    Ok(())
}

fn show_settings(settings_path: Option<&Path>, json: bool, reset: bool) -> Result<()> {
    let (path, settings) = if reset {
        let path = settings_path
            .map(Path::to_path_buf)
            .unwrap_or_else(config::default_settings_path);
        let settings = config::Settings::default();
        config::persist::save_settings(&path, &settings)?;
        println!("Reset {}", path.display());
        (path, settings)
    } else {
        config::load_settings_or_init(settings_path)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        println!("# {}", path.display());
        print!("{}", settings.to_conf());
    }

    Ok(())
}
