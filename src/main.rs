use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maxcomplete::watcher::{DirEvent, DirWatcher};
use maxcomplete::{AutoComplete, CompletionKind, Config};
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "maxcomplete", about = "Print completions for a partial symbol or file name")]
struct Cli {
    /// What the user has typed so far
    partial: String,

    /// command, template, loadfile, demofile, generalfile, esccommand or unit
    #[arg(long, default_value = "command")]
    kind: CompletionKind,

    /// Directory of the worksheet; relative file names are resolved here
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    #[arg(long)]
    share_dir: Option<PathBuf>,

    #[arg(long)]
    demo_dir: Option<PathBuf>,

    /// XML symbol list as sent by the engine
    #[arg(long)]
    symbols: Option<PathBuf>,

    /// Keep running and print fresh completions whenever the directory changes
    #[arg(long)]
    watch: bool,
}

fn request_files(ac: &AutoComplete, cli: &Cli) {
    match cli.kind {
        CompletionKind::LoadFile => ac.update_load_files(&cli.partial, &cli.dir),
        CompletionKind::DemoFile => ac.update_demo_files(&cli.partial, &cli.dir),
        CompletionKind::GeneralFile => ac.update_general_files(&cli.partial, &cli.dir),
        _ => {}
    }
}

fn print_completions(ac: &AutoComplete, cli: &Cli) {
    let completions = if cli.kind == CompletionKind::Command {
        ac.complete_with_worksheet_words(&cli.partial)
    } else {
        ac.complete_symbol(&cli.partial, cli.kind)
    };
    for completion in completions {
        println!("{}", completion);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if cli.share_dir.is_some() {
        config.share_dir = cli.share_dir.clone();
    }
    if cli.demo_dir.is_some() {
        config.demo_dir = cli.demo_dir.clone();
    }

    let ac = AutoComplete::new(config);
    ac.load_symbols();

    if let Some(path) = &cli.symbols {
        let xml = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading symbol list {}", path.display()))?;
        ac.add_symbols(xml);
    }

    request_files(&ac, &cli);
    ac.wait_idle().await;
    print_completions(&ac, &cli);

    if !cli.watch {
        return Ok(());
    }

    let (tx, mut rx) = mpsc::channel(64);
    let mut watcher = DirWatcher::new(tx).context("starting directory watcher")?;
    watcher
        .watch(&cli.dir)
        .with_context(|| format!("watching {}", cli.dir.display()))?;
    info!("watching {}", cli.dir.display());

    while let Some(DirEvent::Changed(path)) = rx.recv().await {
        info!("{} changed, rescanning", path.display());
        request_files(&ac, &cli);
        ac.wait_idle().await;
        println!("--");
        print_completions(&ac, &cli);
    }
    Ok(())
}
