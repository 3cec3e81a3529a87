use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use fs_err as fs;
use luach_engine::{EngineError, FixedDay, OverrideDraft, Rotation};
use luach_store::JsonStateStore;
use luach_types::content::ContentTable;
use luach_types::keys;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "luach",
    version,
    about = "Admin tool for Hebrew-calendar daily rotation state."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve and print today's content for a cycle.
    Today(TodayArgs),
    /// Reset the cycle so day-of-month N shows content unit N.
    Resync(CycleArgs),
    /// Restart the cycle so today becomes position 1.
    Restart(RestartArgs),
    /// Pin hand-entered content in place of today's computed entry.
    SetOverride(SetOverrideArgs),
    /// Drop the active override; the cycle offset is untouched.
    ClearOverride(CycleArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CycleKind {
    /// The thirty-gate moral-text cycle (authored table, see --table).
    Gates,
    /// The monthly Psalms reading plan (built-in table).
    Psalms,
}

impl CycleKind {
    fn key(self) -> &'static str {
        match self {
            CycleKind::Gates => keys::GATES_CYCLE,
            CycleKind::Psalms => keys::PSALMS_CYCLE,
        }
    }
}

#[derive(Debug, Parser)]
struct CycleArgs {
    /// Directory holding one JSON state document per cycle.
    #[arg(long, default_value = "state", env = "LUACH_STATE_DIR")]
    state_dir: Utf8PathBuf,

    /// Which rotation instance to operate on.
    #[arg(long, value_enum, default_value = "gates")]
    cycle: CycleKind,

    /// Authored content table JSON (required for the gates cycle).
    #[arg(long)]
    table: Option<Utf8PathBuf>,
}

impl CycleArgs {
    fn key(&self) -> &'static str {
        self.cycle.key()
    }

    fn store(&self) -> JsonStateStore {
        JsonStateStore::new(self.state_dir.clone())
    }
}

#[derive(Debug, Parser)]
struct TodayArgs {
    #[command(flatten)]
    cycle: CycleArgs,

    /// Hebrew day-of-month (1..=30), from your calendar tool.
    #[arg(long)]
    day: u8,

    /// Rendered Hebrew date label for today, e.g. "15 Av 5786".
    #[arg(long)]
    label: String,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct RestartArgs {
    #[command(flatten)]
    cycle: CycleArgs,

    /// Hebrew day-of-month (1..=30) for "today".
    #[arg(long)]
    day: u8,
}

#[derive(Debug, Parser)]
struct SetOverrideArgs {
    #[command(flatten)]
    cycle: CycleArgs,

    /// Override title. Embed today's date label so the override expires when
    /// the date changes.
    #[arg(long)]
    title: String,

    /// Override body, accepted as-is.
    #[arg(long, default_value = "")]
    body: String,

    /// Optional image URL.
    #[arg(long)]
    image: Option<String>,

    /// Identifier recorded as the author of this override.
    #[arg(long)]
    by: Option<String>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        if let Some(engine_err) = e.downcast_ref::<EngineError>()
            && engine_err.is_validation()
        {
            return ExitCode::from(2);
        }
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Today(args) => cmd_today(args),
        Command::Resync(args) => cmd_resync(args),
        Command::Restart(args) => cmd_restart(args),
        Command::SetOverride(args) => cmd_set_override(args),
        Command::ClearOverride(args) => cmd_clear_override(args),
    }
}

/// Load the cycle's content table up front, so a broken table configuration
/// fails before any state is touched.
fn load_table(args: &CycleArgs) -> anyhow::Result<ContentTable> {
    if let Some(path) = &args.table {
        let raw = fs::read_to_string(path).with_context(|| format!("read {path}"))?;
        return ContentTable::from_json_str(&raw)
            .with_context(|| format!("parse content table {path}"));
    }
    match args.cycle {
        CycleKind::Psalms => Ok(ContentTable::psalms_month()),
        CycleKind::Gates => anyhow::bail!("--table is required for the gates cycle"),
    }
}

fn cmd_today(args: TodayArgs) -> anyhow::Result<()> {
    let table = load_table(&args.cycle)?;
    let store = args.cycle.store();
    let rotation = Rotation::new(&store, args.cycle.key(), &table);

    let content = rotation.resolve_today(&FixedDay::new(args.day, args.label));

    match args.format {
        OutputFormat::Text => {
            println!("{}", content.title);
            if !content.body.is_empty() {
                println!();
                println!("{}", content.body);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&content).context("serialize content")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn cmd_resync(args: CycleArgs) -> anyhow::Result<()> {
    let table = load_table(&args)?;
    let store = args.store();
    let rotation = Rotation::new(&store, args.key(), &table);

    rotation.resync_to_natural_cycle()?;
    info!(cycle = ?args.cycle, "cycle resynchronized to the natural calendar");
    println!("cycle resynchronized; any override was cleared");
    Ok(())
}

fn cmd_restart(args: RestartArgs) -> anyhow::Result<()> {
    let table = load_table(&args.cycle)?;
    let store = args.cycle.store();
    let rotation = Rotation::new(&store, args.cycle.key(), &table);

    rotation.restart_cycle_from_today(args.day)?;
    info!(cycle = ?args.cycle.cycle, day = args.day, "cycle restarted from today");
    println!("cycle restarted from day {}; any override was cleared", args.day);
    Ok(())
}

fn cmd_set_override(args: SetOverrideArgs) -> anyhow::Result<()> {
    let table = load_table(&args.cycle)?;
    let store = args.cycle.store();
    let rotation = Rotation::new(&store, args.cycle.key(), &table);

    rotation.save_override(OverrideDraft {
        title: args.title,
        body: args.body,
        image_url: args.image,
        updated_by: args.by,
    })?;
    println!("override saved");
    Ok(())
}

fn cmd_clear_override(args: CycleArgs) -> anyhow::Result<()> {
    let table = load_table(&args)?;
    let store = args.store();
    let rotation = Rotation::new(&store, args.key(), &table);

    rotation.clear_override()?;
    println!("override cleared");
    Ok(())
}
