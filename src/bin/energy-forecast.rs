use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use energy_forecast::export::{self, DirectoryTarget, ExportFormat};
use energy_forecast::info::{self, ACCURACY_TABLE, MODEL_DESCRIPTION};
use energy_forecast::{Catalog, stats, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "energy-forecast",
    version,
    about = "Browse, chart & export yearly energy-consumption forecasts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available countries.
    List,
    /// Print a country's yearly figures (and optionally statistics).
    Show(ShowArgs),
    /// Save a country's series as <country>_forecast.csv (or .json).
    Export(ExportArgs),
    /// Render a country's series as a chart (.svg or .png).
    Plot(PlotArgs),
    /// Describe the forecasting model.
    Model,
    /// Print the model accuracy comparison table.
    Accuracy,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutFormat {
    Csv,
    Json,
}

impl From<OutFormat> for ExportFormat {
    fn from(f: OutFormat) -> Self {
        match f {
            OutFormat::Csv => ExportFormat::Csv,
            OutFormat::Json => ExportFormat::Json,
        }
    }
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Country name (case-insensitive), e.g. Hungary
    #[arg(short, long)]
    country: String,
    /// Print the series as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Print summary statistics after the table.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Country name (case-insensitive), e.g. Hungary
    #[arg(short, long)]
    country: String,
    /// Directory to write into (created if missing).
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutFormat::Csv)]
    format: OutFormat,
}

#[derive(Args, Debug)]
struct PlotArgs {
    /// Country name (case-insensitive), e.g. Hungary
    #[arg(short, long)]
    country: String,
    /// Chart path; `.svg` writes SVG, anything else PNG.
    #[arg(long)]
    out: PathBuf,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Locale for tick labels (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    locale: String,
}

fn fmt_num(x: f64) -> String {
    // Format up to 2 decimals, then trim trailing zeros and trailing dot.
    let s = format!("{:.2}", x);
    let t = s.trim_end_matches('0').trim_end_matches('.');
    if t.is_empty() || t == "-" {
        "0".to_string()
    } else {
        t.to_string()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Show(args) => cmd_show(args),
        Command::Export(args) => cmd_export(args),
        Command::Plot(args) => cmd_plot(args),
        Command::Model => cmd_model(),
        Command::Accuracy => cmd_accuracy(),
    }
}

fn cmd_list() -> Result<()> {
    for name in Catalog::builtin().names() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_show(args: ShowArgs) -> Result<()> {
    let catalog = Catalog::builtin();
    let country = catalog.lookup(&args.country)?;
    let series = catalog.series(country);

    if args.json {
        println!("{}", export::series_to_json(series)?);
    } else {
        println!("{} ({})", catalog.name(country), info::Y_AXIS_LABEL);
        for p in series {
            println!("{}  {:>8}", p.year, fmt_num(p.value));
        }
    }

    if args.stats {
        let s = stats::summarize(series);
        let change = s
            .total_change_pct
            .map(|c| format!("{}%", fmt_num(c)))
            .unwrap_or_else(|| "NA".to_string());
        println!(
            "{}–{}  count={}  min={} max={} mean={} median={}  change={}",
            s.first_year,
            s.last_year,
            s.count,
            fmt_num(s.min),
            fmt_num(s.max),
            fmt_num(s.mean),
            fmt_num(s.median),
            change
        );
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let catalog = Catalog::builtin();
    let country = catalog.lookup(&args.country)?;
    let series = catalog.series(country);
    let mut target = DirectoryTarget::new(&args.out_dir);
    if let Some(path) = export::export_series(
        catalog.name(country),
        series,
        args.format.into(),
        &mut target,
    )? {
        eprintln!("Saved {} rows to {}", series.len(), path.display());
    }
    Ok(())
}

fn cmd_plot(args: PlotArgs) -> Result<()> {
    let catalog = Catalog::builtin();
    let country = catalog.lookup(&args.country)?;
    viz::plot_series(
        catalog.name(country),
        catalog.series(country),
        &args.out,
        args.width,
        args.height,
        &args.locale,
    )?;
    eprintln!("Wrote plot to {}", args.out.display());
    Ok(())
}

fn cmd_model() -> Result<()> {
    let d = MODEL_DESCRIPTION;
    println!("{}\n", d.heading);
    println!("{}", d.intro);
    for c in d.components {
        println!("  - {}: {}", c.name, c.summary);
    }
    println!("\n{}", d.closing);
    Ok(())
}

fn cmd_accuracy() -> Result<()> {
    let t = ACCURACY_TABLE;
    println!("{}\n", t.heading);
    println!("{:<20} {:>9} {:>6}", t.columns[0], t.columns[1], t.columns[2]);
    for row in t.rows {
        let [model, mape, r2] = info::accuracy_cells(row);
        let marker = if row.highlight { " *" } else { "" };
        println!("{:<20} {:>9} {:>6}{}", model, mape, r2, marker);
    }
    println!("\n{}", t.conclusion);
    Ok(())
}
