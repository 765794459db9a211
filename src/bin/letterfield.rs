use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use letterfield::{
    ColorPreview, ConfigChange, FieldConfig, FpsMeter, MorphingField, RecordingRenderer, hue_name,
};

#[derive(Parser, Debug)]
#[command(name = "letterfield", version)]
struct Cli {
    /// Log library events (letter switches, rebuilds) to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the field headless and print one JSON frame report per line.
    Simulate(SimulateArgs),
    /// Write the initial instance descriptor as JSON.
    Descriptor(DescriptorArgs),
    /// Print the hue name and preview swatch for the configured color.
    Palette(PaletteArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Number of frames to run.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Field config JSON (missing keys take defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Set the scroll fraction at a frame, e.g. `30=0.5`. Repeatable.
    #[arg(long = "scroll", value_parser = parse_scroll)]
    scroll: Vec<(u64, f64)>,

    /// Apply a config change at a frame, e.g. `10={"field":"hue","value":0.1}`. Repeatable.
    #[arg(long = "change", value_parser = parse_change)]
    change: Vec<(u64, ConfigChange)>,
}

#[derive(Parser, Debug)]
struct DescriptorArgs {
    /// Field config JSON (missing keys take defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PaletteArgs {
    /// Field config JSON (missing keys take defaults).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Descriptor(args) => cmd_descriptor(args),
        Command::Palette(args) => cmd_palette(args),
    }
}

fn split_at_frame(s: &str) -> Result<(u64, &str), String> {
    let (frame, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FRAME=VALUE, got '{s}'"))?;
    let frame = frame
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("bad frame '{frame}': {e}"))?;
    Ok((frame, rest))
}

fn parse_scroll(s: &str) -> Result<(u64, f64), String> {
    let (frame, rest) = split_at_frame(s)?;
    let fraction = rest
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad scroll fraction '{rest}': {e}"))?;
    Ok((frame, fraction))
}

fn parse_change(s: &str) -> Result<(u64, ConfigChange), String> {
    let (frame, rest) = split_at_frame(s)?;
    let change = serde_json::from_str(rest).map_err(|e| format!("bad change '{rest}': {e}"))?;
    Ok((frame, change))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<FieldConfig> {
    match path {
        Some(p) => {
            FieldConfig::from_path(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(FieldConfig::default()),
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "--fps must be > 0, got {}",
        args.fps
    );
    let cfg = load_config(args.config.as_deref())?;
    let mut field = MorphingField::new(cfg)?;
    let mut renderer = RecordingRenderer::new(field.renderer_settings());
    let scroll = field.scroll_signal();

    let scroll_at: BTreeMap<u64, f64> = args.scroll.into_iter().collect();
    let mut changes_at: BTreeMap<u64, Vec<ConfigChange>> = BTreeMap::new();
    for (frame, change) in args.change {
        changes_at.entry(frame).or_default().push(change);
    }

    field.install(&mut renderer, 0.0)?;

    let frame_ms = 1000.0 / args.fps;
    let mut meter = FpsMeter::new();
    meter.tick(0.0);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for n in 1..=args.frames {
        if let Some(&fraction) = scroll_at.get(&n) {
            scroll.set(fraction);
        }
        for change in changes_at.remove(&n).unwrap_or_default() {
            field
                .apply(change)
                .with_context(|| format!("apply change at frame {n}"))?;
        }

        let now_ms = n as f64 * frame_ms;
        let report = field
            .frame(&mut renderer, now_ms)
            .with_context(|| format!("run frame {n}"))?;
        if let Some(fps) = meter.tick(now_ms) {
            tracing::debug!(fps, frame = n, "fps");
        }

        serde_json::to_writer(&mut out, &report).with_context(|| "write frame report")?;
        writeln!(out).with_context(|| "write frame report")?;
    }
    out.flush().with_context(|| "flush stdout")?;

    let letter = field.cycle().current_letter().glyph();
    match meter.last() {
        Some(fps) => eprintln!(
            "frames={} rebuilds={} letter={letter} fps={fps}",
            field.frame_count(),
            field.rebuild_count()
        ),
        None => eprintln!(
            "frames={} rebuilds={} letter={letter}",
            field.frame_count(),
            field.rebuild_count()
        ),
    }
    Ok(())
}

fn cmd_descriptor(args: DescriptorArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let mut field = MorphingField::new(cfg)?;
    let descriptor = field.build_descriptor()?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create descriptor '{}'", path.display()))?;
            serde_json::to_writer_pretty(BufWriter::new(f), &descriptor)
                .with_context(|| format!("write descriptor '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &descriptor)
                .with_context(|| "write descriptor")?;
            writeln!(out).with_context(|| "write descriptor")?;
        }
    }
    Ok(())
}

fn cmd_palette(args: PaletteArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let preview = ColorPreview::from_hsl(cfg.hue, cfg.saturation, cfg.lightness);
    let summary = serde_json::json!({
        "hue": cfg.hue,
        "name": hue_name(cfg.hue),
        "saturation": cfg.saturation,
        "lightness": cfg.lightness,
        "hue_spread": cfg.hue_spread,
        "light": preview.light,
        "dark": preview.dark,
        "css": preview.css_gradient(),
    });
    println!("{summary}");
    Ok(())
}
