//! Enigma View: headless snapshot of the machine display
//!
//! Builds the view around a panel test model, replays pointer input at
//! the registered key and rotor positions, and writes the resulting frame
//! as a PNG.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use enigma_view::ui::{ApproxMetrics, GlyphFont, SceneRenderer, TextMetrics, load_background};
use enigma_view::{EnigmaView, GeometryTable, Letter, PanelTestModel, Style, ViewError};

#[derive(Debug, Parser)]
#[command(name = "enigma-view", version, about = "Render a snapshot of the cipher machine display")]
struct Args {
    /// PNG drawn under the widgets
    #[arg(long)]
    background: Option<PathBuf>,

    /// TrueType/OpenType font for key, lamp and rotor labels
    #[arg(long)]
    font: Option<PathBuf>,

    /// Where to write the snapshot
    #[arg(long, default_value = "enigma.png")]
    output: PathBuf,

    /// Letters typed by pressing and releasing each key in turn
    #[arg(long = "type", value_name = "TEXT", default_value = "")]
    text: String,

    /// Comma-separated click counts, one per rotor slot from the left
    #[arg(long = "rotor-clicks", value_name = "N,N,...", value_delimiter = ',')]
    rotor_clicks: Vec<u32>,

    /// Key left pressed when the snapshot is taken
    #[arg(long)]
    hold: Option<char>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn run(args: Args) -> Result<(), ViewError> {
    let font = args.font.as_deref().map(GlyphFont::from_file).transpose()?;
    let metrics: Box<dyn TextMetrics> = match &font {
        Some(font) => Box::new(font.clone()),
        None => {
            warn!("No font given; labels are measured approximately and not drawn");
            Box::new(ApproxMetrics::default())
        }
    };

    let layout = GeometryTable::standard();
    let model = PanelTestModel::new(layout.rotor_count());
    let mut view = EnigmaView::new(model, layout, Style::default(), metrics);
    if let Some(path) = &args.background {
        view = view.with_background(load_background(path)?);
    }
    view.update();

    for ch in args.text.chars() {
        let Some(letter) = Letter::from_char(ch) else {
            warn!(%ch, "Skipping character without a key");
            continue;
        };
        let at = view.layout().key_position(letter);
        view.pointer_down(at);
        view.update();
        view.pointer_up(at);
        view.update();
    }

    for (index, &clicks) in args.rotor_clicks.iter().enumerate() {
        let Some(at) = view.layout().rotor_position(index) else {
            warn!(index, "Layout has no rotor in this slot");
            continue;
        };
        for _ in 0..clicks {
            view.pointer_down(at);
            view.pointer_up(at);
        }
        view.update();
    }

    if let Some(ch) = args.hold {
        match Letter::from_char(ch) {
            Some(letter) => {
                let at = view.layout().key_position(letter);
                view.pointer_down(at);
                view.update();
            }
            None => warn!(%ch, "Cannot hold a character without a key"),
        }
    }

    let renderer = match font {
        Some(font) => SceneRenderer::with_font(font),
        None => SceneRenderer::new(),
    };
    let pixmap = view.render(&renderer)?;
    let png = renderer.encode_png(&pixmap)?;
    std::fs::write(&args.output, png).map_err(|source| enigma_view::ui::AssetError::Io {
        path: args.output.clone(),
        source,
    })?;

    info!(path = %args.output.display(), "Snapshot written");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();
    info!(version = enigma_view::VERSION, "Starting enigma-view");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("enigma-view: {e}");
            ExitCode::FAILURE
        }
    }
}
