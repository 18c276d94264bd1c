//! Application runner logic
//!
//! Handles the different ways to run strokefont: config initialization,
//! font listing, font export, and the main text conversion.

use crate::core::cli::{CliArgs, OutputFormat};
use crate::core::config_file::ConfigFile;
use crate::font_source::json::save_json_font;
use crate::font_source::{font_choices, DirectoryFontProvider, FontProvider, FontSelection};
use crate::geometry::curve::Curve;
use crate::host::{ObjectData, Scene, SceneObject, StrokeTextOperator};
use crate::{io, logging};
use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Name given to the text object the CLI converts
const SOURCE_OBJECT_NAME: &str = "Text";

/// Run strokefont with the given CLI arguments.
/// Handles special CLI flags and delegates to the conversion.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    let _log_guard = logging::init(cli_args.verbose, cli_args.log_file)?;
    cli_args.validate().map_err(|message| anyhow!(message))?;

    let config = ConfigFile::load();
    let provider = DirectoryFontProvider::new(cli_args.font_dir(config.as_ref()))
        .with_flatten_tolerance(cli_args.flatten_tolerance(config.as_ref()));

    if cli_args.list_fonts {
        for choice in font_choices(&provider)? {
            println!("{:<16} {}", format!("'{}'", choice.id), choice.label);
        }
        return Ok(());
    }

    let selection = cli_args.font_selection(config.as_ref());
    if let Some(path) = &cli_args.export_font {
        let font = selection
            .resolve(&provider)?
            .ok_or_else(|| anyhow!("--export-font needs a font, pass one with --font"))?;
        save_json_font(&font, path)
            .with_context(|| format!("Failed to write font to {}", path.display()))?;
        info!("Exported font to {:?}", path);
        return Ok(());
    }

    let curve = convert_text(&cli_args.text, selection, &provider)?;
    let output = render(
        &curve,
        cli_args.output_format(config.as_ref()),
        cli_args.stroke_width(config.as_ref()),
    )?;
    write_output(cli_args.output.as_deref(), &output)
}

/// Convert `text` into a curve through the host operator
///
/// The text is placed in a scratch scene as the selected object, the
/// operator replaces it with a curve object, and the curve is taken back out.
pub fn convert_text(
    text: &str,
    selection: FontSelection,
    provider: &dyn FontProvider,
) -> Result<Curve> {
    let mut scene = Scene::new();
    scene.add_text(SOURCE_OBJECT_NAME, text);

    let mut operator = StrokeTextOperator::new(selection, true);
    let curve_name = operator.invoke(&mut scene, provider).map_err(|e| {
        error!("{}", e.user_message());
        e
    })?;

    match scene.remove(&curve_name) {
        Some(SceneObject {
            data: ObjectData::Curve(curve),
            ..
        }) => Ok(curve),
        _ => bail!("operator did not produce a curve object"),
    }
}

/// Serialize a curve in the requested format
pub fn render(curve: &Curve, format: OutputFormat, stroke_width: f64) -> Result<String> {
    match format {
        OutputFormat::Svg => Ok(io::write_svg(curve, stroke_width)),
        OutputFormat::Json => io::to_json(curve),
    }
}

fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!("Wrote {:?}", path);
        }
        None => print!("{output}"),
    }
    Ok(())
}
