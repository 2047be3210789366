use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use formula_fractals::{
    CliRenderController, DEFAULT_HEIGHT, DEFAULT_WIDTH, EQUATION_PRESETS, GeometricDescriber,
    PaletteKinds, PpmFilePresenter, RenderOptions, Telemetry, Viewport, describe_view,
};

/// Formula-driven escape-time fractal renderer.
///
/// Example:
///   formula-fractals render --preset "Burning Ship" --bookmark Masts --output ship.ppm
#[derive(Parser, Debug)]
#[command(name = "formula-fractals", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame to a binary PPM file
    Render(RenderArgs),
    /// List the equation presets and their bookmarks
    Presets,
    /// List the built-in palettes
    Palettes,
    /// Describe a view in words
    Describe(DescribeArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Equation preset by name (e.g. "Tricorn")
    #[arg(long)]
    preset: Option<String>,

    /// Custom real-part update over x, y, x0, y0
    #[arg(long, requires = "imag")]
    real: Option<String>,

    /// Custom imaginary-part update over x, y, x0, y0
    #[arg(long, requires = "real")]
    imag: Option<String>,

    /// Bookmark of the selected equations to start from
    #[arg(long)]
    bookmark: Option<String>,

    /// Real coordinate of the view centre
    #[arg(long, allow_negative_numbers = true)]
    center_x: Option<f64>,

    /// Imaginary coordinate of the view centre
    #[arg(long, allow_negative_numbers = true)]
    center_y: Option<f64>,

    /// Half-extent of the shorter side in plane units (smaller is deeper)
    #[arg(long)]
    zoom: Option<f64>,

    /// Maximum iterations per pixel
    #[arg(long)]
    iterations: Option<u32>,

    /// Built-in palette by name
    #[arg(long)]
    palette: Option<String>,

    /// Custom palette as two or more #rrggbb anchors
    #[arg(long, num_args = 2.., value_name = "HEX")]
    colours: Vec<String>,

    /// Evaluate rows in parallel
    #[arg(long)]
    parallel: bool,

    /// Output PPM file
    #[arg(long, value_name = "FILE", default_value = "output/fractal.ppm")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct DescribeArgs {
    #[arg(long, allow_negative_numbers = true, default_value_t = -0.5)]
    center_x: f64,

    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    center_y: f64,

    #[arg(long, default_value_t = 1.5)]
    zoom: f64,
}

impl From<RenderArgs> for RenderOptions {
    fn from(args: RenderArgs) -> Self {
        Self {
            width: args.width,
            height: args.height,
            preset: args.preset,
            real: args.real,
            imag: args.imag,
            bookmark: args.bookmark,
            center_x: args.center_x,
            center_y: args.center_y,
            zoom: args.zoom,
            iterations: args.iterations,
            palette: args.palette,
            custom_palette: args.colours,
            parallel: args.parallel,
        }
    }
}

fn render(args: RenderArgs) -> Result<(), Box<dyn Error>> {
    let output = args.output.clone();
    let options = RenderOptions::from(args);
    let state = options.build_state()?;

    let mut controller = CliRenderController::new(PpmFilePresenter::new(), options.render_settings());
    controller.generate(&state)?;
    controller.write(&output)?;

    println!("{}", state.telemetry());
    Ok(())
}

fn list_presets() {
    for preset in EQUATION_PRESETS {
        println!("{}  {}", preset.name, preset.formula);
        println!("  real: {}", preset.real);
        println!("  imag: {}", preset.imag);
        for bookmark in preset.bookmarks {
            println!(
                "  - {} ({}, {}) zoom {}: {}",
                bookmark.name, bookmark.x, bookmark.y, bookmark.zoom, bookmark.description
            );
        }
    }
}

fn list_palettes() {
    for kind in PaletteKinds::ALL {
        let anchors: Vec<String> = kind.anchors().iter().map(ToString::to_string).collect();
        println!("{:<14} {}", kind.display_name(), anchors.join(" "));
    }
}

fn describe(args: &DescribeArgs) -> Result<(), Box<dyn Error>> {
    let viewport = Viewport::new(args.center_x, args.center_y, args.zoom)?;

    println!("{}", Telemetry::from_viewport(viewport));
    println!();
    println!(
        "{}",
        describe_view(&GeometricDescriber, viewport.center_x(), viewport.center_y(), viewport.zoom())
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Render(args) => render(args)?,
        Command::Presets => list_presets(),
        Command::Palettes => list_palettes(),
        Command::Describe(args) => describe(&args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_args_map_onto_options() {
        let cli = Cli::try_parse_from([
            "formula-fractals",
            "render",
            "--preset",
            "Tricorn",
            "--center-x",
            "-1.1",
            "--colours",
            "#000000",
            "#ffffff",
            "--parallel",
        ])
        .unwrap();

        let Command::Render(args) = cli.command else {
            panic!("expected render subcommand");
        };
        assert_eq!(args.output, PathBuf::from("output/fractal.ppm"));
        assert_eq!((args.width, args.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));

        let options = RenderOptions::from(args);
        assert_eq!(options.preset.as_deref(), Some("Tricorn"));
        assert_eq!(options.center_x, Some(-1.1));
        assert_eq!(options.custom_palette, vec!["#000000", "#ffffff"]);
        assert!(options.parallel);
    }

    #[test]
    fn test_real_without_imag_is_rejected() {
        assert!(Cli::try_parse_from(["formula-fractals", "render", "--real", "x"]).is_err());
    }

    #[test]
    fn test_describe_defaults_to_initial_view() {
        let cli = Cli::try_parse_from(["formula-fractals", "describe"]).unwrap();

        let Command::Describe(args) = cli.command else {
            panic!("expected describe subcommand");
        };
        assert_eq!(
            Viewport::new(args.center_x, args.center_y, args.zoom).unwrap(),
            Viewport::INITIAL
        );
    }
}
