// main.rs
//
// Command line front end: builds one of the compositions and prints it as SVG,
// or writes it to `--output`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use planet_dance::correspondence::{Correspondence, DanceAndEpicycloid, KnotFamilies, KnotSampleDance};
use planet_dance::io::IoError;
use planet_dance::io::svg::write_svg;
use planet_dance::render::Palette;
use planet_dance::{AxisConvention, ChordExtent, ChordSet, EpicycloidForm, GeneratorConfig};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "planet-dance", version, about = "Torus knots, epicycloids, planet dances and modular multiplication tables")]
struct Cli {
    #[command(flatten)]
    options: Options,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Options {
    /// Write the SVG here instead of stdout.
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Torus orientation.
    #[arg(long, global = true, value_enum, default_value_t = Convention::Standard)]
    convention: Convention,

    /// Epicycloid formula.
    #[arg(long, global = true, value_enum, default_value_t = Form::Classic)]
    form: Form,

    /// Phase added to every chord angle, in radians.
    #[arg(long, global = true, default_value_t = 0.0, allow_negative_numbers = true)]
    chord_phase: f64,

    /// Epicycloid phase, in radians.
    #[arg(long, global = true, default_value_t = 0.0, allow_negative_numbers = true)]
    curve_phase: f64,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dance, torus strands, MMT and epicycloid of (alpha, beta) with multiplier `mult`.
    Correspondence {
        #[arg(allow_negative_numbers = true)]
        alpha: i64,
        #[arg(allow_negative_numbers = true)]
        beta: i64,
        #[arg(allow_negative_numbers = true)]
        mult: i64,
    },
    /// Torus knot (alpha, beta) sampled `m` times beside the sampled dance.
    KnotDance {
        #[arg(allow_negative_numbers = true)]
        alpha: i64,
        #[arg(allow_negative_numbers = true)]
        beta: i64,
        m: i64,
    },
    /// Continuous planet dance beside the epicycloid.
    DanceEpicycloid {
        #[arg(allow_negative_numbers = true)]
        alpha: i64,
        #[arg(allow_negative_numbers = true)]
        beta: i64,
    },
    /// Several torus knots on one square, written `a,b` or `a,b,color`.
    Knots {
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_knot)]
        knots: Vec<KnotArg>,
        /// Which knot to sample, counting from 0.
        #[arg(long, default_value_t = 0)]
        sample: usize,
        /// Number of samples along that knot; none are drawn without it.
        #[arg(long)]
        rate: Option<i64>,
    },
    /// Planet dance of (alpha, beta) as given, continuous or sampled `--samples` times.
    Dance {
        #[arg(allow_negative_numbers = true)]
        alpha: i64,
        #[arg(allow_negative_numbers = true)]
        beta: i64,
        #[arg(long)]
        samples: Option<i64>,
    },
    /// Modular multiplication table MMT(modulus, mult).
    Mmt {
        modulus: i64,
        #[arg(allow_negative_numbers = true)]
        mult: i64,
    },
}

#[derive(Clone, Debug)]
struct KnotArg {
    a: i64,
    b: i64,
    color: Option<String>,
}

fn parse_knot(value: &str) -> Result<KnotArg, String> {
    let mut parts = value.split(',').map(str::trim);
    let mut rate = |name: &str| -> Result<i64, String> {
        parts
            .next()
            .ok_or_else(|| format!("missing {name} in knot `{value}`"))?
            .parse()
            .map_err(|error| format!("bad {name} in knot `{value}`: {error}"))
    };
    let a = rate("a")?;
    let b = rate("b")?;
    let color = parts.next().filter(|c| !c.is_empty()).map(str::to_string);
    if parts.next().is_some() {
        return Err(format!("knot `{value}` has more than three fields"));
    }
    Ok(KnotArg { a, b, color })
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Convention {
    Standard,
    Transposed,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Form {
    Classic,
    Normalized,
}

impl Options {
    fn config(&self) -> GeneratorConfig {
        let convention = match self.convention {
            Convention::Standard => AxisConvention::Standard,
            Convention::Transposed => AxisConvention::Transposed,
        };
        let form = match self.form {
            Form::Classic => EpicycloidForm::Classic,
            Form::Normalized => EpicycloidForm::Normalized,
        };
        GeneratorConfig::default()
            .with_convention(convention)
            .with_curve_form(form)
            .with_chord_phase(self.chord_phase as _)
            .with_curve_phase(self.curve_phase as _)
    }
}

fn run(cli: &Cli) -> Result<(), IoError> {
    let config = cli.options.config();
    let mut palette = Palette::default();

    let document = match &cli.command {
        &Command::Correspondence { alpha, beta, mult } => {
            let view = Correspondence::build(alpha, beta, mult, &config)?;
            tracing::info!(sample_rate = view.bundle.sample_rate, "correspondence built");
            view.to_svg(&config, &mut palette)
        },
        &Command::KnotDance { alpha, beta, m } => {
            KnotSampleDance::build(alpha, beta, m, &config)?.to_svg(&config, &mut palette)
        },
        &Command::DanceEpicycloid { alpha, beta } => {
            DanceAndEpicycloid::build(alpha, beta, &config)?.to_svg(&config, &mut palette)
        },
        Command::Knots { knots, sample, rate } => {
            let rates: Vec<_> = knots.iter().map(|knot| (knot.a, knot.b)).collect();
            let colors: Vec<_> = knots.iter().map(|knot| knot.color.clone()).collect();
            KnotFamilies::build(&rates, rate.map(|m| (*sample, m)), &config)?.to_svg(&colors, &mut palette)
        },
        &Command::Dance { alpha, beta, samples } => {
            let m = samples.unwrap_or(config.dance_resolution as i64);
            ChordSet::generate_with_limit(alpha, beta, m, config.max_samples)?
                .to_svg(ChordExtent::for_rates(alpha, beta), &config)
        },
        &Command::Mmt { modulus, mult } => {
            ChordSet::modular_with_limit(modulus, mult, config.max_samples)?
                .to_svg(ChordExtent::Bounded, &config)
        },
    };

    match &cli.options.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_svg(&document, &mut writer)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), "wrote svg");
        },
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_svg(&document, &mut writer)?;
            writeln!(writer)?;
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "planet-dance failed");
            ExitCode::FAILURE
        },
    }
}
