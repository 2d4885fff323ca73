use std::env;
use std::path::PathBuf;

use chrono::Local;
use quadratic_rocket::core::animator::Animator;
use quadratic_rocket::core::controls::{INITIAL_HEIGHT, INITIAL_VELOCITY, TIME};
use quadratic_rocket::core::error::{Result, RocketError};
use quadratic_rocket::core::explain::{DIRECTION_NOTES, EXTENSION_QUESTIONS, Explanation};
use quadratic_rocket::core::export::{self, ChartText, ImageFormat, ImageSequence};
use quadratic_rocket::core::frame::Scene;
use quadratic_rocket::core::motion::SceneParameters;
use quadratic_rocket::core::sprite::{RocketSprite, sprite_path};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq)]
struct Options {
    initial_height: f64,
    initial_velocity: f64,
    time_s: f64,
    animate: bool,
    export_dir: Option<PathBuf>,
    format: ImageFormat,
    text: ChartText,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            initial_height: INITIAL_HEIGHT.default,
            initial_velocity: INITIAL_VELOCITY.default,
            time_s: TIME.default,
            animate: false,
            export_dir: None,
            format: ImageFormat::Png,
            text: ChartText::Full,
        }
    }
}

enum Command {
    Help,
    Run(Options),
}

fn parse_f64(value: &str, label: &'static str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| RocketError::InvalidInput {
            label,
            value: value.to_string(),
        })
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut options = Options::default();
    let mut positional = Vec::new();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--animate" => options.animate = true,
            "--svg" => options.format = ImageFormat::Svg,
            "--plain" => options.text = ChartText::Plain,
            "--export" => {
                let dir = iter.next().ok_or(RocketError::InvalidInput {
                    label: "export directory",
                    value: String::new(),
                })?;
                options.export_dir = Some(PathBuf::from(dir));
            }
            _ => positional.push(arg.as_str()),
        }
    }

    let controls = [INITIAL_HEIGHT, INITIAL_VELOCITY, TIME];
    if positional.len() > controls.len() {
        return Err(RocketError::InvalidInput {
            label: "argument list",
            value: positional.join(" "),
        });
    }
    for (idx, raw) in positional.iter().enumerate() {
        let range = controls[idx];
        let value = range.check(parse_f64(raw, range.label)?)?;
        match idx {
            0 => options.initial_height = value,
            1 => options.initial_velocity = value,
            _ => options.time_s = value,
        }
    }

    Ok(Command::Run(options))
}

fn print_report(scene: &Scene, time_s: f64) {
    let params = *scene.params();
    let motion = params.motion_state(time_s);
    let text = Explanation::new(params, motion);

    println!("{}", text.equation());
    for note in text.coefficient_notes() {
        println!("  {note}");
    }
    println!();
    println!("{}", text.velocity_formula());
    for note in DIRECTION_NOTES {
        println!("  {note}");
    }
    println!("  {}", text.current_motion());
    if motion.is_above_ground() {
        println!("  Height at t = {:.1} s: {:.2} m", time_s, motion.height_m);
    } else {
        println!("  Rocket has landed by t = {time_s:.1} s");
    }
    println!();
    println!("{}", text.maximum_height());
    println!("{}", text.time_of_maximum());
    println!("{}", text.landing_answer());
    println!();
    for line in EXTENSION_QUESTIONS {
        println!("{line}");
    }
}

fn export_frames(
    scene: &Scene,
    sprite: &RocketSprite,
    options: &Options,
    dir: PathBuf,
) -> Result<()> {
    if options.animate {
        let mut sequence = ImageSequence::new(&dir, sprite, options.format, options.text)?;
        // Files are the display here, so there is nothing to wait for between frames.
        let shown = Animator::new().play(scene, &mut sequence, || true, |_| {})?;
        println!("\nWrote {shown} frames to {}", dir.display());
        return Ok(());
    }

    std::fs::create_dir_all(&dir)?;
    let path = dir.join(export::snapshot_name(Local::now(), options.format));
    export::save(
        &path,
        &scene.render_frame(options.time_s),
        sprite,
        options.format,
        options.text,
    )?;
    println!("\nWrote {}", path.display());
    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} [c] [b] [t] [--animate] [--export <dir>] [--svg] [--plain]");
    println!();
    println!("  c  initial height in m, 0..50 (default 10)");
    println!("  b  initial upward velocity, 5..40 (default 20)");
    println!("  t  time in s, 0..10 (default 0)");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 10 20 1.5 --export out");
    println!("  {program} 0 30 --animate --export frames --svg");
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let options = match parse_args(&args)? {
        Command::Help => {
            print_usage(&args[0]);
            return Ok(());
        }
        Command::Run(options) => options,
    };
    let sprite = RocketSprite::load(sprite_path())?.scaled_to_height(export::SPRITE_HEIGHT_PX);

    let params = SceneParameters::new(options.initial_height, options.initial_velocity);
    info!(
        initial_height = params.initial_height,
        initial_velocity = params.initial_velocity,
        "scene ready"
    );
    let scene = Scene::new(params);
    print_report(&scene, options.time_s);

    if let Some(dir) = options.export_dir.clone() {
        export_frames(&scene, &sprite, &options, dir)?;
    }

    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
