//! `dualdiff`: evaluates `z = x·y + f(x)` and its derivatives with dual numbers.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand, ValueEnum};
use dual::{DualNumber, ElementaryFn, Registry, sin};
use named_vars::NamedVars;
use named_vars_derive::NamedVars;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Copy, Clone, NamedVars)]
struct Inputs<T> {
    x: T,
    y: T,
}

type Inputs64 = Inputs<f64>;
type InputsDual = Inputs<DualNumber>;

const TOLERANCE: f64 = 1e-15;

#[derive(Parser)]
#[command(name = "dualdiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference scenarios and check their derivatives
    Scenario,

    /// Evaluate z = x*y + f(x) at a point
    Eval {
        #[arg(short, long)]
        x: f64,

        #[arg(short, long)]
        y: f64,

        /// Differentiate with respect to this variable only
        #[arg(short, long)]
        wrt: Option<Wrt>,

        /// Elementary function applied to x
        #[arg(short, long, default_value = "sin")]
        function: String,
    },

    /// List the elementary functions available to `eval`
    Functions,
}

#[derive(Clone, Copy, ValueEnum)]
enum Wrt {
    X,
    Y,
}

impl Wrt {
    fn name(self) -> &'static str {
        match self {
            Wrt::X => "x",
            Wrt::Y => "y",
        }
    }
}

fn expression(f: ElementaryFn) -> impl Fn(&InputsDual) -> DualNumber {
    move |p: &InputsDual| p.x * p.y + f.apply(p.x)
}

fn scenario() -> Result<()> {
    // d/dx
    let x = DualNumber::new(0.5, 1.0);
    let y = DualNumber::new(4.2, 0.0);
    let z = x * y + sin(x);
    println!("{z}");

    ensure!(
        (z.value() - 2.579425538604203).abs() <= TOLERANCE,
        "unexpected value {}",
        z.value()
    );
    ensure!(
        (z.dvalue() - (y.value() + x.value().cos())).abs() <= TOLERANCE,
        "unexpected dz/dx {}",
        z.dvalue()
    );

    // d/dy
    let x = DualNumber::new(0.5, 0.0);
    let y = DualNumber::new(4.2, 1.0);
    let z = x * y + sin(x);
    println!("{z}");

    ensure!(
        (z.dvalue() - x.value()).abs() <= TOLERANCE,
        "unexpected dz/dy {}",
        z.dvalue()
    );

    info!("scenarios passed");
    Ok(())
}

fn eval(x: f64, y: f64, wrt: Option<Wrt>, function: &str) -> Result<()> {
    let registry = Registry::builtin();
    let f = *registry
        .get(function)
        .with_context(|| format!("unknown elementary function `{function}`"))?;
    let point = Inputs64 { x, y };
    debug!(x, y, function, "evaluating");

    match wrt {
        Some(wrt) => {
            let z = forward::partial_by_name(expression(f), &point, wrt.name())
                .context("differentiating")?;
            println!("{z}");
        }
        None => {
            let (value, gradient) = forward::partials(expression(f), &point);
            println!("z = {value:?}");
            for (name, d) in <Inputs64 as NamedVars<f64, 2>>::NAMES.iter().zip(gradient.iter()) {
                println!("dz/d{name} = {d:?}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Commands::Scenario => scenario(),
        Commands::Eval {
            x,
            y,
            wrt,
            function,
        } => eval(x, y, wrt, &function),
        Commands::Functions => {
            for name in Registry::builtin().names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}
