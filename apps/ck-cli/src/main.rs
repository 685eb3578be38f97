use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use ck_core::ensure_finite;

use ck_kernel::{
    CellInput, EnergyMode, Kernel, KernelConfig, KernelError, MechanismDescription, builtin,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error("Invalid input: {0}")]
    Input(#[from] ck_core::CkError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown species '{0}'")]
    UnknownSpecies(String),

    #[error("Expected NAME=VALUE, got '{0}'")]
    BadAssignment(String),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "ck-cli")]
#[command(about = "chemkern CLI - thermochemistry kernel queries", long_about = None)]
struct Cli {
    /// Mechanism description JSON (defaults to the built-in San Diego H2 set)
    #[arg(long, global = true)]
    mechanism: Option<PathBuf>,

    /// Kernel configuration YAML
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Composition options shared by the state queries.
#[derive(clap::Args)]
struct CompositionArgs {
    /// Mass fractions in species order, comma separated
    #[arg(long, value_delimiter = ',', conflicts_with = "species")]
    y: Option<Vec<f64>>,

    /// Mass fractions by name, e.g. --species H2=0.03 --species O2=0.22
    #[arg(long)]
    species: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show model name, species ordering and configuration
    Info,
    /// Pressure from density, temperature and composition
    Pressure {
        /// Density [kg/m³]
        #[arg(long)]
        rho: f64,
        /// Temperature [K]
        #[arg(long)]
        t: f64,
        #[command(flatten)]
        composition: CompositionArgs,
    },
    /// Temperature from specific internal energy or enthalpy
    Temperature {
        /// Target energy [J/kg]
        #[arg(long)]
        energy: f64,
        /// Initial temperature guess [K]
        #[arg(long, default_value_t = 300.0)]
        guess: f64,
        /// `energy` (internal energy) or `enthalpy`
        #[arg(long, default_value = "energy")]
        mode: EnergyMode,
        #[command(flatten)]
        composition: CompositionArgs,
    },
    /// Net production rates and rates of progress
    Rates {
        /// Density [kg/m³]
        #[arg(long)]
        rho: f64,
        /// Temperature [K]
        #[arg(long)]
        t: f64,
        #[command(flatten)]
        composition: CompositionArgs,
    },
    /// Evaluate a batch of cells read from a JSON array of cell inputs
    Evaluate {
        /// Input JSON file
        cells: PathBuf,
    },
    /// Write the mechanism description as JSON
    ExportMechanism {
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let description = load_description(cli.mechanism.as_deref())?;

    if let Commands::ExportMechanism { output } = &cli.command {
        return cmd_export(&description, output.as_deref());
    }

    let config = match &cli.config {
        Some(path) => KernelConfig::load(path)?,
        None => KernelConfig::default(),
    };
    let kernel = Kernel::with_config(&description, config)?;
    info!(model = kernel.model_name(), "kernel loaded");

    match cli.command {
        Commands::Info => cmd_info(&kernel, cli.json),
        Commands::Pressure { rho, t, composition } => {
            let y = resolve_composition(&kernel, &composition)?;
            cmd_pressure(
                &kernel,
                ensure_finite(rho, "rho")?,
                ensure_finite(t, "t")?,
                &y,
                cli.json,
            )
        }
        Commands::Temperature {
            energy,
            guess,
            mode,
            composition,
        } => {
            let y = resolve_composition(&kernel, &composition)?;
            cmd_temperature(
                &kernel,
                ensure_finite(energy, "energy")?,
                ensure_finite(guess, "guess")?,
                &y,
                mode,
                cli.json,
            )
        }
        Commands::Rates { rho, t, composition } => {
            let y = resolve_composition(&kernel, &composition)?;
            cmd_rates(
                &kernel,
                ensure_finite(rho, "rho")?,
                ensure_finite(t, "t")?,
                &y,
                cli.json,
            )
        }
        Commands::Evaluate { cells } => cmd_evaluate(&kernel, &cells, cli.json),
        Commands::ExportMechanism { .. } => Ok(()),
    }
}

fn load_description(path: Option<&Path>) -> CliResult<MechanismDescription> {
    match path {
        None => Ok(builtin::san_diego_h2()),
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(serde_json::from_str(&text)?)
        }
    }
}

/// Mass fractions from `--y`, from `--species` pairs, or uniform if neither is given.
fn resolve_composition(kernel: &Kernel, args: &CompositionArgs) -> CliResult<Vec<f64>> {
    let n = kernel.num_species();
    if let Some(y) = &args.y {
        return Ok(y.clone());
    }
    if args.species.is_empty() {
        return Ok(vec![1.0 / n as f64; n]);
    }
    let mut y = vec![0.0; n];
    for pair in &args.species {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| CliError::BadAssignment(pair.clone()))?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| CliError::BadAssignment(pair.clone()))?;
        let id = kernel
            .species_index(name.trim())
            .ok_or_else(|| CliError::UnknownSpecies(name.trim().to_string()))?;
        y[id.ix()] = ensure_finite(value, "mass fraction")?;
    }
    Ok(y)
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_info(kernel: &Kernel, json: bool) -> CliResult<()> {
    if json {
        return print_json(kernel.identity());
    }
    let (t_min, t_max) = kernel.thermo().temperature_range();
    println!("Model: {}", kernel.model_name());
    println!("  Species ({}):", kernel.num_species());
    for (i, name) in kernel.species_names().iter().enumerate() {
        println!("    {:>3}  {}", i, name);
    }
    println!("  Reactions: {}", kernel.thermo().num_reactions());
    println!("  Valid temperature range: {:.1} - {:.1} K", t_min, t_max);
    println!("Configuration:");
    print!("{}", kernel.config().to_yaml_string()?);
    Ok(())
}

fn cmd_pressure(kernel: &Kernel, rho: f64, t: f64, y: &[f64], json: bool) -> CliResult<()> {
    let p = kernel.pressure(rho, t, y)?;
    if json {
        return print_json(&serde_json::json!({ "pressure": p }));
    }
    println!("p = {:.3} Pa", p);
    Ok(())
}

fn cmd_temperature(
    kernel: &Kernel,
    energy: f64,
    guess: f64,
    y: &[f64],
    mode: EnergyMode,
    json: bool,
) -> CliResult<()> {
    let sol = kernel.solve_temperature(energy, guess, y, mode)?;
    if json {
        return print_json(&serde_json::json!({
            "mode": mode.label(),
            "temperature": sol.temperature,
            "residual": sol.residual,
            "iterations": sol.iterations,
        }));
    }
    println!(
        "T = {:.6} K from {} ({} iterations, residual {:.3e} J/kg)",
        sol.temperature,
        mode.label(),
        sol.iterations,
        sol.residual
    );
    Ok(())
}

#[derive(Serialize)]
struct RatesReport<'a> {
    species: &'a [String],
    net_production_rates: Vec<f64>,
    rates_of_progress: Vec<f64>,
}

fn cmd_rates(kernel: &Kernel, rho: f64, t: f64, y: &[f64], json: bool) -> CliResult<()> {
    let report = RatesReport {
        species: kernel.species_names(),
        net_production_rates: kernel.net_production_rates(rho, t, y)?,
        rates_of_progress: kernel.rates_of_progress(rho, t, y)?,
    };
    if json {
        return print_json(&report);
    }
    println!("Net production rates [kmol/(m³·s)]:");
    for (name, w) in report.species.iter().zip(&report.net_production_rates) {
        println!("  {:<8} {:>14.6e}", name, w);
    }
    println!("Rates of progress [kmol/(m³·s)]:");
    for (reaction, q) in kernel.thermo().reactions().iter().zip(&report.rates_of_progress) {
        println!("  {:<28} {:>14.6e}", reaction.equation, q);
    }
    Ok(())
}

fn cmd_evaluate(kernel: &Kernel, path: &Path, json: bool) -> CliResult<()> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cells: Vec<CellInput> = serde_json::from_str(&text)?;
    let results = kernel.evaluate_cells(&cells);

    if json {
        let rows: Vec<serde_json::Value> = results
            .iter()
            .map(|r| match r {
                Ok(src) => serde_json::json!({ "ok": src }),
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            })
            .collect();
        return print_json(&rows);
    }

    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(src) => println!(
                "cell {:>4}: T = {:.3} K, p = {:.3} Pa",
                i, src.temperature, src.pressure
            ),
            Err(e) => println!("cell {:>4}: error: {}", i, e),
        }
    }
    let failed = results.iter().filter(|r| r.is_err()).count();
    println!("{} cells, {} failed", results.len(), failed);
    Ok(())
}

fn cmd_export(description: &MechanismDescription, output: Option<&Path>) -> CliResult<()> {
    let text = serde_json::to_string_pretty(description)?;
    match output {
        Some(path) => {
            std::fs::write(path, text).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            println!("✓ Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kernel() -> Kernel {
        Kernel::new(&builtin::san_diego_h2()).unwrap()
    }

    #[test]
    fn parses_temperature_command() {
        let cli = Cli::try_parse_from([
            "ck-cli",
            "--json",
            "temperature",
            "--energy",
            "2.3624875e7",
            "--guess",
            "320",
            "--mode",
            "enthalpy",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Temperature { energy, guess, mode, .. } => {
                assert_eq!(energy, 2.3624875e7);
                assert_eq!(guess, 320.0);
                assert_eq!(mode, EnergyMode::Enthalpy);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn default_mode_is_internal_energy() {
        let cli = Cli::try_parse_from(["ck-cli", "temperature", "--energy", "1e6"]).unwrap();
        let Commands::Temperature { mode, .. } = cli.command else {
            panic!("wrong subcommand");
        };
        assert_eq!(mode, EnergyMode::InternalEnergy);
        let bad = ["ck-cli", "temperature", "--energy", "1", "--mode", "entropy"];
        assert!(Cli::try_parse_from(bad).is_err());
    }

    #[test]
    fn comma_separated_mass_fractions() {
        let cli = Cli::try_parse_from([
            "ck-cli", "pressure", "--rho", "1.0", "--t", "300", "--y", "0.5,0.5",
        ])
        .unwrap();
        let Commands::Pressure { composition, .. } = cli.command else {
            panic!("wrong subcommand");
        };
        assert_eq!(composition.y, Some(vec![0.5, 0.5]));
    }

    #[test]
    fn named_composition() {
        let k = kernel();
        let args = CompositionArgs {
            y: None,
            species: vec!["O2=0.23".into(), " N2 = 0.77".into()],
        };
        let y = resolve_composition(&k, &args).unwrap();
        assert_eq!(y[2], 0.23);
        assert_eq!(y[8], 0.77);
        assert_eq!(y.iter().filter(|v| **v != 0.0).count(), 2);
    }

    #[test]
    fn unknown_species_is_reported() {
        let k = kernel();
        let args = CompositionArgs {
            y: None,
            species: vec!["AR=1.0".into()],
        };
        assert!(matches!(
            resolve_composition(&k, &args),
            Err(CliError::UnknownSpecies(name)) if name == "AR"
        ));
    }

    #[test]
    fn nonfinite_mass_fraction_is_rejected() {
        let k = kernel();
        let args = CompositionArgs {
            y: None,
            species: vec!["H2=nan".into()],
        };
        assert!(matches!(
            resolve_composition(&k, &args),
            Err(CliError::Input(ck_core::CkError::NonFinite { .. }))
        ));
    }

    #[test]
    fn default_composition_is_uniform() {
        let k = kernel();
        let args = CompositionArgs {
            y: None,
            species: Vec::new(),
        };
        let y = resolve_composition(&k, &args).unwrap();
        assert_eq!(y, vec![1.0 / 9.0; 9]);
    }

    #[test]
    fn builtin_mechanism_survives_json() {
        let desc = builtin::san_diego_h2();
        let text = serde_json::to_string(&desc).unwrap();
        let back: MechanismDescription = serde_json::from_str(&text).unwrap();
        assert_eq!(back, desc);
    }
}
