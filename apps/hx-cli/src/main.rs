mod error;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use error::CliResult;
use hx_core::units::{Temperature, convection, degc, k, w_per_m2k};
use hx_materials::MaterialPropertyTable;
use hx_project::DesignEvaluation;
use hx_sink::{
    DeltaTPolicy, FinProfileKind, HeatRateBreakdown, HeatSink, HeatSinkReport, LengthSuggestion,
    StraightFinGeometry, StraightHeatSink, SuggestionRequest, ThermalCoefficients,
    suggest_lengths,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Reference `h` samples spanning free and forced convection [W/(m²·K)].
const DEFAULT_H_VALUES: [f64; 7] = [5.0, 10.0, 25.0, 50.0, 100.0, 150.0, 250.0];

#[derive(Parser)]
#[command(name = "hx")]
#[command(
    about = "Fin heat-sink calculator - efficiency, heat rate and fin length advice",
    long_about = None
)]
struct Cli {
    /// Custom material table (YAML) instead of the built-in one
    #[arg(long, global = true)]
    materials: Option<PathBuf>,

    /// Print results as JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List materials and their valid temperature ranges
    Materials,
    /// Look up thermal conductivity of a material
    Conductivity {
        /// Material name or alias
        material: String,
        /// Temperature (K, or °C with --celsius)
        temperature: f64,
        #[arg(long)]
        celsius: bool,
    },
    /// Validate a design file
    Validate {
        /// Path to the design YAML file
        design_path: PathBuf,
    },
    /// Evaluate every heat sink in a design file
    Evaluate {
        /// Path to the design YAML file
        design_path: PathBuf,
    },
    /// Evaluate a single straight-fin heat sink
    Sink(SinkArgs),
    /// Suggest fin lengths over a range of convection coefficients
    Suggest(SuggestArgs),
}

#[derive(Args)]
struct SinkArgs {
    /// rectangular, triangular or parabolic
    #[arg(long, default_value = "rectangular")]
    profile: String,
    #[arg(long)]
    material: String,
    /// Convection coefficient h [W/(m²·K)]
    #[arg(long)]
    h: f64,
    #[arg(long, default_value_t = 1)]
    fin_count: u32,
    /// Fin length L [m]
    #[arg(long)]
    length: f64,
    /// Fin width w [m]
    #[arg(long)]
    width: f64,
    /// Fin root thickness t [m]
    #[arg(long)]
    thickness: f64,
    /// Base height along which fins are stacked [m]
    #[arg(long)]
    base_height: f64,
    /// Base temperature (K, or °C with --celsius)
    #[arg(long)]
    base_temp: f64,
    /// Ambient temperature (K, or °C with --celsius)
    #[arg(long)]
    ambient_temp: f64,
    /// Temperature for the conductivity lookup; defaults to the base temperature
    #[arg(long)]
    material_temp: Option<f64>,
    #[arg(long)]
    celsius: bool,
    /// Report a signed heat rate when base <= ambient instead of failing
    #[arg(long)]
    allow_reverse: bool,
}

#[derive(Args)]
struct SuggestArgs {
    #[arg(long)]
    material: String,
    /// Temperature for the conductivity lookup (K, or °C with --celsius)
    #[arg(long)]
    temperature: f64,
    #[arg(long, default_value = "rectangular")]
    profile: String,
    /// Fin root thickness t [m]
    #[arg(long)]
    thickness: f64,
    /// Convection coefficients [W/(m²·K)]; defaults span free and forced convection
    #[arg(long = "h", num_args = 1.., value_delimiter = ',')]
    h_values: Vec<f64>,
    #[arg(long)]
    celsius: bool,
    /// Include the decision and reference tables
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> CliResult<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let table = load_table(cli.materials.as_deref())?;

    match cli.command {
        Commands::Materials => cmd_materials(&table, cli.json),
        Commands::Conductivity {
            material,
            temperature,
            celsius,
        } => cmd_conductivity(&table, &material, temperature_input(temperature, celsius), cli.json),
        Commands::Validate { design_path } => cmd_validate(&design_path),
        Commands::Evaluate { design_path } => cmd_evaluate(&design_path, cli.json),
        Commands::Sink(args) => cmd_sink(&table, &args, cli.json),
        Commands::Suggest(args) => cmd_suggest(&table, args, cli.json),
    }
}

fn load_table(path: Option<&Path>) -> CliResult<Cow<'static, MaterialPropertyTable>> {
    Ok(match path {
        Some(path) => {
            debug!(path = %path.display(), "loading material table");
            Cow::Owned(MaterialPropertyTable::load_yaml(path)?)
        }
        None => Cow::Borrowed(MaterialPropertyTable::builtin()),
    })
}

fn temperature_input(value: f64, celsius: bool) -> Temperature {
    if celsius { degc(value) } else { k(value) }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_materials(table: &MaterialPropertyTable, json: bool) -> CliResult<()> {
    let summaries = table.summaries();
    if json {
        return print_json(&summaries);
    }

    println!("Materials ({}):", summaries.len());
    for s in summaries {
        let aliases = if s.aliases.is_empty() {
            String::new()
        } else {
            format!(" [{}]", s.aliases.join(", "))
        };
        println!(
            "  {}{}  {:.0}-{:.0} K ({} samples)",
            s.name, aliases, s.min_k, s.max_k, s.sample_count
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct ConductivityOutput<'a> {
    material: &'a str,
    temperature_k: f64,
    conductivity_w_mk: f64,
}

fn cmd_conductivity(
    table: &MaterialPropertyTable,
    material: &str,
    temperature: Temperature,
    json: bool,
) -> CliResult<()> {
    let curve = table.curve(material)?;
    let conductivity = table.resolve(material, temperature)?;
    let out = ConductivityOutput {
        material: curve.name(),
        temperature_k: temperature.value,
        conductivity_w_mk: conductivity.value,
    };
    if json {
        return print_json(&out);
    }
    println!(
        "{} @ {:.2} K: k = {:.2} W/(m·K)",
        out.material, out.temperature_k, out.conductivity_w_mk
    );
    Ok(())
}

fn cmd_validate(design_path: &Path) -> CliResult<()> {
    println!("Validating design: {}", design_path.display());
    let design = hx_project::load_yaml(design_path)?;
    println!(
        "✓ Design is valid ({} sinks{})",
        design.sinks.len(),
        if design.advisor.is_some() {
            ", advisor"
        } else {
            ""
        }
    );
    Ok(())
}

fn cmd_evaluate(design_path: &Path, json: bool) -> CliResult<()> {
    let eval = hx_project::evaluate_file(design_path)?;
    if json {
        return print_json(&eval);
    }
    print_evaluation(&eval);
    Ok(())
}

fn print_evaluation(eval: &DesignEvaluation) {
    if !eval.name.is_empty() {
        println!("{}", eval.name);
    }
    println!(
        "Base {:.2} K, ambient {:.2} K",
        eval.base_temperature_k, eval.ambient_temperature_k
    );
    for sink in &eval.sinks {
        let label = if sink.name.is_empty() {
            sink.id.clone()
        } else {
            format!("{} - {}", sink.id, sink.name)
        };
        println!("\n{label} ({})", sink.material);
        print_report(&sink.report, &sink.heat_rate);
    }
    if let Some(advice) = &eval.advisor {
        println!();
        print_suggestions(advice);
    }
}

#[derive(Serialize)]
struct SinkOutput {
    report: HeatSinkReport,
    heat_rate: HeatRateBreakdown,
}

fn cmd_sink(table: &MaterialPropertyTable, args: &SinkArgs, json: bool) -> CliResult<()> {
    let profile: FinProfileKind = args.profile.parse()?;
    let t_base = temperature_input(args.base_temp, args.celsius);
    let t_env = temperature_input(args.ambient_temp, args.celsius);
    let t_material = args
        .material_temp
        .map(|t| temperature_input(t, args.celsius))
        .unwrap_or(t_base);

    let coefficients =
        ThermalCoefficients::from_material(table, &args.material, t_material, w_per_m2k(args.h))?;
    let geometry = StraightFinGeometry::from_si(
        args.fin_count,
        args.length,
        args.width,
        args.thickness,
        args.base_height,
    )?;
    let sink = StraightHeatSink::new(profile, geometry, coefficients);

    let policy = if args.allow_reverse {
        DeltaTPolicy::AllowReverse
    } else {
        DeltaTPolicy::Reject
    };
    let out = SinkOutput {
        report: sink.report(),
        heat_rate: sink.heat_rate_breakdown(t_base, t_env, policy)?,
    };
    if json {
        return print_json(&out);
    }

    let regime = if convection::is_free_convection(args.h) {
        "free convection"
    } else {
        "forced convection"
    };
    println!("{} ({regime}, h = {} W/(m²·K))", args.material, args.h);
    print_report(&out.report, &out.heat_rate);
    Ok(())
}

fn print_report(r: &HeatSinkReport, q: &HeatRateBreakdown) {
    println!("  Profile:        {} ({})", r.profile, r.contour);
    println!("  Fins:           {}", r.fin_count);
    println!("  k:              {:.2} W/(m·K)", r.conductivity_w_mk);
    println!("  m:              {:.4} 1/m", r.fin_parameter_per_m);
    println!("  Lc:             {:.5} m", r.corrected_length_m);
    println!("  Fin area:       {:.4e} m² (total {:.4e} m²)", r.fin_area_m2, r.total_fin_area_m2);
    println!("  Exposed base:   {:.4e} m² of {:.4e} m²", r.exposed_base_area_m2, r.base_area_m2);
    if let Some(gap) = r.fin_gap_m {
        println!("  Fin gap:        {:.3} mm", gap * 1e3);
    }
    println!("  Efficiency:     {:.4}", r.efficiency);
    println!("  Effectiveness:  {:.3}", r.effectiveness);
    println!("  Overall eff.:   {:.3}", r.overall_effectiveness);
    println!("  Q per fin:      {:.4} W", q.per_fin_w);
    println!("  Q fins:         {:.4} W", q.fins_w);
    println!("  Q base:         {:.4} W", q.base_w);
    println!("  Q total:        {:.4} W  (dT = {:.2} K)", q.total_w, q.delta_t_k);
}

fn cmd_suggest(table: &MaterialPropertyTable, args: SuggestArgs, json: bool) -> CliResult<()> {
    let profile: FinProfileKind = args.profile.parse()?;
    let h_values = if args.h_values.is_empty() {
        DEFAULT_H_VALUES.to_vec()
    } else {
        args.h_values
    };
    let request = SuggestionRequest::new(
        args.material,
        temperature_input(args.temperature, args.celsius),
        profile,
        hx_core::units::m(args.thickness),
        h_values,
    )
    .verbose(args.verbose);

    let suggestions = suggest_lengths(table, &request)?;
    if json {
        return print_json(&suggestions);
    }
    println!(
        "{} {} fins, t = {} m, at {:.2} K",
        request.material,
        profile.name(),
        request.fin_thickness.value,
        request.temperature.value
    );
    print_suggestions(&suggestions);
    Ok(())
}

fn print_suggestions(suggestions: &[LengthSuggestion]) {
    println!(
        "{:>10} {:>10} {:>12} {:>8} {:>8} {:>8}",
        "h", "m [1/m]", "L [mm]", "mL", "eta", "Q/Qinf"
    );
    for s in suggestions {
        println!(
            "{:>10.1} {:>10.3} {:>12.3} {:>8.3} {:>8.4} {:>8.4}",
            s.h_w_m2k,
            s.fin_parameter_per_m,
            s.length_m * 1e3,
            s.ml,
            s.efficiency,
            s.heat_ratio
        );
    }

    for s in suggestions {
        if let Some(reference) = &s.reference_table {
            println!("\nReference table, h = {} W/(m²·K):", s.h_w_m2k);
            println!("{:>6} {:>12} {:>8} {:>8}", "mL", "L [mm]", "Q/Qinf", "eta");
            for p in reference {
                println!(
                    "{:>6.1} {:>12.3} {:>8.3} {:>8.4}",
                    p.ml,
                    p.length_m * 1e3,
                    p.heat_ratio,
                    p.efficiency
                );
            }
        }
        if let Some(steps) = &s.decision_table {
            println!("Search steps: {}", steps.len());
            for step in steps {
                println!(
                    "  L = {:>10.4} mm  eta = {:.4}  dQ/dL = {:.4e}",
                    step.length_m * 1e3,
                    step.efficiency,
                    step.marginal_return
                );
            }
        }
    }
}
