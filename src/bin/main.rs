use std::process::exit;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{error, info};

use bounded_simplex::{PivotRuleKind, SolverConfig};
use bounded_simplex::case_study::{CaseStudy, OvertimeAllocation, ProductionPlanning};

#[derive(Parser, Debug)]
#[command(
    version,
    author,
    about = "Solve small linear programs with bounded variables using the two-phase simplex method"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, default_value_t = 1e-9, help = "Base tolerance for all comparisons.")]
    tolerance: f64,

    #[arg(long, global = true, help = "Maximum number of pivots and bound flips.")]
    max_iterations: Option<usize>,

    #[arg(long, global = true, value_enum, default_value_t = PivotRuleArg::FirstProfitable)]
    pivot_rule: PivotRuleArg,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum PivotRuleArg {
    FirstProfitable,
    SteepestDescent,
}

impl From<PivotRuleArg> for PivotRuleKind {
    fn from(value: PivotRuleArg) -> Self {
        match value {
            PivotRuleArg::FirstProfitable => PivotRuleKind::FirstProfitable,
            PivotRuleArg::SteepestDescent => PivotRuleKind::SteepestDescentAlongVariable,
        }
    }
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    #[command(about = "Maximize profit over regular and overtime production on two machines")]
    Production(ProductionArgs),

    #[command(about = "Maximize output over regular and overtime production within a budget")]
    Overtime(OvertimeArgs),
}

#[derive(Args, Clone, Debug)]
struct ProductionArgs {
    #[arg(long, value_delimiter = ',', help = "Profit per unit of each of the four options.")]
    profit: Option<Vec<f64>>,

    #[arg(long, value_delimiter = ',', help = "Coefficients of the first resource constraint.")]
    row1: Option<Vec<f64>>,

    #[arg(long, help = "Available amount of the first resource.")]
    rhs1: Option<f64>,

    #[arg(long, value_delimiter = ',', help = "Coefficients of the second resource constraint.")]
    row2: Option<Vec<f64>>,

    #[arg(long, help = "Available amount of the second resource.")]
    rhs2: Option<f64>,

    #[arg(long, value_delimiter = ',', help = "Capacity of each of the four options.")]
    capacity: Option<Vec<f64>>,
}

#[derive(Args, Clone, Debug)]
struct OvertimeArgs {
    #[arg(long, value_delimiter = ',', help = "Output per unit of each of the four options.")]
    output: Option<Vec<f64>>,

    #[arg(long, value_delimiter = ',', help = "Cost per unit of each of the four options.")]
    cost: Option<Vec<f64>>,

    #[arg(long, help = "Total budget.")]
    budget: Option<f64>,

    #[arg(long, value_delimiter = ',', help = "Capacity of each of the four options.")]
    capacity: Option<Vec<f64>>,
}

/// Replace a default by a user supplied list, which needs to have exactly four values.
fn override_four(name: &str, target: &mut [f64; 4], values: Option<&Vec<f64>>) {
    if let Some(values) = values {
        let Ok(values) = <[f64; 4]>::try_from(values.as_slice()) else {
            error!("Expected four values for --{name}, got {}", values.len());
            exit(1);
        };
        *target = values;
    }
}

fn main_production(args: &ProductionArgs, config: &SolverConfig) {
    let mut case = ProductionPlanning::default();
    override_four("profit", &mut case.profit, args.profit.as_ref());
    override_four("row1", &mut case.rows[0], args.row1.as_ref());
    override_four("row2", &mut case.rows[1], args.row2.as_ref());
    override_four("capacity", &mut case.capacity, args.capacity.as_ref());
    if let Some(rhs) = args.rhs1 {
        case.rhs[0] = rhs;
    }
    if let Some(rhs) = args.rhs2 {
        case.rhs[1] = rhs;
    }

    report(&case, config);
}

fn main_overtime(args: &OvertimeArgs, config: &SolverConfig) {
    let mut case = OvertimeAllocation::default();
    override_four("output", &mut case.output, args.output.as_ref());
    override_four("cost", &mut case.cost, args.cost.as_ref());
    override_four("capacity", &mut case.capacity, args.capacity.as_ref());
    if let Some(budget) = args.budget {
        case.budget = budget;
    }

    report(&case, config);
}

fn report<C: CaseStudy>(case: &C, config: &SolverConfig) {
    match case.solve_with(config) {
        Ok(report) => {
            info!("Solved with {config:?}");
            println!("{report}");
        },
        Err(error) => {
            error!("Invalid input: {error}");
            exit(1);
        },
    }
}

fn main() {
    env_logger::builder().parse_env("LOG").init();
    let cli = Cli::parse();

    if cli.tolerance.is_nan() || cli.tolerance <= 0f64 {
        error!("Tolerance should be strictly positive, got {}", cli.tolerance);
        exit(1);
    }
    let mut config = SolverConfig::default()
        .with_tolerance(cli.tolerance)
        .with_pivot_rule(cli.pivot_rule.into());
    if let Some(max_iterations) = cli.max_iterations {
        config = config.with_max_iterations(max_iterations);
    }

    match cli.command {
        Commands::Production(args) => main_production(&args, &config),
        Commands::Overtime(args) => main_overtime(&args, &config),
    }
}
