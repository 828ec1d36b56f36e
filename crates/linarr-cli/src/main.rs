use linarr::search::{self, ParallelOptions, parallel};
use linarr::{
    SparseGraph, permutation, sequence_cost, stable_sequence_cost, successive_augmentation,
};
use linarr_io::SequenceFile;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

type Graph = SparseGraph<f64, u32>;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Format(linarr_io::Error),
    Arrangement(linarr::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Format(err) => write!(f, "{err}"),
            CliError::Arrangement(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<linarr_io::Error> for CliError {
    fn from(value: linarr_io::Error) -> Self {
        Self::Format(value)
    }
}

impl From<linarr::Error> for CliError {
    fn from(value: linarr::Error) -> Self {
        Self::Arrangement(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Command {
    #[default]
    Local,
    Parallel,
    Augment,
    Cost,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    graph: Option<String>,
    pattern: bool,
    sequence: Option<String>,
    config: Option<String>,
    workers: Option<usize>,
    out: Option<String>,
    json: bool,
    log: Option<String>,
}

#[derive(Serialize)]
struct Summary<'a> {
    command: Command,
    nodes: usize,
    nnz: usize,
    initial_cost: f64,
    cost: f64,
    stable_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    rounds: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    workers: Option<usize>,
    sequence: &'a [u32],
}

fn usage() -> &'static str {
    "linarr-cli\n\
\n\
USAGE:\n\
  linarr-cli [local] [options] <graph>\n\
  linarr-cli parallel [--workers <n>] [--config <json>] [options] <graph>\n\
  linarr-cli augment [options] <graph>\n\
  linarr-cli cost --sequence <path> [--pattern] [--json] <graph>\n\
\n\
OPTIONS:\n\
  --pattern            graph file has no weight column (all weights are 1)\n\
  --sequence <path>    initial sequence file (default: identity order)\n\
  --out <path>         write the resulting sequence file here (default: stdout)\n\
  --json               print a JSON summary to stdout\n\
  --log <filter>       tracing filter, e.g. debug or linarr=trace (default: RUST_LOG or info)\n\
\n\
NOTES:\n\
  - Node indices are 1-based in files.\n\
  - --config reads a JSON object such as {\"workers\": 4}; --workers overrides it.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "local" => args.command = Command::Local,
            "parallel" => args.command = Command::Parallel,
            "augment" => args.command = Command::Augment,
            "cost" => args.command = Command::Cost,
            "--pattern" => args.pattern = true,
            "--json" => args.json = true,
            "--sequence" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.sequence = Some(path.clone());
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--workers" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let n = n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?;
                if n == 0 {
                    return Err(CliError::Usage(usage()));
                }
                args.workers = Some(n);
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--log" => {
                let Some(filter) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.log = Some(filter.clone());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.graph.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.graph = Some(path.to_string());
            }
        }
    }

    if args.graph.is_none() || (args.command == Command::Cost && args.sequence.is_none()) {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_options(args: &Args) -> Result<ParallelOptions, CliError> {
    let mut opts = match args.config.as_deref() {
        Some(path) => serde_json::from_str::<ParallelOptions>(&std::fs::read_to_string(path)?)?,
        None => ParallelOptions::default(),
    };
    if args.workers.is_some() {
        opts.workers = args.workers;
    }
    Ok(opts)
}

fn load_graph(args: &Args) -> Result<Graph, CliError> {
    let Some(path) = args.graph.as_deref() else {
        return Err(CliError::Usage(usage()));
    };
    let g = if args.pattern {
        linarr_io::load_pattern_graph(path)?
    } else {
        linarr_io::load_graph(path)?
    };
    Ok(g)
}

fn initial_sequence(args: &Args, g: &Graph) -> Result<Vec<u32>, CliError> {
    match args.sequence.as_deref() {
        Some(path) => {
            let file: SequenceFile<f64, u32> = linarr_io::load_sequence(path)?;
            permutation::validate_full(&file.sequence, g.num_nodes())?;
            tracing::info!(recorded_cost = %file.cost, "starting from stored sequence");
            Ok(file.sequence)
        }
        None => Ok(permutation::identity(g.num_nodes())?),
    }
}

fn write_result(args: &Args, cost: f64, sequence: &[u32]) -> Result<(), CliError> {
    match args.out.as_deref() {
        Some(path) => linarr_io::save_sequence(path, cost, sequence)?,
        None if !args.json => {
            linarr_io::write_sequence(std::io::stdout().lock(), cost, sequence)?;
        }
        None => {}
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let g = load_graph(&args)?;
    let start = initial_sequence(&args, &g)?;
    let initial_cost = sequence_cost(&g, &start)?;

    let mut workers = None;
    let (sequence, cost, rounds) = match args.command {
        Command::Local => {
            let out = search::search(&g, start)?;
            (out.sequence, out.cost, Some(out.rounds))
        }
        Command::Parallel => {
            let opts = load_options(&args)?;
            workers = Some(opts.resolved_workers());
            let out = parallel::search(&g, start, &opts)?;
            (out.sequence, out.cost, Some(out.rounds))
        }
        Command::Augment => {
            let out = successive_augmentation(&g, &start)?;
            (out.sequence, out.cost, None)
        }
        Command::Cost => (start, initial_cost, None),
    };

    let stable_cost = stable_sequence_cost(&g, &sequence)?;
    tracing::info!(initial = initial_cost, cost, stable = stable_cost, "done");

    if args.command != Command::Cost {
        write_result(&args, cost, &sequence)?;
    }

    if args.json {
        let summary = Summary {
            command: args.command,
            nodes: g.num_nodes(),
            nnz: g.nnz(),
            initial_cost,
            cost,
            stable_cost,
            rounds,
            workers,
            sequence: &sequence,
        };
        serde_json::to_writer_pretty(std::io::stdout().lock(), &summary)?;
        println!();
    } else if args.command == Command::Cost {
        println!("{cost:.6}");
    }
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing(args.log.as_deref());

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
