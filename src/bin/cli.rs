use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use edge_capture_game::constructor;
use edge_capture_game::memo::Memo;
use edge_capture_game::multigraph::Multigraph;
use edge_capture_game::solver::{Progress, Solver};
use edge_capture_game::SolverError;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum GraphType {
    File,
    Complete,
    Wheel,
    #[value(name = "hanging_tree")]
    HangingTree,
    Friendship,
    #[value(name = "balloon_path")]
    BalloonPath,
    #[value(name = "balloon_cycle")]
    BalloonCycle,
    #[value(name = "balloon_family")]
    BalloonFamily,
    Hypercube,
    #[value(name = "double_ngon")]
    DoubleNgon,
    Petersen,
    #[value(name = "loopy_star")]
    LoopyStar,
    #[value(name = "m_by_n")]
    MByN,
    #[value(name = "cycle_with_loops")]
    CycleWithLoops,
    Other,
}

/// Solves an edge-deletion capture game on a named or file-loaded
/// multigraph and reports the optimal-play outcome.
#[derive(Parser, Debug)]
#[command(name = "edge_capture_game", version, about)]
struct Cli {
    #[arg(long, value_enum)]
    r#type: GraphType,

    #[arg(long)]
    nodes: Option<usize>,

    #[arg(long)]
    spokes: Option<usize>,

    #[arg(long)]
    loops: Option<usize>,

    #[arg(long, num_args = 1.., value_delimiter = ' ')]
    params: Vec<usize>,

    #[arg(long = "save_memo")]
    save_memo: bool,

    #[arg(long, default_value = "game_input.txt")]
    input: PathBuf,

    #[arg(long, default_value = "net_scores.txt")]
    output: PathBuf,
}

fn build_graph(cli: &Cli) -> Result<Multigraph, SolverError> {
    let need = |name: &str, value: Option<usize>| {
        value.ok_or_else(|| SolverError::InvalidInput {
            reason: format!("--type {:?} requires --{name}", cli.r#type),
        })
    };
    let param = |i: usize, name: &str| {
        cli.params.get(i).copied().ok_or_else(|| SolverError::InvalidInput {
            reason: format!("--type {:?} requires --params {name}", cli.r#type),
        })
    };

    match cli.r#type {
        GraphType::File => Multigraph::from_edge_file(&cli.input),
        GraphType::Complete => Ok(constructor::complete_graph(need("nodes", cli.nodes)?)),
        GraphType::Wheel => Ok(constructor::wheel_graph(need("spokes", cli.spokes)?)),
        GraphType::HangingTree => Ok(constructor::hanging_tree(need("nodes", cli.nodes)?)),
        GraphType::Friendship => {
            Ok(constructor::friendship_graph(param(0, "n")?, param(1, "k")?))
        }
        GraphType::BalloonPath => Ok(constructor::balloon_path(need("nodes", cli.nodes)?)),
        GraphType::BalloonCycle => Ok(constructor::balloon_cycle(need("nodes", cli.nodes)?)),
        GraphType::BalloonFamily => Ok(constructor::balloon_family(need("nodes", cli.nodes)?)),
        GraphType::Hypercube => {
            Ok(constructor::hypercube(need("nodes", cli.nodes)? as u32))
        }
        GraphType::DoubleNgon => Ok(constructor::double_ngon(need("nodes", cli.nodes)?)),
        GraphType::Petersen => Ok(constructor::petersen()),
        GraphType::LoopyStar => {
            Ok(constructor::loopy_star(need("spokes", cli.spokes)?, need("loops", cli.loops)?))
        }
        GraphType::MByN => Ok(constructor::m_by_n_grid(param(0, "m")?, param(1, "n")?)),
        GraphType::CycleWithLoops => Ok(constructor::cycle_with_loops(need("nodes", cli.nodes)?)),
        GraphType::Other => Multigraph::from_edge_file(&cli.input),
    }
}

fn run() -> Result<(), SolverError> {
    let cli = Cli::parse();
    let graph = build_graph(&cli)?;

    let memo = if cli.save_memo {
        Memo::load(&cli.output)?
    } else {
        Memo::new()
    };
    let mut solver = Solver::with_memo(memo);
    let mut progress = Progress::new(graph.edge_count());

    let start = Instant::now();
    let (net, sequence) = solver.solve_with_progress(&graph, Some(&mut progress));
    let elapsed = start.elapsed();

    let total_vertices = graph.vertex_count() as i64;
    let first = (total_vertices + net) / 2;
    let second = (total_vertices - net) / 2;

    println!("elapsed: {:.3}s", elapsed.as_secs_f64());
    println!(
        "score: first={first} second={second} net={net} ({})",
        match net.cmp(&0) {
            std::cmp::Ordering::Greater => "first player wins",
            std::cmp::Ordering::Less => "second player wins",
            std::cmp::Ordering::Equal => "tie",
        }
    );
    println!(
        "sequence: {}",
        sequence
            .iter()
            .map(|(u, v)| format!("({u},{v})"))
            .collect::<Vec<_>>()
            .join(" ")
    );

    if cli.save_memo {
        solver.into_memo().save(&cli.output)?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run() {
        error!(%err, "solver run failed");
        std::process::exit(1);
    }
}
