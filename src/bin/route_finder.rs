use clap::{Parser, Subcommand, ValueEnum};
use statespace::{
    environment::{
        romania, romania_straight_line_distances, ExtendableMap, MapConfig, RouteProblem,
        StraightLineDistance,
    },
    search::{
        bidirectional::{BidirectionalSearch, DirectionStrategy, MeetingPolicy},
        search_engines::{IterativeDeepeningSearch, RecursiveBestFirstSearch},
        validate, CancellationToken, Heuristic, SearchController, SearchEngine, SearchEngineName,
        SearchResult, SearchStatistics, Verbosity, ZeroHeuristic,
    },
};
use std::{path::PathBuf, process, thread, time::Duration};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version)]
/// Find a route between locations of a road map.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(help = "The start location", short = 's', long = "start", id = "START")]
    start: String,
    #[arg(
        help = "A goal location, repeat for several goals",
        short = 'g',
        long = "goal",
        id = "GOAL",
        required = true
    )]
    goals: Vec<String>,
    #[arg(
        help = "The TOML map description, the map of Romania is used if omitted",
        short = 'm',
        long = "map",
        id = "MAP"
    )]
    map: Option<PathBuf>,
    #[arg(
        help = "Give up after this long, e.g. \"30s\" or \"2m\"",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Also write the plan to this file",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    output: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search forward from the start location with a single engine.
    Search {
        #[arg(
            value_enum,
            help = "The search engine to use",
            short = 'e',
            long = "engine",
            id = "ENGINE",
            default_value_t = SearchEngineName::AStar
        )]
        search_engine_name: SearchEngineName,
        #[arg(
            help = "Use the zero heuristic instead of straight-line distances",
            long = "no-heuristic"
        )]
        no_heuristic: bool,
        #[arg(
            help = "Largest depth limit tried by iterative deepening",
            long = "max-depth",
            id = "MAX_DEPTH"
        )]
        max_depth: Option<usize>,
        #[arg(
            help = "Let recursive best-first search revisit states on its current path",
            long = "allow-loops"
        )]
        allow_loops: bool,
    },
    /// Search from the start and from the goals at the same time, on two
    /// threads, until the two searches meet.
    Bidirectional {
        #[arg(
            value_enum,
            help = "How the forward direction orders its frontier",
            long = "forward",
            id = "FORWARD",
            default_value_t = DirectionStrategyName::BreadthFirst
        )]
        forward: DirectionStrategyName,
        #[arg(
            value_enum,
            help = "How the backward direction orders its frontier",
            long = "backward",
            id = "BACKWARD",
            default_value_t = DirectionStrategyName::BreadthFirst
        )]
        backward: DirectionStrategyName,
        #[arg(
            help = "Ancestor levels of the other frontier checked for a meeting",
            long = "overrun",
            id = "OVERRUN",
            default_value_t = 1,
            conflicts_with = "any_generated"
        )]
        overrun: usize,
        #[arg(
            help = "Meet on any state the other direction has generated",
            long = "any-generated"
        )]
        any_generated: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
enum DirectionStrategyName {
    BreadthFirst,
    UniformCost,
    AStar,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.verbosity.directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let (map, is_romania) = match &cli.map {
        Some(path) => {
            let config = MapConfig::from_path(path).expect("Unable to load map description");
            (config.build().expect("Invalid map description"), false)
        }
        None => (romania(), true),
    };
    for location in std::iter::once(&cli.start).chain(&cli.goals) {
        if !map.contains(location) {
            error!(%location, "unknown location");
            process::exit(1);
        }
    }

    let token = CancellationToken::new();
    if let Some(time_limit) = cli.time_limit {
        let token = token.clone();
        thread::spawn(move || {
            thread::sleep(time_limit);
            warn!(?time_limit, "time limit reached");
            token.cancel();
        });
    }
    let controller = SearchController::with_token(token);

    let goals: Vec<&str> = cli.goals.iter().map(String::as_str).collect();
    let problem = RouteProblem::with_goals(&map, &cli.start, &goals);

    let (result, statistics) = match &cli.command {
        Commands::Search {
            search_engine_name,
            no_heuristic,
            max_depth,
            allow_loops,
        } => {
            let heuristic: Box<dyn Heuristic<String>> = if *no_heuristic {
                Box::new(ZeroHeuristic)
            } else {
                distance_heuristic(&map, is_romania, &cli.goals)
            };
            match search_engine_name {
                SearchEngineName::IDS => IterativeDeepeningSearch::new()
                    .with_max_depth(*max_depth)
                    .with_controller(controller)
                    .search(&problem),
                SearchEngineName::RBFS => RecursiveBestFirstSearch::new(heuristic)
                    .with_loop_avoidance(!allow_loops)
                    .with_controller(controller)
                    .search(&problem),
                _ => search_engine_name.search(&problem, heuristic, controller),
            }
        }
        Commands::Bidirectional {
            forward,
            backward,
            overrun,
            any_generated,
        } => {
            let meeting_policy = if *any_generated {
                MeetingPolicy::AnyGenerated
            } else {
                MeetingPolicy::Overrun(*overrun)
            };
            let start = [cli.start.clone()];
            let mut engine = BidirectionalSearch::with_strategies(
                direction_strategy(*forward, &map, is_romania, &cli.goals),
                direction_strategy(*backward, &map, false, &start),
            )
            .with_meeting_policy(meeting_policy)
            .with_controller(controller);
            engine
                .search(&problem.clone().bidirectional())
                .expect("Bidirectional search failed")
        }
    };

    report(&cli, &problem, result, &statistics);
}

/// Straight-line distance to the single goal, from the built-in table for
/// Bucharest or from the map's positions. Falls back to the zero heuristic.
fn distance_heuristic(
    map: &ExtendableMap,
    is_romania: bool,
    goals: &[String],
) -> Box<dyn Heuristic<String> + Send> {
    let [goal] = goals else {
        info!("several goals, using the zero heuristic");
        return Box::new(ZeroHeuristic);
    };
    if is_romania && goal == "Bucharest" {
        return Box::new(romania_straight_line_distances());
    }
    match StraightLineDistance::from_positions(map, goal) {
        Ok(heuristic) => Box::new(heuristic),
        Err(error) => {
            warn!(%error, "using the zero heuristic");
            Box::new(ZeroHeuristic)
        }
    }
}

fn direction_strategy(
    name: DirectionStrategyName,
    map: &ExtendableMap,
    is_romania: bool,
    targets: &[String],
) -> DirectionStrategy<String> {
    match name {
        DirectionStrategyName::BreadthFirst => DirectionStrategy::BreadthFirst,
        DirectionStrategyName::UniformCost => DirectionStrategy::UniformCost,
        DirectionStrategyName::AStar => {
            DirectionStrategy::AStar(distance_heuristic(map, is_romania, targets))
        }
    }
}

fn report(
    cli: &Cli,
    problem: &RouteProblem,
    result: SearchResult<statespace::environment::MoveTo>,
    statistics: &SearchStatistics,
) {
    let SearchResult::Solution(plan) = result else {
        info!("no plan found");
        println!("No route from {} to {}", cli.start, cli.goals.join(" or "));
        process::exit(1);
    };

    info!("validating plan");
    let cost = match validate(&plan, problem) {
        Ok(cost) => cost,
        Err(error) => {
            error!(%error, "plan is invalid");
            process::exit(1);
        }
    };
    info!(
        plan_length = plan.len(),
        plan_cost = cost,
        expanded_nodes = statistics.get_expanded_nodes(),
        "plan found"
    );

    let route = std::iter::once(cli.start.as_str())
        .chain(plan.steps().iter().map(|step| step.destination()))
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("Route: {}", route);
    println!("Route length: {}", plan.len());
    println!("Route cost: {}", cost);

    if let Some(output) = &cli.output {
        std::fs::write(output, format!("{}\n", route)).expect("Failed to write plan file");
    }
}
