use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use maze_pathfinding::algorithms::Algorithm;
use maze_pathfinding::comparison::{compare_parallel_with, compare_with};
use maze_pathfinding::config::Config;
use maze_pathfinding::grid::{Cell, GridModel, Overlay};
use maze_pathfinding::heuristics::Heuristic;
use maze_pathfinding::maze::{generate, MazeConfig};
use maze_pathfinding::runner::{PathResult, Runner};
use maze_pathfinding::statistics::ComparisonTable;

/// Everything an external renderer needs to draw the comparison.
#[derive(Serialize)]
struct Report<'a> {
    config: &'a MazeConfig,
    start: Cell,
    goal: Cell,
    optimal_cost: Option<u64>,
    grid: &'a GridModel,
    results: &'a [PathResult],
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = Config::parse();

    if config.list {
        print_catalog();
        return;
    }

    if let Err(e) = run(&config) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let maze_config = config.maze_config();
    let grid = generate(&maze_config).context("maze generation failed")?;
    let (start, goal) = config.endpoints(&grid);
    let pairs = config.pairs();
    info!("Starting with {maze_config:?}, {start} -> {goal}");

    let mut runner = Runner::new(&grid);
    if let Some(limit) = config.step_limit {
        runner = runner.with_step_limit(limit);
    }
    let results = if config.parallel {
        compare_parallel_with(&runner, start, goal, &pairs)
    } else {
        compare_with(&runner, start, goal, &pairs)
    }
    .context("comparison failed")?;
    let optimal_cost = grid.optimal_cost(start, goal)?;

    if config.json {
        let report = Report {
            config: &maze_config,
            start,
            goal,
            optimal_cost,
            grid: &grid,
            results: &results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Maze: {}x{}, seed {}, carver {}, {} rooms",
        maze_config.width,
        maze_config.height,
        maze_config.seed,
        maze_config.carver,
        maze_config.num_rooms
    );
    println!("Start: {start}, Goal: {goal}");
    match optimal_cost {
        Some(cost) => println!("Optimal path cost: {cost}"),
        None => println!("The goal cannot be reached from the start"),
    }
    println!();

    if config.show_maze {
        for result in &results {
            println!("=== {} ===", result.label());
            print!(
                "{}",
                grid.render(&Overlay {
                    start: Some(start),
                    goal: Some(goal),
                    path: &result.path,
                    explored: &result.explored,
                })
            );
            println!();
        }
    }

    println!("=== ALGORITHM COMPARISON RESULTS ===");
    print!("{}", ComparisonTable::new(&results, optimal_cost, grid.len()));
    Ok(())
}

fn print_catalog() {
    println!("Algorithms:");
    for algorithm in Algorithm::ALL {
        let needs = if algorithm.requires_heuristic() {
            ", needs a heuristic"
        } else {
            ""
        };
        let optimal = if algorithm.guarantees_optimal() {
            "optimal"
        } else {
            "not optimal"
        };
        println!("  {:<20} {} ({optimal}{needs})", algorithm.name(), algorithm.title());
    }

    println!("Heuristics:");
    for heuristic in Heuristic::ALL {
        let admissible = if heuristic.is_admissible() {
            "admissible"
        } else {
            "not admissible"
        };
        println!("  {:<20} {} ({admissible})", heuristic.name(), heuristic.title());
    }
}
