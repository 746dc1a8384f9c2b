use anyhow::{Context, Result};
use log::info;
use parse_ints::load_ints;
use sonar_sweep::{solve_puzzle_part1, solve_puzzle_part2};

const INPUT_PATH: &str = "input/day1.txt";

fn run() -> Result<(usize, usize)> {
    let depths = load_ints(INPUT_PATH).context("loading depth measurements")?;
    info!("read {} measurements from {INPUT_PATH}", depths.len());
    let part1 = solve_puzzle_part1(&depths);
    let part2 = solve_puzzle_part2(&depths);
    Ok((part1, part2))
}

fn main() {
    env_logger::init();
    match run() {
        Ok((part1, part2)) => {
            println!("{part1}");
            println!("{part2}");
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
