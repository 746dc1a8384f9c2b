use log::debug;

/// Number of consecutive measurements summed into one window.
pub const WINDOW_SIZE: usize = 3;

/// Count the adjacent pairs where the later value is strictly greater.
pub fn count_increases<T: PartialOrd>(values: &[T]) -> usize {
    values.windows(2).filter(|pair| pair[1] > pair[0]).count()
}

/// Sums of every run of [`WINDOW_SIZE`] consecutive measurements.
///
/// Widened to `i128` so three `i64` measurements can't overflow. Empty when
/// there are fewer measurements than fit in one window.
pub fn window_sums(depths: &[i64]) -> Vec<i128> {
    depths
        .windows(WINDOW_SIZE)
        .map(|window| window.iter().copied().map(i128::from).sum::<i128>())
        .collect()
}

pub fn solve_puzzle_part1(depths: &[i64]) -> usize {
    let count = count_increases(depths);
    debug!("{count} increases over {} measurements", depths.len());
    count
}

pub fn solve_puzzle_part2(depths: &[i64]) -> usize {
    let sums = window_sums(depths);
    let count = count_increases(&sums);
    debug!("{count} increases over {} window sums", sums.len());
    count
}
