#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    grid: &'a str,
    word: &'a str,
}

fuzz_target!(|input: Input| {
    // Arbitrary grids and words must never panic
    let traced = wordgrid::grid::can_trace(input.grid, input.word);
    if let Ok(grid) = wordgrid::grid::Grid::parse(input.grid) {
        assert_eq!(traced, !grid.find_paths(input.word).is_empty());
    }
});
