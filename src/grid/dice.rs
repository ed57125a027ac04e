//! Classic letter dice and random board generation

use super::board::Grid;
use anyhow::Result;
use rand::Rng;
use rand::seq::SliceRandom;

/// The sixteen dice of a 4x4 board, six faces each
pub const DICE4: [&str; 16] = [
    "aaeegn", "elrtty", "aoottw", "abbjoo", "ehrtvw", "cimotu", "distty", "eiosst",
    "delrvy", "achops", "himnqu", "eeinsu", "eeghnw", "affkps", "hlnnrz", "deilrx",
];

/// The twenty-five dice of a 5x5 board, six faces each
pub const DICE5: [&str; 25] = [
    "aaafrs", "aaeeee", "aafirs", "adennn", "aeeeem", "aeegmu", "aegmnn", "afirsy",
    "bjkqxz", "ccnstw", "ceiilt", "ceilpt", "ceipst", "ddlnor", "dhhlor", "dhhnot",
    "dhlnor", "eiiitt", "emottt", "ensssu", "fiprsy", "gorrvw", "hiprry", "nootuw",
    "ooottu",
];

/// Dice set for a board side
pub fn dice_for_side(side: usize) -> Option<&'static [&'static str]> {
    match side {
        4 => Some(&DICE4),
        5 => Some(&DICE5),
        _ => None,
    }
}

/// Shake a board: shuffle the dice into the cells and roll one face each
pub fn generate<R: Rng + ?Sized>(side: usize, rng: &mut R) -> Result<Grid> {
    let Some(dice) = dice_for_side(side) else {
        anyhow::bail!("unsupported board side {}, expected 4 or 5", side);
    };

    let mut dice = dice.to_vec();
    dice.shuffle(rng);

    let mut tiles = String::with_capacity(dice.len());
    for die in dice {
        let faces = die.as_bytes();
        tiles.push(faces[rng.gen_range(0..faces.len())] as char);
    }

    Grid::parse(&tiles)
}
