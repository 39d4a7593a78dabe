//! Card sampling: words -> grids.
//!
//! Every grid is an independent draw of `height * width` distinct pool
//! entries, laid out row-major in draw order. A word can appear on many
//! cards, but a pool entry is used at most once per grid.

use rand::seq::index;
use rand::Rng;

use crate::{Card, Error, Grid, GridSize, Result, WordPool};

/// Draw `count` random grids of `size` from `pool`.
///
/// # Errors
/// - [`Error::InvalidDimensions`] if either dimension is zero
/// - [`Error::InsufficientPool`] if the pool holds fewer words than one grid
///   needs; reported before any grid is drawn
///
/// Asking for zero grids always succeeds with an empty result.
pub fn generate<R>(size: GridSize, count: usize, pool: &WordPool, rng: &mut R) -> Result<Vec<Grid>>
where
    R: Rng + ?Sized,
{
    size.validate()?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let needed = size.cells()?;
    if pool.len() < needed {
        return Err(Error::InsufficientPool {
            needed,
            available: pool.len(),
        });
    }

    let words = pool.words();
    (0..count)
        .map(|_| {
            // Indices come back fully shuffled, so draw order is layout order.
            let sample = index::sample(&mut *rng, words.len(), needed)
                .into_iter()
                .map(|i| words[i].clone())
                .collect();
            Grid::from_row_major(sample, size.width)
        })
        .collect()
}

/// Draw `count` cards, numbered from zero.
pub fn generate_cards<R>(size: GridSize, count: usize, pool: &WordPool, rng: &mut R) -> Result<Vec<Card>>
where
    R: Rng + ?Sized,
{
    let grids = generate(size, count, pool, rng)?;
    log::info!("sampled {} cards of {}x{}", grids.len(), size.height, size.width);
    Ok(grids
        .into_iter()
        .enumerate()
        .map(|(index, grid)| Card { index, grid })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::card_rng;
    use std::collections::HashSet;

    fn letters(n: usize) -> WordPool {
        WordPool::new((0..n).map(|i| ((b'A' + i as u8) as char).to_string()).collect())
    }

    #[test]
    fn three_by_three_uses_every_word_once() {
        let pool = letters(9);
        let grids = generate(GridSize::new(3, 3), 1, &pool, &mut card_rng(Some(3))).unwrap();
        assert_eq!(grids.len(), 1);
        let grid = &grids[0];
        assert_eq!(grid.size(), GridSize::new(3, 3));
        let mut used: Vec<&str> = grid.words().collect();
        used.sort_unstable();
        assert_eq!(used, vec!["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
    }

    #[test]
    fn small_pool_is_rejected() {
        let pool = letters(5);
        let err = generate(GridSize::new(3, 3), 1, &pool, &mut card_rng(Some(0))).unwrap_err();
        assert!(matches!(err, Error::InsufficientPool { needed: 9, available: 5 }));
    }

    #[test]
    fn zero_count_is_empty_even_for_small_pool() {
        let pool = letters(2);
        let grids = generate(GridSize::new(5, 5), 0, &pool, &mut card_rng(Some(0))).unwrap();
        assert!(grids.is_empty());
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let pool = letters(9);
        let err = generate(GridSize::new(3, 0), 1, &pool, &mut card_rng(Some(0))).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let pool = letters(9);
        let size = GridSize::new(usize::MAX / 2 + 1, 4);
        let err = generate(size, 1, &pool, &mut card_rng(Some(0))).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn grids_differ_across_cards() {
        let pool = letters(26);
        let grids = generate(GridSize::new(5, 5), 10, &pool, &mut card_rng(Some(11))).unwrap();
        let distinct: HashSet<Vec<&str>> = grids.iter().map(|g| g.words().collect()).collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn cards_are_numbered_in_order() {
        let pool = letters(8);
        let cards = generate_cards(GridSize::new(2, 2), 4, &pool, &mut card_rng(Some(5))).unwrap();
        let indices: Vec<usize> = cards.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(cards[3].file_name(), "bingo_3.png");
    }

    #[test]
    fn duplicate_pool_entries_are_distinct_draws() {
        let pool = WordPool::new(vec!["X".into(), "X".into()]);
        let grids = generate(GridSize::new(1, 2), 1, &pool, &mut card_rng(Some(9))).unwrap();
        assert_eq!(grids[0].words().collect::<Vec<_>>(), vec!["X", "X"]);
    }
}
