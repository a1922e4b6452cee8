//! Arena bounds and the power-up lifecycle

use rand::Rng;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::geometry::{Location, contains_location, locations_equal};
use crate::consts::POWER_UP_PLACEMENT_ATTEMPTS;

/// The square playing field and its single power-up
#[derive(Debug, Clone, Serialize)]
pub struct Arena {
    /// Grid dimension; cells run 1..=size on both axes
    pub size: i32,
    /// Current power-up, absent until the first placement
    pub power_up: Option<Location>,
    #[serde(skip)]
    rng: Pcg32,
}

impl Arena {
    /// Create an arena of `size` x `size` cells. `size` must be at least 3
    /// so the inner placement region is non-empty.
    pub fn new(size: i32, seed: u64) -> Self {
        debug_assert!(size >= 3, "arena too small for power-ups: {}", size);
        Self {
            size,
            power_up: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Center cell, where a new snake starts
    pub fn center(&self) -> Location {
        Location::new(self.size / 2, self.size / 2)
    }

    pub fn is_out_of_bounds(&self, location: &Location) -> bool {
        location.row < 1 || location.column < 1 || location.row > self.size || location.column > self.size
    }

    /// Place the first power-up, or consume the current one if the snake's
    /// head is on it. Returns true only on pickup.
    ///
    /// Mutates the stored power-up; call at most once per tick.
    pub fn try_consume_power_up(&mut self, snake: &[Location]) -> bool {
        let Some(power_up) = self.power_up else {
            self.power_up = self.place_power_up(snake);
            return false;
        };

        match snake.first() {
            Some(head) if locations_equal(&power_up, head) => {
                log::debug!("Power-up picked up at {:?}", power_up);
                self.power_up = self.place_power_up(snake);
                true
            }
            _ => false,
        }
    }

    /// Pick a cell in the inner region (rows and columns 2..=size-1) that
    /// no snake segment occupies. Returns `None` when the region is full.
    pub fn place_power_up(&mut self, snake: &[Location]) -> Option<Location> {
        let (lo, hi) = self.safe_region();
        if lo > hi {
            log::warn!("Arena size {} has no room for power-ups", self.size);
            return None;
        }

        for _ in 0..POWER_UP_PLACEMENT_ATTEMPTS {
            let candidate = Location::new(self.rng.random_range(lo..=hi), self.rng.random_range(lo..=hi));
            if !contains_location(snake, &candidate) {
                log::debug!("Power-up placed at {:?}", candidate);
                return Some(candidate);
            }
        }

        // Crowded region: choose among the cells that are actually free
        let free: Vec<Location> = (lo..=hi)
            .flat_map(|row| (lo..=hi).map(move |column| Location::new(row, column)))
            .filter(|cell| !contains_location(snake, cell))
            .collect();

        let placed = free.choose(&mut self.rng).copied();
        match placed {
            Some(cell) => log::debug!("Power-up placed at {:?} ({} free cells)", cell, free.len()),
            None => log::warn!("No free cell for a power-up, skipping placement"),
        }
        placed
    }

    /// Inclusive bounds of the placement region on both axes
    fn safe_region(&self) -> (i32, i32) {
        (2, self.size - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_out_of_bounds() {
        let arena = Arena::new(20, 1);
        assert!(arena.is_out_of_bounds(&Location::new(0, 5)));
        assert!(!arena.is_out_of_bounds(&Location::new(20, 20)));
        assert!(arena.is_out_of_bounds(&Location::new(21, 1)));
        assert!(arena.is_out_of_bounds(&Location::new(5, 0)));
        assert!(!arena.is_out_of_bounds(&Location::new(1, 1)));
    }

    #[test]
    fn test_first_call_places_without_pickup() {
        let mut arena = Arena::new(20, 7);
        let snake = [Location::new(10, 11), Location::new(10, 10)];
        assert!(!arena.try_consume_power_up(&snake));

        let placed = arena.power_up.expect("power-up should be placed");
        assert!(!contains_location(&snake, &placed));
        assert!((2..=19).contains(&placed.row));
        assert!((2..=19).contains(&placed.column));
    }

    #[test]
    fn test_pickup_replaces_power_up() {
        let mut arena = Arena::new(20, 7);
        arena.power_up = Some(Location::new(10, 11));
        let snake = [Location::new(10, 11), Location::new(10, 10)];

        assert!(arena.try_consume_power_up(&snake));
        let replacement = arena.power_up.expect("replacement should be placed");
        assert!(!contains_location(&snake, &replacement));
    }

    #[test]
    fn test_miss_leaves_power_up() {
        let mut arena = Arena::new(20, 7);
        arena.power_up = Some(Location::new(3, 3));
        let snake = [Location::new(10, 11), Location::new(10, 10)];

        assert!(!arena.try_consume_power_up(&snake));
        assert_eq!(arena.power_up, Some(Location::new(3, 3)));
    }

    #[test]
    fn test_crowded_region_finds_last_free_cell() {
        // 5x5 arena: inner region is 2..=4, nine cells
        let mut arena = Arena::new(5, 3);
        let snake: Vec<Location> = (2..=4)
            .flat_map(|row| (2..=4).map(move |column| Location::new(row, column)))
            .filter(|cell| *cell != Location::new(3, 3))
            .collect();

        assert_eq!(arena.place_power_up(&snake), Some(Location::new(3, 3)));
    }

    #[test]
    fn test_full_region_yields_none() {
        let mut arena = Arena::new(5, 3);
        let snake: Vec<Location> = (2..=4)
            .flat_map(|row| (2..=4).map(move |column| Location::new(row, column)))
            .collect();

        assert_eq!(arena.place_power_up(&snake), None);
        assert!(!arena.try_consume_power_up(&snake));
        assert_eq!(arena.power_up, None);
    }

    #[test]
    fn test_same_seed_same_placement() {
        let snake = [Location::new(10, 10)];
        let mut a = Arena::new(20, 42);
        let mut b = Arena::new(20, 42);
        assert_eq!(a.place_power_up(&snake), b.place_power_up(&snake));
    }

    proptest! {
        #[test]
        fn prop_placement_avoids_snake(seed in any::<u64>(), len in 1usize..40) {
            let mut arena = Arena::new(10, seed);
            // Fill the inner region row by row
            let snake: Vec<Location> = (2..=9)
                .flat_map(|row| (2..=9).map(move |column| Location::new(row, column)))
                .take(len)
                .collect();

            let placed = arena.place_power_up(&snake).expect("region has free cells");
            prop_assert!(!contains_location(&snake, &placed));
            prop_assert!((2..=9).contains(&placed.row) && (2..=9).contains(&placed.column));
        }
    }
}
