use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{random_board, Coord, ShotError, BOARD_SIZE, FLEET_LENGTHS, NUM_SHIPS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every generated board holds the complete, in-bounds, separated fleet.
    #[test]
    fn generated_fleet_is_complete_and_separated(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng, BOARD_SIZE, false);
        let ships = board.ships();
        prop_assert_eq!(ships.len(), NUM_SHIPS);

        let mut lengths: Vec<i32> = ships.iter().map(|s| s.length()).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        let mut expected = FLEET_LENGTHS.to_vec();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(lengths, expected);

        for ship in ships {
            for c in ship.cells() {
                prop_assert!(seabattle::in_bounds(c, BOARD_SIZE));
            }
        }
        for i in 0..ships.len() {
            for j in (i + 1)..ships.len() {
                for a in ships[i].cells() {
                    for b in ships[j].cells() {
                        prop_assert!((a.x - b.x).abs() > 1 || (a.y - b.y).abs() > 1);
                    }
                }
            }
        }
    }

    /// Repeating a shot fails with AlreadyTargeted no matter what the first
    /// shot resolved to.
    #[test]
    fn repeated_shot_is_rejected(
        seed in any::<u64>(),
        x in 0..BOARD_SIZE,
        y in 0..BOARD_SIZE,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng, BOARD_SIZE, false);
        let target = Coord::new(x, y);
        prop_assert!(board.shoot(target).is_ok());
        prop_assert_eq!(board.shoot(target), Err(ShotError::AlreadyTargeted));
    }

    /// Sinking the whole fleet flips the win flag exactly at the last sink.
    #[test]
    fn win_flag_flips_on_last_sink(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng, BOARD_SIZE, false);
        let targets: Vec<Vec<Coord>> = board.ships().iter().map(|s| s.cells()).collect();
        let mut sunk = 0;
        for cells in targets {
            for c in cells {
                // the sink cascade only clears water, so ship cells are
                // always still shootable here
                board.shoot(c).unwrap();
            }
            sunk += 1;
            prop_assert_eq!(board.sunk_count(), sunk);
            prop_assert_eq!(board.is_match_won(), sunk == NUM_SHIPS);
        }
    }
}
