use petri_core::patterns::{apply_pattern, find, seed_from_config, seed_random, PATTERNS};
use petri_core::{Cell, Grid, SeedingConfig};

#[test]
fn preset_lookup_is_case_insensitive() {
    assert!(find("Glider").is_some());
    assert!(find("glider").is_some());
    assert!(find("GOSPER GLIDER GUN").is_some());
    assert!(find("no-such-pattern").is_none());
}

#[test]
fn presets_are_non_empty_with_unique_names() {
    for (i, a) in PATTERNS.iter().enumerate() {
        assert!(!a.cells.is_empty(), "{} has no cells", a.name);
        for b in &PATTERNS[i + 1..] {
            assert!(!a.name.eq_ignore_ascii_case(b.name));
        }
    }
}

#[test]
fn apply_clears_previous_contents() {
    let mut grid = Grid::new([10, 10]);
    seed_random(&mut grid, 1.0, 1);
    assert_eq!(grid.population(), 100);

    apply_pattern(&mut grid, find("block").unwrap(), [4, 4]);
    assert_eq!(grid.population(), 4);
    for [dr, dc] in [[0i64, 0], [0, 1], [1, 0], [1, 1]] {
        assert_eq!(grid.get(4 + dr, 4 + dc), Cell::Alive);
    }
}

#[test]
fn out_of_range_pattern_cells_are_skipped() {
    let mut grid = Grid::new([3, 3]);
    apply_pattern(&mut grid, find("block").unwrap(), [2, 2]);
    // only the pattern's own origin cell fits
    assert_eq!(grid.population(), 1);
    assert_eq!(grid.get(2, 2), Cell::Alive);
}

#[test]
fn random_seeding_is_deterministic() {
    let mut a = Grid::new([16, 16]);
    let mut b = Grid::new([16, 16]);
    seed_random(&mut a, 0.33, 42);
    seed_random(&mut b, 0.33, 42);
    assert_eq!(a, b);

    let mut c = Grid::new([16, 16]);
    seed_random(&mut c, 0.33, 43);
    assert_ne!(a, c);
}

#[test]
fn fill_extremes() {
    let mut grid = Grid::new([8, 8]);
    seed_random(&mut grid, 0.0, 5);
    assert_eq!(grid.population(), 0);
    seed_random(&mut grid, 1.0, 5);
    assert_eq!(grid.population(), 64);
}

#[test]
fn seeding_config_dispatch() {
    let mut grid = Grid::new([8, 8]);
    let preset = SeedingConfig {
        pattern: Some("blinker".into()),
        origin: [3, 2],
        fill: 0.0,
    };
    seed_from_config(&mut grid, &preset, 0).unwrap();
    assert_eq!(grid.population(), 3);

    let unknown = SeedingConfig {
        pattern: Some("nope".into()),
        origin: [0, 0],
        fill: 0.0,
    };
    assert!(seed_from_config(&mut grid, &unknown, 0).is_err());

    let random = SeedingConfig {
        pattern: None,
        origin: [0, 0],
        fill: 1.0,
    };
    seed_from_config(&mut grid, &random, 9).unwrap();
    assert_eq!(grid.population(), 64);
}

#[test]
fn toad_and_beacon_oscillate_with_period_two() {
    for name in ["toad", "beacon"] {
        let mut grid = Grid::new([8, 8]);
        apply_pattern(&mut grid, find(name).unwrap(), [2, 2]);
        let start = grid.clone();
        let one = start.step();
        assert_ne!(one, start, "{name} must change after one step");
        assert_eq!(one.step(), start, "{name} must return after two steps");
    }
}
