// Randomized checks of the fare split invariants over the built-in route
use carpool_fare::algorithms::FareSplitter;
use carpool_fare::models::{Passenger, TripSelection};
use carpool_fare::utils::init_route::{default_route, mock_passengers};
use carpool_fare::TimeShareSplitter;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const TRIALS: usize = 2_000;

fn random_selection(rng: &mut StdRng, stop_count: usize, pool: &[Passenger]) -> TripSelection {
    let start_idx = rng.gen_range(0..stop_count);
    let end_idx = rng.gen_range(0..stop_count);
    let base_fare = match rng.gen_range(0..4) {
        0 => rng.gen_range(0..5),
        1 => rng.gen_range(0..50) * 50,
        _ => rng.gen_range(0..10_000),
    };
    // the calculator itself has no passenger cap, so go past the usual 3
    let count = rng.gen_range(0..=8);
    let chosen = pool.choose_multiple(rng, count).cloned().collect();
    TripSelection::new(start_idx, end_idx, base_fare).with_passengers(chosen)
}

#[test]
fn test_shares_always_sum_to_base_fare() {
    let route = default_route();
    let pool = mock_passengers(&route);
    let splitter = TimeShareSplitter::default();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..TRIALS {
        let selection = random_selection(&mut rng, route.len(), &pool);
        let summary = splitter.compute_summary(&route, &selection);

        assert_eq!(summary.shares.len(), selection.chosen.len() + 1);
        assert!(
            summary.is_balanced(selection.base_fare),
            "shares {:?} do not sum to {}",
            summary.shares,
            selection.base_fare
        );
    }
}

#[test]
fn test_distances_and_times_non_negative() {
    let route = default_route();
    let pool = mock_passengers(&route);
    let splitter = TimeShareSplitter::default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..TRIALS {
        let selection = random_selection(&mut rng, route.len(), &pool);
        let summary = splitter.compute_summary(&route, &selection);

        assert!(summary.route_km >= 0.0);
        assert!(summary.extra_pickup_km >= 0.0);
        assert!(summary.driver_km >= summary.route_km);
        assert!(summary.driver_time_min >= 0.0);
        for p in &summary.passengers {
            assert!(p.distance_to_end_km >= 0.0);
            assert!(p.time_min >= 0.0);
            assert!(p.distance_to_end_km <= summary.route_km);
        }
    }
}

#[test]
fn test_route_distance_is_symmetric() {
    let route = default_route();
    let splitter = TimeShareSplitter::default();

    let forward = splitter.compute_summary(&route, &TripSelection::new(5, 10, 500));
    let backward = splitter.compute_summary(&route, &TripSelection::new(10, 5, 500));
    assert_eq!(forward.route_km, backward.route_km);

    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let a = rng.gen_range(0..route.len());
        let b = rng.gen_range(0..route.len());
        let ab = splitter.compute_summary(&route, &TripSelection::new(a, b, 100));
        let ba = splitter.compute_summary(&route, &TripSelection::new(b, a, 100));
        assert_eq!(ab.route_km, ba.route_km);
    }
}

#[test]
fn test_summary_is_deterministic() {
    let route = default_route();
    let pool = mock_passengers(&route);
    let splitter = TimeShareSplitter::default();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        let selection = random_selection(&mut rng, route.len(), &pool);
        assert_eq!(
            splitter.compute_summary(&route, &selection),
            splitter.compute_summary(&route, &selection)
        );
    }
}

#[test]
fn test_destination_quotes_match_single_summaries() {
    let route = default_route();
    let pool = mock_passengers(&route);
    let splitter = TimeShareSplitter::default();
    let selection = TripSelection::new(4, 0, 750).with_passengers(pool[3..6].to_vec());

    let quotes = splitter.quote_destinations(&route, &selection);
    assert_eq!(quotes.len(), route.len());
    for (end_idx, quote) in quotes {
        let single = TripSelection {
            end_idx,
            ..selection.clone()
        };
        assert_eq!(quote, splitter.compute_summary(&route, &single));
    }
}
