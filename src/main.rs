use carpool_fare::algorithms::FareSplitter;
use carpool_fare::models::{NearbyPassenger, Passenger, Route, Summary, TripSelection};
use carpool_fare::utils::init_route::{
    default_route, load_passengers_json, load_route_json, mock_passengers,
};
use carpool_fare::utils::nearby::find_nearby_start;
use carpool_fare::{FareConfig, FareError, TimeShareSplitter};
use clap::Parser;

/// Split a carpool fare between the driver and the passengers picked up on the way
#[derive(Parser, Debug)]
#[command(version, about)]
struct FareCliArguments {
    /// Index of the driver's start stop
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Index of the end stop, defaults to the last stop on the route
    #[arg(long)]
    end: Option<usize>,

    /// Base fare to split, defaults to the configured fare
    #[arg(long)]
    fare: Option<u64>,

    /// Raise (or, when negative, lower) the fare by this many configured steps
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    fare_steps: i64,

    /// Passenger id to pick up, may be repeated
    #[arg(long = "passenger")]
    passengers: Vec<String>,

    /// JSON route file with stops and distances
    #[arg(long)]
    route: Option<String>,

    /// JSON file with passenger records
    #[arg(long = "passengers-file")]
    passengers_file: Option<String>,

    /// TOML config file
    #[arg(long)]
    config: Option<String>,

    /// List passengers near the start stop before computing the summary
    #[arg(long)]
    nearby: bool,

    /// Print the fare for every destination from the start stop
    #[arg(long)]
    destinations: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = FareCliArguments::parse();
    match run(&args) {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running carpool_fare: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &FareCliArguments) -> Result<(), FareError> {
    let config = FareConfig::load(args.config.as_deref())?;

    let route = match &args.route {
        Some(path) => load_route_json(path)?,
        None => default_route(),
    };
    let candidates = match &args.passengers_file {
        Some(path) => load_passengers_json(path)?,
        None => mock_passengers(&route),
    };

    let mut selection = TripSelection::new(
        args.start,
        args.end.unwrap_or(route.len().saturating_sub(1)),
        args.fare.unwrap_or(config.default_base_fare),
    );
    selection.validate(&route)?;
    for _ in 0..args.fare_steps.unsigned_abs() {
        if args.fare_steps > 0 {
            selection.increase_fare(config.fare_step);
        } else {
            selection.decrease_fare(config.fare_step);
        }
    }

    // with --nearby only the listed riders can be picked up
    let pickable: Vec<Passenger> = if args.nearby {
        let nearby = find_nearby_start(&route, &selection, config.nearby_radius_km, &candidates);
        print_nearby(&route, &selection, &config, &nearby);
        nearby.into_iter().map(|n| n.passenger).collect()
    } else {
        candidates
    };

    for id in &args.passengers {
        if !selection.toggle_by_id(id, &pickable, config.max_passengers)? {
            log::warn!(
                "skipping passenger {}: at most {} passengers per ride",
                id,
                config.max_passengers
            );
        }
    }

    let splitter = TimeShareSplitter::from_config(&config);
    let summary = splitter.compute_summary(&route, &selection);

    if args.json {
        println!("{}", summary.to_json_pretty()?);
    } else {
        print_summary(&route, &selection, &summary);
    }

    if args.destinations {
        println!("\nFares from {}:", stop_label(&route, selection.start_idx));
        for (end_idx, quote) in splitter.quote_destinations(&route, &selection) {
            println!(
                "  {:<32} {:>7.3} km  driver pays {}",
                stop_label(&route, end_idx),
                quote.route_km,
                quote.driver_share()
            );
        }
    }

    Ok(())
}

fn stop_label(route: &Route, idx: usize) -> &str {
    route.stop_name(idx).unwrap_or("?")
}

fn print_nearby(
    route: &Route,
    selection: &TripSelection,
    config: &FareConfig,
    nearby: &[NearbyPassenger],
) {
    println!(
        "Passengers within {:.1} km of {}:",
        config.nearby_radius_km,
        stop_label(route, selection.start_idx)
    );
    if nearby.is_empty() {
        println!("  none");
    }
    for n in nearby {
        println!(
            "  {} ({}): {} m away",
            n.passenger.name, n.passenger.id, n.meters_from_point
        );
    }
    println!();
}

fn print_summary(route: &Route, selection: &TripSelection, summary: &Summary) {
    println!(
        "Trip {} -> {}",
        stop_label(route, selection.start_idx),
        stop_label(route, selection.end_idx)
    );
    println!("------------------------------------------");
    println!("  Route distance:   {:.3} km", summary.route_km);
    println!("  Pickup detours:   {:.3} km", summary.extra_pickup_km);
    println!(
        "  Driver total:     {:.3} km ({:.2} min)",
        summary.driver_km, summary.driver_time_min
    );

    for p in &summary.passengers {
        println!(
            "  {}: {} m from start, rides {:.3} km ({:.2} min)",
            p.name, p.meters_from_driver, p.distance_to_end_km, p.time_min
        );
    }

    println!("\nShares:");
    for share in &summary.shares {
        println!("  {:<12} {}", share.name, share.share);
    }
    println!("  {:<12} {}", "Total", summary.total_cost);
}
