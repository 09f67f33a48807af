use anyhow::{bail, Context, Result};
use clap::Parser;
use ordered_float::OrderedFloat;

use road_zones::api::{LaneId, LaneSRange, LaneSRoute, SRange};

#[derive(Parser)]
#[command(name = "road_zones")]
#[command(about = "Inspect lane S-range zones and report pairwise overlaps")]
struct Cli {
    /// Zone definition as comma-separated lane ranges, e.g. "lane_1:0:100,lane_2:0:50".
    /// Repeat the flag to define several zones.
    #[arg(long = "zone", required = true)]
    zones: Vec<String>,

    /// Gap below which nearly-touching ranges still count as overlapping
    #[arg(long, default_value = "1e-9")]
    tolerance: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let routes: Vec<LaneSRoute> = cli
        .zones
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            parse_route(spec).with_context(|| format!("Invalid zone definition #{}", i + 1))
        })
        .collect::<Result<_>>()?;

    println!("Loaded {} zone(s), tolerance {}", routes.len(), cli.tolerance);
    for (i, route) in routes.iter().enumerate() {
        println!(
            "Zone {}: {} range(s), length {:.3}",
            i + 1,
            route.ranges().len(),
            route.length()
        );
        for range in route.ranges() {
            log::debug!(
                "  {} [{}, {}]",
                range.lane_id(),
                range.s_range().s0(),
                range.s_range().s1()
            );
        }
    }

    if routes.len() > 1 {
        println!();
        print_overlap_report(&routes, cli.tolerance);
    }

    Ok(())
}

/// Parses a zone definition of the form "lane:s0:s1[,lane:s0:s1...]"
fn parse_route(spec: &str) -> Result<LaneSRoute> {
    let mut ranges = Vec::new();
    for entry in spec.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        // Split from the right so lane names may themselves contain ':'
        let mut fields = entry.rsplitn(3, ':');
        let s1 = fields.next();
        let s0 = fields.next();
        let lane = fields.next();
        let (Some(lane), Some(s0), Some(s1)) = (lane, s0, s1) else {
            bail!("Expected lane:s0:s1, got '{}'", entry);
        };
        let s0: f64 = s0
            .parse()
            .with_context(|| format!("Bad s0 value '{}' in '{}'", s0, entry))?;
        let s1: f64 = s1
            .parse()
            .with_context(|| format!("Bad s1 value '{}' in '{}'", s1, entry))?;
        ranges.push(LaneSRange::new(LaneId::new(lane), SRange::new(s0, s1)));
    }
    Ok(LaneSRoute::new(ranges))
}

/// Prints every overlapping zone pair, largest shared extent first
fn print_overlap_report(routes: &[LaneSRoute], tolerance: f64) {
    let mut rows: Vec<(OrderedFloat<f64>, usize, usize, Vec<LaneSRange>)> = Vec::new();

    for i in 0..routes.len() {
        for j in (i + 1)..routes.len() {
            let overlaps = route_overlaps(&routes[i], &routes[j], tolerance);
            if overlaps.is_empty() {
                continue;
            }
            let total: f64 = overlaps.iter().map(LaneSRange::length).sum();
            rows.push((OrderedFloat(total), i, j, overlaps));
        }
    }

    if rows.is_empty() {
        println!("No overlapping zones");
        return;
    }

    rows.sort_by(|a, b| b.0.cmp(&a.0));

    println!("Overlapping zones:");
    for (total, i, j, overlaps) in rows {
        println!("Zone {} and zone {}: shared extent {:.3}", i + 1, j + 1, total.0);
        for overlap in overlaps {
            println!(
                "  {} [{:.3}, {:.3}]",
                overlap.lane_id(),
                overlap.s_range().s0(),
                overlap.s_range().s1()
            );
        }
    }
}

/// Collects the lane sub-ranges two routes have in common
fn route_overlaps(a: &LaneSRoute, b: &LaneSRoute, tolerance: f64) -> Vec<LaneSRange> {
    let mut overlaps = Vec::new();
    for range_a in a.ranges() {
        for range_b in b.ranges() {
            if let Some(overlap) = range_a.get_intersection(range_b, tolerance) {
                log::debug!(
                    "{}: [{}, {}] overlaps [{}, {}]",
                    overlap.lane_id(),
                    range_a.s_range().s0(),
                    range_a.s_range().s1(),
                    range_b.s_range().s0(),
                    range_b.s_range().s1()
                );
                overlaps.push(overlap);
            }
        }
    }
    overlaps
}
