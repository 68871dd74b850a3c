#![deny(warnings)]

//! Headless CLI: load a scenario, show the hardware catalog at its start
//! time and score each model.

mod scenario;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use scenario::Scenario;
use serde::Serialize;
use sim_core::{GameTime, HardwareComponent, HardwareKind};
use sim_runtime::GameSession;
use sim_scoring::ConfigurationReport;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    scenario: Option<String>,
    year: Option<i32>,
    quarter: Option<u8>,
    kind: Option<HardwareKind>,
    json: bool,
    version: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--scenario" => args.scenario = it.next(),
            "--year" => args.year = it.next().and_then(|s| s.parse().ok()),
            "--quarter" => args.quarter = it.next().and_then(|s| s.parse().ok()),
            "--kind" => {
                let v = it.next().context("--kind needs a value")?;
                args.kind = Some(v.parse()?);
            }
            "--json" => args.json = true,
            "--version" => args.version = true,
            other => warn!(arg = other, "ignoring unknown argument"),
        }
    }
    Ok(args)
}

#[derive(Serialize)]
struct ModelOutput {
    report: ConfigurationReport,
    cost: Decimal,
    suggested_price: Decimal,
}

#[derive(Serialize)]
struct Output {
    now: GameTime,
    announced: Vec<HardwareComponent>,
    available: Vec<HardwareComponent>,
    models: Vec<ModelOutput>,
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    if args.version {
        println!(
            "silicon-wars {} ({} built {})",
            env!("CARGO_PKG_VERSION"),
            env!("SW_GIT_SHA"),
            env!("SW_BUILD_DATE")
        );
        return Ok(());
    }
    info!(?args, "starting CLI");

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path).with_context(|| format!("loading scenario {path}"))?,
        None => Scenario::demo(GameTime::new(1989, 2)),
    };
    if let Some(year) = args.year {
        scenario.start.year = year;
    }
    if let Some(quarter) = args.quarter {
        scenario.start.quarter = quarter;
    }

    let mut session = GameSession::new(scenario.start)?;
    for chip in scenario.custom_chips.drain(..) {
        session.register_custom_chip(chip)?;
    }
    let announced = session.advance_quarters(scenario.advance_quarters);

    let available = match args.kind {
        Some(kind) => session.available_by_kind(kind),
        None => session.available_hardware(),
    };

    let mut models = Vec::with_capacity(scenario.models.len());
    for m in &scenario.models {
        let report = sim_scoring::evaluate_configuration(m);
        if !report.unrecognized.is_empty() {
            warn!(model = %m.name, slots = ?report.unrecognized, "scored with default profiles");
        }
        let cost = sim_catalog::calculate_model_cost(m);
        let suggested_price = sim_econ::suggested_price(cost, report.overall)?;
        models.push(ModelOutput {
            report,
            cost,
            suggested_price,
        });
    }

    let out = Output {
        now: session.now(),
        announced,
        available,
        models,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_text(&out);
    }
    Ok(())
}

fn print_text(out: &Output) {
    println!("Now: {}", out.now);
    for c in &out.announced {
        println!(
            "NEW  | {:<8} {:<22} perf {:>3} | ${}",
            c.kind.as_str(),
            c.name,
            c.performance,
            c.cost
        );
    }
    for c in &out.available {
        let tag = if c.exclusive { " (exclusive)" } else { "" };
        println!(
            "HW   | {:<8} {:<22} perf {:>3} | ${}{tag}",
            c.kind.as_str(),
            c.name,
            c.performance,
            c.cost
        );
    }
    for m in &out.models {
        let r = &m.report;
        println!(
            "MODEL| {} | gaming {} | business {} | workstation {} | compat {} | build {} ({}) | overall {} | cost ${} | price ${}",
            r.model,
            r.gaming,
            r.business,
            r.workstation,
            r.compatibility.score,
            r.build_quality.score,
            r.build_quality.rating,
            r.overall,
            m.cost,
            m.suggested_price
        );
        for s in &r.compatibility.synergies {
            println!("     + {s}");
        }
        for b in &r.compatibility.bottlenecks {
            println!("     - {b}");
        }
        for line in &r.build_quality.components {
            println!("       {line}");
        }
    }
}
