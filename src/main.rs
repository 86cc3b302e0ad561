use anyhow::Result;
use disaster_record::entities::record::DEFAULT_SEX;
use disaster_record::{
    DisasterRecord, DriverConfig, FieldStation, ReliefDelivery, VictimReporter,
};
use std::env;
use std::io;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Optional config path as the only argument
    let args: Vec<String> = env::args().collect();
    let config = DriverConfig::load_or_default(args.get(1).map(Path::new))?;

    run(&config)
}

fn run(config: &DriverConfig) -> Result<()> {
    println!("🌋 Disaster Record v{}", disaster_record::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Build the record and accumulate casualties
    let mut earthquake = DisasterRecord::new("Earthquake", "Coastal South");
    earthquake.add_fatalities(5, "male");
    earthquake.add_fatalities(5, "female");
    earthquake.add_injuries(12, "male");
    earthquake.add_injuries(8, "female");

    let demo = DisasterRecord::new("Earthquake", "Coastal South");
    println!("{}", demo.add_victim(5, DEFAULT_SEX, Some("Earthquake")));

    println!("\n📋 Disaster info before rename:");
    println!("{}", serde_json::to_string_pretty(&earthquake.snapshot())?);

    // 2. Interactive rename from stdin
    let stdin = io::stdin();
    earthquake.rename_until(stdin.lock(), io::stdout(), &config.rename_sentinel)?;

    println!("\n📋 Disaster info after rename:");
    println!("{}", serde_json::to_string_pretty(&earthquake.snapshot())?);

    println!("\nTotal victims: {}", earthquake.total_victims());
    println!("Damage: {}", earthquake.damage_summary());

    // 3. Record damage and export
    earthquake.record_damage_percentage(35.0);
    earthquake.save_report(&config.report_path, config.report_format)?;
    println!("✓ Report saved to {}", config.report_path.display());

    println!("\n📋 Disaster info:");
    println!("{}", serde_json::to_string_pretty(&earthquake.snapshot())?);

    // 4. Aid and coordination
    let food = ReliefDelivery::new("Food", 500);
    println!("\n📦 {}", food.summary());
    println!("{}", earthquake.request_aid_report(&food));
    println!("{}", earthquake.government_response_notice());

    let complete = earthquake.merge_extra([
        ("Status", "Being handled"),
        ("Evacuation", "Completed"),
    ]);
    println!("\n📋 Complete disaster information:");
    for (key, value) in &complete {
        println!("{}: {}", key, value);
    }

    let station = FieldStation::new(
        "Earthquake Post",
        "Field and nearest mosque unaffected by the quake",
    );
    println!("\n{}", earthquake.establish_station(&station));
    println!("{}", station.add_victim(3, "male", Some("Flood")));
    println!("{}", station.add_victim(2, "female", None));

    // 5. Chart
    if config.show_chart {
        show_chart(&earthquake, &config.chart_title)?;
    }

    println!("\n✅ Done");
    Ok(())
}

#[cfg(feature = "tui")]
fn show_chart(record: &DisasterRecord, title: &str) -> Result<()> {
    let mut sink = disaster_record::ui::TerminalChart::new();
    record.show_chart(&mut sink, title)
}

#[cfg(not(feature = "tui"))]
fn show_chart(record: &DisasterRecord, title: &str) -> Result<()> {
    println!("\n📊 {}", title);
    for (sex, pair) in &record.chart_data().by_sex {
        println!("  {:<8} deaths {:>5}  injured {:>5}", sex.as_str(), pair[0], pair[1]);
    }
    eprintln!("   Rebuild with --features tui for the terminal chart.");
    Ok(())
}
