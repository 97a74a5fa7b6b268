use clap::Parser;
use ipv4_helpers::output::AddressReport;
use std::error::Error;

/// Validate an IPv4 address and, given a mask, compute its network and host count.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Dotted-quad address, e.g. 192.168.1.10
    address: String,
    /// Dotted-quad subnet mask, e.g. 255.255.255.0
    mask: Option<String>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let log_config = std::env::var("LOG4RS_CONFIG").unwrap_or_else(|_| "log4rs.yml".to_string());
    if let Err(e) = log4rs::init_file(&log_config, Default::default()) {
        eprintln!("Logging disabled, could not load {log_config}: {e}");
    }
    log::info!("#Start main()");

    let args = Args::parse();
    let report = AddressReport::new(&args.address, args.mask.as_deref())?;
    if let (Some(mask), Some(false)) = (report.mask, report.contiguous_mask) {
        log::warn!("Mask {mask} is not contiguous, counting all zero bits");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}
