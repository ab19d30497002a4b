//! Print SDK settings and per-controller tracking state.
//!
//! Set SIXENSE_FILTER=on|off to change the jitter filter before printing.

use sixense::{discovery, Config, NativeSdk, Sdk, Session};

fn main() {
    env_logger::init();

    let config = Config::from_env();
    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> sixense::Result<()> {
    let sdk = NativeSdk::load(config.library.as_deref())?;
    println!("Library:  {}", sdk.path().display());

    let session = Session::open(sdk)?;
    let bases = discovery::await_bases(&session, &config.discovery);
    println!("Bases:    {:?} (max {})", bases, session.sdk().max_bases());

    let Some(base) = config.base.choose(&bases) else {
        println!("No connected bases found!");
        return session.close();
    };
    session.activate_base(base)?;

    let sdk = session.sdk();
    if let Some(enabled) = config.filter {
        sdk.set_filter_enabled(enabled)?;
    }

    println!("Active:   base {}", base);
    println!("History:  {} samples", sdk.history_size());
    println!(
        "Controllers: {} active of {}",
        sdk.num_active_controllers(),
        sdk.max_controllers()
    );
    match sdk.filter_enabled() {
        Ok(enabled) => println!("Filter:   {}", if enabled { "on" } else { "off" }),
        Err(e) => println!("Filter:   unavailable ({})", e),
    }
    match sdk.filter_params() {
        Ok(p) => println!(
            "Filter params: near {} mm -> {}, far {} mm -> {}",
            p.near_range, p.near_val, p.far_range, p.far_val
        ),
        Err(e) => println!("Filter params: unavailable ({})", e),
    }
    match sdk.high_priority_binding_enabled() {
        Ok(on) => println!("High-priority binding: {}", on),
        Err(e) => println!("High-priority binding: unavailable ({})", e),
    }
    match sdk.base_color() {
        Ok(c) => println!("Base color: #{:02x}{:02x}{:02x}", c.red, c.green, c.blue),
        Err(e) => println!("Base color: unavailable ({})", e),
    }

    for controller in session.enabled_controllers() {
        let hemisphere = sdk
            .hemisphere_tracking_mode(controller)
            .map(|on| on.to_string())
            .unwrap_or_else(|e| format!("unavailable ({})", e));
        match session.newest_sample(controller) {
            Ok(s) => println!(
                "  [{}] hand={} docked={} fw={} hw={} hemisphere={}",
                controller, s.hand, s.docked, s.firmware_revision, s.hardware_revision, hemisphere
            ),
            Err(e) => println!("  [{}] no data ({})", controller, e),
        }
    }

    session.close()
}
