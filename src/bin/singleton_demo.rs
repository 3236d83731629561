//! Lazy Singleton: racing three initialization strategies
//!
//! Run with: cargo run --bin singleton_demo [-- harness.toml]

use colored::Colorize;
use creational_patterns::harness::{self, StressSummary};
use creational_patterns::{
    logging, ConfigError, ConstructionError, HarnessConfig, LazySingleton, TryLazySingleton,
};
use std::env;
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

// ============================================================================
// Example: a process-wide configuration singleton
// ============================================================================

struct AppConfig {
    api_key: String,
    debug_mode: bool,
}

fn load_app_config() -> AppConfig {
    log::debug!("loading AppConfig");
    AppConfig {
        api_key: env::var("API_KEY").unwrap_or_else(|_| "default_key".to_string()),
        debug_mode: cfg!(debug_assertions),
    }
}

static APP_CONFIG: LazySingleton<AppConfig> = LazySingleton::new(load_app_config);

fn singleton_example() {
    let addresses: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| APP_CONFIG.get_instance() as *const AppConfig as usize))
            .collect();
        handles.into_iter().filter_map(|h| h.join().ok()).collect()
    });

    let config = APP_CONFIG.get_instance();
    println!("Singleton AppConfig:");
    println!("  api_key: {}", config.api_key);
    println!("  debug_mode: {}", config.debug_mode);
    println!(
        "  Same instance on 4 threads: {}",
        addresses.iter().all(|&a| a == config as *const AppConfig as usize)
    );
    println!("  Constructions: {}", APP_CONFIG.stats().constructions);
}

// ============================================================================
// Example: a constructor that fails once, then succeeds
// ============================================================================

struct LicenseServer {
    seats: u32,
}

static CONNECT_ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

fn connect_license_server() -> Result<LicenseServer, ConstructionError> {
    let attempt = CONNECT_ATTEMPTS.fetch_add(1, Ordering::SeqCst) + 1;
    if attempt == 1 {
        return Err(ConstructionError::Unavailable {
            resource: "license server".to_string(),
            attempt,
        });
    }
    Ok(LicenseServer { seats: 25 })
}

static LICENSE: TryLazySingleton<LicenseServer, ConstructionError> =
    TryLazySingleton::new(connect_license_server);

fn retry_example() {
    for call in 1..=3 {
        match LICENSE.get_instance() {
            Ok(server) => println!("  Call {}: connected, {} seats", call, server.seats),
            Err(err) => println!(
                "  Call {}: {} (slot still empty: {})",
                call,
                err,
                !LICENSE.is_initialized()
            ),
        }
    }
    println!("  Constructions: {}", LICENSE.stats().constructions);
}

// ============================================================================
// Example: stress all three strategies
// ============================================================================

fn print_summary(summary: &StressSummary) {
    let verdict = if summary.is_sound() {
        "one instance".green()
    } else {
        "RACED".red().bold()
    };
    println!(
        "  {:<15} {:>4} callers  {:>3}/{:<3} racy rounds  max constructions {:>3}  {}",
        summary.strategy,
        summary.callers,
        summary.racy_rounds,
        summary.rounds,
        summary.max_constructions,
        verdict
    );
}

fn load_config() -> Result<HarnessConfig, ConfigError> {
    match env::args().nth(1) {
        Some(path) => HarnessConfig::from_file(path),
        None => Ok(HarnessConfig::default()),
    }
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            process::exit(1);
        }
    };
    logging::init(config.level_filter().unwrap_or(log::LevelFilter::Info));

    println!("Lazy Singleton Strategies");
    println!("=========================\n");

    println!("=== Process-wide Singleton ===");
    singleton_example();
    println!();

    println!("=== Fallible Construction ===");
    retry_example();
    println!();

    println!("=== Stress: {} rounds per caller count ===", config.rounds);
    for summary in harness::stress(&config) {
        print_summary(&summary);
    }
    println!();

    println!("=== Fast Path ===");
    let double_checked = creational_patterns::DoubleCheckedSlot::new();
    let always_lock = creational_patterns::AlwaysLockSlot::new();
    println!(
        "  double-checked: {} guard acquisitions over 10000 reads",
        harness::repeat_reads(&double_checked, 10_000, || 0u64)
    );
    println!(
        "  always-lock:    {} guard acquisitions over 10000 reads",
        harness::repeat_reads(&always_lock, 10_000, || 0u64)
    );
}
