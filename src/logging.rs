//! Logging setup on top of `log` and `env_logger`.
//!
//! Nothing is printed below `warn` unless `RUST_LOG` asks for it:
//!
//! ```bash
//! RUST_LOG=info solve maze.txt    # phases and results
//! RUST_LOG=debug solve maze.txt   # junction tagging and rule 2 decisions
//! RUST_LOG=trace solve maze.txt   # every single move
//! ```

use std::{io::Write, sync::Once};

use env_logger::{Builder, Env};
use log::LevelFilter;

static INIT: Once = Once::new();

/// Initializes from `RUST_LOG`, falling back to `warn`. Later calls do nothing.
pub fn init() {
    INIT.call_once(|| {
        Builder::from_env(Env::default().default_filter_or("warn"))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{:5}] {} - {}",
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .init();
    });
}

/// Test-friendly logger, safe to call from every test.
pub fn init_test() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .is_test(true)
        .try_init();
}
