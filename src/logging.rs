use std::io::Write;

use env_logger::{Builder, Env};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// `info` by default, `RUST_LOG` overrides.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {}",
                chrono::Local::now().format(TIMESTAMP_FORMAT),
                record.args()
            )
        })
        .init();
}
