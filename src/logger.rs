/*!
A bare-bones stderr logger wired into the `log` facade.

Both halves of the program share it. Neither needs more than a level switch
and plain lines on stderr, so nothing beyond the facade itself is pulled in.
*/

use log::{LevelFilter, Log, Metadata, Record};

#[derive(Debug)]
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger as the global logger. `verbose` lifts the
/// maximum level from `Info` to `Debug`.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    log::set_logger(&LOGGER).expect("logger already installed");
    log::set_max_level(level);
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}|{}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}
