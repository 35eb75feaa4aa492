//! Wall-clock and CPU-time measurement around a single operation.

use std::time::{Duration, Instant};

/// Log target for timing events, independent of the module path.
pub const TIMING_TARGET: &str = "stash_utils::timing";

/// Run `op`, then log its wall-clock and CPU time at debug level.
///
/// Errors from `op` are returned untouched and nothing is logged for them.
pub fn with_timing<T, E, F>(label: &str, op: F) -> std::result::Result<T, E>
where
    F: FnOnce() -> std::result::Result<T, E>,
{
    let start = Sample::now();
    let value = op()?;
    start.log_elapsed(label);
    Ok(value)
}

/// [`with_timing`] for operations that cannot fail.
pub fn timed<T, F>(label: &str, op: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Sample::now();
    let value = op();
    start.log_elapsed(label);
    value
}

/// `<label> [clock=<wall>ms, cpu=<cpu>ms]`, six fractional digits each.
pub fn format_timing(label: &str, clock_ms: f64, cpu_ms: f64) -> String {
    format!("{} [clock={:.6}ms, cpu={:.6}ms]", label, clock_ms, cpu_ms)
}

struct Sample {
    wall: Instant,
    cpu: Duration,
}

impl Sample {
    fn now() -> Self {
        Self {
            wall: Instant::now(),
            cpu: process_cpu_time(),
        }
    }

    fn log_elapsed(&self, label: &str) {
        let clock_ms = as_millis(self.wall.elapsed());
        let cpu_ms = as_millis(process_cpu_time().saturating_sub(self.cpu));
        tracing::debug!(
            target: TIMING_TARGET,
            label,
            clock_ms,
            cpu_ms,
            "{}",
            format_timing(label, clock_ms, cpu_ms)
        );
    }
}

fn as_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(unix)]
fn process_cpu_time() -> Duration {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: `ts` is a valid, exclusively borrowed timespec for the call.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
    if rc != 0 {
        return Duration::ZERO;
    }
    Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32)
}

// No portable process clock; CPU time reads as zero here.
#[cfg(not(unix))]
fn process_cpu_time() -> Duration {
    Duration::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let value = tracing::subscriber::with_default(subscriber, f);
        (value, captured.lines())
    }

    #[test]
    fn format_timing_uses_six_decimals() {
        assert_eq!(
            format_timing("task", 1.5, 0.25),
            "task [clock=1.500000ms, cpu=0.250000ms]"
        );
    }

    #[test]
    fn with_timing_returns_value_and_logs_once() {
        let (result, lines) = capture(|| with_timing("task", || Ok::<_, String>(42)));

        assert_eq!(result, Ok(42));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("DEBUG"));
        assert!(lines[0].contains("task [clock="));
        assert!(lines[0].contains("ms, cpu="));
        assert!(lines[0].contains("stash_utils::timing:"), "{}", lines[0]);
        assert!(lines[0].contains("label="), "{}", lines[0]);
        assert!(lines[0].contains("clock_ms="), "{}", lines[0]);
        assert!(lines[0].contains("cpu_ms="), "{}", lines[0]);
    }

    #[test]
    fn with_timing_skips_log_on_error() {
        let (result, lines) = capture(|| with_timing("task", || Err::<i32, _>("boom")));

        assert_eq!(result, Err("boom"));
        assert!(lines.is_empty());
    }

    #[test]
    fn timed_logs_infallible_operation() {
        let (value, lines) = capture(|| timed("sum", || (1..=10).sum::<i32>()));

        assert_eq!(value, 55);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("sum [clock="));
    }

    #[test]
    fn with_timing_measures_sleep() {
        let (_, lines) = capture(|| {
            with_timing("sleep", || {
                std::thread::sleep(Duration::from_millis(5));
                Ok::<_, ()>(())
            })
        });

        let line = &lines[0];
        let clock = line
            .split("clock=")
            .nth(1)
            .and_then(|rest| rest.split("ms").next())
            .and_then(|n| n.parse::<f64>().ok())
            .unwrap();
        assert!(clock >= 5.0, "{}", line);
    }

    #[cfg(unix)]
    #[test]
    fn process_cpu_time_is_monotonic() {
        let before = process_cpu_time();
        let mut acc = 0u64;
        for i in 0..200_000u64 {
            acc = acc.wrapping_add(i * i);
        }
        std::hint::black_box(acc);
        assert!(process_cpu_time() >= before);
    }
}
