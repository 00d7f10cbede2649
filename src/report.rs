//! Destinations for REPORT output.

use tracing::info;

/// Receives one value per REPORT command.
///
/// `Some("x,y,FACING")` when the robot is placed, `None` (the null marker)
/// when it is not.
pub trait ReportSink {
    /// Called exactly once per REPORT command.
    fn report(&mut self, line: Option<&str>);
}

/// Default sink: writes each report through `tracing` at INFO level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn report(&mut self, line: Option<&str>) {
        info!(target: "grid_robot::report", report = ?line);
    }
}

/// Captures reports in order, e.g. for tests or a host that prints them itself.
impl ReportSink for Vec<Option<String>> {
    fn report(&mut self, line: Option<&str>) {
        self.push(line.map(str::to_owned));
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn report(&mut self, line: Option<&str>) {
        (**self).report(line);
    }
}
