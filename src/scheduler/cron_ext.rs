use croner::Cron;

pub trait CronExt {
    /// Parses the specified cron pattern allowing an optional seconds field.
    fn parse_pattern(pattern: impl AsRef<str>) -> anyhow::Result<Cron>;
}

impl CronExt for Cron {
    fn parse_pattern(pattern: impl AsRef<str>) -> anyhow::Result<Cron> {
        Ok(Cron::new(pattern.as_ref()).with_seconds_optional().parse()?)
    }
}
