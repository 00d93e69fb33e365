//! Tests for logger initialisation and verbosity mapping

#[cfg(test)]
mod tests {
    use greedythread::io::logging::{default_level, init_logging};
    use log::LevelFilter;

    // Tests quiet wins over verbose
    // Verified by checking verbose before quiet
    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false, false), LevelFilter::Warn);
        assert_eq!(default_level(true, false), LevelFilter::Info);
        assert_eq!(default_level(false, true), LevelFilter::Error);
        assert_eq!(default_level(true, true), LevelFilter::Error);
    }

    // Tests repeated initialisation is harmless
    // Verified by using init instead of try_init
    #[test]
    fn test_init_logging_twice() {
        init_logging(LevelFilter::Warn);
        init_logging(LevelFilter::Debug);
        log::warn!("logger initialised");
    }
}
