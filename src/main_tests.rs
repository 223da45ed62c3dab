use super::*;

#[test]
fn quiet_wins_over_verbose() {
    assert_eq!(log_level(3, true), LevelFilter::Error);
}

#[test]
fn verbosity_steps() {
    assert_eq!(log_level(0, false), LevelFilter::Warn);
    assert_eq!(log_level(1, false), LevelFilter::Info);
    assert_eq!(log_level(2, false), LevelFilter::Debug);
    assert_eq!(log_level(9, false), LevelFilter::Trace);
}
