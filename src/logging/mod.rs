use log::Level;

/// Debug builds log at `Debug`, release builds at `Info`.
fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Routes the `log` facade to the browser console. Calling it twice is harmless.
pub(crate) fn init() {
    let _ = console_log::init_with_level(max_level());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            Level::Debug
        } else {
            Level::Info
        };
        assert_eq!(max_level(), expected);
    }
}
