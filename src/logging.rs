use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};

/// Log plugin: debug level and stdout in debug builds, info level plus a
/// `clipmaster.log` file in the platform log dir otherwise.
pub fn get_builder() -> tauri_plugin_log::Builder {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let builder = tauri_plugin_log::Builder::new()
        .clear_targets()
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(level)
        .format(|out, message, record| {
            // 2026-10-14 10:30:45.123 INFO [clipmaster_core::store] message
            out.finish(format_args!(
                "{} {} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .target(Target::new(TargetKind::Stdout));

    if cfg!(debug_assertions) {
        builder
    } else {
        builder.target(Target::new(TargetKind::LogDir {
            file_name: Some("clipmaster".to_string()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger() {
        let _builder = get_builder();
    }
}
