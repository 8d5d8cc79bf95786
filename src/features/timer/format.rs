//! Display helpers for timer values.

/// Format seconds as `MM:SS`, or `H:MM:SS` once an hour or more is left.
#[must_use]
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Format a whole number of minutes as a human-readable string.
#[must_use]
pub fn format_minutes(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let plural = |n: u32| if n == 1 { "" } else { "s" };

    match (hours, minutes) {
        (0, m) => format!("{m} minute{}", plural(m)),
        (h, 0) => format!("{h} hour{}", plural(h)),
        (h, m) => format!("{h} hour{}, {m} minute{}", plural(h), plural(m)),
    }
}

/// Render a text progress bar for a percentage (0 - 100).
#[must_use]
pub fn render_progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width) / 100;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(25 * 60), "25:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(3600 + 5 * 60 + 9), "1:05:09");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(25), "25 minutes");
        assert_eq!(format_minutes(1), "1 minute");
        assert_eq!(format_minutes(120), "2 hours");
        assert_eq!(format_minutes(90), "1 hour, 30 minutes");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(50, 10);
        assert_eq!(bar, "[█████░░░░░]");
        assert_eq!(render_progress_bar(100, 4), "[████]");
        assert_eq!(render_progress_bar(0, 4), "[░░░░]");
    }
}
