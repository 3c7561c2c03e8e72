const FILLED: &str = "🟩";
const EMPTY: &str = "⬜️";
const OVERFLOW: &str = "🟥";

/// Renders a fixed-width emoji gauge with a trailing integer percentage.
///
/// Overshooting the target paints an overflow run over the bar from the left,
/// capped at the bar length. A zero target renders as an empty bar at 0%, not
/// as a division error.
pub fn render_progress_bar(current: f64, target: f64, length: usize) -> String {
    let proportion = if target > 0.0 { current / target } else { 0.0 };

    let filled = (length as f64 * proportion.min(1.0)) as usize;
    let mut bar = format!(
        "{}{}",
        FILLED.repeat(filled),
        EMPTY.repeat(length - filled)
    );

    if proportion > 1.0 {
        // the bar is fully filled here, the red run overwrites from the start
        let over = ((length as f64 * (proportion - 1.0)) as usize).min(length);
        bar = format!("{}{}", OVERFLOW.repeat(over), FILLED.repeat(length - over));
    }

    let percentage = (proportion * 100.0) as i64;
    format!("{bar} {percentage}%")
}

/// Ten-segment gauge, the width used everywhere in the bot's summaries.
pub fn render_bar(current: f64, target: f64) -> String {
    render_progress_bar(current, target, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_of_the_target() {
        assert_eq!(
            render_bar(50.0, 100.0),
            format!("{}{} 50%", FILLED.repeat(5), EMPTY.repeat(5))
        );
    }

    #[test]
    fn exactly_on_target() {
        assert_eq!(render_bar(100.0, 100.0), format!("{} 100%", FILLED.repeat(10)));
    }

    #[test]
    fn overflow_overwrites_from_the_left() {
        assert_eq!(
            render_bar(150.0, 100.0),
            format!("{}{} 150%", OVERFLOW.repeat(5), FILLED.repeat(5))
        );
    }

    #[test]
    fn overflow_run_is_capped_at_the_bar_length() {
        assert_eq!(
            render_bar(300.0, 100.0),
            format!("{} 300%", OVERFLOW.repeat(10))
        );
    }

    #[test]
    fn zero_target_is_an_empty_bar() {
        assert_eq!(render_bar(120.0, 0.0), format!("{} 0%", EMPTY.repeat(10)));
    }

    #[test]
    fn percentage_is_truncated() {
        assert_eq!(render_progress_bar(1.0, 3.0, 10), format!(
            "{}{} 33%",
            FILLED.repeat(3),
            EMPTY.repeat(7)
        ));
    }
}
