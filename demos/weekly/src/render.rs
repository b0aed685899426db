//! Plain-text rendering of one class timetable.

use tt_engine::{ClassTimetable, Timetable};

const HEAD_WIDTH: usize = 10;
const CELL_WIDTH: usize = 14;

/// Heading, a day header row, then one row per period.  Labels wider than a
/// cell are cut with `…`.
pub fn print_class(timetable: &Timetable, class: &ClassTimetable) {
    println!("{}", class.key.heading());

    let mut header = format!("{:<HEAD_WIDTH$}", "Period");
    for day in &timetable.day_names {
        header.push_str(&format!(" {:<CELL_WIDTH$}", fit(day, CELL_WIDTH)));
    }
    println!("{header}");
    println!("{}", "-".repeat(header.chars().count()));

    for period in 0..timetable.total_periods {
        let mut line = format!("{:<HEAD_WIDTH$}", format!("Period {}", period + 1));
        for day in 0..timetable.day_names.len() {
            let label = class.label(day, period).unwrap_or("");
            line.push_str(&format!(" {:<CELL_WIDTH$}", fit(label, CELL_WIDTH)));
        }
        println!("{line}");
    }
}

fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}
