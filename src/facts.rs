use crate::age::AgeReport;

const MAX_FACTS: usize = 6;
const HEARTBEATS_PER_MINUTE: u64 = 70;
const BREATHS_PER_MINUTE: u64 = 15;

/// Fun facts derived from a report, in display order, at most six.
///
/// Counting facts come first, then the birthday and milestone messages.
pub fn fun_facts(report: &AgeReport) -> Vec<String> {
    let mut facts = Vec::with_capacity(MAX_FACTS + 1);

    let heartbeats = report.total_minutes * HEARTBEATS_PER_MINUTE;
    facts.push(format!(
        "Your heart has beaten approximately {} times!",
        group_thousands(heartbeats)
    ));

    let breaths = report.total_minutes * BREATHS_PER_MINUTE;
    facts.push(format!(
        "You've taken about {} breaths in your lifetime!",
        group_thousands(breaths)
    ));

    if report.years >= 1 {
        facts.push(format!(
            "You've experienced {} New Year celebrations!",
            report.years
        ));
    }

    // A third of every day asleep, rounded to the nearest day
    let sleep_days = (report.total_days + 1) / 3;
    facts.push(format!(
        "You've slept for approximately {} days!",
        group_thousands(sleep_days)
    ));

    facts.push(format!(
        "Earth has rotated {} times since you were born!",
        group_thousands(report.total_days)
    ));

    match report.days_until_anniversary {
        0 => facts.push("🎉 Happy Birthday! Today is your special day!".to_string()),
        1 => facts.push("🎂 Your birthday is tomorrow!".to_string()),
        _ => {}
    }

    match report.years {
        18 => facts.push("🎓 You've reached the age of majority in many countries!".to_string()),
        21 => facts.push("🍾 You can legally drink in the United States!".to_string()),
        30 => facts.push("💼 Welcome to your thirties!".to_string()),
        _ => {}
    }

    facts.truncate(MAX_FACTS);
    facts
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
