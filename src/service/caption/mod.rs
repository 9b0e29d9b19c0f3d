use chrono::{Datelike, Local, NaiveDate, Weekday};

use super::language::Language;

/// Caption used when the caller does not supply one, for today's local date.
pub fn default_caption(language: Language, suffix: &str) -> String {
    caption_for_date(Local::now().date_naive(), language, suffix)
}

/// e.g. `2024년 03월 05일 화요일 MQ 글로벌 증권가 뉴스`
pub fn caption_for_date(date: NaiveDate, language: Language, suffix: &str) -> String {
    let caption = t!(
        "caption.default",
        locale = language.code(),
        year = date.year(),
        month = format!("{:02}", date.month()),
        day = format!("{:02}", date.day()),
        weekday = weekday_name(date.weekday(), language),
        suffix = suffix
    );

    caption.trim_end().to_string()
}

pub fn weekday_name(weekday: Weekday, language: Language) -> String {
    let locale = language.code();
    let name = match weekday {
        Weekday::Mon => t!("weekday.mon", locale = locale),
        Weekday::Tue => t!("weekday.tue", locale = locale),
        Weekday::Wed => t!("weekday.wed", locale = locale),
        Weekday::Thu => t!("weekday.thu", locale = locale),
        Weekday::Fri => t!("weekday.fri", locale = locale),
        Weekday::Sat => t!("weekday.sat", locale = locale),
        Weekday::Sun => t!("weekday.sun", locale = locale),
    };
    name.to_string()
}
