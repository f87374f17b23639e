use time::Date;

use crate::{
    catalog::{Category, VerificationStatus},
    render::components::BadgeVariant,
};

const MONTHS_LONG: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

pub const DEFAULT_NEW_ITEM_DAYS: i64 = 30;

fn month_index(date: Date) -> usize {
    usize::from(u8::from(date.month())) - 1
}

/// `12 Mei 2023`
pub fn format_date(date: Date) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_LONG[month_index(date)],
        date.year()
    )
}

/// `Mei 2023`
pub fn format_date_short(date: Date) -> String {
    format!("{} {}", MONTHS_SHORT[month_index(date)], date.year())
}

/// Dates in the future read as today.
pub fn relative_time(date: Date, today: Date) -> String {
    let days = (today - date).whole_days();
    match days {
        i64::MIN..=0 => "Hari ini".to_string(),
        1..=6 => format!("{days} hari yang lalu"),
        7..=29 => format!("{} minggu yang lalu", days / 7),
        30..=364 => format!("{} bulan yang lalu", days / 30),
        _ => format!("{} tahun yang lalu", days / 365),
    }
}

pub fn is_new_item(date: Date, today: Date, days: i64) -> bool {
    (today - date).whole_days() <= days
}

pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Achievement => "🏆",
        Category::Publication => "📚",
        Category::Project => "💻",
        Category::Service => "🤝",
        Category::Media => "🎤",
        Category::Certificate => "📜",
    }
}

pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Achievement => "text-yellow-600 bg-yellow-100",
        Category::Publication => "text-blue-600 bg-blue-100",
        Category::Project => "text-green-600 bg-green-100",
        Category::Service => "text-purple-600 bg-purple-100",
        Category::Media => "text-red-600 bg-red-100",
        Category::Certificate => "text-indigo-600 bg-indigo-100",
    }
}

pub fn verification_variant(status: VerificationStatus) -> BadgeVariant {
    match status {
        VerificationStatus::Verified => BadgeVariant::Success,
        VerificationStatus::Unverified => BadgeVariant::Warning,
        VerificationStatus::Pending => BadgeVariant::Info,
    }
}

pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_dash = true;
        }
    }
    slug
}

/// Upper-cases the first character; used for back-link labels.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
