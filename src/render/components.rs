use time::Date;

use crate::{
    catalog::{PortfolioItem, VerificationStatus},
    listing::{ListingState, TypeOption},
    render::{
        format::{category_color, category_icon, format_date_short, is_new_item, verification_variant},
        html::{escape, safe_href},
    },
};

const CARD_TAG_LIMIT: usize = 4;
const CARD_EVIDENCE_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Warning,
    Info,
    Default,
    Primary,
    Outline,
    Secondary,
}

impl BadgeVariant {
    fn classes(&self) -> &'static str {
        match self {
            BadgeVariant::Success => "bg-green-100 text-green-800 border-green-200",
            BadgeVariant::Warning => "bg-yellow-100 text-yellow-800 border-yellow-200",
            BadgeVariant::Info => "bg-blue-100 text-blue-800 border-blue-200",
            BadgeVariant::Default => "bg-gray-100 text-gray-800 border-gray-200",
            BadgeVariant::Primary => "bg-primary-100 text-primary-800 border-primary-200",
            BadgeVariant::Outline => "border border-gray-300 text-gray-700 bg-transparent",
            BadgeVariant::Secondary => "bg-secondary-100 text-secondary-800 border-secondary-200",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Sm,
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeIcon {
    Check,
    Help,
    Clock,
}

impl BadgeIcon {
    fn glyph(&self) -> &'static str {
        match self {
            BadgeIcon::Check => "✓",
            BadgeIcon::Help => "?",
            BadgeIcon::Clock => "⏱",
        }
    }
}

pub fn badge(label: &str, variant: BadgeVariant, size: Size, icon: Option<BadgeIcon>) -> String {
    let size_classes = match size {
        Size::Sm => "px-2 py-0.5 text-xs",
        Size::Md => "px-2.5 py-0.5 text-sm",
        Size::Lg => "px-3 py-1 text-base",
    };
    let icon_html = icon
        .map(|icon| format!(r#"<span class="badge-icon mr-1">{}</span>"#, icon.glyph()))
        .unwrap_or_default();
    format!(
        r#"<span class="badge inline-flex items-center rounded-full border font-medium {} {}">{}{}</span>"#,
        variant.classes(),
        size_classes,
        icon_html,
        escape(label)
    )
}

pub fn verification_badge(status: VerificationStatus, size: Size) -> String {
    let icon = match status {
        VerificationStatus::Verified => BadgeIcon::Check,
        VerificationStatus::Pending => BadgeIcon::Clock,
        VerificationStatus::Unverified => BadgeIcon::Help,
    };
    badge(status.label(), verification_variant(status), size, Some(icon))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagVariant {
    Default,
    Primary,
    Secondary,
    Outline,
}

/// A tag chip; with `href` it becomes a link.
pub fn tag(label: &str, variant: TagVariant, size: Size, href: Option<&str>) -> String {
    let variant_classes = match variant {
        TagVariant::Default => "bg-gray-100 text-gray-800 hover:bg-gray-200",
        TagVariant::Primary => "bg-primary-100 text-primary-800 hover:bg-primary-200",
        TagVariant::Secondary => "bg-secondary-100 text-secondary-800 hover:bg-secondary-200",
        TagVariant::Outline => "border border-gray-300 text-gray-700 hover:bg-gray-50",
    };
    let size_classes = match size {
        Size::Sm => "px-2 py-0.5 text-xs",
        Size::Md => "px-2.5 py-1 text-sm",
        Size::Lg => "px-3 py-1.5 text-base",
    };
    let classes = format!(
        "tag inline-flex items-center rounded-md font-medium {variant_classes} {size_classes}"
    );
    match href {
        Some(href) => format!(
            r#"<a href="{}" class="{} cursor-pointer">{}</a>"#,
            safe_href(href),
            classes,
            escape(label)
        ),
        None => format!(r#"<span class="{}">{}</span>"#, classes, escape(label)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Sm,
    Md,
    Lg,
}

/// Wraps already-rendered `body` markup in a card container.
pub fn card(body: &str, padding: CardPadding, hover: bool) -> String {
    let padding_classes = match padding {
        CardPadding::None => "",
        CardPadding::Sm => "p-4",
        CardPadding::Md => "p-6",
        CardPadding::Lg => "p-8",
    };
    let hover_classes = if hover {
        " hover:shadow-lg transition-shadow duration-200"
    } else {
        ""
    };
    format!(
        r#"<div class="card bg-white rounded-lg shadow-md border border-gray-200 {padding_classes}{hover_classes}">{body}</div>"#
    )
}

pub fn card_title(title: &str) -> String {
    format!(
        r#"<div class="mb-4"><h3 class="text-lg font-semibold text-gray-900">{}</h3></div>"#,
        escape(title)
    )
}

pub fn tag_filter_href(listing_path: &str, tag: &str) -> String {
    let query = serde_urlencoded::to_string(&[("tag", tag)]).unwrap_or_default();
    format!("{listing_path}?{query}")
}

pub struct PortfolioCardProps<'a> {
    pub item: &'a PortfolioItem,
    /// First path segment of the detail link, e.g. `projects`.
    pub route_slug: &'a str,
    pub show_category: bool,
    pub today: Date,
    pub new_item_days: i64,
}

pub fn portfolio_card(props: &PortfolioCardProps<'_>) -> String {
    let item = props.item;
    let mut html = String::new();

    html.push_str(r#"<article class="portfolio-card bg-white rounded-lg shadow-md p-6">"#);
    html.push_str(r#"<div class="flex items-start justify-between mb-4"><div class="flex items-center gap-2">"#);
    if props.show_category {
        let color = category_color(item.category);
        let text_color = color.split(' ').next().unwrap_or_default();
        html.push_str(&format!(
            r#"<span class="category-icon text-2xl {}" title="{}">{}</span>"#,
            text_color,
            item.category.label(),
            category_icon(item.category)
        ));
    }
    if is_new_item(item.date.date(), props.today, props.new_item_days) {
        html.push_str(&badge("Baru", BadgeVariant::Info, Size::Sm, Some(BadgeIcon::Clock)));
    }
    html.push_str(r#"</div><div class="flex items-center gap-2">"#);
    html.push_str(&verification_badge(item.verified_status, Size::Sm));
    html.push_str(&format!(
        r#"<time class="text-sm text-gray-500" datetime="{}">{}</time>"#,
        item.date,
        format_date_short(item.date.date())
    ));
    html.push_str("</div></div>");

    html.push_str(&format!(
        r#"<div class="mb-4"><h3 class="text-xl font-semibold text-gray-900">{}</h3><p class="text-gray-600 mb-3">{}</p>"#,
        escape(&item.title),
        escape(&item.summary)
    ));
    html.push_str(&format!(
        r#"<div class="text-sm text-gray-500 mb-3"><span class="font-medium">{}</span>"#,
        escape(&item.role)
    ));
    if !item.impact.is_empty() {
        html.push_str(&format!(
            r#"<span class="mx-2">•</span><span>{}</span>"#,
            escape(&item.impact)
        ));
    }
    html.push_str("</div></div>");

    let listing_path = format!("/{}", item.category.slug());
    html.push_str(r#"<div class="tags flex flex-wrap gap-2 mb-4">"#);
    for label in item.tags.iter().take(CARD_TAG_LIMIT) {
        let href = tag_filter_href(&listing_path, label);
        html.push_str(&tag(label, TagVariant::Outline, Size::Sm, Some(&href)));
    }
    if item.tags.len() > CARD_TAG_LIMIT {
        let more = format!("+{}", item.tags.len() - CARD_TAG_LIMIT);
        html.push_str(&tag(&more, TagVariant::Outline, Size::Sm, None));
    }
    html.push_str("</div>");

    if !item.evidence_links.is_empty() {
        html.push_str(r#"<div class="evidence mb-4"><div class="text-sm text-gray-600 mb-2">Bukti:</div><div class="flex flex-wrap gap-2">"#);
        for evidence in item.evidence_links.iter().take(CARD_EVIDENCE_LIMIT) {
            html.push_str(&format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-xs text-primary-600">{}</a>"#,
                safe_href(&evidence.url),
                escape(&evidence.label)
            ));
        }
        if item.evidence_links.len() > CARD_EVIDENCE_LIMIT {
            html.push_str(&format!(
                r#"<span class="text-xs text-gray-500">+{} lainnya</span>"#,
                item.evidence_links.len() - CARD_EVIDENCE_LIMIT
            ));
        }
        html.push_str("</div></div>");
    }

    html.push_str(&format!(
        r#"<div class="flex items-center justify-between pt-4 border-t border-gray-100"><span class="item-type text-xs text-gray-500 uppercase tracking-wide">{}</span><a class="detail-link text-sm font-medium text-primary-600" href="/{}/{}">Detail</a></div>"#,
        escape(&item.r#type),
        escape(props.route_slug),
        escape(&item.id)
    ));
    html.push_str("</article>");
    html
}

pub struct FilterBarProps<'a> {
    /// Path the filter form submits to.
    pub action: &'a str,
    pub type_options: &'a [TypeOption],
    pub years: &'a [i32],
    pub state: &'a ListingState,
}

pub(crate) fn select_option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    )
}

/// "all" plus one option per year, newest first. An active year missing from
/// `years` still gets a selected option so the select shows the applied filter.
pub(crate) fn year_options(years: &[i32], selected: Option<i32>) -> String {
    let mut listed = years.to_vec();
    if let Some(year) = selected
        && !listed.contains(&year)
    {
        listed.push(year);
        listed.sort_unstable_by(|a, b| b.cmp(a));
    }
    let mut html = select_option("all", "Semua Tahun", selected.is_none());
    for year in listed {
        html.push_str(&select_option(
            &year.to_string(),
            &year.to_string(),
            selected == Some(year),
        ));
    }
    html
}

/// Search box plus type/year/verification selects, submitted as a GET form so
/// the state lives in the query string.
pub fn search_filter_bar(props: &FilterBarProps<'_>) -> String {
    let state = props.state;
    let mut html = String::new();

    html.push_str(&format!(
        r#"<form class="search-filter bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-6" method="get" action="{}">"#,
        escape(props.action)
    ));
    html.push_str(&format!(
        r#"<div class="relative mb-4"><input type="search" name="q" value="{}" placeholder="Cari berdasarkan judul, deskripsi, atau tag..." class="w-full pl-10 pr-4 py-2 border border-gray-300 rounded-md"></div>"#,
        escape(&state.query)
    ));
    for tag in &state.tags {
        html.push_str(&format!(
            r#"<input type="hidden" name="tag" value="{}">"#,
            escape(tag)
        ));
    }

    html.push_str(r#"<div class="flex items-center justify-between"><span class="text-sm text-gray-600">Filter"#);
    if state.has_active_filters() {
        html.push_str(r#" <span class="filter-active ml-2 bg-primary-100 text-primary-800 px-2 py-0.5 rounded-full text-xs">Aktif</span>"#);
    }
    html.push_str("</span>");
    if state.has_active_filters() {
        html.push_str(&format!(
            r#"<a class="filter-clear text-sm text-gray-500" href="{}">Clear</a>"#,
            escape(props.action)
        ));
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="mt-4 pt-4 border-t border-gray-200 grid grid-cols-1 md:grid-cols-3 gap-4">"#);

    let selected_type = state.item_type.value().map(String::as_str);
    html.push_str(r#"<label class="block text-sm font-medium text-gray-700">Kategori<select name="type" class="w-full px-3 py-2 border border-gray-300 rounded-md text-sm">"#);
    html.push_str(&select_option("all", "Semua Kategori", selected_type.is_none()));
    for option in props.type_options {
        html.push_str(&select_option(
            option.value,
            option.label,
            selected_type == Some(option.value),
        ));
    }
    html.push_str("</select></label>");

    let selected_year = state.year.value().copied();
    html.push_str(r#"<label class="block text-sm font-medium text-gray-700">Tahun<select name="year" class="w-full px-3 py-2 border border-gray-300 rounded-md text-sm">"#);
    html.push_str(&year_options(props.years, selected_year));
    html.push_str("</select></label>");

    let selected_status = state.verified.value().copied();
    html.push_str(r#"<label class="block text-sm font-medium text-gray-700">Status Verifikasi<select name="verified" class="w-full px-3 py-2 border border-gray-300 rounded-md text-sm">"#);
    html.push_str(&select_option("all", "Semua Status", selected_status.is_none()));
    for status in VerificationStatus::ALL {
        html.push_str(&select_option(
            status.as_str(),
            status.label(),
            selected_status == Some(status),
        ));
    }
    html.push_str("</select></label>");

    html.push_str(r#"</div><button type="submit" class="mt-4 px-4 py-2 bg-primary-600 text-white rounded-md">Terapkan</button></form>"#);
    html
}
