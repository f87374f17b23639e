use std::time::Duration;

use crate::{
    catalog::{Category, PortfolioItem},
    contact::{ContactError, ContactReceipt, ContactSubmission},
    listing::ListingView,
    render::{
        RenderContext,
        components::{
            BadgeVariant, CardPadding, FilterBarProps, PortfolioCardProps, Size, TagVariant,
            badge, card, card_title, portfolio_card, search_filter_bar, select_option, tag,
            tag_filter_href, verification_badge, year_options,
        },
        format::{
            capitalize, category_color, category_icon, format_date, relative_time, slugify,
        },
        html::{escape, link, safe_href},
        layout::page,
    },
    share::SharePayload,
    timeline::{Timeline, TimelineFilter},
};

const HOME_EXPERTISE_LIMIT: usize = 6;

fn card_for(ctx: &RenderContext<'_>, item: &PortfolioItem, show_category: bool) -> String {
    portfolio_card(&PortfolioCardProps {
        item,
        route_slug: item.category.slug(),
        show_category,
        today: ctx.today,
        new_item_days: ctx.new_item_days,
    })
}

fn stat_tile(value: u64, label: &str) -> String {
    format!(
        r#"<div class="stat text-center"><div class="stat-value text-3xl font-bold text-primary-600">{value}</div><div class="text-sm text-gray-600">{}</div></div>"#,
        escape(label)
    )
}

pub fn home(ctx: &RenderContext<'_>) -> String {
    let profile = ctx.catalog.profile();
    let stats = ctx.catalog.statistics();
    let mut body = String::new();

    body.push_str(&format!(
        r#"<section class="hero bg-gradient-to-br from-primary-50 to-secondary-50 py-20"><div class="max-w-7xl mx-auto px-4 text-center"><h1 class="text-5xl font-bold text-gray-900 mb-4">{}</h1><p class="text-xl text-gray-600 mb-2">{}</p><p class="tagline text-lg text-gray-500 mb-8">{}</p><div class="flex justify-center gap-4"><a class="cv-download px-6 py-3 bg-primary-600 text-white rounded-md" href="{}" download>Download CV</a><a class="px-6 py-3 border border-primary-600 text-primary-600 rounded-md" href="/contact">Hubungi Saya</a></div></div></section>"#,
        escape(&profile.name),
        escape(&profile.title),
        escape(&profile.tagline),
        safe_href(&ctx.cv_href),
    ));

    let mut tiles = String::new();
    tiles.push_str(&stat_tile(stats.total_achievements, "Achievements"));
    tiles.push_str(&stat_tile(stats.total_publications, "Publications"));
    tiles.push_str(&stat_tile(stats.total_projects, "Projects"));
    tiles.push_str(&stat_tile(stats.total_certificates, "Certificates"));
    tiles.push_str(&stat_tile(stats.years_active, "Tahun Aktif"));
    body.push_str(&format!(
        r#"<section class="statistics py-12"><div class="max-w-7xl mx-auto px-4"><div class="grid grid-cols-2 md:grid-cols-5 gap-6">{tiles}</div>"#
    ));
    if let Some(citations) = stats.citation_count {
        body.push_str(&format!(
            r#"<div class="citations mt-6 text-center">{}</div>"#,
            badge(
                &format!("{citations} sitasi"),
                BadgeVariant::Primary,
                Size::Lg,
                None
            )
        ));
    }
    body.push_str("</div></section>");

    let expertise: String = profile
        .expertise
        .iter()
        .take(HOME_EXPERTISE_LIMIT)
        .map(|skill| badge(skill, BadgeVariant::Secondary, Size::Md, None))
        .collect();
    let position = &profile.current_position;
    body.push_str(&format!(
        r#"<section class="about-excerpt py-12 bg-white"><div class="max-w-7xl mx-auto px-4 grid grid-cols-1 lg:grid-cols-2 gap-8"><div><h2 class="text-3xl font-bold mb-4">Tentang Saya</h2><p class="text-gray-600 mb-4">{}</p><div class="expertise flex flex-wrap gap-2 mb-4">{expertise}</div><a class="text-primary-600 font-medium" href="/about">Selengkapnya</a></div>{}</div></section>"#,
        escape(&profile.bio),
        card(
            &format!(
                r#"{}<p class="font-medium text-gray-900">{}</p><p class="text-gray-600">{}</p><p class="text-sm text-gray-500 mb-2">{}</p><p class="text-gray-600">{}</p>"#,
                card_title("Posisi Saat Ini"),
                escape(&position.title),
                escape(&position.organization),
                escape(&position.period),
                escape(&position.description),
            ),
            CardPadding::Md,
            false
        ),
    ));

    body.push_str(r#"<section class="latest-updates py-12"><div class="max-w-7xl mx-auto px-4"><h2 class="text-3xl font-bold mb-8">Pembaruan Terbaru</h2>"#);
    let latest = ctx.catalog.latest(ctx.latest_updates);
    if latest.is_empty() {
        body.push_str(r#"<p class="empty-state text-gray-500 text-center py-12">Belum ada pembaruan terbaru.</p>"#);
    } else {
        body.push_str(r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">"#);
        for item in latest {
            body.push_str(&card_for(ctx, item, true));
        }
        body.push_str("</div>");
    }
    body.push_str("</div></section>");

    body.push_str(r#"<section class="quick-nav py-12 bg-white"><div class="max-w-7xl mx-auto px-4"><h2 class="text-3xl font-bold mb-8">Jelajahi Portfolio</h2><div class="grid grid-cols-2 md:grid-cols-3 gap-6">"#);
    for category in Category::ALL {
        let count = ctx.catalog.items(Some(category)).len();
        body.push_str(&format!(
            r#"<a class="quick-nav-item block p-6 rounded-lg border border-gray-200" href="/{}"><span class="text-3xl {}">{}</span><h3 class="text-lg font-semibold mt-2">{}</h3><p class="text-sm text-gray-500">{count} item</p></a>"#,
            category.slug(),
            category_color(category),
            category_icon(category),
            category.label(),
        ));
    }
    body.push_str("</div></div></section>");

    page(ctx, "", "/", "", &body)
}

pub fn about(ctx: &RenderContext<'_>) -> String {
    let profile = ctx.catalog.profile();
    let mut body = String::new();

    body.push_str(&format!(
        r#"<div class="max-w-4xl mx-auto px-4 py-12"><h1 class="text-4xl font-bold mb-2">{}</h1><p class="text-xl text-gray-600 mb-8">{}</p>"#,
        escape(&profile.name),
        escape(&profile.title)
    ));
    body.push_str(&format!(
        r#"<section id="bio" class="mb-10"><h2 class="text-2xl font-semibold mb-4">Bio</h2><p class="text-gray-700">{}</p><p class="text-sm text-gray-500 mt-2">{}</p></section>"#,
        escape(&profile.bio),
        escape(&profile.location)
    ));

    if !profile.expertise.is_empty() {
        body.push_str(r#"<section id="expertise" class="mb-10"><h2 class="text-2xl font-semibold mb-4">Keahlian</h2><div class="flex flex-wrap gap-2">"#);
        for skill in &profile.expertise {
            body.push_str(&tag(skill, TagVariant::Primary, Size::Md, None));
        }
        body.push_str("</div></section>");
    }

    if !profile.education.is_empty() {
        body.push_str(r#"<section id="education" class="mb-10"><h2 class="text-2xl font-semibold mb-4">Pendidikan</h2>"#);
        for education in &profile.education {
            let description = education
                .description
                .as_deref()
                .map(|text| format!(r#"<p class="text-gray-600 mt-2">{}</p>"#, escape(text)))
                .unwrap_or_default();
            body.push_str(&format!(
                r#"<article id="{}" class="education-entry mb-4">{}</article>"#,
                escape(&slugify(&education.degree)),
                card(
                    &format!(
                        r#"<h3 class="text-lg font-semibold">{}</h3><p class="text-gray-700">{}</p><p class="text-sm text-gray-500">{}</p>{description}"#,
                        escape(&education.degree),
                        escape(&education.institution),
                        escape(&education.year),
                    ),
                    CardPadding::Md,
                    false
                )
            ));
        }
        body.push_str("</section>");
    }

    let position = &profile.current_position;
    body.push_str(&format!(
        r#"<section id="current-position" class="mb-10"><h2 class="text-2xl font-semibold mb-4">Posisi Saat Ini</h2><h3 class="text-lg font-semibold">{}</h3><p class="text-gray-700">{} &middot; {}</p><p class="text-gray-600 mt-2">{}</p></section>"#,
        escape(&position.title),
        escape(&position.organization),
        escape(&position.period),
        escape(&position.description),
    ));

    let websites = &profile.websites;
    let links: Vec<String> = [
        ("GitHub", websites.github.as_deref()),
        ("Google Scholar", websites.scholar.as_deref()),
        ("Blog", websites.blog.as_deref()),
        ("LinkedIn", websites.linkedin.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|url| link(url, label, "text-primary-600")))
    .collect();
    body.push_str(&format!(
        r#"<section id="links"><h2 class="text-2xl font-semibold mb-4">Tautan</h2><div class="flex flex-wrap gap-4">{}{}</div></section></div>"#,
        link(
            &format!("mailto:{}", profile.email),
            &profile.email,
            "text-primary-600"
        ),
        links.join("")
    ));

    page(ctx, "About", "/about", "", &body)
}

pub fn listing(ctx: &RenderContext<'_>, view: &ListingView<'_>) -> String {
    let spec = view.spec;
    let path = spec.path();
    let mut body = String::new();

    body.push_str(&format!(
        r#"<div class="max-w-7xl mx-auto px-4 py-12"><div class="mb-8"><h1 class="text-4xl font-bold text-gray-900 mb-4">{}</h1><p class="text-lg text-gray-600">{}</p></div>"#,
        escape(spec.heading),
        escape(spec.intro)
    ));
    body.push_str(&search_filter_bar(&FilterBarProps {
        action: &path,
        type_options: &spec.type_options,
        years: &view.years,
        state: &view.state,
    }));

    if !view.state.tags.is_empty() {
        body.push_str(r#"<div class="active-tags flex flex-wrap gap-2 mb-4">"#);
        for label in &view.state.tags {
            body.push_str(&tag(
                label,
                TagVariant::Primary,
                Size::Sm,
                Some(&tag_filter_href(&path, label)),
            ));
        }
        body.push_str("</div>");
    }

    body.push_str(&format!(
        r#"<p class="result-count text-sm text-gray-600 mb-6">Menampilkan {} dari {} {}</p>"#,
        view.items.len(),
        view.total,
        escape(spec.noun)
    ));

    if view.is_empty() {
        body.push_str(&format!(
            r#"<p class="empty-state text-center text-gray-500 py-12">{}</p>"#,
            escape(spec.empty_message)
        ));
    } else {
        body.push_str(r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-6">"#);
        for item in &view.items {
            body.push_str(&card_for(ctx, item, false));
        }
        body.push_str("</div>");
    }
    body.push_str("</div>");

    page(ctx, spec.heading, &path, "", &body)
}

const SHARE_SCRIPT: &str = r#"<script>document.querySelectorAll('.share-button').forEach(function(button){button.addEventListener('click',function(){var data={title:button.dataset.shareTitle,text:button.dataset.shareText,url:button.dataset.shareUrl};var copy=function(){if(navigator.clipboard){navigator.clipboard.writeText(data.url);}};if(navigator.share){navigator.share(data).catch(copy);}else{copy();}});});</script>"#;

/// Detail view of one item. `section` is the first path segment the visitor
/// came through; the back link returns there.
pub fn detail(
    ctx: &RenderContext<'_>,
    item: &PortfolioItem,
    section: &str,
    share_url: &str,
) -> String {
    let share = SharePayload::for_item(item, &ctx.catalog.profile().name, share_url);
    let mut body = String::new();

    body.push_str(&format!(
        r#"<div class="max-w-4xl mx-auto px-4 py-12"><a class="back-link text-primary-600 mb-6 inline-block" href="/{}">&larr; Kembali ke {}</a>"#,
        escape(section),
        escape(&capitalize(section))
    ));

    let mut header = format!(
        r#"<div class="flex items-center gap-3 mb-4"><span class="text-3xl">{}</span>{}{}</div><h1 class="text-3xl font-bold text-gray-900 mb-2">{}</h1><p class="text-sm text-gray-500 mb-6"><time datetime="{}">{}</time> &middot; {}</p>"#,
        category_icon(item.category),
        badge(item.category.label(), BadgeVariant::Outline, Size::Sm, None),
        verification_badge(item.verified_status, Size::Sm),
        escape(&item.title),
        item.date,
        format_date(item.date.date()),
        escape(&relative_time(item.date.date(), ctx.today)),
    );
    header.push_str(&format!(
        r#"<p class="summary text-lg text-gray-700 mb-6">{}</p>"#,
        escape(&item.summary)
    ));

    let mut facts = String::from(r#"<dl class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">"#);
    for (label, value) in [
        ("Peran", item.role.as_str()),
        ("Dampak", item.impact.as_str()),
        ("Jenis", item.r#type.as_str()),
        ("Diverifikasi oleh", item.verified_by.label()),
        ("Bahasa", item.language.label()),
        ("Prioritas", item.priority.label()),
    ] {
        if value.is_empty() {
            continue;
        }
        facts.push_str(&format!(
            r#"<div><dt class="text-sm font-medium text-gray-500">{}</dt><dd class="text-gray-900">{}</dd></div>"#,
            label,
            escape(value)
        ));
    }
    facts.push_str("</dl>");
    header.push_str(&facts);

    if !item.description.is_empty() {
        header.push_str(&format!(
            r#"<div class="description prose mb-6"><h2 class="text-xl font-semibold mb-2">Deskripsi</h2><p>{}</p></div>"#,
            escape(&item.description)
        ));
    }

    if !item.evidence_links.is_empty() {
        header.push_str(r#"<div class="evidence mb-6"><h2 class="text-xl font-semibold mb-2">Bukti</h2><ul>"#);
        for evidence in &item.evidence_links {
            header.push_str(&format!(
                "<li>{}</li>",
                link(&evidence.url, &evidence.label, "text-primary-600")
            ));
        }
        header.push_str("</ul></div>");
    }

    if !item.tags.is_empty() {
        let listing_path = format!("/{}", item.category.slug());
        header.push_str(r#"<div class="tags flex flex-wrap gap-2 mb-6">"#);
        for label in &item.tags {
            header.push_str(&tag(
                label,
                TagVariant::Outline,
                Size::Sm,
                Some(&tag_filter_href(&listing_path, label)),
            ));
        }
        header.push_str("</div>");
    }

    header.push_str(&format!(
        r#"<button type="button" class="share-button px-4 py-2 border border-gray-300 rounded-md" data-share-title="{}" data-share-text="{}" data-share-url="{}">Bagikan</button>"#,
        escape(&share.title),
        escape(&share.text),
        escape(&share.url)
    ));

    body.push_str(&card(&header, CardPadding::Lg, false));
    body.push_str("</div>");
    body.push_str(SHARE_SCRIPT);

    page(ctx, &item.title, &format!("/{section}"), "", &body)
}

pub fn not_found(ctx: &RenderContext<'_>) -> String {
    let body = r#"<div class="not-found max-w-2xl mx-auto px-4 py-24 text-center"><h1 class="text-4xl font-bold text-gray-900 mb-4">Item tidak ditemukan</h1><p class="text-gray-600 mb-8">Halaman atau item yang Anda cari tidak tersedia.</p><a class="px-6 py-3 bg-primary-600 text-white rounded-md" href="/">Kembali ke Beranda</a></div>"#;
    page(ctx, "Tidak ditemukan", "", "", body)
}

pub fn timeline(ctx: &RenderContext<'_>, timeline: &Timeline<'_>, filter: &TimelineFilter) -> String {
    let mut body = String::new();
    body.push_str(r#"<div class="max-w-5xl mx-auto px-4 py-12"><h1 class="text-4xl font-bold text-gray-900 mb-4">Timeline</h1><p class="text-lg text-gray-600 mb-8">Perjalanan karier dan pencapaian dari tahun ke tahun.</p>"#);

    let selected_year = filter.year.value().copied();
    let selected_category = filter.category.value().copied();
    body.push_str(r#"<form class="timeline-filter flex flex-wrap gap-4 mb-8" method="get" action="/timeline"><select name="year" class="px-3 py-2 border border-gray-300 rounded-md">"#);
    body.push_str(&year_options(&ctx.catalog.years(), selected_year));
    body.push_str(r#"</select><select name="category" class="px-3 py-2 border border-gray-300 rounded-md">"#);
    body.push_str(&select_option("all", "Semua Kategori", selected_category.is_none()));
    for category in Category::ALL {
        body.push_str(&select_option(
            category.as_str(),
            category.label(),
            selected_category == Some(category),
        ));
    }
    body.push_str(r#"</select><button type="submit" class="px-4 py-2 bg-primary-600 text-white rounded-md">Terapkan</button></form>"#);

    if timeline.is_empty() {
        body.push_str(r#"<p class="empty-state text-center text-gray-500 py-12">Tidak ada item untuk filter ini.</p>"#);
    }
    for (year, items) in timeline.newest_first() {
        body.push_str(&format!(
            r#"<section id="year-{year}" class="year-group mb-10"><h2 class="text-2xl font-bold text-gray-900 mb-4">{year}</h2><ol class="border-l-2 border-primary-200 pl-6">"#
        ));
        for item in items {
            body.push_str(&format!(
                r#"<li class="timeline-entry mb-4"><time class="text-sm text-gray-500" datetime="{}">{}</time><div class="flex items-center gap-2"><span>{}</span><a class="font-semibold text-gray-900" href="/{}/{}">{}</a>{}</div><p class="text-sm text-gray-600">{}</p></li>"#,
                item.date,
                format_date(item.date.date()),
                category_icon(item.category),
                item.category.slug(),
                escape(&item.id),
                escape(&item.title),
                verification_badge(item.verified_status, Size::Sm),
                escape(&item.summary),
            ));
        }
        body.push_str("</ol></section>");
    }
    body.push_str("</div>");

    page(ctx, "Timeline", "/timeline", "", &body)
}

pub enum ContactView<'a> {
    /// The editable form, optionally carrying errors from a rejected submit.
    Form {
        values: &'a ContactSubmission,
        error: Option<&'a ContactError>,
    },
    Submitted {
        receipt: &'a ContactReceipt,
        reset_after: Duration,
    },
}

fn contact_field(
    name: &str,
    label: &str,
    value: &str,
    kind: &str,
    error: Option<&ContactError>,
) -> String {
    let message = error
        .and_then(|error| error.field_message(name))
        .map(|message| {
            format!(
                r#"<p class="field-error text-sm text-red-600 mt-1">{}</p>"#,
                escape(message)
            )
        })
        .unwrap_or_default();
    let control = if kind == "textarea" {
        format!(
            r#"<textarea id="{name}" name="{name}" rows="6" required class="w-full px-3 py-2 border border-gray-300 rounded-md">{}</textarea>"#,
            escape(value)
        )
    } else {
        format!(
            r#"<input id="{name}" name="{name}" type="{kind}" value="{}" required class="w-full px-3 py-2 border border-gray-300 rounded-md">"#,
            escape(value)
        )
    };
    format!(
        r#"<div class="mb-4"><label for="{name}" class="block text-sm font-medium text-gray-700 mb-1">{}</label>{control}{message}</div>"#,
        escape(label)
    )
}

pub fn contact(ctx: &RenderContext<'_>, view: &ContactView<'_>) -> String {
    let profile = ctx.catalog.profile();
    let mut head_extra = String::new();
    let mut body = String::new();

    body.push_str(&format!(
        r#"<div class="max-w-5xl mx-auto px-4 py-12 grid grid-cols-1 lg:grid-cols-2 gap-8"><div><h1 class="text-4xl font-bold text-gray-900 mb-4">Kontak</h1><p class="text-gray-600 mb-6">Silakan hubungi saya untuk kolaborasi, pertanyaan, atau diskusi.</p><p class="mb-2">{}</p>{}<p class="text-gray-600">{}</p></div>"#,
        link(
            &format!("mailto:{}", profile.email),
            &profile.email,
            "text-primary-600"
        ),
        profile
            .phone
            .as_deref()
            .map(|phone| format!(r#"<p class="mb-2">{}</p>"#, escape(phone)))
            .unwrap_or_default(),
        escape(&profile.location),
    ));

    match view {
        ContactView::Form { values, error } => {
            let mut form = String::from(r#"<form class="contact-form" method="post" action="/contact">"#);
            if let Some(error) = error
                && error.field_errors.is_empty()
            {
                form.push_str(&format!(
                    r#"<p class="form-error text-sm text-red-600 mb-4">{}</p>"#,
                    escape(&error.message)
                ));
            }
            form.push_str(&contact_field("name", "Nama", &values.name, "text", *error));
            form.push_str(&contact_field("email", "Email", &values.email, "email", *error));
            form.push_str(&contact_field(
                "subject",
                "Subjek",
                &values.subject,
                "text",
                *error,
            ));
            form.push_str(&contact_field(
                "message",
                "Pesan",
                &values.message,
                "textarea",
                *error,
            ));
            form.push_str(r#"<button type="submit" class="w-full px-4 py-2 bg-primary-600 text-white rounded-md">Kirim Pesan</button></form>"#);
            body.push_str(&card(&form, CardPadding::Lg, false));
        }
        ContactView::Submitted {
            receipt,
            reset_after,
        } => {
            head_extra = format!(
                r#"<meta http-equiv="refresh" content="{};url=/contact">"#,
                reset_after.as_secs().max(1)
            );
            body.push_str(&card(
                &format!(
                    r#"<div class="contact-submitted text-center" data-receipt="{}"><div class="text-4xl mb-4">✓</div><h2 class="text-2xl font-semibold mb-2">Pesan Terkirim!</h2><p class="text-gray-600">Terima kasih, {}. Saya akan segera membalas pesan Anda.</p></div>"#,
                    escape(&receipt.receipt_id),
                    escape(&receipt.submission.name)
                ),
                CardPadding::Lg,
                false,
            ));
        }
    }
    body.push_str("</div>");

    page(ctx, "Kontak", "/contact", &head_extra, &body)
}
