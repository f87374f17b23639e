use crate::{
    catalog::Category,
    render::{
        RenderContext,
        html::{escape, link},
    },
};

pub struct NavEntry {
    pub label: &'static str,
    pub href: String,
}

impl NavEntry {
    fn new(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
        }
    }
}

/// Header entries in display order.
pub fn navigation() -> Vec<NavEntry> {
    let mut entries = vec![NavEntry::new("Home", "/"), NavEntry::new("About", "/about")];
    entries.extend(
        Category::ALL
            .into_iter()
            .map(|category| NavEntry::new(category.label(), format!("/{}", category.slug()))),
    );
    entries.push(NavEntry::new("Timeline", "/timeline"));
    entries.push(NavEntry::new("Contact", "/contact"));
    entries
}

fn navbar(ctx: &RenderContext<'_>, active_path: &str) -> String {
    let mut html = format!(
        r#"<nav class="navbar bg-white shadow-sm"><div class="max-w-7xl mx-auto px-4 flex justify-between h-16"><a href="/" class="brand font-bold text-xl">{}</a><ul class="nav-links flex gap-1">"#,
        escape(&ctx.catalog.profile().name)
    );
    for entry in navigation() {
        let active = entry.href == active_path
            || (entry.href != "/" && active_path.starts_with(&format!("{}/", entry.href)));
        html.push_str(&format!(
            r#"<li><a href="{}" class="px-3 py-2 rounded-md text-sm font-medium{}"{}>{}</a></li>"#,
            entry.href,
            if active { " bg-primary-100 text-primary-700" } else { " text-gray-700" },
            if active { r#" aria-current="page""# } else { "" },
            entry.label
        ));
    }
    html.push_str("</ul></div></nav>");
    html
}

fn footer(ctx: &RenderContext<'_>) -> String {
    let profile = ctx.catalog.profile();
    let mut connect = Vec::new();
    if let Some(github) = &profile.websites.github {
        connect.push(link(github, "GitHub", "text-gray-300"));
    }
    connect.push(link(
        &format!("mailto:{}", profile.email),
        "Email",
        "text-gray-300",
    ));
    if let Some(blog) = &profile.websites.blog {
        connect.push(link(blog, "Blog", "text-gray-300"));
    }
    if let Some(linkedin) = &profile.websites.linkedin {
        connect.push(link(linkedin, "LinkedIn", "text-gray-300"));
    }

    format!(
        r#"<footer class="footer bg-gray-900 text-white mt-16"><div class="max-w-7xl mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-3 gap-8"><div><h3 class="text-lg font-semibold mb-4">{name}</h3><p class="text-gray-300">{title}</p></div><div><h3 class="text-lg font-semibold mb-4">Quick Links</h3><ul><li><a href="/about">About</a></li><li><a href="/publications">Publications</a></li><li><a href="/projects">Projects</a></li><li><a href="/timeline">Timeline</a></li></ul></div><div><h3 class="text-lg font-semibold mb-4">Connect</h3><div class="connect flex gap-4">{connect}</div><a class="cv-download" href="{cv}" download>Download CV</a></div></div><div class="border-t border-gray-800 py-6 text-center text-gray-400 text-sm"><p>&copy; {year} {name}. Last updated: <span class="last-updated">{updated}</span></p></div></footer>"#,
        name = escape(&profile.name),
        title = escape(&profile.title),
        connect = connect.join(""),
        cv = escape(&ctx.cv_href),
        year = ctx.today.year(),
        updated = escape(ctx.catalog.last_updated()),
    )
}

/// Full HTML document around `body`. `head_extra` is trusted markup.
pub fn page(
    ctx: &RenderContext<'_>,
    title: &str,
    active_path: &str,
    head_extra: &str,
    body: &str,
) -> String {
    let owner = &ctx.catalog.profile().name;
    let full_title = if title.is_empty() {
        escape(owner)
    } else {
        format!("{} | {}", escape(title), escape(owner))
    };
    format!(
        r#"<!DOCTYPE html><html lang="id"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{full_title}</title>{head_extra}</head><body class="bg-gray-50">{nav}<main>{body}</main>{footer}</body></html>"#,
        nav = navbar(ctx, active_path),
        footer = footer(ctx),
    )
}
