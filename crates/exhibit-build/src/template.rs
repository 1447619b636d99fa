//! HTML page template.
//!
//! Pages are plain server-rendered HTML: a sidebar menu, the article header
//! with the edit link, the page body, a tab bar and one panel per existing
//! tab. Inactive panels stay in the document with the `hidden` attribute.

use std::fmt::Write;

use exhibit_site::{ExamplePage, Icon, Locale, MenuEntry, MenuItem, Message, Submenu, TabPanel};

/// Site-wide parts of every page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageChrome {
    /// Site title, shown in the sidebar and appended to `<title>`.
    pub site_title: String,
}

impl PageChrome {
    pub fn new(site_title: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
        }
    }
}

/// Render a complete example page.
pub fn render_page(page: &ExamplePage, chrome: &PageChrome) -> String {
    let mut html = String::with_capacity(8192);

    render_head(
        &mut html,
        &page.lang,
        &page.title,
        chrome,
        page.icon_script.as_deref(),
    );

    html.push_str("<div class=\"layout\">\n");
    render_sidebar(&mut html, page, chrome);

    html.push_str("<main class=\"content\">\n<article>\n");
    render_header(&mut html, page);
    render_body(&mut html, &page.body);
    render_tab_bar(&mut html, &page.tabs);
    render_panels(&mut html, &page.tabs);
    html.push_str("</article>\n</main>\n</div>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Render the page shown when no example matches a path.
pub fn render_not_found(lang: &str, path: &str, chrome: &PageChrome) -> String {
    let locale = Locale::new(lang);
    let title = locale.text(Message::NotFoundTitle);

    let mut html = String::with_capacity(1024);
    render_head(&mut html, lang, title, chrome, None);
    html.push_str("<main class=\"content not-found\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(title));
    let _ = writeln!(
        html,
        "<p>{}</p>\n<p><code>{}</code></p>",
        escape(locale.text(Message::NotFoundText)),
        escape(path),
    );
    let _ = writeln!(html, "<p><a href=\"/\">{}</a></p>", escape(&chrome.site_title));
    html.push_str("</main>\n</body>\n</html>");
    html
}

fn render_head(
    html: &mut String,
    lang: &str,
    title: &str,
    chrome: &PageChrome,
    icon_script: Option<&str>,
) {
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n",
        escape(lang)
    );
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    let _ = writeln!(
        html,
        "<title>{} - {}</title>",
        escape(title),
        escape(&chrome.site_title)
    );
    if let Some(src) = icon_script {
        let _ = writeln!(html, "<script src=\"{}\"></script>", escape(src));
    }
    html.push_str("<style>\n");
    html.push_str(".layout { display: flex; min-height: 100vh; }\n");
    html.push_str(".sidebar { width: 280px; flex-shrink: 0; border-right: 1px solid #e8e8e8; }\n");
    html.push_str(".content { flex: 1; min-width: 0; padding: 24px 40px; }\n");
    html.push_str(".menu-item.selected > a { color: #1890ff; font-weight: 500; }\n");
    html.push_str(".icon { width: 1em; height: 1em; fill: currentColor; margin-right: 8px; }\n");
    html.push_str(".tabs [aria-selected=\"true\"] { border-bottom: 2px solid #1890ff; }\n");
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
}

fn render_sidebar(html: &mut String, page: &ExamplePage, chrome: &PageChrome) {
    html.push_str("<aside class=\"sidebar\">\n");
    let _ = writeln!(
        html,
        "<a href=\"/{}\" class=\"site-title\">{}</a>",
        escape(&page.lang),
        escape(&chrome.site_title)
    );
    html.push_str("<nav class=\"menu\">\n<ul>\n");
    for entry in &page.menu.entries {
        match entry {
            MenuEntry::Item(item) => render_menu_item(html, item),
            MenuEntry::Submenu(submenu) => render_submenu(html, submenu),
        }
    }
    html.push_str("</ul>\n</nav>\n</aside>\n");
}

fn render_submenu(html: &mut String, submenu: &Submenu) {
    html.push_str("<li class=\"submenu\">\n");
    let open = if submenu.open { " open" } else { "" };
    let _ = write!(html, "<details{open}>\n<summary>");
    render_icon(html, submenu.icon.as_ref());
    let _ = writeln!(html, "{}</summary>", escape(&submenu.title));
    html.push_str("<ul>\n");
    for item in &submenu.items {
        render_menu_item(html, item);
    }
    html.push_str("</ul>\n</details>\n</li>\n");
}

fn render_menu_item(html: &mut String, item: &MenuItem) {
    if item.selected {
        html.push_str("<li class=\"menu-item selected\">");
    } else {
        html.push_str("<li class=\"menu-item\">");
    }
    let current = if item.selected {
        " aria-current=\"page\""
    } else {
        ""
    };
    let _ = write!(html, "<a href=\"{}\"{current}>", escape(&item.key));
    render_icon(html, item.icon.as_ref());
    let _ = writeln!(html, "{}</a></li>", escape(&item.title));
}

fn render_icon(html: &mut String, icon: Option<&Icon>) {
    if let Some(icon) = icon {
        let _ = write!(
            html,
            "<svg class=\"icon\" aria-hidden=\"true\"><use xlink:href=\"#{}\"></use></svg>",
            escape(&icon.symbol)
        );
    }
}

fn render_header(html: &mut String, page: &ExamplePage) {
    html.push_str("<header class=\"page-header\">\n");
    let _ = write!(html, "<h1>{}", escape(&page.title));
    if let Some(url) = &page.edit_url {
        let _ = write!(
            html,
            " <a class=\"edit-link\" href=\"{}\" title=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape(url),
            escape(&page.edit_label),
            escape(&page.edit_label),
        );
    }
    html.push_str("</h1>\n</header>\n");
}

fn render_body(html: &mut String, body: &str) {
    html.push_str("<div class=\"page-body\">\n");
    html.push_str(body);
    html.push_str("\n</div>\n");
}

fn render_tab_bar(html: &mut String, tabs: &[TabPanel]) {
    html.push_str("<nav class=\"tabs\" role=\"tablist\">\n");
    for panel in tabs {
        let _ = writeln!(
            html,
            "<a role=\"tab\" id=\"tab-{id}\" href=\"{}\" aria-controls=\"panel-{id}\" aria-selected=\"{}\">{}</a>",
            escape(&panel.href),
            panel.active,
            escape(&panel.label),
            id = panel.tab.id(),
        );
    }
    html.push_str("</nav>\n");
}

fn render_panels(html: &mut String, tabs: &[TabPanel]) {
    for panel in tabs {
        let hidden = if panel.active { "" } else { " hidden" };
        let _ = writeln!(
            html,
            "<section role=\"tabpanel\" id=\"panel-{id}\" aria-labelledby=\"tab-{id}\"{hidden}>",
            id = panel.tab.id(),
        );
        html.push_str(&panel.html);
        html.push_str("\n</section>\n");
    }
}

/// Escape HTML special characters.
pub(crate) fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
