// src/modules/site/adapter/incoming/web/html.rs
use crate::modules::site::application::PageView;
use crate::modules::skill::application::IconView;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let entries: String = items
        .iter()
        .map(|i| format!("<li>{}</li>", escape(i)))
        .collect();
    format!("<ul>{}</ul>", entries)
}

fn icon(icon: &IconView) -> String {
    match icon {
        // Owner-entered markup is rendered as given.
        IconView::Markup(markup) => markup.clone(),
        IconView::Url(url) => format!(r#"<img class="skill-icon" src="{}" alt="">"#, escape(url)),
        IconView::CssClass(class) => format!(r#"<i class="{}"></i>"#, escape(class)),
        IconView::None => String::new(),
    }
}

fn hero(view: &PageView) -> String {
    format!(
        r#"<section id="home"><a class="resume-link" href="{}">Download Resume</a></section>"#,
        escape(&view.hero.resume_link)
    )
}

fn about(view: &PageView) -> String {
    let paragraphs: String = view
        .about
        .paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect();

    format!(
        r#"<section id="about"><h2>{}</h2><img src="{}" alt="About">{}<p class="experience">{}</p></section>"#,
        escape(&view.about.title),
        escape(&view.about.image),
        paragraphs,
        escape(&view.about.experience)
    )
}

fn skills(view: &PageView) -> String {
    let groups: String = view
        .skills
        .iter()
        .map(|g| {
            let items: String = g
                .skills
                .iter()
                .map(|s| {
                    format!(
                        r#"<li data-id="{}">{}<span>{}</span><progress max="100" value="{}"></progress></li>"#,
                        escape(&s.id),
                        icon(&s.icon),
                        escape(&s.name),
                        s.proficiency
                    )
                })
                .collect();
            format!("<div class=\"skill-group\"><h3>{}</h3><ul>{}</ul></div>", escape(g.label), items)
        })
        .collect();

    format!(r#"<section id="skills"><h2>Skills</h2>{}</section>"#, groups)
}

fn coding_profiles(view: &PageView) -> String {
    let cards: String = view
        .coding_profiles
        .iter()
        .map(|p| {
            format!(
                r#"<a class="profile" href="{}"><img src="{}" alt="{}"><span>{}</span><span>{} solved</span><span>{} contests</span><span>rating {}</span><span>{} badges</span></a>"#,
                escape(&p.profile_url),
                escape(&p.logo),
                p.platform,
                escape(&p.username),
                p.stats.solved,
                p.stats.contests,
                p.stats.rating,
                p.stats.badges
            )
        })
        .collect();

    format!(
        r#"<section id="coding-profiles"><h2>Coding Profiles</h2>{}</section>"#,
        cards
    )
}

fn projects(view: &PageView) -> String {
    let tabs: String = view
        .projects
        .tabs
        .iter()
        .map(|tab| {
            let cards: String = tab
                .projects
                .iter()
                .map(|p| {
                    let more = if p.more_technologies > 0 {
                        format!("<span>+{}</span>", p.more_technologies)
                    } else {
                        String::new()
                    };
                    format!(
                        r#"<article class="project" data-id="{}"><img src="{}" alt="{}"><h3>{}</h3><p>{}</p>{}{}</article>"#,
                        escape(&p.id),
                        escape(&p.image),
                        escape(&p.title),
                        escape(&p.title),
                        escape(&p.description),
                        list(&p.technologies),
                        more
                    )
                })
                .collect();
            format!(
                r#"<div class="tab{}" data-category="{}"><h3>{}</h3>{}</div>"#,
                if tab.active { " active" } else { "" },
                escape(&tab.category),
                escape(&tab.category),
                cards
            )
        })
        .collect();

    format!(r#"<section id="projects"><h2>Projects</h2>{}</section>"#, tabs)
}

fn learning_planner(view: &PageView) -> String {
    let topics: String = view
        .learning_planner
        .topics
        .iter()
        .map(|t| {
            let phases = if t.expanded {
                let items: String = t
                    .phases
                    .iter()
                    .map(|p| {
                        format!(
                            r#"<li class="{}">{}</li>"#,
                            if p.completed { "done" } else { "todo" },
                            escape(&p.title)
                        )
                    })
                    .collect();
                format!("<ol>{}</ol>", items)
            } else {
                String::new()
            };
            format!(
                r#"<article class="topic" data-id="{}"><h3>{}</h3><p>{}</p><progress max="100" value="{}"></progress><span>{}</span>{}</article>"#,
                escape(&t.id),
                escape(&t.title),
                escape(&t.description),
                t.progress,
                escape(&t.progress_label),
                phases
            )
        })
        .collect();

    format!(
        r#"<section id="learning"><h2>Learning Planner</h2>{}</section>"#,
        topics
    )
}

fn resume(view: &PageView) -> String {
    let tabs: String = view
        .resume
        .tabs
        .iter()
        .map(|tab| {
            let entries: String = tab
                .entries
                .iter()
                .map(|e| {
                    let gpa = e
                        .gpa
                        .as_deref()
                        .map(|g| format!("<span>GPA: {}</span>", escape(g)))
                        .unwrap_or_default();
                    format!(
                        "<article><h4>{}</h4><p>{}</p><span>{}</span>{}{}</article>",
                        escape(&e.heading),
                        escape(&e.subheading),
                        escape(&e.period),
                        gpa,
                        list(&e.bullets)
                    )
                })
                .collect();
            format!("<div class=\"tab\"><h3>{}</h3>{}</div>", escape(&tab.title), entries)
        })
        .collect();

    format!(r#"<section id="resume"><h2>My Resume</h2>{}</section>"#, tabs)
}

fn contact(view: &PageView) -> String {
    let form = &view.contact_form;
    format!(
        concat!(
            r#"<section id="contact"><h2>Get In Touch</h2>"#,
            r#"<form method="post" action="/api/contact">"#,
            r#"<input name="name" placeholder="Your Name" value="{}" required>"#,
            r#"<input name="email" type="email" placeholder="Your Email" value="{}" required>"#,
            r#"<input name="subject" placeholder="Subject" value="{}" required>"#,
            r#"<textarea name="message" placeholder="Your Message" required>{}</textarea>"#,
            r#"<button type="submit">Send Message</button></form></section>"#
        ),
        escape(&form.name),
        escape(&form.email),
        escape(&form.subject),
        escape(&form.message)
    )
}

fn inbox(view: &PageView) -> String {
    if !view.edit_mode {
        return String::new();
    }
    let rows: String = view
        .inbox
        .iter()
        .map(|m| {
            format!(
                r#"<tr data-id="{}"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
                escape(&m.id),
                escape(&m.name),
                escape(&m.email),
                escape(&m.subject),
                escape(&m.status)
            )
        })
        .collect();

    format!(
        r#"<section id="inbox"><h2>Messages</h2><table>{}</table></section>"#,
        rows
    )
}

/// Full HTML document for the current page state.
pub fn render_page(view: &PageView) -> String {
    let body = [
        hero(view),
        about(view),
        skills(view),
        coding_profiles(view),
        projects(view),
        learning_planner(view),
        resume(view),
        contact(view),
        inbox(view),
    ]
    .concat();

    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>Portfolio</title></head><body data-edit-mode="{}">{}</body></html>"#,
        view.edit_mode, body
    )
}
