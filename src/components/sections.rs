//! Content sections below the hero. Each is a `section[id]` the tracker
//! measures, so ids must match the nav entries in `SiteConfig`.

use leptos::prelude::*;

use crate::components::contact_modal::open_contact;
use crate::state::ui::AppContext;

#[derive(Clone, Copy)]
struct SkillGroup {
    title: &'static str,
    items: &'static [&'static str],
}

const SKILLS: &[SkillGroup] = &[
    SkillGroup { title: "Frontend", items: &["HTML & CSS", "JavaScript", "React", "Accessibility"] },
    SkillGroup { title: "Tooling", items: &["Git", "Vite", "Testing", "CI"] },
    SkillGroup { title: "Design", items: &["Responsive layout", "Design systems", "Prototyping"] },
];

#[derive(Clone, Copy)]
struct Project {
    title: &'static str,
    summary: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Task Board",
        summary: "Drag-and-drop kanban board with offline persistence.",
        image: "assets/images/project-1.jpg",
        tags: &["React", "IndexedDB"],
    },
    Project {
        title: "Weather Now",
        summary: "Location-aware forecast dashboard with animated charts.",
        image: "assets/images/project-2.jpg",
        tags: &["JavaScript", "REST"],
    },
    Project {
        title: "Recipe Finder",
        summary: "Ingredient search with filters and saved favorites.",
        image: "assets/images/project-3.jpg",
        tags: &["React", "CSS Grid"],
    },
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="container">
                <h2 class="section-title">"About Me"</h2>
                <div class="about-content">
                    <img
                        src="assets/images/placeholder.svg"
                        data-src="assets/images/profile.jpg"
                        alt="Portrait"
                        loading="lazy"
                        class="about-image lazy"
                    />
                    <p>
                        "I build fast, accessible interfaces and care about the small details \
                         that make a site feel good to use."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="section skills">
            <div class="container">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">
                    {SKILLS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="skill-group">
                                    <h3>{group.title}</h3>
                                    <ul>
                                        {group.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="section projects">
            <div class="container">
                <h2 class="section-title">"Projects"</h2>
                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="project-card">
                                    <img
                                        src="assets/images/placeholder.svg"
                                        data-src=project.image
                                        alt=project.title
                                        loading="lazy"
                                        class="lazy"
                                    />
                                    <h3>{project.title}</h3>
                                    <p>{project.summary}</p>
                                    <ul class="project-tags">
                                        {project.tags.iter().map(|tag| view! { <li>{*tag}</li> }).collect_view()}
                                    </ul>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = AppContext::expect();
    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section-title">"Contact"</h2>
                <p>"Have a project in mind or just want to say hello?"</p>
                <button type="button" class="btn btn-primary" on:click=move |_| open_contact(ctx)>
                    "Send a Message"
                </button>
            </div>
        </section>
    }
}
