use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Badge, Footer, NavBar, StarRating};
use crate::content::{self, Project, Testimonial};

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <Title text="Full-Stack Developer"/>
        <NavBar />
        <main class="home">
            <Hero />
            <ProjectGallery />
            <Testimonials />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let content = content::get();
    view! {
        <section id="about" class="hero">
            <h1>
                {content.hero_title}
                <span class="accent">{" "}{content.hero_title_accent}</span>
            </h1>
            <p class="tagline">{content.hero_tagline}</p>
            <div class="badges">
                {content
                    .skills
                    .iter()
                    .map(|skill| view! { <Badge label=*skill /> })
                    .collect_view()}
            </div>
            <div class="actions">
                <a class="button" href=content.resume_url>"Download Resume"</a>
                <a class="button button-outline" href="#projects">"View Projects"</a>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectGallery() -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <h2>"Featured Projects"</h2>
            <p class="section-tagline">"A showcase of my recent work and technical expertise"</p>
            <div class="card-grid">
                {content::get()
                    .projects
                    .iter()
                    .map(|project| view! { <ProjectCard project=project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="card project-card">
            <img src=project.image alt=project.title />
            <header>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
            </header>
            <div class="badges">
                {project
                    .tech
                    .iter()
                    .map(|tech| view! { <Badge label=*tech outline=true /> })
                    .collect_view()}
            </div>
            <footer class="card-actions">
                <a class="button" href=project.demo_url>"Live Demo"</a>
                {project
                    .github_url
                    .map(|url| view! { <a class="button button-outline" href=url>"Source"</a> })}
            </footer>
        </article>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <h2>"Client Testimonials"</h2>
            <p class="section-tagline">"What clients say about working with me"</p>
            <div class="card-grid">
                {content::get()
                    .testimonials
                    .iter()
                    .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <article class="card testimonial-card">
            <StarRating rating=testimonial.rating />
            <blockquote>{testimonial.content}</blockquote>
            <footer>
                <p class="author">{testimonial.name}</p>
                <p class="role">{testimonial.role}" at "{testimonial.company}</p>
            </footer>
        </article>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let content = content::get();
    view! {
        <section id="contact" class="contact">
            <div class="card contact-card">
                <h2>{content.contact_heading}</h2>
                <p class="section-tagline">{content.contact_pitch}</p>
                <div class="actions">
                    <a class="button" href=format!("mailto:{}", content.contact_email)>
                        "Hire Me Now"
                    </a>
                    <a class="button button-outline" href=content.linkedin_url>
                        "Connect on LinkedIn"
                    </a>
                </div>
                <hr />
                <p class="contact-note">{content.contact_note}</p>
            </div>
        </section>
    }
}
