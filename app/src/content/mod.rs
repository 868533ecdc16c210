pub mod errors;
mod project;
mod testimonial;

pub use errors::{Error, Result};
pub use project::Project;
pub use testimonial::{Testimonial, MAX_RATING};

use serde::Serialize;

/// Everything the page displays, baked in at compile time. There is no
/// runtime mutation: the pages hold a `&'static` to this and map over it.
#[derive(Serialize, Clone, Debug)]
pub struct Content {
    pub brand: &'static str,
    pub hero_title: &'static str,
    pub hero_title_accent: &'static str,
    pub hero_tagline: &'static str,
    pub resume_url: &'static str,
    pub skills: &'static [&'static str],
    pub projects: &'static [Project],
    pub testimonials: &'static [Testimonial],
    pub contact_heading: &'static str,
    pub contact_pitch: &'static str,
    pub contact_email: &'static str,
    pub linkedin_url: &'static str,
    pub contact_note: &'static str,
    pub copyright: &'static str,
}

impl Content {
    /// Check the invariants the renderers rely on: project ids are unique
    /// and every rating fits in 0 to [`MAX_RATING`]. Meant to run once at
    /// server startup; the components themselves do no clamping.
    pub fn verify(&self) -> Result<()> {
        for (i, project) in self.projects.iter().enumerate() {
            for other in &self.projects[i + 1..] {
                if project.id == other.id {
                    return Err(Error::DuplicateProjectId {
                        id: String::from(project.id),
                    });
                }
            }
        }
        for testimonial in self.testimonials {
            if testimonial.rating > MAX_RATING {
                return Err(Error::RatingOutOfRange {
                    name: String::from(testimonial.name),
                    rating: testimonial.rating,
                    max: MAX_RATING,
                });
            }
        }
        Ok(())
    }
}

pub fn get() -> &'static Content {
    &CONTENT
}

static CONTENT: Content = Content {
    brand: "DevPortfolio",
    hero_title: "Full-Stack",
    hero_title_accent: "Developer",
    hero_tagline: "Crafting exceptional digital experiences with modern technologies. \
                   I specialize in building scalable web applications that drive business growth.",
    resume_url: "/resume.pdf",
    skills: &[
        "JavaScript",
        "TypeScript",
        "React",
        "Node.js",
        "Python",
        "PostgreSQL",
        "MongoDB",
        "AWS",
        "Docker",
        "GraphQL",
        "REST APIs",
        "Git",
    ],
    projects: &[
        Project {
            id: "1",
            title: "E-Commerce Platform",
            description: "Full-stack e-commerce solution with real-time inventory management, \
                          payment processing, and admin dashboard.",
            tech: &["React", "Node.js", "PostgreSQL", "Stripe API", "Docker"],
            demo_url: "https://demo.example.com",
            github_url: Some("https://github.com/example"),
            image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=400&h=250&fit=crop",
        },
        Project {
            id: "2",
            title: "Task Management App",
            description: "Collaborative project management tool with real-time updates, \
                          team chat, and progress tracking.",
            tech: &["TypeScript", "React", "Firebase", "Material-UI", "WebSocket"],
            demo_url: "https://demo.example.com",
            github_url: Some("https://github.com/example"),
            image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=400&h=250&fit=crop",
        },
        Project {
            id: "3",
            title: "Data Visualization Dashboard",
            description: "Interactive analytics dashboard with custom charts, real-time data \
                          streaming, and export functionality.",
            tech: &["Vue.js", "D3.js", "Python", "FastAPI", "Redis"],
            demo_url: "https://demo.example.com",
            github_url: Some("https://github.com/example"),
            image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=250&fit=crop",
        },
    ],
    testimonials: &[
        Testimonial {
            name: "Sarah Johnson",
            role: "Product Manager",
            company: "TechCorp",
            content: "Exceptional developer who delivered our project ahead of schedule. \
                      Clean code and great communication throughout.",
            rating: 5,
        },
        Testimonial {
            name: "Mike Chen",
            role: "CTO",
            company: "StartupXYZ",
            content: "Built our entire platform from scratch. Technical expertise combined \
                      with business understanding made all the difference.",
            rating: 5,
        },
    ],
    contact_heading: "Ready to Start Your Project?",
    contact_pitch: "Let's collaborate and bring your vision to life. I'm available for \
                    freelance projects and full-time opportunities.",
    contact_email: "hello@yourname.com",
    linkedin_url: "https://www.linkedin.com/in/yourname",
    contact_note: "hello@yourname.com \u{2022} +1 (555) 123-4567",
    copyright: "\u{a9} 2025 Your Name. All rights reserved.",
};
