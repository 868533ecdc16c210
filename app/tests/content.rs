use app::content::{self, Content, Error, Project, Testimonial, MAX_RATING};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn minimal(projects: &'static [Project], testimonials: &'static [Testimonial]) -> Content {
    Content {
        brand: "x",
        hero_title: "x",
        hero_title_accent: "x",
        hero_tagline: "x",
        resume_url: "/x.pdf",
        skills: &[],
        projects,
        testimonials,
        contact_heading: "x",
        contact_pitch: "x",
        contact_email: "x@example.com",
        linkedin_url: "https://example.com",
        contact_note: "x",
        copyright: "x",
    }
}

#[test]
fn shipped_content_passes_verification() {
    setup();
    content::get().verify().unwrap();
}

#[test]
fn shipped_collections_have_expected_shape() {
    setup();
    let content = content::get();
    assert_eq!(3, content.projects.len());
    assert_eq!(
        vec![
            "E-Commerce Platform",
            "Task Management App",
            "Data Visualization Dashboard",
        ],
        content
            .projects
            .iter()
            .map(|p| p.title)
            .collect::<Vec<_>>(),
    );
    assert_eq!(2, content.testimonials.len());
    assert_eq!(12, content.skills.len());
    for testimonial in content.testimonials {
        assert!(testimonial.rating <= MAX_RATING);
    }
}

#[test]
fn duplicate_project_ids_are_rejected() {
    setup();

    static DUPLICATED: [Project; 2] = [
        Project {
            id: "same",
            title: "first",
            description: "",
            tech: &[],
            demo_url: "https://demo.example.com",
            github_url: None,
            image: "",
        },
        Project {
            id: "same",
            title: "second",
            description: "",
            tech: &[],
            demo_url: "https://demo.example.com",
            github_url: None,
            image: "",
        },
    ];

    let content = minimal(&DUPLICATED, &[]);
    match content.verify() {
        Err(Error::DuplicateProjectId { id }) => assert_eq!("same", id),
        other => panic!("expected a duplicate id error, got {:?}", other),
    }
}

#[test]
fn out_of_range_rating_is_rejected() {
    setup();

    static OVERRATED: [Testimonial; 1] = [Testimonial {
        name: "Nobody",
        role: "Fan",
        company: "Acme",
        content: "Six stars!",
        rating: 6,
    }];

    let content = minimal(&[], &OVERRATED);
    match content.verify() {
        Err(Error::RatingOutOfRange { rating, max, .. }) => {
            assert_eq!(6, rating);
            assert_eq!(MAX_RATING, max);
        }
        other => panic!("expected a rating error, got {:?}", other),
    }
}

#[test]
fn zero_rating_is_valid() {
    setup();

    static UNIMPRESSED: [Testimonial; 1] = [Testimonial {
        name: "Nobody",
        role: "Critic",
        company: "Acme",
        content: "No stars.",
        rating: 0,
    }];

    minimal(&[], &UNIMPRESSED).verify().unwrap();
}

#[test]
fn content_exports_as_json() {
    setup();

    let value = serde_json::to_value(content::get()).unwrap();
    let projects = value["projects"].as_array().unwrap();
    assert_eq!(3, projects.len());
    assert_eq!("E-Commerce Platform", projects[0]["title"]);
    assert_eq!("https://github.com/example", projects[0]["github_url"]);
    let testimonials = value["testimonials"].as_array().unwrap();
    assert_eq!(2, testimonials.len());
    assert_eq!(5, testimonials[0]["rating"]);
    assert_eq!(12, value["skills"].as_array().unwrap().len());
}
