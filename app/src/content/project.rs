use serde::Serialize;

/// One entry of the project gallery. The `id` is only used as a rendering
/// key, it is never looked up.
#[derive(Serialize, Clone, Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub demo_url: &'static str,
    pub github_url: Option<&'static str>,
    pub image: &'static str,
}
