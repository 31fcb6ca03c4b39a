use crate::config::{SiteConfig, SkillGroup};
use crate::utils::markdown::render_markdown;

/// Pre-rendered static content for the Home, About, Skills and Contact views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub home_title: String,
    pub home_html: String,
    pub profile_image_url: String,
    pub profile_caption: String,
    pub about_html: String,
    pub skills: Vec<SkillGroup>,
    pub contact_info_html: String,
}

const HOME_INTRO: &str = "\
### Welcome to My Digital Portfolio

I'm a passionate **{headline}** specializing in:
- Full Stack Web Development
- Machine Learning
- Data Science
- Innovative Tech Solutions

My mission is to create scalable, user-friendly applications that solve real-world problems.
";

const ABOUT: &str = "\
### Professional Journey

I am a dedicated software engineer with 5+ years of experience in creating innovative web and mobile applications. My expertise lies in full-stack development, machine learning, and crafting scalable solutions.

#### Professional Highlights
- 🚀 Developed multiple end-to-end web and mobile applications
- 🧠 Specialized in Machine Learning and AI technologies
- 💡 Passionate about solving complex technical challenges
- 🌐 Strong believer in continuous learning and technology evolution
";

pub fn default_skills() -> Vec<SkillGroup> {
    let group = |name: &str, skills: &[&str]| SkillGroup {
        name: name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        group("Programming Languages", &["Python", "JavaScript", "TypeScript", "Java"]),
        group("Web Technologies", &["React", "Node.js", "Django", "Flask", "FastAPI"]),
        group(
            "Machine Learning",
            &["TensorFlow", "PyTorch", "Scikit-learn", "Pandas", "NumPy"],
        ),
        group(
            "Tools & Platforms",
            &["Git", "Docker", "Kubernetes", "AWS", "Streamlit"],
        ),
    ]
}

impl SiteContent {
    pub fn from_config(config: &SiteConfig) -> Self {
        let site = &config.site;
        let contact = &config.contact;

        let contact_info = format!(
            "### Contact Information\n\
             - 📧 Email: {email}\n\
             - 🌐 Website: [{website_label}]({website})\n\
             - 💼 LinkedIn: [{owner}]({linkedin})\n",
            email = contact.email,
            website_label = display_host(&contact.website),
            website = contact.website,
            owner = site.owner_name,
            linkedin = contact.linkedin,
        );

        Self {
            home_title: format!("{} | {}", site.owner_name, site.headline),
            home_html: render_markdown(&HOME_INTRO.replace("{headline}", &site.headline)),
            profile_image_url: site.profile_image_url.clone(),
            profile_caption: site.owner_name.clone(),
            about_html: render_markdown(ABOUT),
            skills: config.skills.clone().unwrap_or_else(default_skills),
            contact_info_html: render_markdown(&contact_info),
        }
    }
}

/// "https://www.alexrivera.com/" -> "www.alexrivera.com"
fn display_host(website: &str) -> String {
    url::Url::parse(website)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| website.to_string())
}
