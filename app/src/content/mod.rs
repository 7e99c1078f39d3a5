#[cfg(feature = "ssr")]
pub mod errors;

#[cfg(feature = "ssr")]
pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
const EMBEDDED_CONTENT: &str = include_str!("../../content/portfolio.yml");

/// Everything the page shows, one record per section.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Content {
    pub brief_introduction: BriefIntroduction,
    pub introduction: Introduction,
    pub articles: MediumArticles,
    pub work_experience: WorkExperience,
    pub connect: Connect,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct BriefIntroduction {
    pub name: String,
    pub title: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Introduction {
    pub title: String,
    /// Plain text, never interpreted as markup.
    pub body: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct MediumArticles {
    pub title: String,
    pub articles: Vec<MediumArticle>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct MediumArticle {
    pub headline: String,
    pub subtitle: String,
    pub url: String,
    pub icon: ImageRef,
}

/// A static image that is already sized for display, served as-is from the
/// site root.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct WorkExperience {
    pub title: String,
    pub entries: Vec<ExperienceEntry>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ExperienceEntry {
    pub company: String,
    pub url: String,
    pub country: String,
    pub job_title: String,
    pub tenure_span: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

impl ExperienceEntry {
    pub fn tech_stack_line(&self) -> String {
        self.tech_stack.join(", ")
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Connect {
    pub title: String,
    pub links: Vec<ConnectLink>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ConnectLink {
    pub name: String,
    pub url: String,
    // Never rendered, a link only shows its name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[cfg(feature = "ssr")]
impl Content {
    /// The content compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_CONTENT, std::path::Path::new("<embedded>"))
    }

    pub fn read(path: &std::path::Path) -> Result<Self> {
        log::info!("reading content from \"{}\"", path.display());
        let text = std::fs::read_to_string(path).map_err(|error| Error::IO {
            error,
            path: std::path::PathBuf::from(path),
        })?;
        Self::from_yaml(&text, path)
    }

    /// `origin` is only used to label errors.
    pub fn from_yaml(text: &str, origin: &std::path::Path) -> Result<Self> {
        serde_yml::from_str(text).map_err(|error| Error::Deserialize {
            error: format!("content is not valid YAML: {}", error),
            path: std::path::PathBuf::from(origin),
        })
    }

    /// Describe everything that will render oddly: empty names, links that
    /// are not absolute. Nothing here stops the page from rendering.
    pub fn lint(&self) -> Vec<String> {
        let mut findings = vec![];

        let intro = &self.brief_introduction;
        if intro.name.trim().is_empty() {
            findings.push(String::from("brief introduction: name is empty"));
        }
        if intro.title.trim().is_empty() {
            findings.push(String::from("brief introduction: title is empty"));
        }

        let links = self
            .articles
            .articles
            .iter()
            .map(|article| (format!("article `{}'", article.headline), &article.url))
            .chain(
                self.work_experience
                    .entries
                    .iter()
                    .map(|entry| (format!("experience `{}'", entry.company), &entry.url)),
            )
            .chain(
                self.connect
                    .links
                    .iter()
                    .map(|link| (format!("link `{}'", link.name), &link.url)),
            );
        for (what, url) in links {
            if !is_absolute_url(url) {
                findings.push(format!("{}: `{}' is not an absolute URL", what, url));
            }
        }

        findings
    }
}

// `Url::parse` quietly drops surrounding and embedded whitespace, a link
// carrying any is broken in the browser.
#[cfg(feature = "ssr")]
fn is_absolute_url(url: &str) -> bool {
    !url.chars().any(char::is_whitespace) && url::Url::parse(url).is_ok()
}
