use portfolio::content::{Content, Error};
use std::path::{Path, PathBuf};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn embedded_content() {
    setup();

    let content = Content::embedded().unwrap();
    assert_eq!("Alvin Leonardo", content.brief_introduction.name);
    assert_eq!("Creative Technologist", content.brief_introduction.title);
    assert_eq!(1, content.articles.articles.len());
    assert_eq!("/medium-icon.svg", content.articles.articles[0].icon.src);

    let companies: Vec<&str> = content
        .work_experience
        .entries
        .iter()
        .map(|entry| entry.company.as_str())
        .collect();
    assert_eq!(["Traveloka.com", "Lazada.co.id"], companies.as_slice());
    assert_eq!(
        "HTML, CSS, JavaScript, Adobe Photoshop",
        content.work_experience.entries[1].tech_stack_line()
    );

    let links: Vec<&str> = content.connect.links.iter().map(|link| link.name.as_str()).collect();
    assert_eq!(["LinkedIn", "GitHub"], links.as_slice());

    assert!(content.lint().is_empty(), "{:?}", content.lint());
}

#[test]
fn read_from_disk() {
    setup();

    let content = Content::read(Path::new("content/portfolio.yml")).unwrap();
    assert_eq!(Content::embedded().unwrap(), content);
}

#[test]
fn missing_file() {
    setup();

    match Content::read(Path::new("content/does-not-exist.yml")) {
        Err(Error::IO { path, .. }) => {
            assert_eq!(PathBuf::from("content/does-not-exist.yml"), path)
        }
        other => panic!("expected an IO error, got {:?}", other),
    }
}

#[test]
fn missing_section() {
    setup();

    let yaml = r#"
brief_introduction:
  name: Jane
  title: Engineer
introduction:
  title: Hello
  body: Hi.
"#;
    match Content::from_yaml(yaml, Path::new("partial.yml")) {
        Err(error @ Error::Deserialize { .. }) => {
            assert!(error.to_string().contains("partial.yml"), "{}", error)
        }
        other => panic!("expected a deserialization error, got {:?}", other),
    }
}

#[test]
fn empty_sequences_and_defaults() {
    setup();

    let yaml = r##"
brief_introduction: { name: Jane, title: Engineer }
introduction: { title: Hello, body: Hi. }
articles: { title: Article, articles: [] }
work_experience:
  title: Work
  entries:
    - company: Acme
      url: https://acme.test
      country: Nowhere
      job_title: Engineer
      tenure_span: 2020 - 2021
connect:
  title: Connect
  links:
    - { img: "#", name: Mastodon, url: https://example.social/@jane }
"##;
    let content = Content::from_yaml(yaml, Path::new("minimal.yml")).unwrap();
    assert!(content.articles.articles.is_empty());
    assert!(content.work_experience.entries[0].tech_stack.is_empty());
    assert_eq!("", content.work_experience.entries[0].tech_stack_line());
    assert_eq!(None, content.connect.links[0].icon);
}

#[test]
fn lint_reports_without_rejecting() {
    setup();

    let mut content = Content::embedded().unwrap();
    content.brief_introduction.name = String::new();
    content.connect.links[1].url = String::from("github.com/d3ther");
    content.work_experience.entries[0].url = String::from("/traveloka");

    let findings = content.lint();
    assert_eq!(3, findings.len(), "{:?}", findings);
    assert_eq!("brief introduction: name is empty", findings[0]);
    assert!(findings[1].contains("Traveloka.com"));
    assert!(findings[2].contains("GitHub"));
    assert!(findings[2].contains("github.com/d3ther"));
}

#[test]
fn lint_checks_links_are_well_formed() {
    setup();

    let mut content = Content::embedded().unwrap();
    content.connect.links[0].url = String::from("mailto:alvin@example.com");
    content.connect.links[1].url = String::from("https://a b");

    let findings = content.lint();
    assert_eq!(1, findings.len(), "{:?}", findings);
    assert!(findings[0].contains("GitHub"));
    assert!(findings[0].contains("https://a b"));
}
