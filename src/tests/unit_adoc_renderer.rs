use crate::domain::RenderContext;
use crate::features::grouping::group_bookmarks;
use crate::render::Renderer;
use crate::render::adoc::ADOC_TEMPLATE;
use crate::tests::bookmark;
use std::io::Write;

fn render_built_in(context: &RenderContext) -> String {
    let renderer = Renderer::built_in().expect("Built-in template should parse");
    let mut out = Vec::new();
    renderer.render(context, &mut out).expect("Should render");
    String::from_utf8(out).unwrap()
}

// no bookmarks: just the document header, no sections of any kind
#[test]
fn test_render_empty_context() {
    let output = render_built_in(&RenderContext::default());

    assert!(output.starts_with("= Pinboard Links\n:toc:\n:toclevels: 1\n"));
    assert!(!output.contains("=="));
    assert!(!output.contains("Reading List"));
}

#[test]
fn test_render_single_post() {
    let context = group_bookmarks(vec![bookmark("My Post", "go web", "yes")]);
    let output = render_built_in(&context);

    assert_eq!(output.matches("== go\n").count(), 1);
    assert_eq!(output.matches("== web\n").count(), 1);
    assert_eq!(output.matches("== Reading List").count(), 1);
    assert!(output.contains("* <<my-post,My Post>>"));
    assert!(output.contains("[#my-post]\n=== My Post"));
    assert!(output.contains("Notes:: <<my-post.adoc#>>"));
    assert!(output.contains("Date Collected:: 2016-01-01 00:00:00 +0000 UTC\n"));
    assert!(output.contains("Tags:: go web"));
    assert!(output.contains("To Read:: yes"));
}

#[test]
fn test_render_sections_sorted_and_untagged() {
    let context = group_bookmarks(vec![
        bookmark("Zebra", "zeta", "no"),
        bookmark("Loose", "", "no"),
        bookmark("Apple", "alpha", "no"),
    ]);
    let output = render_built_in(&context);

    let no_tags = output.find("== No Tags").expect("Untagged section");
    let alpha = output.find("== alpha").expect("alpha section");
    let zeta = output.find("== zeta").expect("zeta section");
    assert!(no_tags < alpha && alpha < zeta);

    // nothing to read, so no reading list heading
    assert!(!output.contains("Reading List"));
}

#[test]
fn test_render_extended_only_when_present() {
    let mut with_notes = bookmark("Annotated", "notes", "no");
    with_notes.extended = "Worth a second look.".to_string();
    let output = render_built_in(&group_bookmarks(vec![with_notes]));
    assert!(output.contains("Worth a second look.\nNotes::"));

    let output = render_built_in(&group_bookmarks(vec![bookmark("Bare", "notes", "no")]));
    assert!(output.contains("=== Bare\n\n\nNotes::"));
}

// asciidoc is not html, titles pass through untouched
#[test]
fn test_render_does_not_escape() {
    let context = group_bookmarks(vec![bookmark("Tom & Jerry <3", "cartoons", "no")]);
    let output = render_built_in(&context);
    assert!(output.contains("=== Tom & Jerry <3"));
}

// an .html or .xml file name must not switch on html escaping
#[test]
fn test_render_custom_html_template_does_not_escape() {
    let dir = tempfile::tempdir().unwrap();
    let context = group_bookmarks(vec![bookmark("Tom & Jerry <3", "cartoons", "no")]);

    for file_name in ["index.html", "feed.xml", "page.htm"] {
        let path = dir.path().join(file_name);
        std::fs::write(&path, "{% for tag, post in tags|items %}{{ post.description }}{% endfor %}").unwrap();

        let renderer = Renderer::from_file(&path).expect("Should load template file");
        let mut out = Vec::new();
        renderer.render(&context, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Tom & Jerry <3", "{} was escaped", file_name);
    }
}

#[test]
fn test_render_custom_template_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        "{{% for tag, post in tags|items %}}{{{{ tag }}}}={{{{ post.slug }}}};{{% endfor %}}|{{{{ reading_list|length }}}}"
    )
    .unwrap();

    let renderer = Renderer::from_file(&path).expect("Should load template file");
    assert_eq!(renderer.name(), "index.txt");

    let context = group_bookmarks(vec![bookmark("My Post", "go web", "yes")]);
    let mut out = Vec::new();
    renderer.render(&context, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "go=my-post;web=my-post;|1");
}

#[test]
fn test_render_template_errors() {
    // missing file
    assert!(Renderer::from_file(std::path::Path::new("/definitely/not/here.tmpl")).is_err());

    // parse error is caught before anything is rendered
    assert!(Renderer::from_source("broken".into(), "{% for x in %}".into()).is_err());

    // unknown fields fail at execution time
    let renderer = Renderer::from_source("strict".into(), "before {{ nope.field }}".into()).unwrap();
    let mut out = Vec::new();
    assert!(renderer.render(&RenderContext::default(), &mut out).is_err());
}

// the example output is the template source itself
#[test]
fn test_built_in_template_is_valid() {
    assert!(ADOC_TEMPLATE.starts_with("= Pinboard Links"));
    assert!(Renderer::from_source("copy".into(), ADOC_TEMPLATE.into()).is_ok());
}
