use serde_json::json;
use tempfile::TempDir;
use tscaffold_ops::render::Renderer;

#[test]
fn test_output_is_not_html_escaped() {
    let renderer = Renderer::new();
    let out = renderer
        .render_str("import x from '{{source}}';", &json!({ "source": "a&b<c>" }))
        .unwrap();
    assert_eq!(out, "import x from 'a&b<c>';");
}

#[test]
fn test_join_helper() {
    let renderer = Renderer::new();
    let out = renderer
        .render_str("[{{join items \", \"}}]", &json!({ "items": ["'dist'", "'x.mjs'"] }))
        .unwrap();
    assert_eq!(out, "['dist', 'x.mjs']");
}

#[test]
fn test_enclose_in_double_curly_helper() {
    let renderer = Renderer::new();
    let out = renderer
        .render_str("token: ${{encloseInDoubleCurly \"secrets.TOKEN\"}}", &json!({}))
        .unwrap();
    assert_eq!(out, "token: ${{ secrets.TOKEN }}");
}

#[test]
fn test_eq_helper() {
    let renderer = Renderer::new();
    let template = "{{#if (eq pm \"pnpm\")}}pnpm{{else}}npm{{/if}}";
    assert_eq!(renderer.render_str(template, &json!({ "pm": "pnpm" })).unwrap(), "pnpm");
    assert_eq!(renderer.render_str(template, &json!({ "pm": "npm" })).unwrap(), "npm");
}

#[test]
fn test_partial_from_file() {
    let tmp = TempDir::new().unwrap();
    let partial = tmp.path().join("p.hbs");
    std::fs::write(&partial, "partial {{name}}").unwrap();

    let mut renderer = Renderer::new();
    renderer.register_partial_file("myPartial", &partial).unwrap();
    let out = renderer
        .render_str("<{{> myPartial}}>", &json!({ "name": "x" }))
        .unwrap();
    assert_eq!(out, "<partial x>");
}

#[test]
fn test_render_to_creates_parent_dirs() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("t.hbs");
    std::fs::write(&src, "hello {{who}}").unwrap();
    let dest = tmp.path().join("a").join("b").join("out.txt");

    Renderer::new()
        .render_to(&src, &dest, &json!({ "who": "world" }))
        .unwrap();
    assert_eq!(std::fs::read_to_string(dest).unwrap(), "hello world");
}

#[test]
fn test_missing_template_file_fails() {
    let tmp = TempDir::new().unwrap();
    let result = Renderer::new().render_file(&tmp.path().join("nope.hbs"), &json!({}));
    assert!(result.is_err());
}
