use std::path::{Path, PathBuf};

use formcraft::config::{load_config, FormViewOptions, GeneratorConfig};
use formcraft::error::CraftError;
use formcraft::resource::View;
use formcraft::writer::WriteMode;
use formcraft::{create_form_view, language, plan_form_view, relation, resource};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// A project rooted in a temp dir that reads resources and stubs from the fixtures.
fn project_config(root: &Path) -> GeneratorConfig {
    let mut config = load_config(root).unwrap();
    config.paths.resource_files = fixture_path("resources");
    config.paths.stubs = fixture_path("templates");
    config
}

fn post_options() -> FormViewOptions {
    FormViewOptions {
        model_name: "Post".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_generate_post_form_with_minimal_template() {
    let root = tempfile::tempdir().unwrap();
    let config = project_config(root.path());

    let generated = create_form_view(
        FormViewOptions {
            template_name: Some("minimal".to_string()),
            ..post_options()
        },
        &config,
    )
    .unwrap();

    let expected_path = root.path().join("resources/views/posts/form.blade.php");
    assert_eq!(generated.path, expected_path);
    assert_eq!(generated.mode, WriteMode::Create);

    let content = std::fs::read_to_string(&expected_path).unwrap();
    assert!(content.starts_with("<h1>Post</h1>"), "model name substituted");
    assert!(content.contains(r#"name="title" type="text""#), "title input rendered");
    assert!(
        content.contains("@foreach ($categories as $category)"),
        "category selector rendered"
    );
    assert!(
        content.find(r#"id="title""#).unwrap() < content.find(r#"id="category_id""#).unwrap(),
        "fields keep resource order"
    );
    assert!(content.contains("compact('post','categories')"));
    assert!(!content.contains("[%"), "no placeholder left behind");
}

#[test]
fn test_second_run_without_force_is_refused() {
    let root = tempfile::tempdir().unwrap();
    let config = project_config(root.path());

    let first = create_form_view(post_options(), &config).unwrap();
    let before = std::fs::read(&first.path).unwrap();

    let result = create_form_view(post_options(), &config);
    match result {
        Err(err @ CraftError::DestinationExists { .. }) => assert!(err.is_skip()),
        Err(other) => panic!("expected DestinationExists, got {other:?}"),
        Ok(_) => panic!("expected the second run to be refused"),
    }

    let after = std::fs::read(&first.path).unwrap();
    assert_eq!(before, after, "existing view must be byte-identical");
}

#[test]
fn test_force_overwrites_hand_edits() {
    let root = tempfile::tempdir().unwrap();
    let config = project_config(root.path());

    let first = create_form_view(post_options(), &config).unwrap();
    let generated = std::fs::read_to_string(&first.path).unwrap();
    std::fs::write(&first.path, "hand edited").unwrap();

    let second = create_form_view(
        FormViewOptions {
            force: true,
            ..post_options()
        },
        &config,
    )
    .unwrap();

    assert_eq!(second.mode, WriteMode::Overwrite);
    assert_eq!(std::fs::read_to_string(&second.path).unwrap(), generated);
}

#[test]
fn test_default_template_renders_full_view() {
    let root = tempfile::tempdir().unwrap();
    let config = project_config(root.path());

    let generated = create_form_view(
        FormViewOptions {
            routes_prefix: Some("admin".to_string()),
            layout_name: Some("layouts.admin".to_string()),
            ..post_options()
        },
        &config,
    )
    .unwrap();

    assert_eq!(
        generated.path,
        root.path().join("resources/views/admin/posts/form.blade.php")
    );

    let content = std::fs::read_to_string(&generated.path).unwrap();
    assert!(content.contains("@extends('layouts.admin')"));
    assert!(content.contains("view('admin.posts.form', compact('post','categories'))"));
    assert!(content.contains("route('admin.posts.update', $post->getKey())"));
    assert!(content.contains("route('admin.posts.store')"));
    assert!(content.contains("{{ isset($post->title) ? $post->title : 'Post' }}"));
    assert!(content.contains("{{ trans('posts.title') }}"));
    assert!(!content.contains("[%"));
}

#[test]
fn test_language_file_matches_trans_keys_in_view() {
    let root = tempfile::tempdir().unwrap();
    let config = project_config(root.path());

    let generated = create_form_view(post_options(), &config).unwrap();
    let view = std::fs::read_to_string(&generated.path).unwrap();

    // trans('<group>.<key>') resolves against <lang>/<locale>/<group>.php
    let lang_path = root.path().join("resources/lang/en/posts.php");
    assert_eq!(generated.language.path, lang_path);
    let translations = std::fs::read_to_string(&lang_path).unwrap();
    assert!(translations.starts_with("<?php\n\nreturn [\n"));
    assert!(translations.ends_with("];\n"));

    let keys = language::defined_keys(&translations);
    for key in ["title", "category_id"] {
        assert!(view.contains(&format!("trans('posts.{key}')")));
        assert!(keys.iter().any(|k| k == key), "missing translation for {key}");
    }
    assert!(translations.contains("'model_name' => 'Post',"));
    assert!(translations.contains("'title' => 'Title',"));
    assert!(translations.contains("'category_id' => 'Category',"));
}

#[test]
fn test_invalid_language_file_name_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let config = project_config(root.path());

    let result = create_form_view(
        FormViewOptions {
            language_file_name: Some("../../escape".to_string()),
            ..post_options()
        },
        &config,
    );

    assert!(matches!(
        result,
        Err(CraftError::InvalidLanguageFileName { .. })
    ));
    assert!(!root.path().join("resources").exists());
}

#[test]
fn test_missing_resource_leaves_file_system_unchanged() {
    let root = tempfile::tempdir().unwrap();
    let config = project_config(root.path());

    let result = create_form_view(
        FormViewOptions {
            model_name: "Comment".to_string(),
            ..Default::default()
        },
        &config,
    );

    assert!(matches!(result, Err(CraftError::ResourceNotFound { .. })));
    assert!(!root.path().join("resources").exists());
}

#[test]
fn test_unknown_template_is_reported() {
    let root = tempfile::tempdir().unwrap();
    let config = project_config(root.path());

    let result = create_form_view(
        FormViewOptions {
            template_name: Some("nonexistent".to_string()),
            ..post_options()
        },
        &config,
    );

    assert!(matches!(result, Err(CraftError::StubNotFound { .. })));
    assert!(!root.path().join("resources/views").exists());
}

#[test]
fn test_plan_is_deterministic_and_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let config = project_config(root.path());

    let first = plan_form_view(post_options(), &config).unwrap();
    let second = plan_form_view(post_options(), &config).unwrap();

    assert_eq!(first.destination, second.destination);
    assert_eq!(first.view.text, second.view.text);
    assert_eq!(first.view_variables, "'post','categories'");
    assert_eq!(first.header.fields, ["title"]);
    assert!(!first.destination.exists());
}

#[test]
fn test_article_fixture_relations_and_order() {
    let root = tempfile::tempdir().unwrap();
    let config = project_config(root.path());

    let article = resource::load("article", &config.paths.resource_files, None).unwrap();
    let names: Vec<&str> = relation::resolve(&article.fields, View::Form)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, ["tag"], "author is hidden on the form");

    let plan = plan_form_view(
        FormViewOptions {
            model_name: "Article".to_string(),
            template_name: Some("minimal".to_string()),
            ..Default::default()
        },
        &config,
    )
    .unwrap();

    assert_eq!(plan.view_variables, "'article','tagOptions'");
    let text = &plan.view.text;
    assert!(text.contains("@foreach ($tagOptions as $tag)"));
    assert!(!text.contains(r#"name="author_id""#));

    let positions: Vec<usize> = ["headline", "body", "tag_id", "published"]
        .iter()
        .map(|name| text.find(&format!(r#"id="{name}""#)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_config_file_paths_are_honoured() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(
        root.path().join("formcraft.toml"),
        format!(
            "[paths]\nresource_files = {:?}\nviews = \"out/views\"\n\n[defaults]\nlocale = \"de\"\n",
            fixture_path("resources").to_string_lossy()
        ),
    )
    .unwrap();

    let config = load_config(root.path()).unwrap();
    let generated = create_form_view(post_options(), &config).unwrap();

    assert_eq!(
        generated.path,
        root.path().join("out/views/posts/form.blade.php")
    );
    assert!(root.path().join("resources/lang/de/posts.php").exists());
}
