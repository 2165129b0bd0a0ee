use serde_json::json;

use crate::loader::{LoadError, Loader, SourceFormat, ValidationMode};

fn declaration(colors: &str) -> String {
	format!(
		r#"{{
			"content": ["./index.html", "./src/**/*.{{js,ts,jsx,tsx}}"],
			"theme": {{
				"extend": {{
					"fontFamily": {{ "body": ["Inter", "sans-serif"] }},
					"colors": {colors}
				}}
			}},
			"plugins": []
		}}"#
	)
}

fn validation_error(loader: &Loader, source: &str) -> crate::ValidationError {
	match loader.load(source, SourceFormat::Json) {
		Err(LoadError::Validation(err)) => err,
		other => panic!("expected a validation error, got {other:?}"),
	}
}

#[test]
fn duplicate_colour_keys_are_rejected() {
	let source = declaration(r##"{ "brand-deep-purple": "#5D3FD3", "brand-deep-purple": "#000000" }"##);

	let err = validation_error(&Loader::new(), &source);

	assert_eq!(err.field, "theme.extend.colors.brand-deep-purple");
	assert!(err.reason.contains("more than once"));
}

#[test]
fn colour_without_hash_is_rejected() {
	let source = declaration(r#"{ "brand-deep-purple": "5D3FD3" }"#);

	let err = validation_error(&Loader::new(), &source);

	assert_eq!(err.field, "theme.extend.colors.brand-deep-purple");
	assert_eq!(err.value, "5D3FD3");
	assert!(err.to_string().contains("value: 5D3FD3"));
}

#[test]
fn non_kebab_token_names_are_rejected() {
	let source = declaration(r##"{ "brandPurple": "#5D3FD3" }"##);

	let err = validation_error(&Loader::new(), &source);

	assert_eq!(err.field, "theme.extend.colors.brandPurple");
	assert!(err.reason.contains("kebab-case"));
}

#[test]
fn permissive_mode_keeps_the_last_duplicate_in_place() {
	let source = declaration(
		r##"{ "primary": "#111111", "accent": "rgb(0 0 0)", "primary": "#222222" }"##,
	);

	let config = Loader::new()
		.mode(ValidationMode::Permissive)
		.load(&source, SourceFormat::Json)
		.unwrap();

	let names: Vec<_> = config.colors().names().collect();
	assert_eq!(names, vec!["primary", "accent"]);
	assert_eq!(*config.colors().get("primary").unwrap(), "#222222");
	assert!(config.colors().get("accent").unwrap().as_hex().is_none());
}

#[test]
fn permissive_mode_still_rejects_empty_colours() {
	let source = declaration(r#"{ "primary": "  " }"#);

	let err = validation_error(&Loader::new().mode(ValidationMode::Permissive), &source);

	assert_eq!(err.field, "theme.extend.colors.primary");
}

#[test]
fn empty_content_is_rejected() {
	let source = json!({
		"content": [],
		"theme": { "extend": { "fontFamily": {}, "colors": {} } },
		"plugins": []
	})
	.to_string();

	let err = validation_error(&Loader::new(), &source);

	assert_eq!(err.field, "content");
}

#[test]
fn malformed_glob_reports_its_index() {
	let source = json!({
		"content": ["./index.html", "./src/**/*.{js,ts"],
		"theme": { "extend": { "fontFamily": {}, "colors": {} } },
		"plugins": []
	})
	.to_string();

	let err = validation_error(&Loader::new(), &source);

	assert_eq!(err.field, "content[1]");
	assert_eq!(err.value, "./src/**/*.{js,ts");
}

#[test]
fn empty_font_chain_is_rejected() {
	let source = json!({
		"content": ["./index.html"],
		"theme": { "extend": { "fontFamily": { "body": [] }, "colors": {} } },
		"plugins": []
	})
	.to_string();

	let err = validation_error(&Loader::new(), &source);

	assert_eq!(err.field, "theme.extend.fontFamily.body");
	assert!(err.reason.contains("must not be empty"));
}

#[test]
fn blank_font_family_names_are_rejected() {
	let source = json!({
		"content": ["./index.html"],
		"theme": { "extend": { "fontFamily": { "body": ["Inter", " "] }, "colors": {} } },
		"plugins": []
	})
	.to_string();

	let err = validation_error(&Loader::new(), &source);

	assert_eq!(err.field, "theme.extend.fontFamily.body[1]");
}

#[test]
fn generic_fallback_is_only_enforced_on_request() {
	let source = json!({
		"content": ["./index.html"],
		"theme": { "extend": { "fontFamily": { "body": ["Inter"] }, "colors": {} } },
		"plugins": []
	})
	.to_string();

	assert!(Loader::new().load(&source, SourceFormat::Json).is_ok());

	let err = validation_error(&Loader::new().require_generic_fallback(true), &source);
	assert_eq!(err.field, "theme.extend.fontFamily.body");
	assert_eq!(err.value, "Inter");
}

#[test]
fn plugins_keep_their_options() {
	let source = json!({
		"content": ["./index.html"],
		"theme": { "extend": { "fontFamily": {}, "colors": {} } },
		"plugins": [
			"@tailwindcss/typography",
			{ "name": "@tailwindcss/forms", "options": { "strategy": "class" } }
		]
	})
	.to_string();

	let config = Loader::new().load(&source, SourceFormat::Json).unwrap();

	let plugins = config.plugins();
	assert_eq!(plugins.len(), 2);
	assert_eq!(plugins[0].name(), "@tailwindcss/typography");
	assert!(plugins[0].options().is_none());
	assert_eq!(plugins[1].name(), "@tailwindcss/forms");
	assert_eq!(plugins[1].options(), Some(&json!({ "strategy": "class" })));
}

#[test]
fn unnamed_plugins_are_rejected() {
	let source = json!({
		"content": ["./index.html"],
		"theme": { "extend": { "fontFamily": {}, "colors": {} } },
		"plugins": [""]
	})
	.to_string();

	let err = validation_error(&Loader::new(), &source);

	assert_eq!(err.field, "plugins[0]");
}
