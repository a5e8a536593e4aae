//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use declmap_config::DeclmapConfig;
use declmap_parser::{OutputFormat, Taxonomy};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_output_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[output]
format = "jsonl"
taxonomy = "legacy"
qualify_methods = false
"#,
        )?;

        let config: DeclmapConfig = Figment::from(Serialized::defaults(DeclmapConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.output.format, OutputFormat::Jsonl);
        assert_eq!(config.output.taxonomy, Taxonomy::Legacy);
        assert!(!config.output.qualify_methods);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[output]\nformat = \"tsv\"\n")?;

        let config: DeclmapConfig = Figment::from(Serialized::defaults(DeclmapConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.output.format, OutputFormat::Tsv);
        assert_eq!(config.output.taxonomy, Taxonomy::Detailed);
        assert!(config.output.qualify_methods);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".declmap").expect("create .declmap dir");
        jail.create_file(".declmap/config.toml", "[output]\ntaxonomy = \"legacy\"\n")?;

        let config = DeclmapConfig::load().expect("config loads");
        assert_eq!(config.output.taxonomy, Taxonomy::Legacy);
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".declmap").expect("create .declmap dir");
        jail.create_file(".declmap/config.toml", "[output]\nformat = \"tsv\"\n")?;
        jail.create_file("custom.toml", "[output]\nformat = \"jsonl\"\n")?;

        let config = DeclmapConfig::load_with_file(std::path::Path::new("custom.toml"))
            .expect("config loads");
        assert_eq!(config.output.format, OutputFormat::Jsonl);
        Ok(())
    });
}

#[test]
fn unknown_format_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[output]\nformat = \"xml\"\n")?;

        let result: Result<DeclmapConfig, _> =
            Figment::from(Serialized::defaults(DeclmapConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();

        assert!(result.is_err());
        Ok(())
    });
}
