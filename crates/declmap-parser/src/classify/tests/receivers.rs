use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn classify_method_source(receiver: &str) -> DeclarationRecord {
    let source = format!("package demo\n\nfunc {receiver} Run() error {{\n\treturn nil\n}}\n");
    let mut records = classify_source(&source);
    assert_eq!(records.len(), 1, "records: {records:?}");
    records.remove(0)
}

#[rstest]
#[case::pointer("(c *Config)")]
#[case::value("(c Config)")]
#[case::unnamed_pointer("(*Config)")]
#[case::unnamed_value("(Config)")]
#[case::shared_type_names("(a, b Config)")]
fn simple_receivers_qualify_method(#[case] receiver: &str) {
    assert_eq!(
        classify_method_source(receiver),
        record(DeclKind::Method, 3, 5, "Config.Run")
    );
}

#[rstest]
#[case::double_pointer("(c **Config)")]
#[case::generic_pointer("(s *Stack[T])")]
#[case::generic_value("(s Stack[T])")]
#[case::qualified("(c pkg.Config)")]
#[case::two_receivers("(a Config, b Config)")]
#[case::empty("()")]
fn unsupported_receivers_fall_back_to_function(#[case] receiver: &str) {
    assert_eq!(
        classify_method_source(receiver),
        record(DeclKind::Function, 3, 5, "Run")
    );
}

#[test]
fn unqualified_methods_keep_method_kind() {
    let options = ClassifyOptions {
        qualify_methods: false,
        ..ClassifyOptions::default()
    };
    let source = "package demo\n\nfunc (p *Point) String() string { return \"\" }\n";
    assert_eq!(
        classify_with(source, &options),
        vec![record(DeclKind::Method, 3, 3, "String")]
    );
}

#[test]
fn pointer_and_value_receivers_share_a_name() {
    let source = r#"package demo

type Config struct{}

func (c *Config) Load() error { return nil }

func (c Config) Load2() error { return nil }
"#;
    let records = classify_source(source);
    assert_eq!(records[1].name.as_deref(), Some("Config.Load"));
    assert_eq!(records[2].name.as_deref(), Some("Config.Load2"));
}
