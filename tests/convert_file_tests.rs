//! File level conversion: validation, output naming and failure reporting
use std::fs;
use std::path::Path;

use md2mmd::core::{
    ConvertError, ConvertOptions, convert_document, convert_file, convert_path, convert_to_string,
    output_path,
};

const MIXED_DOCUMENT: &str = r#"# Architecture

Some introduction.

```plantuml
@startuml
actor Utilisateur
participant "Interface Web" as Web
database "Base de données" as DB

Utilisateur -> Web : Saisit identifiants
Web -> DB : Vérifie
DB --> Web : Résultat
@enduml
```

```python
print("untouched")
```

```dot
digraph { "A" -> "B"; "B" -> "C"; }
```

The end.
"#;

fn write(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write input");
    path
}

#[test]
fn test_document_without_diagrams_is_copied() {
    let dir = tempfile::tempdir().expect("temp dir");
    let content = "# Notes\n\n```rust\nfn main() {}\n```\n\nNo diagrams here.\n";
    let input = write(dir.path(), "notes.md", content);

    assert!(convert_file(&input));

    let output = fs::read(dir.path().join("notes.mmd.md")).expect("read output");
    assert_eq!(output, content.as_bytes());
}

#[test]
fn test_mixed_document() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write(dir.path(), "report.md", MIXED_DOCUMENT);

    let report = convert_path(&input, &ConvertOptions::default()).expect("convert");
    assert_eq!(report.blocks_found, 2);
    assert_eq!(report.converted, 2);
    assert_eq!(report.approximate, 1);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.output.as_deref(), Some(dir.path().join("report.mmd.md").as_path()));

    let output = fs::read_to_string(dir.path().join("report.mmd.md")).expect("read output");
    assert!(output.starts_with("# Architecture\n\nSome introduction.\n\n<!--"));
    assert!(output.contains("```mermaid\nsequenceDiagram\n    participant Utilisateur\n"));
    assert!(output.contains("    participant Web as Interface Web\n"));
    assert!(output.contains("    participant DB as Base de données\n"));
    assert!(output.contains("    Utilisateur ->> Web : Saisit identifiants\n"));
    assert!(output.contains("    DB -->> Web : Résultat\n"));
    assert!(output.contains("```python\nprint(\"untouched\")\n```"));
    assert!(output.contains(
        "```mermaid\nflowchart TD\n    A[\"A\"] --> B[\"B\"]\n    B[\"B\"] --> C[\"C\"]\n```"
    ));
    assert!(output.ends_with("\n\nThe end.\n"));
    assert!(!output.contains("```plantuml"));
    assert!(!output.contains("```dot"));

    // The warning comment sits right above the sequence diagram
    let warning_line = output
        .lines()
        .find(|line| line.starts_with("<!--"))
        .expect("warning line");
    assert!(warning_line.contains("database"));
    let after_warning = output.split(warning_line).nth(1).expect("text after warning");
    assert!(after_warning.starts_with("\n```mermaid\nsequenceDiagram"));
}

#[test]
fn test_malformed_diagram_still_converts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write(
        dir.path(),
        "broken.md",
        "```plantuml\n@startuml\nclass {{{ \n -> -> ->\n\"unterminated\n```\n\n```graphviz\ndigraph { \"A\" -> ; }}}\n```\n",
    );

    assert!(convert_file(&input));
    let output = fs::read_to_string(dir.path().join("broken.mmd.md")).expect("read output");
    assert_eq!(output.matches("```mermaid").count(), 2);
}

#[test]
fn test_uppercase_extension_accepted() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write(dir.path(), "README.MD", "plain\n");

    assert!(convert_file(&input));
    assert!(dir.path().join("README.mmd.md").is_file());
}

#[test]
fn test_custom_suffix_and_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write(dir.path(), "doc.md", "```dot\ngraph { \"A\" -- \"B\"; }\n```\n");

    let options = ConvertOptions {
        suffix: "mermaid.md".to_string(),
        output: None,
    };
    let report = convert_path(&input, &options).expect("convert");
    assert_eq!(report.output, Some(dir.path().join("doc.mermaid.md")));

    let explicit = dir.path().join("explicit.md");
    let options = ConvertOptions {
        output: Some(explicit.clone()),
        ..ConvertOptions::default()
    };
    convert_path(&input, &options).expect("convert");
    let output = fs::read_to_string(&explicit).expect("read output");
    assert!(output.contains("<-->"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("missing.md");

    let err = convert_path(&input, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::NotFound(_)));
    assert!(!convert_file(&input));
    assert!(!output_path(&input, "mmd.md").exists());
}

#[test]
fn test_path_below_a_file_is_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let parent = write(dir.path(), "parent.md", "text\n");
    let input = parent.join("child.md");

    let err = convert_path(&input, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::NotFound(_)));
    assert_eq!(err.kind(), "not_found");
    assert_eq!(err.path(), input.as_path());
}

#[test]
fn test_directory_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let target = dir.path().join("folder.md");
    fs::create_dir(&target).expect("create dir");

    let err = convert_path(&target, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidTarget(_)));
    assert!(!convert_file(&target));
}

#[test]
fn test_wrong_extension_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write(dir.path(), "notes.txt", "```dot\ndigraph {}\n```\n");

    let err = convert_path(&input, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidExtension(_)));
    assert!(!convert_file(&input));
    assert!(!dir.path().join("notes.mmd.md").exists());
}

#[test]
fn test_invalid_utf8_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write(dir.path(), "latin1.md", b"caf\xe9\n".as_slice());

    let err = convert_path(&input, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::DecodeFailure { .. }));
    assert!(!dir.path().join("latin1.mmd.md").exists());
}

#[test]
fn test_write_failure_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write(dir.path(), "doc.md", "text\n");

    let options = ConvertOptions {
        output: Some(dir.path().join("no_such_dir").join("out.md")),
        ..ConvertOptions::default()
    };
    let err = convert_path(&input, &options).unwrap_err();
    assert!(matches!(err, ConvertError::WriteFailure { .. }));
    assert_eq!(err.kind(), "write_failure");
}

#[test]
fn test_convert_to_string_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write(dir.path(), "report.md", MIXED_DOCUMENT);

    let (text, report) = convert_to_string(&input).expect("convert");
    assert_eq!(text, convert_document(MIXED_DOCUMENT).text);
    assert!(!dir.path().join("report.mmd.md").exists());

    assert_eq!(report.output, None);
    assert_eq!(report.blocks_found, 2);
    assert_eq!(report.converted, 2);
    assert_eq!(report.approximate, 1);
    assert_eq!(report.skipped, 0);
}

#[test]
fn test_report_json_shape() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write(dir.path(), "report.md", MIXED_DOCUMENT);

    let (_, report) = convert_to_string(&input).expect("convert");
    let json = serde_json::to_value(&report).expect("serialize report");
    let object = json.as_object().expect("report object");

    for key in ["input", "blocks_found", "converted", "approximate", "skipped"] {
        assert!(object.contains_key(key), "missing key {}", key);
    }
    assert!(!object.contains_key("output"));
    assert_eq!(object["converted"], serde_json::json!(2));
    assert_eq!(object["input"], input.display().to_string());

    let written = convert_path(&input, &ConvertOptions::default()).expect("convert");
    let json = serde_json::to_value(&written).expect("serialize report");
    let expected = dir.path().join("report.mmd.md").display().to_string();
    assert_eq!(json["output"], expected);
}
