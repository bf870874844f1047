use quiz_extract::models::{Answer, QuestionRecord};
use quiz_extract::utils::logging;
use quiz_extract::{App, Config};
use std::fs;
use std::path::Path;

const CHECKPOINT_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Checkpoint Exam</title></head>
<body>
<div class="entry-content">
  <p><strong>2. Which two statements describe a switch? (Choose two.)</strong></p>
  <ul>
    <li><span style="color: #ff0000;">It forwards frames by MAC address.</span></li>
    <li>It forwards packets by IP address.</li>
    <li class="correct_answer">It builds a MAC address table.</li>
  </ul>
  <div class="explanation">Switches operate at layer 2.</div>

  <p><strong>1. Refer to the exhibit. Which device is the default gateway?</strong></p>
  <pre>
      PC1&gt; ipconfig

      Default Gateway: 192.168.1.1
  </pre>
  <ul>
    <li>R2</li>
    <li><strong style="color:red">R1</strong></li>
  </ul>

  <p><strong>3. Match the protocol to its port.</strong></p>
  <p><img src="https://itexamanswers.net/wp-content/uploads/match.png"></p>

  <p><strong>4. Describe the OSI model.</strong></p>
  <p>Free text answer.</p>

  <strong>5. Question as presented: what is the output?</strong>
</div>
</body>
</html>
"#;

fn write_input(dir: &Path, name: &str, html: &str) -> std::path::PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, html).unwrap();
    path
}

#[test]
fn test_extract_document_end_to_end() {
    logging::init(false);

    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(&tmp.path().join("assets_html"), "checkpoint1.html", CHECKPOINT_HTML);

    let app = App::new(&Config::default()).unwrap();
    let summary = app.run(&input).unwrap();

    assert_eq!(summary.output, tmp.path().join("assets_json").join("checkpoint1.json"));
    assert_eq!(summary.question_count, 4);
    assert_eq!(summary.stats.dropped, 1);
    assert!(summary.succeeded(), "errors: {:?}", summary.report.errors);

    let json = fs::read_to_string(&summary.output).unwrap();
    let records: Vec<QuestionRecord> = serde_json::from_str(&json).unwrap();

    let questions: Vec<_> = records.iter().map(|r| r.question.as_str()).collect();
    assert_eq!(
        questions,
        vec![
            "1. Refer to the exhibit. Which device is the default gateway?",
            "2. Which two statements describe a switch? (Choose two.)",
            "3. Match the protocol to its port.",
            "5. Question as presented: what is the output?",
        ]
    );

    assert_eq!(
        records[0].pre.as_deref(),
        Some("PC1> ipconfig\nDefault Gateway: 192.168.1.1")
    );
    assert_eq!(records[0].answer, Some(Answer::Single("R1".into())));

    assert_eq!(
        records[1].answer,
        Some(Answer::Multiple(vec![
            "It forwards frames by MAC address.".into(),
            "It builds a MAC address table.".into(),
        ]))
    );

    assert!(records[2].is_special());
    assert!(records[3].is_special());
    assert!(json.contains("\"type\": \"special\""));
}

#[test]
fn test_rerun_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(tmp.path(), "quiz.html", CHECKPOINT_HTML);
    let app = App::new(&Config::default()).unwrap();

    let first = app.run(&input).unwrap();
    let first_bytes = fs::read(&first.output).unwrap();
    let second = app.run(&input).unwrap();
    let second_bytes = fs::read(&second.output).unwrap();

    assert_eq!(first.output, tmp.path().join("quiz.json"));
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_unknown_answer_fails_validation_but_writes_output() {
    let html = r#"<body>
        <p><strong>1. Which layer handles routing?</strong></p>
        <ul><li>Network</li><li>Transport</li></ul>
    </body>"#;

    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(tmp.path(), "unmarked.html", html);
    let summary = App::new(&Config::default()).unwrap().run(&input).unwrap();

    assert!(!summary.succeeded());
    assert_eq!(summary.report.errors, vec!["Q1: Answer is 'Unknown'".to_string()]);

    let json = fs::read_to_string(&summary.output).unwrap();
    assert!(json.contains("\"answer\": \"Unknown\""));
}

#[test]
fn test_custom_correct_answer_class() {
    let html = r#"<body>
        <p><strong>1. Which port does HTTPS use?</strong></p>
        <ul><li>80</li><li class="is-right">443</li></ul>
    </body>"#;

    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(tmp.path(), "custom.html", html);
    let config = Config {
        correct_answer_class: "is-right".to_string(),
        ..Config::default()
    };
    let summary = App::new(&config).unwrap().run(&input).unwrap();

    assert!(summary.succeeded());
    let records: Vec<QuestionRecord> =
        serde_json::from_str(&fs::read_to_string(&summary.output).unwrap()).unwrap();
    assert_eq!(records[0].answer, Some(Answer::Single("443".into())));
}
