use async_trait::async_trait;
use chrono::NaiveDate;
use rota_gen::core::emails::send_rota;
use rota_gen::domain::model::{CellValue, DirectoryColumns, Row, RotaMonth};
use rota_gen::domain::ports::{ConfigProvider, WorkbookSource};
use rota_gen::utils::error::RotaError;
use rota_gen::{FileOutbox, RotaGenerator};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

struct FakeWorkbook {
    sheets: HashMap<String, Vec<Row>>,
}

#[async_trait]
impl WorkbookSource for FakeWorkbook {
    async fn sheet_rows(&mut self, name: &str) -> rota_gen::Result<Vec<Row>> {
        self.sheets
            .get(name)
            .cloned()
            .ok_or_else(|| RotaError::SheetMissing {
                name: name.to_string(),
            })
    }
}

struct TestConfig {
    template: PathBuf,
    workbook: PathBuf,
}

impl ConfigProvider for TestConfig {
    fn workbook_path(&self) -> PathBuf {
        self.workbook.clone()
    }

    fn main_sheet(&self) -> &str {
        "Main"
    }

    fn directors_sheet(&self) -> &str {
        "Directors"
    }

    fn directory_columns(&self) -> DirectoryColumns {
        DirectoryColumns {
            initials: 0,
            name: 1,
            email: 2,
            username: 3,
            active: 4,
        }
    }

    fn mon_date_col(&self) -> usize {
        0
    }

    fn wed_date_col(&self) -> usize {
        3
    }

    fn email_template(&self) -> PathBuf {
        self.template.clone()
    }

    fn email_subject(&self) -> &str {
        "Phoenix Bridge Club - BBO Directors rota"
    }
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn date(year: i32, month: u32, day: u32) -> CellValue {
    CellValue::Date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

fn directors_sheet() -> Vec<Row> {
    vec![
        vec![
            text("Initials"),
            text("Name"),
            text("Email"),
            text("Username"),
            text("Active"),
        ],
        vec![
            text("JW"),
            text("Jeff Watkins"),
            text("jw@example.com"),
            text("jeffw"),
            CellValue::Bool(true),
        ],
        vec![
            text("AB"),
            text("Alice Brown"),
            text("ab@example.com"),
            text("aliceb"),
            CellValue::Bool(false),
        ],
    ]
}

/// Main sheet layout: Monday date in column 0, initials in 1, Wednesday date
/// in column 3, initials in 4.
fn main_sheet(rows: Vec<Row>) -> Vec<Row> {
    let mut sheet = vec![vec![
        text("Date"),
        text("Director"),
        CellValue::Empty,
        text("Date"),
        text("Director"),
    ]];
    sheet.extend(rows);
    sheet
}

fn workbook_with(main_rows: Vec<Row>) -> FakeWorkbook {
    let mut sheets = HashMap::new();
    sheets.insert("Main".to_string(), main_sheet(main_rows));
    sheets.insert("Directors".to_string(), directors_sheet());
    FakeWorkbook { sheets }
}

fn write_template(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("rota_email_template.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        "Hello all,\n\nThe rota for <month> is:\n\n<rota>\n\nThanks\n"
    )
    .unwrap();
    path
}

fn march() -> RotaMonth {
    "2024-03".parse().unwrap()
}

#[tokio::test]
async fn test_generates_rota_for_target_month() {
    let dir = TempDir::new().unwrap();
    let config = TestConfig {
        template: write_template(&dir),
        workbook: dir.path().join("directors-rota.xlsx"),
    };
    let mut workbook = workbook_with(vec![
        vec![
            date(2024, 3, 4),
            text("JW"),
            CellValue::Empty,
            date(2024, 3, 6),
            text("AB"),
        ],
        // Outside the window, must not appear.
        vec![
            date(2024, 4, 1),
            text("JW"),
            CellValue::Empty,
            date(2024, 4, 3),
            text("AB"),
        ],
    ]);

    let generator = RotaGenerator::new(config);
    let outcome = generator.generate_from(&mut workbook, march()).await.unwrap();

    assert_eq!(
        outcome.email_text,
        "Hello all,\n\nThe rota for Mar 2024 is:\n\nMondays\n04/03/24, Jeff Watkins\n\nWednesdays\n06/03/24, Alice Brown\n\nThanks\n"
    );
    assert_eq!(outcome.directors.len(), 2);
    assert!(outcome.directors["JW"].active);
}

#[tokio::test]
async fn test_empty_weekday_section_gets_placeholder() {
    let dir = TempDir::new().unwrap();
    let config = TestConfig {
        template: write_template(&dir),
        workbook: dir.path().join("directors-rota.xlsx"),
    };
    // Mondays only; no in-window Wednesday rows.
    let mut workbook = workbook_with(vec![vec![date(2024, 3, 4), text("JW")]]);

    let generator = RotaGenerator::new(config);
    let outcome = generator.generate_from(&mut workbook, march()).await.unwrap();

    assert!(outcome
        .email_text
        .contains("Mondays\n04/03/24, Jeff Watkins\n\nWednesdays\nNo dates"));
}

#[tokio::test]
async fn test_unknown_and_missing_initials_do_not_abort() {
    let dir = TempDir::new().unwrap();
    let config = TestConfig {
        template: write_template(&dir),
        workbook: dir.path().join("directors-rota.xlsx"),
    };
    let mut workbook = workbook_with(vec![
        vec![date(2024, 3, 4), text("ZZ")],
        vec![date(2024, 3, 11)],
        vec![date(2024, 3, 18), text("JW")],
    ]);

    let generator = RotaGenerator::new(config);
    let outcome = generator.generate_from(&mut workbook, march()).await.unwrap();

    assert!(outcome.email_text.contains("Mondays\n18/03/24, Jeff Watkins"));
    assert!(!outcome.email_text.contains("ZZ"));
}

#[tokio::test]
async fn test_missing_sheet_is_terminal_and_named() {
    let dir = TempDir::new().unwrap();
    let config = TestConfig {
        template: write_template(&dir),
        workbook: dir.path().join("directors-rota.xlsx"),
    };
    let mut workbook = FakeWorkbook {
        sheets: HashMap::from([("Directors".to_string(), directors_sheet())]),
    };

    let generator = RotaGenerator::new(config);
    let result = generator.generate_from(&mut workbook, march()).await;

    match result {
        Err(RotaError::SheetMissing { name }) => assert_eq!(name, "Main"),
        other => panic!("expected SheetMissing, got {:?}", other.map(|o| o.email_text)),
    }
}

#[tokio::test]
async fn test_missing_workbook_is_terminal() {
    let dir = TempDir::new().unwrap();
    let config = TestConfig {
        template: write_template(&dir),
        workbook: dir.path().join("no-such-workbook.xlsx"),
    };

    let generator = RotaGenerator::new(config);
    let result = generator.generate(march()).await;

    assert!(matches!(result, Err(RotaError::WorkbookMissing { .. })));
}

#[tokio::test]
async fn test_missing_template_is_terminal() {
    let dir = TempDir::new().unwrap();
    let config = TestConfig {
        template: dir.path().join("no-template.txt"),
        workbook: dir.path().join("directors-rota.xlsx"),
    };
    let mut workbook = workbook_with(vec![vec![date(2024, 3, 4), text("JW")]]);

    let generator = RotaGenerator::new(config);
    let result = generator.generate_from(&mut workbook, march()).await;

    assert!(matches!(result, Err(RotaError::TemplateMissing { .. })));
}

#[tokio::test]
async fn test_generated_rota_reaches_the_outbox() {
    let dir = TempDir::new().unwrap();
    let config = TestConfig {
        template: write_template(&dir),
        workbook: dir.path().join("directors-rota.xlsx"),
    };
    let subject = config.email_subject().to_string();
    let mut workbook = workbook_with(vec![vec![date(2024, 3, 4), text("JW")]]);

    let generator = RotaGenerator::new(config);
    let outcome = generator.generate_from(&mut workbook, march()).await.unwrap();

    let outbox = FileOutbox::new(dir.path().join("outbox"));
    let sent = send_rota(&outbox, &subject, &outcome.email_text, &outcome.directors)
        .await
        .unwrap();

    // AB is inactive, so only JW receives the rota.
    assert_eq!(sent, 1);
    let saved = dir.path().join("outbox").join("emails_jw@example.com.txt");
    let contents = std::fs::read_to_string(saved).unwrap();
    assert!(contents.contains("04/03/24, Jeff Watkins"));
}
