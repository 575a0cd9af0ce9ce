use crate::domain::model::DirectoryColumns;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, RotaError};
use crate::utils::validation::{
    validate_column_index, validate_date_column, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_WORKBOOK_FILE: &str = "directors-rota.xlsx";
const DEFAULT_TEMPLATE_FILE: &str = "rota_email_template.txt";
const DEFAULT_SUBJECT: &str = "Phoenix Bridge Club - BBO Directors rota";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub workbook: WorkbookConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbookConfig {
    pub dir: PathBuf,
    pub file_name: String,
    pub main_sheet: String,
    pub directors_sheet: String,
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        Self {
            dir: default_downloads_dir(),
            file_name: DEFAULT_WORKBOOK_FILE.to_string(),
            main_sheet: "Main".to_string(),
            directors_sheet: "Directors".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub initials_col: usize,
    pub name_col: usize,
    pub email_col: usize,
    pub username_col: usize,
    pub active_col: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            initials_col: 0,
            name_col: 1,
            email_col: 2,
            username_col: 3,
            active_col: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub mon_date_col: usize,
    pub wed_date_col: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            mon_date_col: 0,
            wed_date_col: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub template: PathBuf,
    pub subject: String,
    pub sender: String,
    pub outbox_dir: PathBuf,
    pub send_emails: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            template: default_template_path(),
            subject: DEFAULT_SUBJECT.to_string(),
            sender: String::new(),
            outbox_dir: default_downloads_dir(),
            send_emails: true,
        }
    }
}

fn default_downloads_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_template_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("rota-gen").join(DEFAULT_TEMPLATE_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_FILE))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RotaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RotaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 載入配置檔案；檔案不存在時回傳預設配置
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// 替換環境變數 (例如 ${EMAIL_SENDER})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_path("workbook.dir", &self.workbook.dir.to_string_lossy())?;
        validate_non_empty_string("workbook.file_name", &self.workbook.file_name)?;
        validate_non_empty_string("workbook.main_sheet", &self.workbook.main_sheet)?;
        validate_non_empty_string("workbook.directors_sheet", &self.workbook.directors_sheet)?;

        validate_column_index("directory.initials_col", self.directory.initials_col)?;
        validate_column_index("directory.name_col", self.directory.name_col)?;
        validate_column_index("directory.email_col", self.directory.email_col)?;
        validate_column_index("directory.username_col", self.directory.username_col)?;
        validate_column_index("directory.active_col", self.directory.active_col)?;

        validate_date_column("schedule.mon_date_col", self.schedule.mon_date_col)?;
        validate_date_column("schedule.wed_date_col", self.schedule.wed_date_col)?;

        validate_path("email.template", &self.email.template.to_string_lossy())?;
        validate_path("email.outbox_dir", &self.email.outbox_dir.to_string_lossy())?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn workbook_path(&self) -> PathBuf {
        self.workbook.dir.join(&self.workbook.file_name)
    }

    fn main_sheet(&self) -> &str {
        &self.workbook.main_sheet
    }

    fn directors_sheet(&self) -> &str {
        &self.workbook.directors_sheet
    }

    fn directory_columns(&self) -> DirectoryColumns {
        DirectoryColumns {
            initials: self.directory.initials_col,
            name: self.directory.name_col,
            email: self.directory.email_col,
            username: self.directory.username_col,
            active: self.directory.active_col,
        }
    }

    fn mon_date_col(&self) -> usize {
        self.schedule.mon_date_col
    }

    fn wed_date_col(&self) -> usize {
        self.schedule.wed_date_col
    }

    fn email_template(&self) -> PathBuf {
        self.email.template.clone()
    }

    fn email_subject(&self) -> &str {
        &self.email.subject
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
