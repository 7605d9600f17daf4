use crate::domain::person::{Student, Teacher};
use crate::domain::tax::DEFAULT_TAX_YEAR;
use crate::utils::error::{LessonError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const MAX_RIDES: u32 = 10_000;

/// A tour scenario. Every section is optional in TOML and falls back to the
/// values of the original lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub account: AccountConfig,
    pub tax: TaxConfig,
    pub seats: BTreeMap<String, String>,
    pub rides: RideConfig,
    pub people: PeopleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub id: u64,
    pub owner: String,
    pub opening_balance: f64,
    pub nickname: Option<String>,
    pub deposits: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    /// 計算帳戶稅額的金額
    pub taxable_amount: f64,
    pub income: f64,
    /// 省略時使用 `DEFAULT_TAX_YEAR`
    pub tax_year: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RideConfig {
    pub started: u32,
    pub stopped: u32,
    pub speed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeopleConfig {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            account: AccountConfig::default(),
            tax: TaxConfig::default(),
            seats: BTreeMap::from([
                ("A1".to_string(), "Roland".to_string()),
                ("A2".to_string(), "Mosh".to_string()),
            ]),
            rides: RideConfig::default(),
            people: PeopleConfig::default(),
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            id: 1,
            owner: "Roland".to_string(),
            opening_balance: 0.0,
            nickname: Some("RollyJS".to_string()),
            deposits: vec![500.0],
        }
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            taxable_amount: 15_500.0,
            income: 40_000.0,
            tax_year: None,
        }
    }
}

impl Default for RideConfig {
    fn default() -> Self {
        Self {
            started: 4,
            stopped: 0,
            speed: None,
        }
    }
}

impl Default for PeopleConfig {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            teachers: vec![Teacher::new("Adams", "Fred")],
        }
    }
}

impl TourConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LessonError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LessonError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OWNER})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LessonError::ConfigError {
            message: format!("env placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn tax_year(&self) -> u32 {
        self.tax.tax_year.unwrap_or(DEFAULT_TAX_YEAR)
    }

    /// 驗證配置的合理性。存款金額不在此檢查，由 `Account::deposit` 負責。
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("account.owner", &self.account.owner)?;

        if let Some(nickname) = &self.account.nickname {
            validate_non_empty_string("account.nickname", nickname)?;
        }

        validate_range("tax.tax_year", self.tax_year(), 1900, 2100)?;

        validate_range("rides.started", self.rides.started, 0, MAX_RIDES)?;
        validate_range("rides.stopped", self.rides.stopped, 0, self.rides.started)?;

        for student in &self.people.students {
            validate_non_empty_string("people.students.first_name", &student.person.first_name)?;
        }
        for teacher in &self.people.teachers {
            validate_non_empty_string("people.teachers.first_name", &teacher.person.first_name)?;
        }

        Ok(())
    }
}

impl Validate for TourConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
