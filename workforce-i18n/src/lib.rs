#![warn(clippy::uninlined_format_args)]

#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const OPTIMIZATION_RESULTS: &str = "最適化結果";
    pub const STATUS: &str = "ステータス";
    pub const TOTAL_COST: &str = "総コスト";
    pub const COST_OBJECTIVE: &str = "目的関数値 (ペナルティ込み)";
    pub const COST_BREAKDOWN: &str = "コスト内訳";
    pub const AMOUNT: &str = "金額";
    pub const HIRING_COST: &str = "採用";
    pub const FIRING_COST: &str = "解雇";
    pub const SALARY_COST: &str = "給与";
    pub const OVERTIME_COST: &str = "残業";
    pub const PENALTY_COST: &str = "未充足ペナルティ";
    pub const WEEK: &str = "週";
    pub const DEMAND: &str = "需要";
    pub const HIRED: &str = "採用数";
    pub const FIRED: &str = "解雇数";
    pub const EMPLOYEES: &str = "従業員数";
    pub const OVERTIME: &str = "残業時間";
    pub const UNMET_DEMAND: &str = "未充足需要";
    pub const NO_PLAN: &str = "実行可能な計画が見つかりませんでした";
    pub const INVALID_CONFIGURATION: &str = "入力パラメータが不正です";
    pub const DEMAND_GENERATION_FAILED: &str = "需要の生成に失敗しました";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const OPTIMIZATION_RESULTS: &str = "Optimization Results";
    pub const STATUS: &str = "Status";
    pub const TOTAL_COST: &str = "Total Cost";
    pub const COST_OBJECTIVE: &str = "Cost Objective (incl. penalty)";
    pub const COST_BREAKDOWN: &str = "Cost Breakdown";
    pub const AMOUNT: &str = "Amount";
    pub const HIRING_COST: &str = "Hiring";
    pub const FIRING_COST: &str = "Firing";
    pub const SALARY_COST: &str = "Salary";
    pub const OVERTIME_COST: &str = "Overtime";
    pub const PENALTY_COST: &str = "Unmet penalty";
    pub const WEEK: &str = "Week";
    pub const DEMAND: &str = "Demand";
    pub const HIRED: &str = "Hired";
    pub const FIRED: &str = "Fired";
    pub const EMPLOYEES: &str = "Employees";
    pub const OVERTIME: &str = "Overtime";
    pub const UNMET_DEMAND: &str = "Unmet Demand";
    pub const NO_PLAN: &str = "No feasible plan was found";
    pub const INVALID_CONFIGURATION: &str = "Invalid planning parameters";
    pub const DEMAND_GENERATION_FAILED: &str = "Failed to generate demand";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn solver_unavailable(backend: impl std::fmt::Display) -> String {
    format!("ソルバー '{backend}' はこのビルドでは利用できません")
}

#[cfg(feature = "ja")]
pub fn numeric_inconsistency(variable: impl std::fmt::Display, value: f64) -> String {
    format!("ソルバーが整数変数 '{variable}' に {value} を返しました")
}

#[cfg(feature = "ja")]
pub fn unknown_key(key: impl std::fmt::Display, line: usize) -> String {
    format!("不明なキー '{key}' です (行 {line})")
}

#[cfg(feature = "ja")]
pub fn duplicate_key(key: impl std::fmt::Display, line: usize) -> String {
    format!("キー '{key}' が重複しています (行 {line})")
}

#[cfg(feature = "ja")]
pub fn conflicting_demand(line: usize) -> String {
    format!("需要の指定が重複しています (行 {line})。`demand` と `demand_range` はどちらか一方だけ指定してください。")
}

#[cfg(feature = "ja")]
pub fn horizon_too_long(weeks: u32, max: u32, line: usize) -> String {
    format!("計画期間 {weeks} 週は上限 {max} 週を超えています (行 {line})")
}

#[cfg(not(feature = "ja"))]
pub fn solver_unavailable(backend: impl std::fmt::Display) -> String {
    format!("Solver backend '{backend}' is not available in this build")
}

#[cfg(not(feature = "ja"))]
pub fn numeric_inconsistency(variable: impl std::fmt::Display, value: f64) -> String {
    format!("Solver returned {value} for integer variable '{variable}'")
}

#[cfg(not(feature = "ja"))]
pub fn unknown_key(key: impl std::fmt::Display, line: usize) -> String {
    format!("Unknown key '{key}' at line {line}")
}

#[cfg(not(feature = "ja"))]
pub fn duplicate_key(key: impl std::fmt::Display, line: usize) -> String {
    format!("Key '{key}' is set twice (line {line})")
}

#[cfg(not(feature = "ja"))]
pub fn conflicting_demand(line: usize) -> String {
    format!(
        "Conflicting demand definition at line {line}. Use either `demand` or `demand_range`, not both."
    )
}

#[cfg(not(feature = "ja"))]
pub fn horizon_too_long(weeks: u32, max: u32, line: usize) -> String {
    format!("Horizon of {weeks} weeks at line {line} exceeds the limit of {max} weeks")
}

pub struct SyntaxErrorMessage {
    line: usize,
    detail: String,
}

pub fn syntax_error(line: usize, detail: String) -> SyntaxErrorMessage {
    SyntaxErrorMessage { line, detail }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for SyntaxErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "構文エラー (行 {}): {}", self.line, self.detail)
    }
}

#[cfg(not(feature = "ja"))]
impl std::fmt::Display for SyntaxErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Syntax error at line {}: {}", self.line, self.detail)
    }
}
