//! 领域模型 - API 线上类型
//!
//! 与服务端交换的 serde 类型定义。

use crate::access::Role;
use serde::{Deserialize, Serialize};

/// 当前用户资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
    /// 账号角色；新建账号在分配角色前为 None
    pub role: Option<Role>,
}

/// 登录请求体
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// 课程概要（列表项）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonSummary {
    pub id: String,
    /// 阿拉伯语标题
    pub title_ar: String,
    /// 英语标题
    pub title_en: String,
    /// 难度等级 (1-5)
    pub level: u8,
    /// 完成进度 (0-100)
    pub progress: u8,
}

/// 词汇条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub arabic: String,
    pub transliteration: String,
    pub translation: String,
}

/// 课程详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDetail {
    pub id: String,
    pub title_ar: String,
    pub title_en: String,
    pub level: u8,
    pub description: String,
    pub vocabulary: Vec<VocabularyEntry>,
    /// 配套测验；没有测验的课程为 None
    pub quiz_id: Option<String>,
}

/// 测验题目（单选）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub choices: Vec<String>,
    /// 正确选项在 choices 中的下标
    pub answer_index: usize,
}

/// 学习进度汇总（面板统计）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub lessons_completed: u32,
    pub words_learned: u32,
    pub streak_days: u32,
}

/// 管理面板中的用户条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedUser {
    pub id: String,
    pub display_name: String,
    pub role: Option<Role>,
    pub active: bool,
}
