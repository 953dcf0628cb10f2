//! API 客户端模块
//!
//! 基于 `web::HttpClient` 的轻量客户端。所有请求携带同源
//! Cookie 会话，客户端本身无状态、不持有任何凭据。

use serde::de::DeserializeOwned;

use crate::model::{
    LessonDetail, LessonSummary, LoginRequest, ManagedUser, ProgressSummary, QuizQuestion,
    UserProfile,
};
use crate::web::HttpClient;

/// API 客户端
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DurusApi {
    base_url: String,
}

impl DurusApi {
    /// 创建指向指定后端的客户端；空 `base_url` 表示同源
    #[allow(dead_code)]
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET 并解析 JSON 响应（内部工具函数）
    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T, String> {
        let res = HttpClient::get(&self.url(path))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("{}失败: {}", what, res.status()));
        }

        res.json::<T>().await.map_err(|e| e.to_string())
    }

    /// 登录，成功返回用户资料
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, String> {
        let body = serde_json_wasm::to_string(&LoginRequest { username, password })
            .map_err(|e| e.to_string())?;

        let res = HttpClient::post(&self.url("/api/session"))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("登录失败: {}", res.status()));
        }

        res.json::<UserProfile>().await.map_err(|e| e.to_string())
    }

    /// 查询既有会话；未登录时返回 Ok(None)
    pub async fn current_session(&self) -> Result<Option<UserProfile>, String> {
        let res = HttpClient::get(&self.url("/api/session"))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if res.status() == 401 {
            return Ok(None);
        }
        if !res.ok() {
            return Err(format!("会话查询失败: {}", res.status()));
        }

        res.json::<UserProfile>()
            .await
            .map(Some)
            .map_err(|e| e.to_string())
    }

    /// 注销当前会话
    pub async fn logout(&self) -> Result<(), String> {
        let res = HttpClient::delete(&self.url("/api/session"))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("注销失败: {}", res.status()));
        }
        Ok(())
    }

    /// 获取课程列表
    pub async fn get_lessons(&self) -> Result<Vec<LessonSummary>, String> {
        self.get_json("/api/lessons", "获取课程列表").await
    }

    /// 获取课程详情
    pub async fn get_lesson(&self, id: &str) -> Result<LessonDetail, String> {
        self.get_json(&format!("/api/lessons/{}", id), "获取课程详情")
            .await
    }

    /// 获取测验题目
    pub async fn get_quiz(&self, id: &str) -> Result<Vec<QuizQuestion>, String> {
        self.get_json(&format!("/api/quiz/{}", id), "获取测验题目")
            .await
    }

    /// 获取学习进度汇总
    pub async fn get_progress(&self) -> Result<ProgressSummary, String> {
        self.get_json("/api/progress", "获取学习进度").await
    }

    /// 获取用户列表（管理员）
    pub async fn list_users(&self) -> Result<Vec<ManagedUser>, String> {
        self.get_json("/api/users", "获取用户列表").await
    }
}
