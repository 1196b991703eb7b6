//! Typed endpoint wrappers over [`ApiClient`].

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::collection::PageSource;
use crate::envelope::Page;
use crate::error::Result;
use crate::models::{
    Assignment, AssignmentId, Course, Notification, NotificationId, Report, Resource,
};

use super::ApiClient;

/// Body of an assignment submission
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentSubmission {
    pub submission_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body of a tutor grading action
#[derive(Debug, Clone, Serialize)]
pub struct GradePayload {
    pub grade: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Body of the enrollment (signup) mutation; mirrors the enrollment form
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentPayload {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_phone: Option<String>,
    pub course_code: String,
}

impl ApiClient {
    pub async fn list_courses(&self, page: u32, per_page: u32) -> Result<Page<Course>> {
        self.fetch_page("courses", page, per_page).await
    }

    pub async fn list_assignments(&self, page: u32, per_page: u32) -> Result<Page<Assignment>> {
        self.fetch_page("assignments", page, per_page).await
    }

    pub async fn list_reports(&self, page: u32, per_page: u32) -> Result<Page<Report>> {
        self.fetch_page("reports", page, per_page).await
    }

    pub async fn list_resources(&self, page: u32, per_page: u32) -> Result<Page<Resource>> {
        self.fetch_page("resources", page, per_page).await
    }

    pub async fn list_notifications(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Notification>> {
        self.fetch_page("notifications", page, per_page).await
    }

    pub async fn submit_assignment(
        &self,
        id: AssignmentId,
        submission: &AssignmentSubmission,
    ) -> Result<()> {
        self.post_unit(&format!("assignments/{id}/submit"), submission)
            .await
    }

    pub async fn grade_assignment(&self, id: AssignmentId, grade: &GradePayload) -> Result<()> {
        self.post_unit(&format!("assignments/{id}/grade"), grade)
            .await
    }

    pub async fn mark_notification_read(&self, id: NotificationId) -> Result<()> {
        self.post_unit(&format!("notifications/{id}/read"), &serde_json::json!({}))
            .await
    }

    pub async fn delete_notification(&self, id: NotificationId) -> Result<()> {
        self.delete_unit(&format!("notifications/{id}")).await
    }

    pub async fn enroll(&self, payload: &EnrollmentPayload) -> Result<()> {
        self.post_unit("enrollments", payload).await
    }
}

/// A [`PageSource`] bound to one role-scoped list endpoint.
///
/// This is the configuration point the generic list engine is instantiated
/// through: item type + path + page size, no per-resource controller code.
#[derive(Clone)]
pub struct ListEndpoint<T> {
    client: Arc<ApiClient>,
    path: String,
    per_page: u32,
    _item: PhantomData<fn() -> T>,
}

impl<T> ListEndpoint<T> {
    pub fn new(client: Arc<ApiClient>, path: impl Into<String>, per_page: u32) -> Self {
        Self {
            client,
            path: path.into(),
            per_page,
            _item: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> PageSource<T> for ListEndpoint<T> {
    async fn fetch_page(&self, page: u32) -> Result<Page<T>> {
        self.client.fetch_page(&self.path, page, self.per_page).await
    }
}
