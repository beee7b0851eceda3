//! Per-user course progress persisted in browser local storage.
//!
//! DESIGN
//! ======
//! One namespaced storage entry holds every user of the browser profile:
//! `{ email: { course_id: { "progress": 0..=100 } } }`. This crate only reads
//! it; tutorial pages write it through the `save_progress` session hook.
//!
//! ERROR HANDLING
//! ==============
//! Parsing never fails. A missing or malformed entry is an empty store, and
//! odd per-course values are coerced instead of rejecting the whole blob.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use std::collections::HashMap;

use serde_json::Value;

/// Local-storage key shared by every user of the browser profile.
pub const PROGRESS_STORAGE_KEY: &str = "avesafe_course_progress";

/// Percentage at which a course counts as completed.
pub const COMPLETE_PERCENT: u8 = 100;

/// Stored progress for one course.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CourseProgress {
    /// Display percentage, floored and clamped to `0..=100`.
    pub percent: u8,
    /// Whether the stored value is exactly 100. Out-of-range values such as
    /// 150 display as 100% but do not complete the course.
    pub completed: bool,
}

impl CourseProgress {
    /// Progress from a raw stored number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
    pub fn from_raw(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self::default();
        }
        let max = f64::from(COMPLETE_PERCENT);
        Self { percent: raw.floor().clamp(0.0, max) as u8, completed: raw == max }
    }

    pub fn is_completed(self) -> bool {
        self.completed
    }
}

/// Course id -> progress for one user.
pub type UserProgress = HashMap<String, CourseProgress>;

/// Every user's progress, keyed by email.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressStore {
    users: HashMap<String, UserProgress>,
}

impl ProgressStore {
    /// Parse the raw storage entry. `None`, invalid JSON or a non-object
    /// top level all yield an empty store.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let Ok(Value::Object(users)) = serde_json::from_str::<Value>(raw) else {
            return Self::default();
        };

        let users = users
            .into_iter()
            .filter_map(|(email, courses)| {
                let Value::Object(courses) = courses else {
                    return None;
                };
                let courses = courses
                    .into_iter()
                    .filter(|(_, entry)| entry.is_object())
                    .map(|(course_id, entry)| (course_id, progress_of(&entry)))
                    .collect::<UserProgress>();
                Some((email, courses))
            })
            .collect();

        Self { users }
    }

    /// Read the store from local storage. Empty outside the browser.
    pub fn load() -> Self {
        Self::parse(crate::util::storage::read_raw(PROGRESS_STORAGE_KEY).as_deref())
    }

    /// Progress entries for `email`, if that user has started anything.
    pub fn for_user(&self, email: &str) -> Option<&UserProgress> {
        self.users.get(email).filter(|courses| !courses.is_empty())
    }

    /// Progress for one course of one user; absent entries read as 0%.
    pub fn course(&self, email: &str, course_id: &str) -> CourseProgress {
        self.users
            .get(email)
            .and_then(|courses| courses.get(course_id))
            .copied()
            .unwrap_or_default()
    }
}

fn progress_of(entry: &Value) -> CourseProgress {
    CourseProgress::from_raw(entry.get("progress").and_then(Value::as_f64).unwrap_or(0.0))
}
