use std::collections::BTreeMap;
use validator::Validate;

use crate::{errors::AppResult, models::dto::request::GenerateScheduleRequest};

/// Study-schedule computation. Purely local: one hour is reserved for
/// review, the remainder is split evenly across the topics.
pub struct ScheduleService;

impl ScheduleService {
    pub fn generate_schedule(
        request: GenerateScheduleRequest,
    ) -> AppResult<BTreeMap<String, String>> {
        request.validate()?;

        let per_topic =
            ((request.study_time as f64 - 1.0) / request.topics.len() as f64).round() as i64;

        let mut schedule = BTreeMap::new();
        for index in 0..request.topics.len() {
            schedule.insert(index.to_string(), format!("{}hr", per_topic));
        }
        schedule.insert("review".to_string(), "1hr".to_string());

        Ok(schedule)
    }
}
