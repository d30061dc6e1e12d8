//! `ActorEntity` implementation for [`Course`].

use crate::course_actor::CourseError;
use crate::model::{Course, CourseCreate, CourseFilter, CourseUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Course {
    type Id = crate::model::CourseId;
    type Create = CourseCreate;
    type Update = CourseUpdate;
    type Filter = CourseFilter;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CourseError;

    fn from_create_params(id: Self::Id, params: CourseCreate) -> Result<Self, CourseError> {
        params.validate().map_err(CourseError::Validation)?;
        let bootcamp = params
            .bootcamp
            .ok_or_else(|| CourseError::Validation("a course must belong to a bootcamp".into()))?;
        Ok(Self {
            id,
            title: params.title,
            description: params.description,
            weeks: params.weeks,
            tuition: params.tuition,
            minimum_skill: params.minimum_skill,
            scholarship_available: params.scholarship_available,
            bootcamp,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &CourseFilter) -> bool {
        match filter {
            CourseFilter::ByBootcamp(id) => self.bootcamp == *id,
        }
    }

    async fn on_update(
        &mut self,
        update: CourseUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), CourseError> {
        update.validate().map_err(CourseError::Validation)?;
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(weeks) = update.weeks {
            self.weeks = weeks;
        }
        if let Some(tuition) = update.tuition {
            self.tuition = tuition;
        }
        if let Some(minimum_skill) = update.minimum_skill {
            self.minimum_skill = minimum_skill;
        }
        if let Some(scholarship_available) = update.scholarship_available {
            self.scholarship_available = scholarship_available;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), CourseError> {
        Ok(())
    }
}
