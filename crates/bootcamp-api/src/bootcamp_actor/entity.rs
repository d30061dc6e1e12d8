//! `ActorEntity` implementation for [`Bootcamp`]: the lifecycle pipelines.

use crate::bootcamp_actor::{BootcampAction, BootcampActionResult, BootcampError};
use crate::clients::CourseClient;
use crate::geocoder::Geocoder;
use crate::model::{
    Bootcamp, BootcampCreate, BootcampFilter, BootcampUpdate, GeometryKind, Location, DEFAULT_PHOTO,
};
use crate::slug::slugify;
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use std::sync::Arc;
use tracing::info;

/// Dependencies injected into every bootcamp lifecycle hook: the geocoding
/// provider and the course client used for the cascade delete.
#[derive(Clone)]
pub struct BootcampContext {
    pub geocoder: Arc<dyn Geocoder>,
    pub courses: CourseClient,
}

#[async_trait]
impl ActorEntity for Bootcamp {
    type Id = crate::model::BootcampId;
    type Create = BootcampCreate;
    type Update = BootcampUpdate;
    type Filter = BootcampFilter;
    type Action = BootcampAction;
    type ActionResult = BootcampActionResult;
    type Context = BootcampContext;
    type Error = BootcampError;

    fn from_create_params(id: Self::Id, params: BootcampCreate) -> Result<Self, BootcampError> {
        params.validate().map_err(BootcampError::Validation)?;
        let user = params
            .user
            .ok_or_else(|| BootcampError::Validation("a bootcamp must have an owning user".into()))?;
        Ok(Self {
            id,
            name: params.name,
            slug: String::new(),
            description: params.description,
            website: params.website,
            email: params.email,
            phone: params.phone,
            address: Some(params.address),
            location: None,
            careers: params.careers,
            average_rating: params.average_rating,
            average_cost: params.average_cost,
            photo: DEFAULT_PHOTO.to_string(),
            housing: params.housing,
            job_assistance: params.job_assistance,
            job_guarantee: params.job_guarantee,
            accept_gi: params.accept_gi,
            created_at: Utc::now(),
            user,
        })
    }

    fn conflicts_with(&self, existing: &Self) -> Option<String> {
        (self.name == existing.name)
            .then(|| format!("a bootcamp named '{}' already exists", self.name))
    }

    fn matches(&self, filter: &BootcampFilter) -> bool {
        self.matches_filter(filter)
    }

    /// The pre-insert pipeline. Stage order matters: the slug is derived
    /// first, then geocoding enriches the document; both complete before
    /// the store insert. A geocoding failure aborts the whole create.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), BootcampError> {
        self.slug = slugify(&self.name);
        self.apply_geocode(ctx).await
    }

    /// Field-level merge. The actor applies updates to a clone of the
    /// stored entity and re-checks name uniqueness before committing, so a
    /// failure partway through (for example, a geocoding error on a new
    /// address) or a rename onto a taken name leaves the stored entity
    /// untouched.
    async fn on_update(
        &mut self,
        update: BootcampUpdate,
        ctx: &Self::Context,
    ) -> Result<(), BootcampError> {
        update.validate().map_err(BootcampError::Validation)?;
        self.apply_update(update, ctx).await
    }

    /// Cascade point: every course referencing this bootcamp is deleted
    /// before the bootcamp itself is removed. A cascade failure aborts the
    /// removal, so no orphaned courses can be left behind.
    async fn on_delete(&self, ctx: &Self::Context) -> Result<(), BootcampError> {
        let removed = ctx
            .courses
            .delete_for_bootcamp(self.id)
            .await
            .map_err(|e| BootcampError::CascadeFailed(e.to_string()))?;
        info!(bootcamp = %self.id, removed, "cascaded course delete");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: BootcampAction,
        _ctx: &Self::Context,
    ) -> Result<BootcampActionResult, BootcampError> {
        match action {
            BootcampAction::SetPhoto(filename) => {
                let filename = filename.trim().to_string();
                if filename.is_empty() || filename.contains('/') || filename.contains("..") {
                    return Err(BootcampError::Validation(
                        "please provide a plain photo filename".to_string(),
                    ));
                }
                self.photo = filename.clone();
                Ok(BootcampActionResult::PhotoSet(filename))
            }
        }
    }
}

impl Bootcamp {
    /// Geocode `self.address` into `self.location`, clearing the raw
    /// address. Takes the provider's first candidate; zero candidates or a
    /// provider error fails the save.
    async fn apply_geocode(&mut self, ctx: &BootcampContext) -> Result<(), BootcampError> {
        let address = self.address.take().ok_or_else(|| {
            BootcampError::Validation("please add an address".to_string())
        })?;
        let candidates =
            ctx.geocoder
                .geocode(&address)
                .await
                .map_err(|e| BootcampError::GeocodingFailed {
                    address: address.clone(),
                    reason: e.to_string(),
                })?;
        let first = candidates
            .into_iter()
            .next()
            .ok_or_else(|| BootcampError::GeocodingFailed {
                address: address.clone(),
                reason: "provider returned no candidates".to_string(),
            })?;
        self.location = Some(Location {
            kind: GeometryKind::Point,
            coordinates: [first.longitude, first.latitude],
            formatted_address: first.formatted_address,
            street: first.street,
            city: first.city,
            state: first.state_code,
            zipcode: first.zipcode,
            country: first.country_code,
        });
        Ok(())
    }

    /// Field-level update application. Re-derives the slug when the name
    /// changes and re-geocodes when a new address is supplied.
    async fn apply_update(
        &mut self,
        update: BootcampUpdate,
        ctx: &BootcampContext,
    ) -> Result<(), BootcampError> {
        if let Some(name) = update.name {
            self.slug = slugify(&name);
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if update.website.is_some() {
            self.website = update.website;
        }
        if update.email.is_some() {
            self.email = update.email;
        }
        if update.phone.is_some() {
            self.phone = update.phone;
        }
        if let Some(careers) = update.careers {
            self.careers = careers;
        }
        if update.average_rating.is_some() {
            self.average_rating = update.average_rating;
        }
        if update.average_cost.is_some() {
            self.average_cost = update.average_cost;
        }
        if let Some(housing) = update.housing {
            self.housing = housing;
        }
        if let Some(job_assistance) = update.job_assistance {
            self.job_assistance = job_assistance;
        }
        if let Some(job_guarantee) = update.job_guarantee {
            self.job_guarantee = job_guarantee;
        }
        if let Some(accept_gi) = update.accept_gi {
            self.accept_gi = accept_gi;
        }
        if let Some(address) = update.address {
            self.address = Some(address);
            self.apply_geocode(ctx).await?;
        }
        Ok(())
    }
}
